//! # bt-time
//!
//! Jurisdiction calendars, the holiday catalog, and the working-time
//! calculator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day and working-hour calculator.
pub mod business_time;

/// `CalendarRules` trait, day filters, and calendar implementations.
pub mod calendar;

/// Calendar-free elapsed-time measures.
pub mod elapsed;

/// `HolidayRecord` — one entry of the holiday document.
pub mod holiday;

/// `HolidayCatalog` and its data sources.
pub mod holiday_catalog;

/// `Jurisdiction` — supported holiday regions.
pub mod jurisdiction;

/// `TimeUnit` — seconds through years.
pub mod time_unit;

/// `WorkingWindow` — the daily interval during which hours accrue.
pub mod working_window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_time::{count_days, BusinessTimeCalculator};
pub use calendar::{CalendarRules, DayFilter, JurisdictionCalendar, WeekendsOnly};
pub use elapsed::{complete_weeks_between, convert_days, days_between, weekdays_between};
pub use holiday::HolidayRecord;
pub use holiday_catalog::{FileSource, HolidayCatalog, HolidaySource, StaticSource};
pub use jurisdiction::Jurisdiction;
pub use time_unit::TimeUnit;
pub use working_window::WorkingWindow;
