//! `BusinessTimeCalculator` — working days and working hours between two
//! local timestamps.
//!
//! Day counts walk the range one calendar day at a time: starting from
//! `from`, the cursor advances by whole days while it is still before `to`,
//! and each cursor date that survives the [`DayFilter`] adds one.  The walk is
//! O(days) with no short-circuit, and an empty or inverted range counts zero.
//!
//! Hour counts combine that day count with the partial first and last days,
//! clipped to the [`WorkingWindow`]:
//!
//! ```text
//! hours = ((working_days - 1)⁺ · workday + to_offset − from_offset) / (86400 / 24)
//! ```
//!
//! where the offsets are seconds since the window opened on the respective
//! day.  A `from` at or after closing time has no partial credit and starts
//! at the next opening; if that opening is not before `to` the result is
//! zero.

use std::sync::Arc;

use bt_core::errors::Result;
use bt_core::settings::Settings;
use bt_core::{DayCount, Hours};
use chrono::{Days, NaiveDateTime};
use tracing::{debug, instrument};

use crate::calendar::{CalendarRules, DayFilter, JurisdictionCalendar};
use crate::holiday_catalog::HolidayCatalog;
use crate::jurisdiction::Jurisdiction;
use crate::working_window::{WorkingWindow, HOURS_PER_DAY, SECONDS_PER_DAY};

const ONE_DAY: Days = Days::new(1);

/// Count the days from `from` (inclusive) towards `to` (exclusive) that
/// `filter` does not exclude on `calendar`.
pub fn count_days(
    calendar: &dyn CalendarRules,
    from: NaiveDateTime,
    to: NaiveDateTime,
    filter: DayFilter,
) -> DayCount {
    let mut days = 0;
    let mut cursor = from;
    while cursor < to {
        if !calendar.is_excluded(cursor.date(), filter) {
            days += 1;
        }
        match cursor.checked_add_days(ONE_DAY) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    days
}

/// Working-time calculator bound to one holiday catalog and working window.
///
/// Every public entry point validates the jurisdiction code before doing any
/// date arithmetic; an unsupported code fails with
/// [`Error::InvalidJurisdiction`](bt_core::Error::InvalidJurisdiction).
#[derive(Debug, Clone)]
pub struct BusinessTimeCalculator {
    catalog: Arc<HolidayCatalog>,
    window: WorkingWindow,
}

impl BusinessTimeCalculator {
    /// Create a calculator over `catalog` with the standard 08:00–18:00
    /// window.
    pub fn new(catalog: Arc<HolidayCatalog>) -> Self {
        Self {
            catalog,
            window: WorkingWindow::STANDARD,
        }
    }

    /// Replace the working window.
    pub fn with_window(mut self, window: WorkingWindow) -> Self {
        self.window = window;
        self
    }

    /// Build a calculator with a file-backed catalog and the window from
    /// `settings`.
    ///
    /// The holiday file is not read until the first calculation.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let window = WorkingWindow::from_settings(settings)?;
        let catalog = HolidayCatalog::from_path(settings.holiday_source.clone());
        Ok(Self::new(Arc::new(catalog)).with_window(window))
    }

    /// The holiday catalog.
    pub fn catalog(&self) -> &HolidayCatalog {
        &self.catalog
    }

    /// The working window.
    pub fn window(&self) -> WorkingWindow {
        self.window
    }

    /// Validate `jurisdiction` and return its calendar.
    pub fn calendar(&self, jurisdiction: &str) -> Result<JurisdictionCalendar<'_>> {
        let jurisdiction = Jurisdiction::validate(jurisdiction)?;
        let holidays = self.catalog.dates(jurisdiction)?;
        Ok(JurisdictionCalendar::new(jurisdiction, holidays))
    }

    /// Number of days in `[from, to)` not excluded by `filter`.
    ///
    /// Returns `0` when `to <= from`.
    #[instrument(level = "debug", skip(self))]
    pub fn working_days_between(
        &self,
        jurisdiction: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
        filter: DayFilter,
    ) -> Result<DayCount> {
        let calendar = self.calendar(jurisdiction)?;
        let days = count_days(&calendar, from, to, filter);
        debug!(days, "counted working days");
        Ok(days)
    }

    /// Fractional working hours between `from` and `to`.
    ///
    /// Weekends and the jurisdiction's holidays are excluded.  The result is
    /// never negative.
    #[instrument(level = "debug", skip(self))]
    pub fn working_hours_between(
        &self,
        jurisdiction: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Hours> {
        let calendar = self.calendar(jurisdiction)?;
        let working_days = (count_days(&calendar, from, to, DayFilter::WORKING_DAYS) - 1).max(0);

        let from_seconds = if self.window.is_after_close(from.time()) {
            let next_open = from
                .date()
                .succ_opt()
                .and_then(|d| d.and_hms_opt(self.window.open_hour(), 0, 0));
            match next_open {
                Some(open) if open < to => 0,
                _ => return Ok(0.0),
            }
        } else {
            self.window.offset_seconds(from.time())
        };
        let to_seconds = self.window.offset_seconds(to.time());

        let seconds = working_days * self.window.seconds_per_workday() + to_seconds - from_seconds;
        let hours = seconds.max(0) as Hours / (SECONDS_PER_DAY / HOURS_PER_DAY) as Hours;
        debug!(working_days, hours, "computed working hours");
        Ok(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn calculator() -> BusinessTimeCalculator {
        BusinessTimeCalculator::new(Arc::new(HolidayCatalog::from_json_str("[]")))
    }

    #[test]
    fn count_days_walks_from_start_day() {
        // Thu 18:00 → Wed 08:00: Thu, Fri, Mon, Tue
        let from = at(2021, 3, 4, 18, 0);
        let to = at(2021, 3, 10, 8, 0);
        assert_eq!(count_days(&WeekendsOnly, from, to, DayFilter::WEEKDAYS), 4);
        assert_eq!(count_days(&WeekendsOnly, from, to, DayFilter::ALL_DAYS), 6);
    }

    #[test]
    fn count_days_empty_and_inverted_ranges() {
        let t = at(2021, 3, 4, 10, 0);
        assert_eq!(count_days(&WeekendsOnly, t, t, DayFilter::ALL_DAYS), 0);
        assert_eq!(
            count_days(&WeekendsOnly, t, at(2021, 3, 1, 10, 0), DayFilter::ALL_DAYS),
            0
        );
    }

    #[test]
    fn invalid_jurisdiction_fails_before_arithmetic() {
        let calc = calculator();
        let t = at(2021, 3, 4, 10, 0);
        assert!(calc.working_days_between("qld", t, t, DayFilter::default()).is_err());
        assert!(calc.working_hours_between("SA", t, t).is_err());
        // The catalog is never touched for a rejected code.
        assert!(!calc.catalog().is_loaded());
    }

    #[test]
    fn from_after_close_on_same_day_is_zero() {
        let calc = calculator();
        let hours = calc
            .working_hours_between("sa", at(2021, 3, 4, 19, 0), at(2021, 3, 4, 23, 0))
            .unwrap();
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn inverted_range_is_zero() {
        let calc = calculator();
        let hours = calc
            .working_hours_between("sa", at(2021, 3, 4, 11, 30), at(2021, 3, 4, 10, 0))
            .unwrap();
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn custom_window() {
        let calc = calculator().with_window(WorkingWindow::new(9, 17).unwrap());
        // Thu 09:00 → Fri 17:00: one full day plus Fri's eight hours
        let hours = calc
            .working_hours_between("nsw", at(2021, 3, 4, 9, 0), at(2021, 3, 5, 17, 0))
            .unwrap();
        assert_eq!(hours, 16.0);
    }
}
