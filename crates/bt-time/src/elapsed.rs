//! Plain elapsed-time measures that need no holiday calendar: calendar
//! days, weekdays, and complete weeks between two timestamps, plus unit
//! conversion of a day count.

use bt_core::{DayCount, Real};
use chrono::NaiveDateTime;

use crate::business_time::count_days;
use crate::calendar::{DayFilter, WeekendsOnly};
use crate::time_unit::TimeUnit;

/// Whole calendar days elapsed from `from` to `to`; `0` if inverted.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> DayCount {
    if to <= from {
        return 0;
    }
    (to - from).num_days()
}

/// Days in `[from, to)` that are not Saturday or Sunday, walked day by day
/// like the working-day count.
pub fn weekdays_between(from: NaiveDateTime, to: NaiveDateTime) -> DayCount {
    count_days(&WeekendsOnly, from, to, DayFilter::WEEKDAYS)
}

/// Complete 7-day weeks elapsed from `from` to `to`.
pub fn complete_weeks_between(from: NaiveDateTime, to: NaiveDateTime) -> DayCount {
    days_between(from, to) / 7
}

/// Express `days` in `unit`.
pub fn convert_days(days: DayCount, unit: TimeUnit) -> Real {
    days as Real * TimeUnit::Days.seconds() / unit.seconds()
}
