//! `CalendarRules` trait and the calendars the calculator walks with.
//!
//! A calendar answers three questions about a date: is it a weekend, is it
//! a public holiday, and is it a working day.  The [`DayFilter`] decides
//! which of those exclusions are active for a particular count.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::jurisdiction::Jurisdiction;

/// Which kinds of day are excluded when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayFilter {
    /// Exclude Saturdays and Sundays.
    pub skip_weekends: bool,
    /// Exclude the jurisdiction's public holidays.
    pub skip_public_holidays: bool,
}

impl DayFilter {
    /// Exclude weekends and public holidays.
    pub const WORKING_DAYS: DayFilter = DayFilter {
        skip_weekends: true,
        skip_public_holidays: true,
    };

    /// Exclude weekends only.
    pub const WEEKDAYS: DayFilter = DayFilter {
        skip_weekends: true,
        skip_public_holidays: false,
    };

    /// Count every calendar day.
    pub const ALL_DAYS: DayFilter = DayFilter {
        skip_weekends: false,
        skip_public_holidays: false,
    };

    /// Build a filter from the two independent toggles.
    pub const fn new(skip_weekends: bool, skip_public_holidays: bool) -> Self {
        Self {
            skip_weekends,
            skip_public_holidays,
        }
    }
}

impl Default for DayFilter {
    fn default() -> Self {
        Self::WORKING_DAYS
    }
}

/// Weekend and holiday predicates for one calendar.
pub trait CalendarRules: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a public holiday in this calendar.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if `filter` removes `date` from a count.
    fn is_excluded(&self, date: NaiveDate, filter: DayFilter) -> bool {
        (filter.skip_weekends && self.is_weekend(date))
            || (filter.skip_public_holidays && self.is_holiday(date))
    }
}

/// Weekends plus one jurisdiction's public holidays.
#[derive(Debug, Clone, Copy)]
pub struct JurisdictionCalendar<'a> {
    jurisdiction: Jurisdiction,
    holidays: &'a BTreeSet<NaiveDate>,
}

impl<'a> JurisdictionCalendar<'a> {
    /// Bind a jurisdiction to its holiday dates.
    pub fn new(jurisdiction: Jurisdiction, holidays: &'a BTreeSet<NaiveDate>) -> Self {
        Self {
            jurisdiction,
            holidays,
        }
    }

    /// The jurisdiction this calendar belongs to.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }
}

impl CalendarRules for JurisdictionCalendar<'_> {
    fn name(&self) -> &str {
        self.jurisdiction.code()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl CalendarRules for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2021-03-06 is a Saturday
        assert!(cal.is_weekend(date(2021, 3, 6)));
        assert!(!cal.is_workday(date(2021, 3, 6)));
        assert!(cal.is_workday(date(2021, 3, 8)));
    }

    #[test]
    fn jurisdiction_holiday_is_not_a_workday() {
        let holidays: BTreeSet<_> = [date(2021, 3, 8)].into_iter().collect();
        let cal = JurisdictionCalendar::new(Jurisdiction::Sa, &holidays);
        assert_eq!(cal.jurisdiction(), Jurisdiction::Sa);
        assert_eq!(cal.name(), "sa");
        assert!(cal.is_holiday(date(2021, 3, 8)));
        assert!(!cal.is_weekend(date(2021, 3, 8)));
        assert!(!cal.is_workday(date(2021, 3, 8)));
        assert!(cal.is_workday(date(2021, 3, 9)));
    }

    #[test]
    fn filters_toggle_independently() {
        let holidays: BTreeSet<_> = [date(2021, 3, 8)].into_iter().collect();
        let cal = JurisdictionCalendar::new(Jurisdiction::Sa, &holidays);
        let saturday = date(2021, 3, 6);
        let holiday = date(2021, 3, 8);

        assert!(cal.is_excluded(saturday, DayFilter::WORKING_DAYS));
        assert!(cal.is_excluded(holiday, DayFilter::WORKING_DAYS));

        assert!(cal.is_excluded(saturday, DayFilter::WEEKDAYS));
        assert!(!cal.is_excluded(holiday, DayFilter::WEEKDAYS));

        let holidays_only = DayFilter::new(false, true);
        assert!(!cal.is_excluded(saturday, holidays_only));
        assert!(cal.is_excluded(holiday, holidays_only));

        assert!(!cal.is_excluded(saturday, DayFilter::ALL_DAYS));
        assert!(!cal.is_excluded(holiday, DayFilter::ALL_DAYS));
    }
}
