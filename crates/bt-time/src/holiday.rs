//! `HolidayRecord` — one public holiday read from the holiday document.

use bt_core::utilities::data_parsers::parse_holiday_date;
use chrono::NaiveDate;
use serde_json::Value;

/// A single public holiday.
///
/// Only the date is required; the name and jurisdiction tag are carried for
/// display and filtering and default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    date: NaiveDate,
    name: String,
    jurisdiction: String,
}

const DATE_KEY: &str = "Date";
const NAME_KEY: &str = "Holiday Name";
const JURISDICTION_KEY: &str = "Jurisdiction";

impl HolidayRecord {
    /// Create a record directly.
    pub fn new(date: NaiveDate, name: impl Into<String>, jurisdiction: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            jurisdiction: jurisdiction.into(),
        }
    }

    /// Map one entry of the holiday document into a record.
    ///
    /// Returns `None` when the entry is not an object or its `Date` is
    /// missing, not a string, or unparseable.  A `Holiday Name` or
    /// `Jurisdiction` that is absent or not a string becomes the empty string.
    pub fn from_json(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let date = parse_holiday_date(fields.get(DATE_KEY)?.as_str()?)?;
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Some(Self {
            date,
            name: text(NAME_KEY),
            jurisdiction: text(JURISDICTION_KEY),
        })
    }

    /// The calendar date of the holiday.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display name; may be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Jurisdiction tag as it appeared in the source; may be empty.
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// The date formatted as `YYYY-MM-DD`.
    pub fn date_ymd(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
