//! Service settings.
//!
//! [`Settings`] carries the knobs a business-time service is started with:
//! where the holiday document lives and the bounds of the working window.
//! Every field has a default, so an empty JSON object is a valid settings
//! document.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Default location of the holiday document, relative to the working
/// directory of the process.
pub const DEFAULT_HOLIDAY_SOURCE: &str = "example_public_holidays.json";

/// Default hour at which the working window opens.
pub const DEFAULT_WORKDAY_START_HOUR: u32 = 8;

/// Default hour at which the working window closes.
pub const DEFAULT_WORKDAY_END_HOUR: u32 = 18;

/// Settings used to build a business-time calculator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Path of the JSON holiday document.
    pub holiday_source: PathBuf,
    /// Hour (0–23) at which working hours start accruing.
    pub workday_start_hour: u32,
    /// Hour (1–24) at which working hours stop accruing.
    pub workday_end_hour: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            holiday_source: PathBuf::from(DEFAULT_HOLIDAY_SOURCE),
            workday_start_hour: DEFAULT_WORKDAY_START_HOUR,
            workday_end_hour: DEFAULT_WORKDAY_END_HOUR,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file and validate them.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let settings: Settings = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the working window is a non-empty range within one day.
    pub fn validate(&self) -> Result<()> {
        check_working_window(self.workday_start_hour, self.workday_end_hour).map_err(|e| match e {
            Error::InvalidArgument(msg) => Error::Config(msg),
            other => other,
        })
    }
}

/// Check that `[open_hour, close_hour)` is a non-empty range within one day.
pub fn check_working_window(open_hour: u32, close_hour: u32) -> Result<()> {
    crate::ensure!(close_hour <= 24, "close hour {close_hour} exceeds 24");
    crate::ensure!(
        open_hour < close_hour,
        "open hour {open_hour} must be before close hour {close_hour}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.workday_start_hour, 8);
        assert_eq!(settings.workday_end_hour, 18);
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_json_str(
            r#"{"holiday_source": "/srv/holidays.json", "workday_start_hour": 9, "workday_end_hour": 17}"#,
        )
        .unwrap();
        assert_eq!(settings.holiday_source, PathBuf::from("/srv/holidays.json"));
        assert_eq!(settings.workday_start_hour, 9);
        assert_eq!(settings.workday_end_hour, 17);
    }

    #[test]
    fn inverted_window_rejected() {
        let err =
            Settings::from_json_str(r#"{"workday_start_hour": 18, "workday_end_hour": 8}"#)
                .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn window_past_midnight_rejected() {
        assert_eq!(
            Settings::from_json_str(r#"{"workday_end_hour": 25}"#).unwrap_err(),
            Error::Config("close hour 25 exceeds 24".into())
        );
    }

    #[test]
    fn window_check_is_shared() {
        assert!(check_working_window(0, 24).is_ok());
        assert_eq!(
            check_working_window(8, 8).unwrap_err(),
            Error::InvalidArgument("open hour 8 must be before close hour 8".into())
        );
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(Settings::from_json_str(r#"{"timezone": "Australia/Adelaide"}"#).is_err());
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"workday_start_hour": 7}}"#).unwrap();
        let settings = Settings::from_path(file.path()).unwrap();
        assert_eq!(settings.workday_start_hour, 7);
        assert_eq!(settings.workday_end_hour, 18);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Settings::from_path("/nonexistent/settings.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
