//! `WorkingWindow` — the time-of-day interval during which hours accrue.

use bt_core::errors::Result;
use bt_core::settings::{
    check_working_window, Settings, DEFAULT_WORKDAY_END_HOUR, DEFAULT_WORKDAY_START_HOUR,
};
use chrono::{NaiveTime, Timelike};

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Hours in one calendar day.
pub const HOURS_PER_DAY: i64 = 24;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

/// Daily working window `[open, close)` in whole hours, local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingWindow {
    open_hour: u32,
    close_hour: u32,
}

impl WorkingWindow {
    /// The 08:00–18:00 window.
    pub const STANDARD: WorkingWindow = WorkingWindow {
        open_hour: DEFAULT_WORKDAY_START_HOUR,
        close_hour: DEFAULT_WORKDAY_END_HOUR,
    };

    /// Create a window opening at `open_hour` and closing at `close_hour`.
    pub fn new(open_hour: u32, close_hour: u32) -> Result<Self> {
        check_working_window(open_hour, close_hour)?;
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    /// Build the window described by `settings`; an invalid window is an
    /// [`Error::Config`](bt_core::Error::Config).
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            open_hour: settings.workday_start_hour,
            close_hour: settings.workday_end_hour,
        })
    }

    /// Opening hour.
    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    /// Closing hour.
    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// Length of one full working day in seconds.
    pub fn seconds_per_workday(&self) -> i64 {
        i64::from(self.close_hour - self.open_hour) * SECONDS_PER_HOUR
    }

    /// Return `true` if `time` is at or after the window's close.
    pub fn is_after_close(&self, time: NaiveTime) -> bool {
        minute_of_day_seconds(time) >= self.close_seconds()
    }

    /// Seconds between the window's opening and `time`, with `time` clamped
    /// into the window first.
    ///
    /// Anything before opening maps to `0`; anything at or after closing maps
    /// to [`seconds_per_workday`](Self::seconds_per_workday).  Seconds within
    /// the minute are ignored.
    pub fn offset_seconds(&self, time: NaiveTime) -> i64 {
        let open = self.open_seconds();
        minute_of_day_seconds(time).clamp(open, self.close_seconds()) - open
    }

    fn open_seconds(&self) -> i64 {
        i64::from(self.open_hour) * SECONDS_PER_HOUR
    }

    fn close_seconds(&self) -> i64 {
        i64::from(self.close_hour) * SECONDS_PER_HOUR
    }
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn minute_of_day_seconds(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * SECONDS_PER_HOUR + i64::from(time.minute()) * 60
}
