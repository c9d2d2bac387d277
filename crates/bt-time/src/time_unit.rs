//! `TimeUnit` — units an elapsed-time result can be expressed in.

use std::str::FromStr;

use bt_core::errors::Error;
use bt_core::Real;
use serde::{Deserialize, Serialize};

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Years of 365 days.
    Years,
}

impl TimeUnit {
    /// Length of one unit in seconds.
    pub fn seconds(&self) -> Real {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Weeks => 604_800.0,
            TimeUnit::Years => 31_536_000.0,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            "w" | "week" | "weeks" => Ok(TimeUnit::Weeks),
            "y" | "year" | "years" => Ok(TimeUnit::Years),
            other => Err(Error::InvalidArgument(format!("unknown time unit '{other}'"))),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("hours".parse::<TimeUnit>(), Ok(TimeUnit::Hours));
        assert_eq!("Y".parse::<TimeUnit>(), Ok(TimeUnit::Years));
        assert_eq!(" minute ".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn unit_lengths() {
        assert_eq!(TimeUnit::Days.seconds(), 24.0 * TimeUnit::Hours.seconds());
        assert_eq!(TimeUnit::Years.seconds(), 365.0 * TimeUnit::Days.seconds());
    }
}
