//! `Jurisdiction` — the regions whose holiday calendars are supported.

use std::str::FromStr;

use bt_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// A regional code identifying which holiday calendar applies.
///
/// Codes are lowercase and matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    /// South Australia (`sa`).
    Sa,
    /// New South Wales (`nsw`).
    Nsw,
    /// Victoria (`vic`).
    Vic,
}

impl Jurisdiction {
    /// Every supported jurisdiction, in code order of the public API.
    pub const ALL: [Jurisdiction; 3] = [Jurisdiction::Sa, Jurisdiction::Nsw, Jurisdiction::Vic];

    /// Return the wire code (`"sa"`, `"nsw"`, `"vic"`).
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Sa => "sa",
            Jurisdiction::Nsw => "nsw",
            Jurisdiction::Vic => "vic",
        }
    }

    /// Comma-separated list of the accepted codes.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(Jurisdiction::code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check `code` against the supported set.
    ///
    /// This is the validation boundary every calculation passes through
    /// before touching any dates.
    pub fn validate(code: &str) -> Result<Jurisdiction> {
        Self::ALL
            .iter()
            .copied()
            .find(|j| j.code() == code)
            .ok_or_else(|| Error::InvalidJurisdiction {
                given: code.to_owned(),
                valid: Self::valid_codes(),
            })
    }

    /// Return `true` if a holiday record tagged with `tag` applies here.
    ///
    /// Untagged and national (`nat` / `national`) records apply to every
    /// jurisdiction. Tags compare case-insensitively.
    pub fn matches_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        tag.is_empty()
            || tag.eq_ignore_ascii_case("nat")
            || tag.eq_ignore_ascii_case("national")
            || tag.eq_ignore_ascii_case(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::validate(s)
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
