//! # businesstime
//!
//! Working days and working hours between two local timestamps, excluding
//! weekends and the public holidays of an Australian jurisdiction.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use businesstime::time::{BusinessTimeCalculator, HolidayCatalog};
//! use businesstime::core::utilities::data_parsers::parse_timestamp;
//!
//! let catalog = HolidayCatalog::from_json_str(
//!     r#"[{"Date": "2021-03-08", "Holiday Name": "Adelaide Cup Day", "Jurisdiction": "sa"}]"#,
//! );
//! let calc = BusinessTimeCalculator::new(Arc::new(catalog));
//!
//! let from = parse_timestamp("2021-03-04 10:00").unwrap();
//! let to = parse_timestamp("2021-03-04 11:30").unwrap();
//! assert_eq!(calc.working_hours_between("sa", from, to).unwrap(), 1.5);
//! assert!(calc.working_hours_between("qld", from, to).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, settings, and error definitions.
pub use bt_core as core;

/// Jurisdictions, holiday catalog, calendars, and the calculator.
pub use bt_time as time;

pub use bt_core::{Error, Result, Settings};
pub use bt_time::{BusinessTimeCalculator, DayFilter, HolidayCatalog, Jurisdiction};
