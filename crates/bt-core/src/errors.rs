//! Error types for businesstime.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] and
//! [`fail!`] macros are shorthands for early returns.

use thiserror::Error;

/// The top-level error type used throughout businesstime.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The jurisdiction code is not one of the supported codes.
    ///
    /// This is the only error a calculation reports for bad caller input.
    #[error("invalid jurisdiction '{given}': must be one of {valid}")]
    InvalidJurisdiction {
        /// The code the caller passed.
        given: String,
        /// Comma-separated list of the accepted codes.
        valid: String,
    },

    /// The holiday data source could not be read or is not a JSON array.
    #[error("holiday source error: {0}")]
    HolidaySource(String),

    /// Settings could not be loaded or are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout businesstime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bt_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bt_core::{fail, errors::Error};
/// fn always_err() -> bt_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
