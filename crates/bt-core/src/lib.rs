//! # bt-core
//!
//! Core types, settings, and error definitions for businesstime.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace – type aliases, the error enum, service `Settings`, and the
//! parsers that turn external text into dates and timestamps.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Service settings (holiday source, working window).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A duration expressed in (possibly fractional) hours.
pub type Hours = Real;

/// Signed count of calendar or working days.
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
