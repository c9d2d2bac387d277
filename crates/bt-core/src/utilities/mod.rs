//! Utilities sub-module: data parsers.

pub mod data_parsers;
