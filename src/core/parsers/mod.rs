//! File parsers for locale files.
//!
//! - `json`: JSON locale file loader (scans locale directories)

pub mod json;
