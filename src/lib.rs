//! Schema Formats Library
//!
//! The validation and formatting core behind JSON Schema driven forms.
//! This library provides functionality to:
//! - Validate strings against the JSON Schema `format` keyword
//!   (`email`, `uuid`, `ipv6`, `uri-template`, ...)
//! - Find dates in free text and read them despite ambiguous component order
//! - Render dates through a token template such as `"MMMM D, YYYY"`
//! - Check whole files of values, one per line
//!
//! Everything here is a pure function over its arguments; nothing holds
//! state between calls.
//!
//! # Example
//!
//! ```
//! use schema_formats::{validate_format, FormatName};
//! use schema_formats::date::{format_date, DateFormatOptions};
//!
//! assert!(validate_format(FormatName::Uuid, "550e8400-e29b-41d4-a716-446655440000"));
//!
//! let options = DateFormatOptions::with_format("DDDD, MMMM DS");
//! assert_eq!(
//!     format_date("2023-11-05", &options).as_deref(),
//!     Some("Sunday, November 5th"),
//! );
//! ```

pub mod batch;
pub mod date;
pub mod error;
pub mod format;

// Re-export commonly used items
pub use error::{Error, Result};
pub use format::{check_format, matcher_for, validate_format, FormatMatcher, FormatName, FormatViolation};
