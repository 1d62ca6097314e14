//! Flexible date handling
//!
//! Finds date literals in free text, reads them into calendar dates even
//! when the component order is ambiguous, and renders dates through a small
//! token template language.

mod find;
mod parse;
mod render;

// Re-export commonly used items
pub use find::find_date;
pub use parse::{parse_date, parse_date_with_pivot};
pub use render::{
    format_date, ordinal, render_date, DateFormatOptions, DateToken, DateValue,
    DEFAULT_DATE_FORMAT,
};
