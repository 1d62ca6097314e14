//! Locating a date literal inside free text

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators accepted between date components
macro_rules! sep {
    () => {
        "[-_/. ]"
    };
}

/// Month number, optionally zero padded
macro_rules! month {
    () => {
        "(?:0?[0-9]|1[0-2])"
    };
}

/// Day of month, optionally zero padded
macro_rules! day {
    () => {
        "(?:[0-2]?[0-9]|3[01])"
    };
}

/// Four digit year in the 1900s or 2000s
macro_rules! year {
    () => {
        "(?:19|20)[0-9]{2}"
    };
}

/// Candidate shapes, in priority order.
///
/// Group 1 is the date literal. Shapes must not run into a neighbouring
/// digit: unanchored ones start with `(?:^|[^0-9])` and most end with
/// `(?:[^0-9]|$)`. Both consume a character that is not part of the result,
/// so `31/12/2023` is not read from its tail `1/12/2023`.
static CANDIDATES: Lazy<[(&str, Regex); 5]> = Lazy::new(|| {
    [
        (
            "YYYY-MM-DD",
            compile(concat!(
                "(?:^|[^0-9])(",
                year!(),
                sep!(),
                month!(),
                sep!(),
                day!(),
                ")(?:[^0-9]|$)"
            )),
        ),
        (
            "MM-DD-YYYY",
            compile(concat!(
                "(?:^|[^0-9])(",
                month!(),
                sep!(),
                day!(),
                sep!(),
                year!(),
                ")(?:[^0-9]|$)"
            )),
        ),
        (
            "MM-DD-YY",
            compile(concat!(
                "^(",
                month!(),
                sep!(),
                day!(),
                sep!(),
                "[0-9]{2})(?:[^0-9]|$)"
            )),
        ),
        (
            "YY-MM-DD",
            compile(concat!(
                "^([0-9]{2}",
                sep!(),
                month!(),
                sep!(),
                day!(),
                ")(?:[^0-9]|$)"
            )),
        ),
        (
            "YYYYMMDD",
            compile(concat!("^(", year!(), "(?:0[0-9]|1[0-2])(?:[0-2][0-9]|3[01]))")),
        ),
    ]
});

fn compile(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("built-in date pattern failed to compile: {e}"))
}

/// Find the first date-like substring in `text`
///
/// Shapes are tried in a fixed order and the first one that matches wins,
/// so text matching both `YYYY-MM-DD` and `MM-DD-YYYY` resolves to the
/// former. Two-digit-year and compact shapes only match at the start.
///
/// # Example
/// ```
/// use schema_formats::date::find_date;
///
/// assert_eq!(find_date("Order placed 2023-11-05 by user"), Some("2023-11-05"));
/// assert_eq!(find_date("no date here"), None);
/// ```
pub fn find_date(text: &str) -> Option<&str> {
    if text.is_empty() {
        return None;
    }

    CANDIDATES.iter().find_map(|(shape, re)| {
        let found = re.captures(text)?.get(1)?.as_str();
        tracing::trace!(shape, found, "date candidate matched");
        Some(found)
    })
}
