//! Turning a date-like string into a calendar date

use chrono::{Datelike, Local, NaiveDate};

use super::find::find_date;

/// Parse the first date found in `text`
///
/// Two-digit years are windowed against the local clock's current year.
/// See [`parse_date_with_pivot`] for the rules.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use schema_formats::date::parse_date;
///
/// assert_eq!(parse_date("11-05-2023"), NaiveDate::from_ymd_opt(2023, 11, 5));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_with_pivot(text, Local::now().year())
}

/// Parse the first date found in `text`, windowing two-digit years
/// against `current_year`
///
/// The found literal is split into three numbers, which are read as the
/// first plausible of, in order:
///
/// 1. `YYYY MM DD` when the first is between 1000 and 2100 (exclusive)
/// 2. `MM DD YYYY` when the last is between 1000 and 2100 (exclusive)
/// 3. `MM DD YY`
/// 4. `YY MM DD`
///
/// A two-digit year at or below the last two digits of `current_year` is
/// placed in the 2000s, anything above in the 1900s. Components that do not
/// name a real calendar day (February 30th, month 0) yield `None`.
///
/// Four-digit years are only found in the range 1900 to 2099, so dates such
/// as `2100-01-01` or `0500-01-01` yield `None`. Day-first dates
/// (`31/12/2023`) are not read either.
pub fn parse_date_with_pivot(text: &str, current_year: i32) -> Option<NaiveDate> {
    let found = find_date(text)?;
    let [c0, c1, c2] = split_components(found)?;
    let pivot = current_year.rem_euclid(100) as u32;

    let (year, month, day, reading) = if c0 > 1000 && c0 < 2100 && c1 <= 12 && c2 <= 31 {
        (c0, c1, c2, "YYYY-MM-DD")
    } else if c0 <= 12 && c1 <= 31 && c2 > 1000 && c2 < 2100 {
        (c2, c0, c1, "MM-DD-YYYY")
    } else if c0 <= 12 && c1 <= 31 && c2 < 100 {
        (window(c2, pivot), c0, c1, "MM-DD-YY")
    } else if c0 < 100 && c1 <= 12 && c2 <= 31 {
        (window(c0, pivot), c1, c2, "YY-MM-DD")
    } else {
        tracing::debug!(found, "no component order fits");
        return None;
    };

    let date = NaiveDate::from_ymd_opt(year as i32, month, day);
    match date {
        Some(date) => tracing::trace!(found, reading, %date, "date parsed"),
        None => tracing::debug!(found, reading, year, month, day, "not a calendar date"),
    }
    date
}

/// Split `x-y-z` on its separators, or `YYYYMMDD` by position
fn split_components(found: &str) -> Option<[u32; 3]> {
    if found.len() == 8 && found.bytes().all(|b| b.is_ascii_digit()) {
        return Some([
            found[0..4].parse().ok()?,
            found[4..6].parse().ok()?,
            found[6..8].parse().ok()?,
        ]);
    }

    let mut parts = found.split(|c: char| !c.is_ascii_digit());
    let components = [
        parts.next()?.parse().ok()?,
        parts.next()?.parse().ok()?,
        parts.next()?.parse().ok()?,
    ];
    if parts.next().is_some() {
        return None;
    }
    Some(components)
}

fn window(two_digit_year: u32, pivot: u32) -> u32 {
    if two_digit_year <= pivot {
        2000 + two_digit_year
    } else {
        1900 + two_digit_year
    }
}
