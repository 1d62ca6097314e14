//! Rendering dates through a token template
//!
//! Templates use the tokens `YYYY YY MMMM MMM MM M DDDD DDD DD D S`, matched
//! case-insensitively. Everything else is copied through unchanged.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::parse::parse_date;
use crate::error::Result;

/// Template used when the options carry none
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const LONG_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Date formatting options as handed over by a form layer
///
/// `locale` is accepted and kept but does not affect rendering yet; names
/// are always English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateFormatOptions {
    /// Token template
    pub date_format: Option<String>,
    /// Reserved
    pub locale: Option<String>,
}

impl DateFormatOptions {
    /// Options with an explicit template
    pub fn with_format(date_format: impl Into<String>) -> Self {
        Self {
            date_format: Some(date_format.into()),
            locale: None,
        }
    }

    /// Read options from a JSON object
    ///
    /// Fields that are missing or not strings fall back to their defaults;
    /// only text that is not JSON at all is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let text = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Ok(Self {
            date_format: text("dateFormat"),
            locale: text("locale"),
        })
    }

    /// The template to render with, falling back to [`DEFAULT_DATE_FORMAT`]
    /// when none or an empty one is set
    pub fn template(&self) -> &str {
        match self.date_format.as_deref() {
            Some(template) if !template.is_empty() => template,
            _ => DEFAULT_DATE_FORMAT,
        }
    }
}

/// Placeholders understood by [`render_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    /// `YYYY`: four digit year
    Year,
    /// `YY`: last two digits of the year
    ShortYear,
    /// `MMMM`: full month name
    MonthName,
    /// `MMM`: three letter month name
    ShortMonthName,
    /// `MM`: zero padded month number
    PaddedMonth,
    /// `M`: month number
    Month,
    /// `DDDD`: full weekday name
    WeekdayName,
    /// `DDD`: three letter weekday name
    ShortWeekdayName,
    /// `DD`: zero padded day of month
    PaddedDay,
    /// `D`: day of month
    Day,
    /// `S`: ordinal suffix of the day of month
    DaySuffix,
}

/// Longest spelling first within each family, so the first hit at a
/// position is the longest token there.
const TOKENS: [(&str, DateToken); 11] = [
    ("YYYY", DateToken::Year),
    ("YY", DateToken::ShortYear),
    ("MMMM", DateToken::MonthName),
    ("MMM", DateToken::ShortMonthName),
    ("MM", DateToken::PaddedMonth),
    ("M", DateToken::Month),
    ("DDDD", DateToken::WeekdayName),
    ("DDD", DateToken::ShortWeekdayName),
    ("DD", DateToken::PaddedDay),
    ("D", DateToken::Day),
    ("S", DateToken::DaySuffix),
];

impl DateToken {
    /// Render this token for `date`
    pub fn render(self, date: &NaiveDate) -> String {
        let month = LONG_MONTHS[date.month0() as usize];
        let weekday = LONG_DAYS[date.weekday().num_days_from_sunday() as usize];
        match self {
            DateToken::Year => format!("{:04}", date.year()),
            DateToken::ShortYear => format!("{:02}", date.year().rem_euclid(100)),
            DateToken::MonthName => month.to_string(),
            DateToken::ShortMonthName => month[..3].to_string(),
            DateToken::PaddedMonth => format!("{:02}", date.month()),
            DateToken::Month => date.month().to_string(),
            DateToken::WeekdayName => weekday.to_string(),
            DateToken::ShortWeekdayName => weekday[..3].to_string(),
            DateToken::PaddedDay => format!("{:02}", date.day()),
            DateToken::Day => date.day().to_string(),
            DateToken::DaySuffix => ordinal(date.day()).to_string(),
        }
    }
}

/// English ordinal suffix for a day number
///
/// # Example
/// ```
/// use schema_formats::date::ordinal;
///
/// assert_eq!(ordinal(1), "st");
/// assert_eq!(ordinal(12), "th");
/// assert_eq!(ordinal(23), "rd");
/// ```
pub fn ordinal(n: u32) -> &'static str {
    if (n / 10) % 10 == 1 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render `date` through `template`
///
/// The template is scanned once from left to right. Rendered text is never
/// scanned again, so a month name such as "November" cannot be mistaken for
/// an `M` token.
pub fn render_date(date: &NaiveDate, template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;

    'scan: while let Some(c) = rest.chars().next() {
        for (spelling, token) in TOKENS {
            let candidate = rest.get(..spelling.len());
            if candidate.is_some_and(|s| s.eq_ignore_ascii_case(spelling)) {
                out.push_str(&token.render(date));
                rest = &rest[spelling.len()..];
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// A calendar date, or text that should contain one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue<'a> {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(&'a str),
}

impl DateValue<'_> {
    /// The calendar date this value stands for, if any
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Date(date) => Some(*date),
            DateValue::DateTime(datetime) => Some(datetime.date()),
            DateValue::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for DateValue<'_> {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        DateValue::DateTime(datetime)
    }
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(text: &'a str) -> Self {
        DateValue::Text(text)
    }
}

impl<'a> From<&'a String> for DateValue<'a> {
    fn from(text: &'a String) -> Self {
        DateValue::Text(text)
    }
}

/// Format a date, or a date-like string, for display
///
/// Text goes through [`parse_date`] first; when no date can be read from it
/// the result is `None`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use schema_formats::date::{format_date, DateFormatOptions};
///
/// let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
/// let options = DateFormatOptions::with_format("MMMM D, YYYY");
/// assert_eq!(format_date(date, &options).as_deref(), Some("November 5, 2023"));
/// assert_eq!(format_date("11/05/2023", &DateFormatOptions::default()).as_deref(), Some("2023-11-05"));
/// ```
pub fn format_date<'a>(value: impl Into<DateValue<'a>>, options: &DateFormatOptions) -> Option<String> {
    let value = value.into();
    let Some(date) = value.to_date() else {
        tracing::debug!(?value, "nothing to format");
        return None;
    };
    Some(render_date(&date, options.template()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nov5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 5).unwrap()
    }

    #[test]
    fn test_default_template() {
        let options = DateFormatOptions::default();
        assert_eq!(options.template(), "YYYY-MM-DD");
        assert_eq!(format_date(nov5(), &options).as_deref(), Some("2023-11-05"));

        let empty = DateFormatOptions::with_format("");
        assert_eq!(format_date(nov5(), &empty).as_deref(), Some("2023-11-05"));
    }

    #[test]
    fn test_long_month() {
        let options = DateFormatOptions::with_format("MMMM D, YYYY");
        assert_eq!(format_date(nov5(), &options).as_deref(), Some("November 5, 2023"));

        let dec = NaiveDate::from_ymd_opt(2023, 12, 3).unwrap();
        assert_eq!(render_date(&dec, "MMMM"), "December");
    }

    #[test]
    fn test_all_tokens() {
        // 2023-11-05 is a Sunday
        assert_eq!(render_date(&nov5(), "YYYY YY"), "2023 23");
        assert_eq!(render_date(&nov5(), "MMMM MMM MM M"), "November Nov 11 11");
        assert_eq!(render_date(&nov5(), "DDDD DDD DD D"), "Sunday Sun 05 5");
        assert_eq!(render_date(&nov5(), "DS"), "5th");
    }

    #[test]
    fn test_padding() {
        let date = NaiveDate::from_ymd_opt(2005, 3, 1).unwrap();
        assert_eq!(render_date(&date, "YY/MM/DD"), "05/03/01");
        assert_eq!(render_date(&date, "M/D/YYYY"), "3/1/2005");
        assert_eq!(render_date(&date, "DDD, MMM DS"), "Tue, Mar 1st");
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        assert_eq!(render_date(&nov5(), "yyyy-mm-dd"), "2023-11-05");
        assert_eq!(render_date(&nov5(), "Mmmm dS"), "November 5th");
    }

    #[test]
    fn test_odd_run_lengths() {
        // YYY is YY followed by a literal Y
        assert_eq!(render_date(&nov5(), "YYY"), "23Y");
        assert_eq!(render_date(&nov5(), "MMMMM"), "November11");
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(render_date(&nov5(), "YYYY年MM月"), "2023年11月");
        assert_eq!(render_date(&nov5(), "[YYYY]"), "[2023]");
        assert_eq!(render_date(&nov5(), ""), "");
    }

    #[test]
    fn test_ordinal() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
            (111, "th"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal(n), suffix, "ordinal({})", n);
        }
    }

    #[test]
    fn test_text_input() {
        let options = DateFormatOptions::with_format("MMMM D, YYYY");
        assert_eq!(format_date("11-05-2023", &options).as_deref(), Some("November 5, 2023"));
        let owned = String::from("due 2023/11/05");
        assert_eq!(format_date(&owned, &options).as_deref(), Some("November 5, 2023"));
        assert_eq!(format_date("sometime", &options), None);
        assert_eq!(format_date("2023-02-30", &options), None);
    }

    #[test]
    fn test_datetime_input() {
        let datetime = nov5().and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(
            format_date(datetime, &DateFormatOptions::default()).as_deref(),
            Some("2023-11-05")
        );
    }

    #[test]
    fn test_options_from_json() {
        let options = DateFormatOptions::from_json(r#"{"dateFormat":"D MMM YYYY","locale":"en-GB"}"#).unwrap();
        assert_eq!(options.template(), "D MMM YYYY");
        assert_eq!(options.locale.as_deref(), Some("en-GB"));

        let options = DateFormatOptions::from_json(r#"{"dateFormat":5,"other":true}"#).unwrap();
        assert_eq!(options, DateFormatOptions::default());

        let options = DateFormatOptions::from_json("[]").unwrap();
        assert_eq!(options.template(), DEFAULT_DATE_FORMAT);

        assert!(DateFormatOptions::from_json("{not json").is_err());
    }

    #[test]
    fn test_options_serde_names() {
        let options: DateFormatOptions = serde_json::from_str(r#"{"dateFormat":"MM/DD"}"#).unwrap();
        assert_eq!(options.date_format.as_deref(), Some("MM/DD"));
        assert_eq!(options.locale, None);

        let json = serde_json::to_value(DateFormatOptions::with_format("YYYY")).unwrap();
        assert_eq!(json["dateFormat"], "YYYY");
    }
}
