//! JSON Schema string-format validation
//!
//! A fixed table maps every [`FormatName`] to one [`FormatMatcher`]. The
//! table is built once, on first use, and never changes afterwards.

mod patterns;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::error::Error;

/// Named JSON Schema string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatName {
    Date,
    Time,
    DateTime,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    UriTemplate,
    Url,
    Uuid,
    Color,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
}

impl FormatName {
    /// Every supported format, in declaration order
    pub const ALL: [FormatName; 16] = [
        FormatName::Date,
        FormatName::Time,
        FormatName::DateTime,
        FormatName::Email,
        FormatName::Hostname,
        FormatName::Ipv4,
        FormatName::Ipv6,
        FormatName::Uri,
        FormatName::UriReference,
        FormatName::UriTemplate,
        FormatName::Url,
        FormatName::Uuid,
        FormatName::Color,
        FormatName::JsonPointer,
        FormatName::RelativeJsonPointer,
        FormatName::Regex,
    ];

    /// The name as spelled in a JSON Schema `format` keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatName::Date => "date",
            FormatName::Time => "time",
            FormatName::DateTime => "date-time",
            FormatName::Email => "email",
            FormatName::Hostname => "hostname",
            FormatName::Ipv4 => "ipv4",
            FormatName::Ipv6 => "ipv6",
            FormatName::Uri => "uri",
            FormatName::UriReference => "uri-reference",
            FormatName::UriTemplate => "uri-template",
            FormatName::Url => "url",
            FormatName::Uuid => "uuid",
            FormatName::Color => "color",
            FormatName::JsonPointer => "json-pointer",
            FormatName::RelativeJsonPointer => "relative-json-pointer",
            FormatName::Regex => "regex",
        }
    }

    /// The matcher registered for this format
    pub fn matcher(&self) -> &'static FormatMatcher {
        &MATCHERS[*self as usize]
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// How a format decides whether a value conforms
#[derive(Debug)]
pub enum FormatMatcher {
    /// Anchored regular expression
    Pattern(Regex),
    /// Hand-written check for formats a pattern cannot express
    Predicate(fn(&str) -> bool),
}

impl FormatMatcher {
    /// Test a value against this matcher
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FormatMatcher::Pattern(re) => re.is_match(value),
            FormatMatcher::Predicate(check) => check(value),
        }
    }
}

/// One matcher per format, indexed by discriminant. `ALL` must list the
/// variants in declaration order.
static MATCHERS: Lazy<[FormatMatcher; 16]> = Lazy::new(|| FormatName::ALL.map(build_matcher));

fn build_matcher(name: FormatName) -> FormatMatcher {
    match name {
        FormatName::Date => pattern(patterns::DATE, false),
        FormatName::Time => pattern(patterns::TIME, true),
        FormatName::DateTime => pattern(patterns::DATE_TIME, true),
        FormatName::Email => pattern(patterns::EMAIL, true),
        FormatName::Hostname => pattern(patterns::HOSTNAME, true),
        FormatName::Ipv4 => pattern(patterns::IPV4, false),
        FormatName::Ipv6 => pattern(patterns::IPV6, true),
        FormatName::Uri => pattern(patterns::URI, true),
        FormatName::UriReference => pattern(patterns::URI_REFERENCE, true),
        FormatName::UriTemplate => pattern(patterns::URI_TEMPLATE, true),
        FormatName::Url => pattern(patterns::URL, true),
        FormatName::Uuid => pattern(patterns::UUID, true),
        FormatName::Color => pattern(patterns::COLOR, true),
        FormatName::JsonPointer => pattern(patterns::JSON_POINTER, true),
        FormatName::RelativeJsonPointer => pattern(patterns::RELATIVE_JSON_POINTER, false),
        FormatName::Regex => FormatMatcher::Predicate(patterns::supported_regex),
    }
}

fn pattern(source: &str, case_insensitive: bool) -> FormatMatcher {
    let re = RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .unwrap_or_else(|e| panic!("built-in format pattern failed to compile: {e}"));
    FormatMatcher::Pattern(re)
}

/// Check a value against a named format
///
/// # Example
/// ```
/// use schema_formats::{validate_format, FormatName};
///
/// assert!(validate_format(FormatName::Ipv4, "192.168.0.1"));
/// assert!(!validate_format(FormatName::Ipv4, "256.1.1.1"));
/// ```
pub fn validate_format(name: FormatName, value: &str) -> bool {
    let valid = name.matcher().is_match(value);
    tracing::trace!(format = %name, valid, "format checked");
    valid
}

/// Look up a matcher by its JSON Schema name
///
/// Returns `None` when no validator exists for the name.
pub fn matcher_for(name: &str) -> Option<&'static FormatMatcher> {
    name.parse::<FormatName>().ok().map(|n| n.matcher())
}

/// A value that failed its `format` check
#[derive(ThisError, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{actual_value:?} is not a valid {required_format}")]
pub struct FormatViolation {
    /// Format the schema asked for
    pub required_format: String,
    /// Value that was entered
    pub actual_value: String,
}

/// Form-validator flavoured check
///
/// Empty values pass: whether a value must be present is decided by the
/// `required` keyword, not by `format`.
pub fn check_format(name: FormatName, value: &str) -> Result<(), FormatViolation> {
    if value.is_empty() || validate_format(name, value) {
        return Ok(());
    }
    Err(FormatViolation {
        required_format: name.as_str().to_string(),
        actual_value: value.to_string(),
    })
}
