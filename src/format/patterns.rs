//! Pattern sources for the JSON Schema string formats
//!
//! Digits are spelled `[0-9]` throughout; `\d` in the `regex` crate is
//! Unicode-aware and would accept non-ASCII digits. Case-insensitivity is
//! applied by the table builder, not inline, so the character classes below
//! are written in lower case only.

/// One IPv6 hextet
macro_rules! hextet {
    () => {
        "[0-9a-f]{1,4}"
    };
}

/// Dotted-quad tail allowed at the end of an IPv6 address
macro_rules! ipv4_tail {
    () => {
        r"(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3})"
    };
}

/// Middle octet of a public URL host
macro_rules! url_octet {
    () => {
        "(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])"
    };
}

/// Letters and digits allowed in URL host labels
macro_rules! url_label_char {
    () => {
        r"[a-z\x{a1}-\x{ffff}0-9]"
    };
}

pub(crate) const DATE: &str = r"^[0-9]{4}-[01][0-9]-[0-3][0-9]$";

pub(crate) const TIME: &str =
    r"^[0-2][0-9]:[0-5][0-9]:[0-5][0-9](?:\.[0-9]+)?(?:z|[+-][0-9]{2}:[0-9]{2})?$";

/// Seconds are optional so partially typed values such as
/// `2000-03-14T01:59` still pass while the user is editing.
pub(crate) const DATE_TIME: &str = r"^[0-9]{4}-[01][0-9]-[0-3][0-9][t\s][0-2][0-9]:[0-5][0-9](?::[0-5][0-9])?(?:\.[0-9]+)?(?:z|[+-][0-9]{2}:[0-9]{2})?$";

/// HTML5 "valid e-mail address" grammar
pub(crate) const EMAIL: &str = r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$";

pub(crate) const HOSTNAME: &str =
    r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$";

pub(crate) const IPV4: &str =
    r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

/// Full and compressed forms, optional zone id, optional dotted-quad tail
pub(crate) const IPV6: &str = concat!(
    r"^\s*(?:",
    "(?:(?:",
    hextet!(),
    ":){7}(?:",
    hextet!(),
    "|:))",
    "|(?:(?:",
    hextet!(),
    ":){6}(?::",
    hextet!(),
    "|",
    ipv4_tail!(),
    "|:))",
    "|(?:(?:",
    hextet!(),
    ":){5}(?:(?:(?::",
    hextet!(),
    "){1,2})|:",
    ipv4_tail!(),
    "|:))",
    "|(?:(?:",
    hextet!(),
    ":){4}(?:(?:(?::",
    hextet!(),
    "){1,3})|(?:(?::",
    hextet!(),
    ")?:",
    ipv4_tail!(),
    ")|:))",
    "|(?:(?:",
    hextet!(),
    ":){3}(?:(?:(?::",
    hextet!(),
    "){1,4})|(?:(?::",
    hextet!(),
    "){0,2}:",
    ipv4_tail!(),
    ")|:))",
    "|(?:(?:",
    hextet!(),
    ":){2}(?:(?:(?::",
    hextet!(),
    "){1,5})|(?:(?::",
    hextet!(),
    "){0,3}:",
    ipv4_tail!(),
    ")|:))",
    "|(?:(?:",
    hextet!(),
    ":){1}(?:(?:(?::",
    hextet!(),
    "){1,6})|(?:(?::",
    hextet!(),
    "){0,4}:",
    ipv4_tail!(),
    ")|:))",
    "|(?::(?:(?:(?::",
    hextet!(),
    "){1,7})|(?:(?::",
    hextet!(),
    "){0,5}:",
    ipv4_tail!(),
    ")|:))",
    r")(?:%.+)?\s*$"
);

/// Scheme followed by `:` or `/`; the scheme class `+,-.` is the
/// `+` through `.` range.
pub(crate) const URI: &str = r"^(?:[a-z][a-z0-9+,\-.]*)(?::|/)/?[^\s]*$";

pub(crate) const URI_REFERENCE: &str = r"^(?:(?:[a-z][a-z0-9+,\-.]*:)?//)?[^\s]*$";

/// RFC 6570 literals and expressions
pub(crate) const URI_TEMPLATE: &str = r#"^(?:(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-f]{2})|\{[+#./;?&=,!@|]?(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?)*\})*$"#;

/// http, https and ftp URLs with a public host.
///
/// Numeric hosts in 10/8, 127/8, 169.254/16, 192.168/16 and 172.16/12 are
/// refused by leaving their leading octets out of the host grammar: the
/// generic branch never starts with 10, 127, 169, 172 or 192, and those
/// three last prefixes get their own branch whose second octet skips the
/// private block.
pub(crate) const URL: &str = concat!(
    r"^(?:(?:https?|ftp)://)(?:\S+(?::\S*)?@)?(?:",
    // public numeric host
    "(?:",
    "(?:[1-9]|1[1-9]|[2-9][0-9]|1[013-58][0-9]|12[0-689]|16[0-8]|17[013-9]|19[013-9]|2[01][0-9]|22[0-3])",
    r"(?:\.",
    url_octet!(),
    "){2}",
    r"|169\.(?:[0-9]{1,2}|1[0-9]{2}|2[0-4][0-9]|25[0-35])\.",
    url_octet!(),
    r"|172\.(?:[0-9]|0[0-9]|1[0-5]|3[2-9]|[4-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.",
    url_octet!(),
    r"|192\.(?:[0-9]{1,2}|1[0-57-9][0-9]|16[0-79]|2[0-4][0-9]|25[0-5])\.",
    url_octet!(),
    r")\.(?:[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4])",
    // host name with a letter-only top level label
    "|(?:(?:",
    url_label_char!(),
    "+-?)*",
    url_label_char!(),
    "+)",
    r"(?:\.(?:",
    url_label_char!(),
    "+-?)*",
    url_label_char!(),
    "+)*",
    r"(?:\.(?:[a-z\x{a1}-\x{ffff}]{2,}))",
    r")(?::[0-9]{2,5})?(?:/[^\s]*)?$"
);

pub(crate) const UUID: &str = r"^(?:urn:uuid:)?[0-9a-f]{8}-(?:[0-9a-f]{4}-){3}[0-9a-f]{12}$";

pub(crate) const COLOR: &str = r"^\s*(#(?:[0-9a-f]{3}){1,2}|rgb\((?:[0-9]{1,3},\s*){2}[0-9]{1,3}\)|rgba\((?:[0-9]{1,3},\s*){3}[0-9]*\.?[0-9]+\)|hsl\([0-9]{1,3}(?:,\s*[0-9]{1,3}%){2}\)|hsla\([0-9]{1,3}(?:,\s*[0-9]{1,3}%){2},\s*[0-9]*\.?[0-9]+\))\s*$";

/// RFC 6901 string form, or the URI fragment form starting with `#`
pub(crate) const JSON_POINTER: &str = r"^(?:/(?:[^~/]|~0|~1)*)*$|^#(?:/(?:[a-z0-9_\-.!$&'()*+,;:=@]|%[0-9a-f]{2}|~0|~1)*)*$";

pub(crate) const RELATIVE_JSON_POINTER: &str =
    r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)$";

/// Reports whether a pattern avoids the `\Z` anchor, which the target
/// engine does not understand.
///
/// A `Z` counts as an anchor only when an odd run of backslashes precedes
/// it; `\\Z` is a literal backslash followed by `Z`.
pub(crate) fn supported_regex(pattern: &str) -> bool {
    let mut backslashes = 0usize;
    for c in pattern.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        if c == 'Z' && backslashes % 2 == 1 {
            return false;
        }
        backslashes = 0;
    }
    true
}
