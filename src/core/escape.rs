//! Escaping rules for line protocol identifiers and string values
//!
//! Every escaper works in a single pass, prefixing each special character
//! with a backslash. A backslash that is already present in the input is
//! itself special for keys and string fields, so inserted escapes are never
//! escaped twice.

use std::borrow::Cow;

fn is_key_special(c: char) -> bool {
    matches!(c, '\\' | ',' | '=' | ' ')
}

fn is_measurement_special(c: char) -> bool {
    matches!(c, '\\' | ',' | ' ')
}

fn is_string_field_special(c: char) -> bool {
    matches!(c, '\\' | '"')
}

fn escape_with(s: &str, special: fn(char) -> bool) -> Cow<'_, str> {
    if !s.chars().any(special) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if special(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Escape a tag key, tag value or field key.
///
/// Backslash, comma, equals sign and space are prefixed with a backslash.
///
/// # Examples
///
/// ```
/// use influx_line::core::escape::escape_key;
///
/// assert_eq!(escape_key("t t"), "t\\ t");
/// assert_eq!(escape_key("u=u"), "u\\=u");
/// assert_eq!(escape_key("t\\,t"), "t\\\\\\,t");
/// ```
pub fn escape_key(s: &str) -> Cow<'_, str> {
    escape_with(s, is_key_special)
}

/// Escape a measurement name.
///
/// Comma and space are structural after a measurement. Backslash is escaped
/// too, so a trailing `\` cannot swallow the separator that follows.
pub fn escape_measurement(s: &str) -> Cow<'_, str> {
    escape_with(s, is_measurement_special)
}

/// Escape the contents of a string field value (without the surrounding quotes).
///
/// Only backslash and double quote are escaped; spaces, commas and equals
/// signs are literal inside quotes.
pub fn escape_string_field(s: &str) -> Cow<'_, str> {
    escape_with(s, is_string_field_special)
}
