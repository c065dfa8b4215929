//! Typed field values

use super::escape::escape_string_field;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::num::TryFromIntError;

/// Value of a line protocol field
///
/// Variant order matters for untagged deserialization: a JSON `true` must
/// never be read as an integer, and `3` must stay an integer rather than a
/// float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl FieldValue {
    /// Append the wire representation of this value to `out`.
    ///
    /// - Bool: `true` / `false`
    /// - Int: decimal digits with an `i` suffix (`3i`)
    /// - Float: shortest round-trip decimal, always with a fractional part or
    ///   exponent (`8.0`, `73.1`, `1e21`)
    /// - String: double quoted, with `\` and `"` escaped
    pub fn write_line_protocol(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            FieldValue::Bool(b) => write!(out, "{}", b),
            FieldValue::Int(i) => write!(out, "{}i", i),
            FieldValue::Float(f) => write!(out, "{:?}", f),
            FieldValue::String(s) => write!(out, "\"{}\"", escape_string_field(s)),
        };
    }

    /// Wire representation of this value as a new string
    #[must_use]
    pub fn to_line_protocol(&self) -> String {
        let mut out = String::new();
        self.write_line_protocol(&mut out);
        out
    }

    /// Whether the value can be written to the wire
    ///
    /// NaN and infinities have no line protocol literal.
    #[inline]
    pub fn is_encodable(&self) -> bool {
        match self {
            FieldValue::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line_protocol())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(i: $ty) -> Self {
                    FieldValue::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_ref {
    ($($ty:ty),*) => {
        $(
            impl From<&$ty> for FieldValue {
                fn from(v: &$ty) -> Self {
                    FieldValue::from(*v)
                }
            }
        )*
    };
}

// Lets borrowed maps (`&HashMap<&str, f64>`) be passed as field sets.
impl_from_ref!(bool, i8, i16, i32, i64, u8, u16, u32, f64, &str);

impl TryFrom<u64> for FieldValue {
    type Error = TryFromIntError;

    fn try_from(u: u64) -> Result<Self, Self::Error> {
        i64::try_from(u).map(FieldValue::Int)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<Cow<'_, str>> for FieldValue {
    fn from(s: Cow<'_, str>) -> Self {
        FieldValue::String(s.into_owned())
    }
}

impl From<&FieldValue> for FieldValue {
    fn from(v: &FieldValue) -> Self {
        v.clone()
    }
}
