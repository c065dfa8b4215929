//! Point builder for fluent line construction
//!
//! Provides a builder pattern for assembling a measurement, its tags, fields
//! and an optional timestamp before encoding.

use super::encoder::LineEncoder;
use super::error::{EncodeError, Result};
use super::field_value::FieldValue;
use super::timestamp::{IntoTimestamp, Timestamp};
use std::collections::BTreeMap;
use std::fmt;

/// A single data point
///
/// Tags and fields are kept in key order, so encoding is independent of the
/// order in which they were added. Adding a key twice keeps the last value.
///
/// # Example
///
/// ```
/// use influx_line::Point;
///
/// let line = Point::new("weather")
///     .tag("station", "A1")
///     .field("temperature", 8.0)
///     .field("humidity", 71)
///     .timestamp(1_533_390_240_607_501_568_i64)
///     .encode()
///     .unwrap();
///
/// assert_eq!(
///     line,
///     b"weather,station=A1 humidity=71i,temperature=8.0 1533390240607501568"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    measurement: String,
    tags: BTreeMap<String, String>,
    fields: BTreeMap<String, FieldValue>,
    timestamp: Option<Timestamp>,
    timestamp_error: Option<EncodeError>,
}

impl Point {
    /// Create a point with no tags, no fields and no timestamp
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp: None,
            timestamp_error: None,
        }
    }

    /// Build a point from a measurement and arbitrary tag/field mappings
    pub fn from_parts<T, TK, TV, F, FK, FV>(
        measurement: impl Into<String>,
        tags: T,
        fields: F,
        timestamp: Option<Timestamp>,
    ) -> Self
    where
        T: IntoIterator<Item = (TK, TV)>,
        TK: AsRef<str>,
        TV: fmt::Display,
        F: IntoIterator<Item = (FK, FV)>,
        FK: AsRef<str>,
        FV: Into<FieldValue>,
    {
        let mut point = Self::new(measurement);
        for (key, value) in tags {
            point.add_tag(key.as_ref(), value);
        }
        for (key, value) in fields {
            point.add_field(key.as_ref(), value);
        }
        point.timestamp = timestamp;
        point
    }

    /// Add a tag; the value is coerced to text
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.add_tag(key, value);
        self
    }

    /// Add a tag (mutable version)
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.tags.insert(key.into(), value.to_string());
    }

    /// Add a typed field
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.add_field(key, value);
        self
    }

    /// Add a typed field (mutable version)
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Set the timestamp in nanoseconds
    ///
    /// A value that cannot be converted is remembered and reported as
    /// `InvalidTimestamp` when the point is encoded.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl IntoTimestamp) -> Self {
        self.set_timestamp(timestamp);
        self
    }

    /// Set the timestamp (mutable version)
    pub fn set_timestamp(&mut self, timestamp: impl IntoTimestamp) {
        match timestamp.into_timestamp() {
            Ok(ts) => {
                self.timestamp = Some(ts);
                self.timestamp_error = None;
            }
            Err(e) => {
                self.timestamp = None;
                self.timestamp_error = Some(e);
            }
        }
    }

    /// Remove the timestamp so the server assigns one
    pub fn clear_timestamp(&mut self) {
        self.timestamp = None;
        self.timestamp_error = None;
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// The timestamp, or the conversion error recorded when it was set
    pub fn get_timestamp(&self) -> Result<Option<Timestamp>> {
        match &self.timestamp_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.timestamp),
        }
    }

    /// Encode with the default encoder
    pub fn encode(&self) -> Result<Vec<u8>> {
        LineEncoder::new().encode_point(self)
    }

    /// Encode with a configured encoder
    pub fn encode_with(&self, encoder: &LineEncoder) -> Result<Vec<u8>> {
        encoder.encode_point(self)
    }
}
