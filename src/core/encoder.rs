//! Line protocol encoder
//!
//! Produces lines of the form
//!
//! ```text
//! measurement[,tag=value...] field=value[,field=value...][ timestamp]
//! ```
//!
//! Tags and fields are written in byte-wise key order so the output is a pure
//! function of the inputs. Validation happens before anything is written:
//! an encode call either returns a complete line or an error.

use super::config::EncoderConfig;
use super::error::{EncodeError, Result};
use super::escape::{escape_key, escape_measurement};
use super::field_value::FieldValue;
use super::point::Point;
use super::timestamp::{Timestamp, ZeroTimestamp};
use std::fmt::{self, Write};

/// Stateless line protocol encoder
///
/// Holds only immutable configuration and can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use influx_line::LineEncoder;
///
/// let encoder = LineEncoder::new();
/// let line = encoder
///     .encode("weather", [("station", "A1")], [("temperature", 8.0)], None)
///     .unwrap();
/// assert_eq!(line, b"weather,station=A1 temperature=8.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEncoder {
    config: EncoderConfig,
}

impl LineEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encoder matching the historical output: zero timestamps are dropped
    /// and the measurement is written without escaping
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_config(EncoderConfig::legacy())
    }

    /// Create a builder for custom configuration
    pub fn builder() -> LineEncoderBuilder {
        LineEncoderBuilder::new()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one line
    ///
    /// Tag values are coerced to text with `Display`. Field values are typed
    /// through [`FieldValue`]. If a key occurs more than once, the last value
    /// wins.
    ///
    /// # Errors
    ///
    /// - `InvalidMeasurement` if `measurement` is empty
    /// - `EmptyFields` if `fields` yields no entries
    /// - `NonFiniteFloat` if a float field is NaN or infinite
    pub fn encode<T, TK, TV, F, FK, FV>(
        &self,
        measurement: &str,
        tags: T,
        fields: F,
        timestamp: Option<Timestamp>,
    ) -> Result<Vec<u8>>
    where
        T: IntoIterator<Item = (TK, TV)>,
        TK: AsRef<str>,
        TV: fmt::Display,
        F: IntoIterator<Item = (FK, FV)>,
        FK: AsRef<str>,
        FV: Into<FieldValue>,
    {
        self.encode_point(&Point::from_parts(measurement, tags, fields, timestamp))
    }

    /// Encode one line and append it to `buf`
    ///
    /// `buf` is left unchanged when an error is returned.
    pub fn encode_into<T, TK, TV, F, FK, FV>(
        &self,
        buf: &mut Vec<u8>,
        measurement: &str,
        tags: T,
        fields: F,
        timestamp: Option<Timestamp>,
    ) -> Result<()>
    where
        T: IntoIterator<Item = (TK, TV)>,
        TK: AsRef<str>,
        TV: fmt::Display,
        F: IntoIterator<Item = (FK, FV)>,
        FK: AsRef<str>,
        FV: Into<FieldValue>,
    {
        self.encode_point_into(buf, &Point::from_parts(measurement, tags, fields, timestamp))
    }

    /// Encode a [`Point`]
    pub fn encode_point(&self, point: &Point) -> Result<Vec<u8>> {
        self.render(point).map(String::into_bytes)
    }

    /// Encode a [`Point`] and append it to `buf`
    pub fn encode_point_into(&self, buf: &mut Vec<u8>, point: &Point) -> Result<()> {
        let line = self.render(point)?;
        buf.extend_from_slice(line.as_bytes());
        Ok(())
    }

    /// Encode several points as newline separated lines
    ///
    /// No trailing newline is written. Fails on the first invalid point
    /// without returning any partial batch.
    pub fn encode_batch<'a, I>(&self, points: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut batch = String::new();
        for (idx, point) in points.into_iter().enumerate() {
            if idx > 0 {
                batch.push('\n');
            }
            self.write_point(&mut batch, point)?;
        }
        Ok(batch.into_bytes())
    }

    fn render(&self, point: &Point) -> Result<String> {
        let mut line = String::with_capacity(estimate_len(point));
        self.write_point(&mut line, point)?;
        log::trace!(
            "encoded {} bytes for measurement '{}'",
            line.len(),
            point.measurement()
        );
        Ok(line)
    }

    /// Validate `point` and append its line to `out`
    ///
    /// Nothing is written to `out` unless validation succeeds.
    fn write_point(&self, out: &mut String, point: &Point) -> Result<()> {
        let timestamp = validate(point).inspect_err(|e| {
            log::debug!(
                "rejected point for measurement '{}': {}",
                point.measurement(),
                e
            );
        })?;

        if self.config.escape_measurement {
            out.push_str(&escape_measurement(point.measurement()));
        } else {
            out.push_str(point.measurement());
        }

        for (key, value) in point.tags() {
            out.push(',');
            out.push_str(&escape_key(key));
            out.push('=');
            out.push_str(&escape_key(value));
        }

        out.push(' ');

        for (idx, (key, value)) in point.fields().iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push_str(&escape_key(key));
            out.push('=');
            value.write_line_protocol(out);
        }

        if let Some(ts) = self.config.zero_timestamp.apply(timestamp) {
            // Writing into a String cannot fail.
            let _ = write!(out, " {}", ts);
        }

        Ok(())
    }
}

fn validate(point: &Point) -> Result<Option<Timestamp>> {
    if point.measurement().is_empty() {
        return Err(EncodeError::InvalidMeasurement);
    }
    if point.fields().is_empty() {
        return Err(EncodeError::EmptyFields);
    }
    let timestamp = point.get_timestamp()?;
    if let Some((key, _)) = point.fields().iter().find(|(_, v)| !v.is_encodable()) {
        return Err(EncodeError::non_finite(key.as_str()));
    }
    Ok(timestamp)
}

fn estimate_len(point: &Point) -> usize {
    let tags: usize = point.tags().iter().map(|(k, v)| k.len() + v.len() + 2).sum();
    let fields: usize = point.fields().keys().map(|k| k.len() + 24).sum();
    point.measurement().len() + tags + fields + 21
}

/// Encode one line with the default encoder
///
/// # Example
///
/// ```
/// use influx_line::encode;
///
/// let line = encode("m", [("t t", "v,v")], [("x", "y")], None).unwrap();
/// assert_eq!(line, br#"m,t\ t=v\,v x="y""#);
/// ```
pub fn encode<T, TK, TV, F, FK, FV>(
    measurement: &str,
    tags: T,
    fields: F,
    timestamp: Option<Timestamp>,
) -> Result<Vec<u8>>
where
    T: IntoIterator<Item = (TK, TV)>,
    TK: AsRef<str>,
    TV: fmt::Display,
    F: IntoIterator<Item = (FK, FV)>,
    FK: AsRef<str>,
    FV: Into<FieldValue>,
{
    LineEncoder::new().encode(measurement, tags, fields, timestamp)
}

/// Builder for [`LineEncoder`]
#[derive(Debug, Clone, Default)]
pub struct LineEncoderBuilder {
    config: EncoderConfig,
}

impl LineEncoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how a zero timestamp is handled
    ///
    /// Default: [`ZeroTimestamp::Emit`]
    #[must_use]
    pub fn zero_timestamp(mut self, policy: ZeroTimestamp) -> Self {
        self.config.zero_timestamp = policy;
        self
    }

    /// Enable or disable measurement escaping
    ///
    /// Default: enabled
    #[must_use]
    pub fn escape_measurement(mut self, enable: bool) -> Self {
        self.config.escape_measurement = enable;
        self
    }

    pub fn build(self) -> LineEncoder {
        LineEncoder::with_config(self.config)
    }
}
