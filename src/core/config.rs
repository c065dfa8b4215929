//! Encoder configuration

use super::error::{EncodeError, Result};
use super::timestamp::ZeroTimestamp;
use serde::{Deserialize, Serialize};

/// Configuration for a [`LineEncoder`](super::encoder::LineEncoder)
///
/// # Example
///
/// ```
/// use influx_line::{EncoderConfig, ZeroTimestamp};
///
/// let config = EncoderConfig::from_json(r#"{"zero_timestamp": "omit"}"#).unwrap();
/// assert_eq!(config.zero_timestamp, ZeroTimestamp::Omit);
///
/// let config = EncoderConfig::from_json("{}").unwrap();
/// assert_eq!(config.zero_timestamp, ZeroTimestamp::Emit);
/// assert!(config.escape_measurement);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Handling of a present timestamp equal to zero
    pub zero_timestamp: ZeroTimestamp,

    /// Backslash-escape `\`, `,` and space in the measurement name
    ///
    /// When disabled the measurement is written as given, and the caller
    /// must keep it free of those characters.
    pub escape_measurement: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            zero_timestamp: ZeroTimestamp::Emit,
            escape_measurement: true,
        }
    }
}

impl EncoderConfig {
    /// Configuration reproducing the historical encoder byte for byte
    ///
    /// Zero timestamps are dropped and the measurement is written raw.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            zero_timestamp: ZeroTimestamp::Omit,
            escape_measurement: false,
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EncodeError::config("EncoderConfig", e.to_string()))
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EncodeError::config("EncoderConfig", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.zero_timestamp, ZeroTimestamp::Emit);
        assert!(config.escape_measurement);

        // Omitted keys fall back to the same defaults
        assert_eq!(EncoderConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_legacy_config() {
        let config = EncoderConfig::legacy();
        assert_eq!(config.zero_timestamp, ZeroTimestamp::Omit);
        assert!(!config.escape_measurement);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = EncoderConfig::legacy().to_json().unwrap();
        assert_eq!(json, r#"{"zero_timestamp":"omit","escape_measurement":false}"#);
        assert_eq!(EncoderConfig::from_json(&json).unwrap(), EncoderConfig::legacy());
    }

    #[test]
    fn test_invalid_json() {
        let err = EncoderConfig::from_json(r#"{"zero_timestamp": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidConfiguration { .. }));

        let err = EncoderConfig::from_json(r#"{"precision": "ns"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration for EncoderConfig"));
    }
}
