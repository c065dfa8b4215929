//! Error types for the line encoder

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// Measurement name was empty
    #[error("none or empty measurement")]
    InvalidMeasurement,

    /// Field set had no entries
    #[error("need at least one field value.")]
    EmptyFields,

    /// Timestamp could not be represented as i64 nanoseconds
    #[error("ts not an integer ({reason})")]
    InvalidTimestamp { reason: String },

    /// Float field was NaN or infinite
    #[error("field '{key}' is not a finite float")]
    NonFiniteFloat { key: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl EncodeError {
    /// Create an invalid timestamp error
    pub fn invalid_timestamp(reason: impl Into<String>) -> Self {
        EncodeError::InvalidTimestamp {
            reason: reason.into(),
        }
    }

    /// Create a non-finite float error for the given field key
    pub fn non_finite(key: impl Into<String>) -> Self {
        EncodeError::NonFiniteFloat { key: key.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        EncodeError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = EncodeError::invalid_timestamp("f64");
        assert!(matches!(err, EncodeError::InvalidTimestamp { .. }));

        let err = EncodeError::config("EncoderConfig", "unknown field");
        assert!(matches!(err, EncodeError::InvalidConfiguration { .. }));

        let err = EncodeError::non_finite("load");
        assert_eq!(
            err,
            EncodeError::NonFiniteFloat {
                key: "load".to_string()
            }
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EncodeError::InvalidMeasurement.to_string(),
            "none or empty measurement"
        );
        assert_eq!(
            EncodeError::EmptyFields.to_string(),
            "need at least one field value."
        );
        assert_eq!(
            EncodeError::invalid_timestamp("f64").to_string(),
            "ts not an integer (f64)"
        );
        assert_eq!(
            EncodeError::config("EncoderConfig", "bad json").to_string(),
            "Invalid configuration for EncoderConfig: bad json"
        );
    }
}
