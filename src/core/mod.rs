//! Core encoder types

pub mod config;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod field_value;
pub mod point;
pub mod timestamp;

pub use config::EncoderConfig;
pub use encoder::{encode, LineEncoder, LineEncoderBuilder};
pub use error::{EncodeError, Result};
pub use field_value::FieldValue;
pub use point::Point;
pub use timestamp::{IntoTimestamp, Timestamp, ZeroTimestamp};
