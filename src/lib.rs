//! # Influx Line
//!
//! A deterministic encoder for the InfluxDB line protocol.
//!
//! A measurement, a set of tags, a set of typed fields and an optional
//! nanosecond timestamp become one line of bytes ready for the wire:
//!
//! ```text
//! weather,station=A1 temperature=8.0 1533390240607501568
//! ```
//!
//! ## Features
//!
//! - **Deterministic**: tags and fields are written in key order
//! - **Typed Fields**: booleans, `i`-suffixed integers, floats and quoted strings
//! - **Strict**: invalid input fails the whole call, no partial lines
//! - **Thread Safe**: the encoder holds no mutable state
//!
//! Sending the bytes (for example as one UDP datagram per line) is left to
//! the caller.
//!
//! ```
//! use influx_line::prelude::*;
//!
//! let line = Point::new("weather")
//!     .tag("station", "A1")
//!     .field("temperature", 8.0)
//!     .encode()?;
//! assert_eq!(line, b"weather,station=A1 temperature=8.0");
//! # Ok::<(), EncodeError>(())
//! ```

pub mod core;

pub mod prelude {
    pub use crate::core::{
        encode, EncodeError, EncoderConfig, FieldValue, IntoTimestamp, LineEncoder,
        LineEncoderBuilder, Point, Result, Timestamp, ZeroTimestamp,
    };
}

pub use self::core::{
    encode, EncodeError, EncoderConfig, FieldValue, IntoTimestamp, LineEncoder,
    LineEncoderBuilder, Point, Result, Timestamp, ZeroTimestamp,
};
