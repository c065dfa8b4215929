//! Nanosecond timestamps for line protocol points
//!
//! A point's timestamp is optional. When it is absent the receiving store
//! assigns its own arrival time, so the encoder omits the component entirely.
//! Presence is carried by `Option<Timestamp>`, never by a sentinel value,
//! unless the encoder is configured with [`ZeroTimestamp::Omit`].

use super::error::{EncodeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Signed count of nanoseconds since the Unix epoch
///
/// # Examples
///
/// ```
/// use influx_line::Timestamp;
///
/// let ts = Timestamp::from_secs(1_533_390_240).unwrap();
/// assert_eq!(ts.as_nanos(), 1_533_390_240_000_000_000);
///
/// // Floats cannot hold nanosecond precision and are always rejected
/// assert!(Timestamp::try_from(5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch
    pub const EPOCH: Timestamp = Timestamp(0);

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Timestamp(nanos)
    }

    pub fn from_micros(micros: i64) -> Result<Self> {
        Self::scaled(micros, NANOS_PER_MICRO, "microseconds")
    }

    pub fn from_millis(millis: i64) -> Result<Self> {
        Self::scaled(millis, NANOS_PER_MILLI, "milliseconds")
    }

    pub fn from_secs(secs: i64) -> Result<Self> {
        Self::scaled(secs, NANOS_PER_SECOND, "seconds")
    }

    fn scaled(value: i64, factor: i64, unit: &str) -> Result<Self> {
        value.checked_mul(factor).map(Timestamp).ok_or_else(|| {
            EncodeError::invalid_timestamp(format!(
                "{} {} overflows i64 nanoseconds",
                value, unit
            ))
        })
    }

    /// Current system time
    ///
    /// Fails only for clocks set beyond the year 2262.
    pub fn now() -> Result<Self> {
        Self::try_from(Utc::now())
    }

    #[inline]
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_epoch(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(nanos: i64) -> Self {
        Timestamp(nanos)
    }
}

impl TryFrom<u64> for Timestamp {
    type Error = EncodeError;

    fn try_from(nanos: u64) -> Result<Self> {
        i64::try_from(nanos)
            .map(Timestamp)
            .map_err(|_| EncodeError::invalid_timestamp(format!("{} overflows i64", nanos)))
    }
}

impl TryFrom<i128> for Timestamp {
    type Error = EncodeError;

    fn try_from(nanos: i128) -> Result<Self> {
        i64::try_from(nanos)
            .map(Timestamp)
            .map_err(|_| EncodeError::invalid_timestamp(format!("{} overflows i64", nanos)))
    }
}

impl TryFrom<f64> for Timestamp {
    type Error = EncodeError;

    /// Always fails: an f64 has 53 bits of mantissa, which cannot hold a
    /// present-day nanosecond count exactly.
    fn try_from(_: f64) -> Result<Self> {
        Err(EncodeError::invalid_timestamp("f64"))
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = EncodeError;

    fn try_from(datetime: DateTime<Utc>) -> Result<Self> {
        datetime
            .timestamp_nanos_opt()
            .map(Timestamp)
            .ok_or_else(|| {
                EncodeError::invalid_timestamp(format!(
                    "{} is outside the i64 nanosecond range",
                    datetime.to_rfc3339()
                ))
            })
    }
}

impl TryFrom<SystemTime> for Timestamp {
    type Error = EncodeError;

    fn try_from(time: SystemTime) -> Result<Self> {
        let datetime: DateTime<Utc> = time.into();
        Self::try_from(datetime)
    }
}

/// Conversion into a [`Timestamp`], failing with `InvalidTimestamp`
///
/// Unlike `TryInto<Timestamp>`, this is implemented uniformly for lossless
/// (`i64`) and fallible (`u64`, `f64`, date-time) inputs.
pub trait IntoTimestamp {
    fn into_timestamp(self) -> Result<Timestamp>;
}

impl IntoTimestamp for Timestamp {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(self)
    }
}

impl IntoTimestamp for i64 {
    fn into_timestamp(self) -> Result<Timestamp> {
        Ok(Timestamp(self))
    }
}

macro_rules! impl_into_timestamp {
    ($($ty:ty),*) => {
        $(
            impl IntoTimestamp for $ty {
                fn into_timestamp(self) -> Result<Timestamp> {
                    Timestamp::try_from(self)
                }
            }
        )*
    };
}

impl_into_timestamp!(u64, i128, f64, DateTime<Utc>, SystemTime);

/// How a present timestamp of exactly zero is encoded
///
/// Historically a zero timestamp was indistinguishable from an absent one
/// and was dropped from the line. `Emit` treats it as the epoch instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTimestamp {
    /// Write ` 0`; only `None` omits the timestamp
    #[default]
    Emit,

    /// Treat zero as absent (historical behavior)
    Omit,
}

impl ZeroTimestamp {
    /// Resolve the timestamp that will actually be written
    #[must_use]
    pub fn apply(&self, timestamp: Option<Timestamp>) -> Option<Timestamp> {
        match (self, timestamp) {
            (ZeroTimestamp::Omit, Some(ts)) if ts.is_epoch() => None,
            (_, ts) => ts,
        }
    }
}
