//! Numeric value objects bounded to the JSON safe-integer range

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Largest integer a JSON number carries without precision loss (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_991.0;

fn check_positive_safe(field: &'static str, value: u64) -> Result<u64, ValidationError> {
    if value == 0 || value > MAX_SAFE_INTEGER {
        return Err(ValidationError::OutOfRange { field });
    }
    Ok(value)
}

/// A JSON number whose value is a non-negative integer
///
/// Accepts `1710000000` as well as `1710000000.0` or `1.71e9`; rejects
/// fractions, negatives, non-finite values and anything that is not a number.
#[derive(Debug, Clone, Copy)]
struct WireInteger(u64);

impl<'de> Deserialize<'de> for WireInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_u64(WireIntegerVisitor)
    }
}

struct WireIntegerVisitor;

impl Visitor<'_> for WireIntegerVisitor {
    type Value = WireInteger;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(WireInteger(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(WireInteger)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    #[allow(clippy::float_cmp)]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.is_finite() && value.trunc() == value && (0.0..=MAX_SAFE_FLOAT).contains(&value) {
            Ok(WireInteger(value as u64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }
}

/// Unix timestamp in whole seconds
///
/// Always a safe integer >= 1. Deserializes from any JSON number with an
/// integral value, so `0`, negatives, fractions and strings are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u64")]
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Validate and construct from seconds since the Unix epoch
    pub fn new(secs: u64) -> Result<Self, ValidationError> {
        check_positive_safe("timestamp", secs).map(Self)
    }

    /// Seconds since the Unix epoch
    #[inline]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Convert to a `DateTime<Utc>`
    ///
    /// Returns `None` for seconds beyond chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

impl TryFrom<u64> for UnixTimestamp {
    type Error = ValidationError;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        Self::new(secs)
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let WireInteger(secs) = WireInteger::deserialize(deserializer)?;
        Self::new(secs).map_err(de::Error::custom)
    }
}

impl From<UnixTimestamp> for u64 {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic asset revision (avatar, banner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u64")]
pub struct AssetVersion(u64);

impl AssetVersion {
    pub fn new(version: u64) -> Result<Self, ValidationError> {
        check_positive_safe("version", version).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for AssetVersion {
    type Error = ValidationError;

    fn try_from(version: u64) -> Result<Self, Self::Error> {
        Self::new(version)
    }
}

impl<'de> Deserialize<'de> for AssetVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let WireInteger(version) = WireInteger::deserialize(deserializer)?;
        Self::new(version).map_err(de::Error::custom)
    }
}

impl From<AssetVersion> for u64 {
    fn from(version: AssetVersion) -> Self {
        version.0
    }
}
