//! Strict decoding helpers
//!
//! Payloads are deserialized straight from the borrowed `serde_json::Value`
//! with serde derive, and every value object validates itself on the way in.
//! The helpers here add the rules derive alone does not enforce: objects must
//! be JSON objects (derive also accepts arrays positionally), present update
//! fields must not be `null`, and an update must carry at least one delta.

use chat_core::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Why a payload was rejected
///
/// Never escapes a public decoder: it is logged and demoted to `None`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("update carries no recognized fields")]
    EmptyUpdate,

    #[error("field `{field}` belongs to a different payload shape")]
    ShapeConflict { field: &'static str },

    #[error("duplicate entry in `{field}`")]
    DuplicateEntry { field: &'static str },

    #[error("`{field}` must not be empty")]
    EmptyList { field: &'static str },

    #[error("matches no payload shape: {first}; {fallback}")]
    NoShapeMatched {
        first: Box<DecodeError>,
        fallback: Box<DecodeError>,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Deserialize a top-level payload, requiring a JSON object
pub(crate) fn from_object<T: DeserializeOwned>(payload: &Value) -> Result<T, DecodeError> {
    if !payload.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(T::deserialize(payload)?)
}

/// Demote a decode result to `Option`, logging the rejection reason
pub(crate) fn finish<T>(event_type: &'static str, result: Result<T, DecodeError>) -> Option<T> {
    match result {
        Ok(payload) => Some(payload),
        Err(error) => {
            tracing::debug!(event_type, %error, "Dropping malformed gateway payload");
            None
        }
    }
}

/// An `updated_fields` object made of optional deltas
pub(crate) trait UpdateFields {
    /// True when no recognized delta is present
    fn is_empty(&self) -> bool;
}

pub(crate) fn require_delta<F: UpdateFields>(fields: &F) -> Result<(), DecodeError> {
    if fields.is_empty() {
        return Err(DecodeError::EmptyUpdate);
    }
    Ok(())
}

/// `deserialize_with` helpers
pub(crate) mod strict {
    use serde::de::{self, DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    const EXPECTED_OBJECT: &str = "expected a JSON object";

    /// Nested struct that must be a JSON object
    pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom(EXPECTED_OBJECT));
        }
        T::deserialize(value).map_err(de::Error::custom)
    }

    /// Array whose every element must be a JSON object
    pub(crate) fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        values
            .into_iter()
            .map(|value| {
                if value.is_object() {
                    T::deserialize(value).map_err(de::Error::custom)
                } else {
                    Err(de::Error::custom(EXPECTED_OBJECT))
                }
            })
            .collect()
    }

    /// Optional key that, when present, must hold a valid non-null value
    ///
    /// Pair with `#[serde(default)]` so an absent key becomes `None`.
    pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }

    /// Optional key where an explicit `null` is meaningful (clears a value)
    ///
    /// Absent -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`.
    /// Pair with `#[serde(default)]`.
    pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
