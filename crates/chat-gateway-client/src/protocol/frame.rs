//! Gateway frame envelope
//!
//! The server pushes one JSON object per frame with the event name in
//! `type` and the payload fields as siblings:
//!
//! ```json
//! {"type": "presence_update", "guild_id": "G", "user_id": "U", "status": "online"}
//! ```
//!
//! The whole object is handed to the payload decoder; decoders ignore the
//! `type` key like any other unrecognized sibling.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Envelope parsing errors
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("frame is not a JSON object")]
    NotAnObject,

    #[error("frame has no string `type` field")]
    MissingType,
}

/// One inbound gateway frame
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayFrame {
    event_type: String,
    payload: Value,
}

impl GatewayFrame {
    /// Build a frame from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, FrameError> {
        let event_type = match &value {
            Value::Object(map) => match map.get("type") {
                Some(Value::String(event_type)) => event_type.clone(),
                _ => return Err(FrameError::MissingType),
            },
            _ => return Err(FrameError::NotAnObject),
        };

        Ok(Self {
            event_type,
            payload: value,
        })
    }

    /// Parse a frame from its JSON text
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// The untrusted event type string
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The frame object, used as the payload
    #[inline]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Take the payload
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

impl fmt::Display for GatewayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GatewayFrame(type={:?})", self.event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_frame() {
        let frame = GatewayFrame::from_json(
            r#"{"type":"presence_update","guild_id":"G","user_id":"U","status":"online"}"#,
        )
        .unwrap();

        assert_eq!(frame.event_type(), "presence_update");
        assert_eq!(frame.payload()["guild_id"], "G");
    }

    #[test]
    fn test_frame_keeps_type_in_payload() {
        let frame = GatewayFrame::from_value(json!({"type": "friend_remove", "user_id": "U"})).unwrap();
        assert_eq!(frame.into_payload()["type"], "friend_remove");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GatewayFrame::from_json("{not json"),
            Err(FrameError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_non_object_frame() {
        assert!(matches!(
            GatewayFrame::from_value(json!(["presence_update"])),
            Err(FrameError::NotAnObject)
        ));
        assert!(matches!(
            GatewayFrame::from_json("\"presence_update\""),
            Err(FrameError::NotAnObject)
        ));
    }

    #[test]
    fn test_missing_or_non_string_type() {
        assert!(matches!(
            GatewayFrame::from_value(json!({"guild_id": "G"})),
            Err(FrameError::MissingType)
        ));
        assert!(matches!(
            GatewayFrame::from_value(json!({"type": 7})),
            Err(FrameError::MissingType)
        ));
        assert!(matches!(
            GatewayFrame::from_value(json!({"type": null})),
            Err(FrameError::MissingType)
        ));
    }

    #[test]
    fn test_frame_display_escapes_type() {
        let frame = GatewayFrame::from_value(json!({"type": "bad\ntype"})).unwrap();
        assert_eq!(frame.to_string(), "GatewayFrame(type=\"bad\\ntype\")");
    }
}
