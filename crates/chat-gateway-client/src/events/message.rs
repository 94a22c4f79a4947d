//! Message events: create, update, delete, reaction

use chat_core::{ChannelId, Emoji, GuildId, MessageContent, MessageId, UnixTimestamp, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

/// Message event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageEventKind {
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    MessageReaction,
}

impl EventKind for MessageEventKind {
    const ALL: &'static [Self] = &[
        Self::MessageCreate,
        Self::MessageUpdate,
        Self::MessageDelete,
        Self::MessageReaction,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::MessageCreate => "message_create",
            Self::MessageUpdate => "message_update",
            Self::MessageDelete => "message_delete",
            Self::MessageReaction => "message_reaction",
        }
    }
}

/// `message_create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MessageCreatePayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub author_id: UserId,
    pub content: MessageContent,
    pub created_at_unix: UnixTimestamp,
    /// Message this one replies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<MessageId>,
}

/// `message_update` deltas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MessageUpdateFields {
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<MessageContent>,
}

impl UpdateFields for MessageUpdateFields {
    fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// `message_update` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MessageUpdatePayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: MessageUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

/// `message_delete` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MessageDeletePayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub deleted_at_unix: UnixTimestamp,
}

/// Whether a reaction was added or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAction {
    Add,
    Remove,
}

/// `message_reaction` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MessageReactionPayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub user_id: UserId,
    pub emoji: Emoji,
    pub action: ReactionAction,
    pub updated_at_unix: UnixTimestamp,
}

/// Decoded message event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum MessageGatewayEvent {
    MessageCreate(MessageCreatePayload),
    MessageUpdate(MessageUpdatePayload),
    MessageDelete(MessageDeletePayload),
    MessageReaction(MessageReactionPayload),
}

impl MessageGatewayEvent {
    pub fn kind(&self) -> MessageEventKind {
        match self {
            Self::MessageCreate(_) => MessageEventKind::MessageCreate,
            Self::MessageUpdate(_) => MessageEventKind::MessageUpdate,
            Self::MessageDelete(_) => MessageEventKind::MessageDelete,
            Self::MessageReaction(_) => MessageEventKind::MessageReaction,
        }
    }
}

// === Type guards ===

pub fn is_message_create_event_type(event_type: &str) -> bool {
    MessageEventKind::parse(event_type) == Some(MessageEventKind::MessageCreate)
}

pub fn is_message_update_event_type(event_type: &str) -> bool {
    MessageEventKind::parse(event_type) == Some(MessageEventKind::MessageUpdate)
}

pub fn is_message_delete_event_type(event_type: &str) -> bool {
    MessageEventKind::parse(event_type) == Some(MessageEventKind::MessageDelete)
}

pub fn is_message_reaction_event_type(event_type: &str) -> bool {
    MessageEventKind::parse(event_type) == Some(MessageEventKind::MessageReaction)
}

/// Any message event tag
pub fn is_message_gateway_event_type(event_type: &str) -> bool {
    MessageEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_message_create(payload: &Value) -> Option<MessageCreatePayload> {
    finish(
        MessageEventKind::MessageCreate.as_str(),
        from_object(payload),
    )
}

pub fn decode_message_update(payload: &Value) -> Option<MessageUpdatePayload> {
    finish(
        MessageEventKind::MessageUpdate.as_str(),
        try_message_update(payload),
    )
}

fn try_message_update(payload: &Value) -> Result<MessageUpdatePayload, DecodeError> {
    let update: MessageUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_message_delete(payload: &Value) -> Option<MessageDeletePayload> {
    finish(
        MessageEventKind::MessageDelete.as_str(),
        from_object(payload),
    )
}

pub fn decode_message_reaction(payload: &Value) -> Option<MessageReactionPayload> {
    finish(
        MessageEventKind::MessageReaction.as_str(),
        from_object(payload),
    )
}

/// Decode any message event
///
/// Returns `None` without touching the payload when `event_type` is not a
/// message tag.
pub fn decode_message_gateway_event(event_type: &str, payload: &Value) -> Option<MessageGatewayEvent> {
    match MessageEventKind::parse(event_type)? {
        MessageEventKind::MessageCreate => {
            decode_message_create(payload).map(MessageGatewayEvent::MessageCreate)
        }
        MessageEventKind::MessageUpdate => {
            decode_message_update(payload).map(MessageGatewayEvent::MessageUpdate)
        }
        MessageEventKind::MessageDelete => {
            decode_message_delete(payload).map(MessageGatewayEvent::MessageDelete)
        }
        MessageEventKind::MessageReaction => {
            decode_message_reaction(payload).map(MessageGatewayEvent::MessageReaction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::kind::assert_kind_table;
    use serde_json::json;

    fn create_payload() -> Value {
        json!({
            "type": "message_create",
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "author_id": "U1",
            "content": "hello\nworld",
            "created_at_unix": 1710000000
        })
    }

    #[test]
    fn test_kind_table() {
        assert_kind_table::<MessageEventKind>(4);
    }

    #[test]
    fn test_type_guards() {
        assert!(is_message_create_event_type("message_create"));
        assert!(!is_message_create_event_type("message_update"));
        assert!(is_message_update_event_type("message_update"));
        assert!(is_message_delete_event_type("message_delete"));
        assert!(is_message_reaction_event_type("message_reaction"));
        assert!(is_message_gateway_event_type("message_reaction"));
        assert!(!is_message_gateway_event_type("MESSAGE_CREATE"));
        assert!(!is_message_gateway_event_type("presence_update"));
    }

    #[test]
    fn test_decode_message_create() {
        let event = decode_message_gateway_event("message_create", &create_payload()).unwrap();
        let MessageGatewayEvent::MessageCreate(payload) = event else {
            panic!("wrong variant");
        };
        assert_eq!(payload.guild_id.as_str(), "G");
        assert_eq!(payload.content.as_str(), "hello\nworld");
        assert_eq!(payload.created_at_unix.as_secs(), 1_710_000_000);
        assert!(payload.reply_to_message_id.is_none());
    }

    #[test]
    fn test_message_create_serializes_camel_case() {
        let mut raw = create_payload();
        raw["reply_to_message_id"] = json!("M0");
        let payload = decode_message_create(&raw).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "guildId": "G",
                "channelId": "C",
                "messageId": "M1",
                "authorId": "U1",
                "content": "hello\nworld",
                "createdAtUnix": 1710000000,
                "replyToMessageId": "M0"
            })
        );
    }

    #[test]
    fn test_message_create_rejects_bad_fields() {
        for (key, value) in [
            ("guild_id", json!(7)),
            ("content", json!("   ")),
            ("content", json!(null)),
            ("created_at_unix", json!(0)),
            ("created_at_unix", json!(1.5)),
            ("author_id", json!("has space")),
            ("reply_to_message_id", json!("")),
        ] {
            let mut raw = create_payload();
            raw[key] = value;
            assert!(decode_message_create(&raw).is_none(), "{key} should be rejected");
        }

        let mut raw = create_payload();
        raw.as_object_mut().unwrap().remove("message_id");
        assert!(decode_message_create(&raw).is_none());
    }

    #[test]
    fn test_decode_message_update() {
        let raw = json!({
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "updated_fields": {"content": "edited"},
            "updated_at_unix": 1710000001
        });
        let payload = decode_message_update(&raw).unwrap();
        assert_eq!(
            payload.updated_fields.content.as_ref().map(MessageContent::as_str),
            Some("edited")
        );
    }

    #[test]
    fn test_message_update_rejects_empty_delta() {
        for fields in [json!({}), json!({"pinned": true}), json!({"content": null})] {
            let raw = json!({
                "guild_id": "G",
                "channel_id": "C",
                "message_id": "M1",
                "updated_fields": fields,
                "updated_at_unix": 1710000001
            });
            assert!(decode_message_update(&raw).is_none());
        }
    }

    #[test]
    fn test_message_update_requires_object_fields() {
        let raw = json!({
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "updated_fields": ["edited"],
            "updated_at_unix": 1710000001
        });
        assert!(decode_message_update(&raw).is_none());
    }

    #[test]
    fn test_decode_message_delete() {
        let raw = json!({
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "deleted_at_unix": 1710000002
        });
        let event = decode_message_gateway_event("message_delete", &raw).unwrap();
        assert_eq!(event.kind(), MessageEventKind::MessageDelete);
    }

    #[test]
    fn test_timestamps_accept_integral_floats() {
        for (stamp, secs) in [(json!(1710000001.0), 1_710_000_001), (json!(1.71e9), 1_710_000_000)] {
            let raw = json!({
                "guild_id": "G",
                "channel_id": "C",
                "message_id": "M1",
                "deleted_at_unix": stamp
            });
            let deleted = decode_message_delete(&raw).unwrap();
            assert_eq!(deleted.deleted_at_unix.as_secs(), secs);
        }

        let fractional = json!({
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "deleted_at_unix": 1710000001.5
        });
        assert!(decode_message_delete(&fractional).is_none());
    }

    #[test]
    fn test_decode_message_reaction_action_enum() {
        let mut raw = json!({
            "guild_id": "G",
            "channel_id": "C",
            "message_id": "M1",
            "user_id": "U2",
            "emoji": "🎉",
            "action": "add",
            "updated_at_unix": 1710000003
        });
        let payload = decode_message_reaction(&raw).unwrap();
        assert_eq!(payload.action, ReactionAction::Add);

        raw["action"] = json!("toggle");
        assert!(decode_message_reaction(&raw).is_none());
    }

    #[test]
    fn test_unknown_type_skips_decoding() {
        assert!(decode_message_gateway_event("__proto__", &create_payload()).is_none());
        assert!(decode_message_gateway_event("message_created", &create_payload()).is_none());
    }

    #[test]
    fn test_non_object_payload() {
        assert!(decode_message_gateway_event("message_create", &json!(null)).is_none());
        assert!(decode_message_gateway_event("message_create", &json!([1, 2])).is_none());
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = decode_message_gateway_event("message_create", &create_payload()).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "message_create");
        assert_eq!(json["payload"]["messageId"], "M1");
    }

    #[test]
    fn test_decode_is_deterministic() {
        let raw = create_payload();
        assert_eq!(
            decode_message_gateway_event("message_create", &raw),
            decode_message_gateway_event("message_create", &raw)
        );
    }
}
