//! Voice stream events: camera and screen share publication

use chat_core::{ChannelId, GuildId, UnixTimestamp, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceStreamEventKind {
    VoiceStreamPublish,
    VoiceStreamUnpublish,
}

impl EventKind for VoiceStreamEventKind {
    const ALL: &'static [Self] = &[Self::VoiceStreamPublish, Self::VoiceStreamUnpublish];

    fn as_str(self) -> &'static str {
        match self {
            Self::VoiceStreamPublish => "voice_stream_publish",
            Self::VoiceStreamUnpublish => "voice_stream_unpublish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    Camera,
    ScreenShare,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceStreamPublishPayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub stream_kind: StreamKind,
    pub published_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceStreamUnpublishPayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub stream_kind: StreamKind,
    pub unpublished_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum VoiceStreamGatewayEvent {
    VoiceStreamPublish(VoiceStreamPublishPayload),
    VoiceStreamUnpublish(VoiceStreamUnpublishPayload),
}

impl VoiceStreamGatewayEvent {
    pub fn kind(&self) -> VoiceStreamEventKind {
        match self {
            Self::VoiceStreamPublish(_) => VoiceStreamEventKind::VoiceStreamPublish,
            Self::VoiceStreamUnpublish(_) => VoiceStreamEventKind::VoiceStreamUnpublish,
        }
    }

    pub fn stream_kind(&self) -> StreamKind {
        match self {
            Self::VoiceStreamPublish(payload) => payload.stream_kind,
            Self::VoiceStreamUnpublish(payload) => payload.stream_kind,
        }
    }
}

pub fn is_voice_stream_publish_event_type(event_type: &str) -> bool {
    VoiceStreamEventKind::parse(event_type) == Some(VoiceStreamEventKind::VoiceStreamPublish)
}

pub fn is_voice_stream_unpublish_event_type(event_type: &str) -> bool {
    VoiceStreamEventKind::parse(event_type) == Some(VoiceStreamEventKind::VoiceStreamUnpublish)
}

pub fn is_voice_stream_gateway_event_type(event_type: &str) -> bool {
    VoiceStreamEventKind::parse(event_type).is_some()
}

pub fn decode_voice_stream_publish(payload: &Value) -> Option<VoiceStreamPublishPayload> {
    finish(
        VoiceStreamEventKind::VoiceStreamPublish.as_str(),
        from_object(payload),
    )
}

pub fn decode_voice_stream_unpublish(payload: &Value) -> Option<VoiceStreamUnpublishPayload> {
    finish(
        VoiceStreamEventKind::VoiceStreamUnpublish.as_str(),
        from_object(payload),
    )
}

pub fn decode_voice_stream_gateway_event(
    event_type: &str,
    payload: &Value,
) -> Option<VoiceStreamGatewayEvent> {
    match VoiceStreamEventKind::parse(event_type)? {
        VoiceStreamEventKind::VoiceStreamPublish => {
            decode_voice_stream_publish(payload).map(VoiceStreamGatewayEvent::VoiceStreamPublish)
        }
        VoiceStreamEventKind::VoiceStreamUnpublish => {
            decode_voice_stream_unpublish(payload).map(VoiceStreamGatewayEvent::VoiceStreamUnpublish)
        }
    }
}
