//! Voice participant events: roster sync, join, leave, state changes

use chat_core::{ChannelId, GuildId, UnixTimestamp, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

/// Voice participant event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceParticipantEventKind {
    VoiceParticipantSync,
    VoiceParticipantJoin,
    VoiceParticipantLeave,
    VoiceParticipantUpdate,
}

impl EventKind for VoiceParticipantEventKind {
    const ALL: &'static [Self] = &[
        Self::VoiceParticipantSync,
        Self::VoiceParticipantJoin,
        Self::VoiceParticipantLeave,
        Self::VoiceParticipantUpdate,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::VoiceParticipantSync => "voice_participant_sync",
            Self::VoiceParticipantJoin => "voice_participant_join",
            Self::VoiceParticipantLeave => "voice_participant_leave",
            Self::VoiceParticipantUpdate => "voice_participant_update",
        }
    }
}

/// A participant's state in a voice channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantPayload {
    pub user_id: UserId,
    pub joined_at_unix: UnixTimestamp,
    pub is_muted: bool,
    pub is_deafened: bool,
    pub is_speaking: bool,
    pub is_video_enabled: bool,
    pub is_screen_sharing: bool,
}

/// `voice_participant_sync` payload: the full roster of a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantSyncPayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    #[serde(deserialize_with = "strict::object_list")]
    pub participants: Vec<VoiceParticipantPayload>,
    pub synced_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantJoinPayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    #[serde(deserialize_with = "strict::object")]
    pub participant: VoiceParticipantPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantLeavePayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub left_at_unix: UnixTimestamp,
}

/// `voice_participant_update` deltas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantUpdateFields {
    #[serde(default, deserialize_with = "strict::non_null", skip_serializing_if = "Option::is_none")]
    pub is_muted: Option<bool>,
    #[serde(default, deserialize_with = "strict::non_null", skip_serializing_if = "Option::is_none")]
    pub is_deafened: Option<bool>,
    #[serde(default, deserialize_with = "strict::non_null", skip_serializing_if = "Option::is_none")]
    pub is_speaking: Option<bool>,
    #[serde(default, deserialize_with = "strict::non_null", skip_serializing_if = "Option::is_none")]
    pub is_video_enabled: Option<bool>,
    #[serde(default, deserialize_with = "strict::non_null", skip_serializing_if = "Option::is_none")]
    pub is_screen_sharing: Option<bool>,
}

impl VoiceParticipantUpdateFields {
    /// Fold the deltas into a participant snapshot
    pub fn apply_to(&self, participant: &mut VoiceParticipantPayload) {
        let deltas = [
            (self.is_muted, &mut participant.is_muted),
            (self.is_deafened, &mut participant.is_deafened),
            (self.is_speaking, &mut participant.is_speaking),
            (self.is_video_enabled, &mut participant.is_video_enabled),
            (self.is_screen_sharing, &mut participant.is_screen_sharing),
        ];
        for (delta, slot) in deltas {
            if let Some(value) = delta {
                *slot = value;
            }
        }
    }
}

impl UpdateFields for VoiceParticipantUpdateFields {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VoiceParticipantUpdatePayload {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: VoiceParticipantUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

/// Decoded voice participant event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum VoiceParticipantGatewayEvent {
    VoiceParticipantSync(VoiceParticipantSyncPayload),
    VoiceParticipantJoin(VoiceParticipantJoinPayload),
    VoiceParticipantLeave(VoiceParticipantLeavePayload),
    VoiceParticipantUpdate(VoiceParticipantUpdatePayload),
}

impl VoiceParticipantGatewayEvent {
    pub fn kind(&self) -> VoiceParticipantEventKind {
        use VoiceParticipantEventKind as Kind;
        match self {
            Self::VoiceParticipantSync(_) => Kind::VoiceParticipantSync,
            Self::VoiceParticipantJoin(_) => Kind::VoiceParticipantJoin,
            Self::VoiceParticipantLeave(_) => Kind::VoiceParticipantLeave,
            Self::VoiceParticipantUpdate(_) => Kind::VoiceParticipantUpdate,
        }
    }
}

// === Type guards ===

pub fn is_voice_participant_sync_event_type(event_type: &str) -> bool {
    VoiceParticipantEventKind::parse(event_type)
        == Some(VoiceParticipantEventKind::VoiceParticipantSync)
}

pub fn is_voice_participant_join_event_type(event_type: &str) -> bool {
    VoiceParticipantEventKind::parse(event_type)
        == Some(VoiceParticipantEventKind::VoiceParticipantJoin)
}

pub fn is_voice_participant_leave_event_type(event_type: &str) -> bool {
    VoiceParticipantEventKind::parse(event_type)
        == Some(VoiceParticipantEventKind::VoiceParticipantLeave)
}

pub fn is_voice_participant_update_event_type(event_type: &str) -> bool {
    VoiceParticipantEventKind::parse(event_type)
        == Some(VoiceParticipantEventKind::VoiceParticipantUpdate)
}

pub fn is_voice_participant_gateway_event_type(event_type: &str) -> bool {
    VoiceParticipantEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_voice_participant_sync(payload: &Value) -> Option<VoiceParticipantSyncPayload> {
    finish(
        VoiceParticipantEventKind::VoiceParticipantSync.as_str(),
        try_participant_sync(payload),
    )
}

fn try_participant_sync(payload: &Value) -> Result<VoiceParticipantSyncPayload, DecodeError> {
    let sync: VoiceParticipantSyncPayload = from_object(payload)?;
    let mut seen = HashSet::with_capacity(sync.participants.len());
    if !sync.participants.iter().all(|p| seen.insert(&p.user_id)) {
        return Err(DecodeError::DuplicateEntry { field: "participants" });
    }
    Ok(sync)
}

pub fn decode_voice_participant_join(payload: &Value) -> Option<VoiceParticipantJoinPayload> {
    finish(
        VoiceParticipantEventKind::VoiceParticipantJoin.as_str(),
        from_object(payload),
    )
}

pub fn decode_voice_participant_leave(payload: &Value) -> Option<VoiceParticipantLeavePayload> {
    finish(
        VoiceParticipantEventKind::VoiceParticipantLeave.as_str(),
        from_object(payload),
    )
}

pub fn decode_voice_participant_update(payload: &Value) -> Option<VoiceParticipantUpdatePayload> {
    finish(
        VoiceParticipantEventKind::VoiceParticipantUpdate.as_str(),
        try_participant_update(payload),
    )
}

fn try_participant_update(payload: &Value) -> Result<VoiceParticipantUpdatePayload, DecodeError> {
    let update: VoiceParticipantUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_voice_participant_gateway_event(
    event_type: &str,
    payload: &Value,
) -> Option<VoiceParticipantGatewayEvent> {
    use VoiceParticipantEventKind as Kind;
    use VoiceParticipantGatewayEvent as Event;

    match VoiceParticipantEventKind::parse(event_type)? {
        Kind::VoiceParticipantSync => {
            decode_voice_participant_sync(payload).map(Event::VoiceParticipantSync)
        }
        Kind::VoiceParticipantJoin => {
            decode_voice_participant_join(payload).map(Event::VoiceParticipantJoin)
        }
        Kind::VoiceParticipantLeave => {
            decode_voice_participant_leave(payload).map(Event::VoiceParticipantLeave)
        }
        Kind::VoiceParticipantUpdate => {
            decode_voice_participant_update(payload).map(Event::VoiceParticipantUpdate)
        }
    }
}
