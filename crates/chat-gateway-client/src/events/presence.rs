//! Presence events: online roster snapshot and per-user status

use chat_core::{GuildId, PresenceStatus, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, DecodeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceEventKind {
    PresenceSync,
    PresenceUpdate,
}

impl EventKind for PresenceEventKind {
    const ALL: &'static [Self] = &[Self::PresenceSync, Self::PresenceUpdate];

    fn as_str(self) -> &'static str {
        match self {
            Self::PresenceSync => "presence_sync",
            Self::PresenceUpdate => "presence_update",
        }
    }
}

/// `presence_sync` payload
///
/// `user_ids` lists online users, deduplicated in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PresenceSyncPayload {
    pub guild_id: GuildId,
    pub user_ids: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PresenceUpdatePayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub status: PresenceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PresenceGatewayEvent {
    PresenceSync(PresenceSyncPayload),
    PresenceUpdate(PresenceUpdatePayload),
}

impl PresenceGatewayEvent {
    pub fn kind(&self) -> PresenceEventKind {
        match self {
            Self::PresenceSync(_) => PresenceEventKind::PresenceSync,
            Self::PresenceUpdate(_) => PresenceEventKind::PresenceUpdate,
        }
    }
}

pub fn is_presence_sync_event_type(event_type: &str) -> bool {
    PresenceEventKind::parse(event_type) == Some(PresenceEventKind::PresenceSync)
}

pub fn is_presence_update_event_type(event_type: &str) -> bool {
    PresenceEventKind::parse(event_type) == Some(PresenceEventKind::PresenceUpdate)
}

pub fn is_presence_gateway_event_type(event_type: &str) -> bool {
    PresenceEventKind::parse(event_type).is_some()
}

pub fn decode_presence_sync(payload: &Value) -> Option<PresenceSyncPayload> {
    finish(
        PresenceEventKind::PresenceSync.as_str(),
        try_presence_sync(payload),
    )
}

fn try_presence_sync(payload: &Value) -> Result<PresenceSyncPayload, DecodeError> {
    let mut sync: PresenceSyncPayload = from_object(payload)?;
    let mut seen = HashSet::with_capacity(sync.user_ids.len());
    sync.user_ids.retain(|id| seen.insert(id.clone()));
    Ok(sync)
}

pub fn decode_presence_update(payload: &Value) -> Option<PresenceUpdatePayload> {
    finish(
        PresenceEventKind::PresenceUpdate.as_str(),
        from_object(payload),
    )
}

pub fn decode_presence_gateway_event(event_type: &str, payload: &Value) -> Option<PresenceGatewayEvent> {
    match PresenceEventKind::parse(event_type)? {
        PresenceEventKind::PresenceSync => {
            decode_presence_sync(payload).map(PresenceGatewayEvent::PresenceSync)
        }
        PresenceEventKind::PresenceUpdate => {
            decode_presence_update(payload).map(PresenceGatewayEvent::PresenceUpdate)
        }
    }
}
