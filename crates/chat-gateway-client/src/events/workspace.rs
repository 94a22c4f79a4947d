//! Workspace-level events: channel creation, settings, IP ban sync

use chat_core::{ChannelId, ChannelKind, ChannelName, GuildId, UnixTimestamp, WorkspaceName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

/// Workspace event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceEventKind {
    ChannelCreate,
    WorkspaceUpdate,
    WorkspaceIpBanSync,
}

impl EventKind for WorkspaceEventKind {
    const ALL: &'static [Self] = &[
        Self::ChannelCreate,
        Self::WorkspaceUpdate,
        Self::WorkspaceIpBanSync,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ChannelCreate => "channel_create",
            Self::WorkspaceUpdate => "workspace_update",
            Self::WorkspaceIpBanSync => "workspace_ip_ban_sync",
        }
    }
}

/// Channel snapshot carried by `channel_create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ChannelPayload {
    pub channel_id: ChannelId,
    pub name: ChannelName,
    pub kind: ChannelKind,
    pub position: u32,
}

/// `channel_create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ChannelCreatePayload {
    pub guild_id: GuildId,
    #[serde(deserialize_with = "strict::object")]
    pub channel: ChannelPayload,
    pub created_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceVisibility {
    Public,
    Private,
}

/// `workspace_update` deltas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceUpdateFields {
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<WorkspaceName>,
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility: Option<WorkspaceVisibility>,
}

impl UpdateFields for WorkspaceUpdateFields {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.visibility.is_none()
    }
}

/// `workspace_update` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceUpdatePayload {
    pub guild_id: GuildId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: WorkspaceUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpBanSyncAction {
    Upsert,
    Remove,
}

/// Aggregate of an IP ban list change; addresses never cross the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct IpBanSyncSummary {
    pub action: IpBanSyncAction,
    pub changed_count: u32,
}

/// `workspace_ip_ban_sync` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceIpBanSyncPayload {
    pub guild_id: GuildId,
    #[serde(deserialize_with = "strict::object")]
    pub summary: IpBanSyncSummary,
    pub updated_at_unix: UnixTimestamp,
}

/// Decoded workspace event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WorkspaceGatewayEvent {
    ChannelCreate(ChannelCreatePayload),
    WorkspaceUpdate(WorkspaceUpdatePayload),
    WorkspaceIpBanSync(WorkspaceIpBanSyncPayload),
}

impl WorkspaceGatewayEvent {
    pub fn kind(&self) -> WorkspaceEventKind {
        match self {
            Self::ChannelCreate(_) => WorkspaceEventKind::ChannelCreate,
            Self::WorkspaceUpdate(_) => WorkspaceEventKind::WorkspaceUpdate,
            Self::WorkspaceIpBanSync(_) => WorkspaceEventKind::WorkspaceIpBanSync,
        }
    }
}

// === Type guards ===

pub fn is_channel_create_event_type(event_type: &str) -> bool {
    WorkspaceEventKind::parse(event_type) == Some(WorkspaceEventKind::ChannelCreate)
}

pub fn is_workspace_update_event_type(event_type: &str) -> bool {
    WorkspaceEventKind::parse(event_type) == Some(WorkspaceEventKind::WorkspaceUpdate)
}

pub fn is_workspace_ip_ban_sync_event_type(event_type: &str) -> bool {
    WorkspaceEventKind::parse(event_type) == Some(WorkspaceEventKind::WorkspaceIpBanSync)
}

pub fn is_workspace_gateway_event_type(event_type: &str) -> bool {
    WorkspaceEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_channel_create(payload: &Value) -> Option<ChannelCreatePayload> {
    finish(
        WorkspaceEventKind::ChannelCreate.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_update(payload: &Value) -> Option<WorkspaceUpdatePayload> {
    finish(
        WorkspaceEventKind::WorkspaceUpdate.as_str(),
        try_workspace_update(payload),
    )
}

fn try_workspace_update(payload: &Value) -> Result<WorkspaceUpdatePayload, DecodeError> {
    let update: WorkspaceUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_workspace_ip_ban_sync(payload: &Value) -> Option<WorkspaceIpBanSyncPayload> {
    finish(
        WorkspaceEventKind::WorkspaceIpBanSync.as_str(),
        from_object(payload),
    )
}

/// Decode any workspace-level event
pub fn decode_workspace_gateway_event(
    event_type: &str,
    payload: &Value,
) -> Option<WorkspaceGatewayEvent> {
    match WorkspaceEventKind::parse(event_type)? {
        WorkspaceEventKind::ChannelCreate => {
            decode_channel_create(payload).map(WorkspaceGatewayEvent::ChannelCreate)
        }
        WorkspaceEventKind::WorkspaceUpdate => {
            decode_workspace_update(payload).map(WorkspaceGatewayEvent::WorkspaceUpdate)
        }
        WorkspaceEventKind::WorkspaceIpBanSync => {
            decode_workspace_ip_ban_sync(payload).map(WorkspaceGatewayEvent::WorkspaceIpBanSync)
        }
    }
}
