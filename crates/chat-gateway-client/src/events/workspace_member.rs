//! Workspace member events: join, update, removal, ban

use chat_core::{GuildId, UnixTimestamp, UserId, WorkspaceRole};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

/// Workspace member event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceMemberEventKind {
    WorkspaceMemberAdd,
    WorkspaceMemberUpdate,
    WorkspaceMemberRemove,
    WorkspaceMemberBan,
}

impl EventKind for WorkspaceMemberEventKind {
    const ALL: &'static [Self] = &[
        Self::WorkspaceMemberAdd,
        Self::WorkspaceMemberUpdate,
        Self::WorkspaceMemberRemove,
        Self::WorkspaceMemberBan,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceMemberAdd => "workspace_member_add",
            Self::WorkspaceMemberUpdate => "workspace_member_update",
            Self::WorkspaceMemberRemove => "workspace_member_remove",
            Self::WorkspaceMemberBan => "workspace_member_ban",
        }
    }
}

/// `workspace_member_add` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceMemberAddPayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role: WorkspaceRole,
    pub joined_at_unix: UnixTimestamp,
}

/// `workspace_member_update` deltas
///
/// `timeout_until_unix` distinguishes an absent key (no change) from an
/// explicit `null` (timeout cleared).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceMemberUpdateFields {
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<WorkspaceRole>,
    #[serde(
        default,
        deserialize_with = "strict::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_until_unix: Option<Option<UnixTimestamp>>,
}

impl WorkspaceMemberUpdateFields {
    /// True when the update clears an active timeout
    pub fn clears_timeout(&self) -> bool {
        matches!(self.timeout_until_unix, Some(None))
    }
}

impl UpdateFields for WorkspaceMemberUpdateFields {
    fn is_empty(&self) -> bool {
        self.role.is_none() && self.timeout_until_unix.is_none()
    }
}

/// `workspace_member_update` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceMemberUpdatePayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: WorkspaceMemberUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

/// Why a member left the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRemovalReason {
    Kick,
    Ban,
    Leave,
}

/// `workspace_member_remove` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceMemberRemovePayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub reason: MemberRemovalReason,
    pub removed_at_unix: UnixTimestamp,
}

/// `workspace_member_ban` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceMemberBanPayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub banned_at_unix: UnixTimestamp,
    /// Absent for a permanent ban
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at_unix: Option<UnixTimestamp>,
}

/// Decoded workspace member event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WorkspaceMemberGatewayEvent {
    WorkspaceMemberAdd(WorkspaceMemberAddPayload),
    WorkspaceMemberUpdate(WorkspaceMemberUpdatePayload),
    WorkspaceMemberRemove(WorkspaceMemberRemovePayload),
    WorkspaceMemberBan(WorkspaceMemberBanPayload),
}

impl WorkspaceMemberGatewayEvent {
    pub fn kind(&self) -> WorkspaceMemberEventKind {
        match self {
            Self::WorkspaceMemberAdd(_) => WorkspaceMemberEventKind::WorkspaceMemberAdd,
            Self::WorkspaceMemberUpdate(_) => WorkspaceMemberEventKind::WorkspaceMemberUpdate,
            Self::WorkspaceMemberRemove(_) => WorkspaceMemberEventKind::WorkspaceMemberRemove,
            Self::WorkspaceMemberBan(_) => WorkspaceMemberEventKind::WorkspaceMemberBan,
        }
    }
}

// === Type guards ===

pub fn is_workspace_member_add_event_type(event_type: &str) -> bool {
    WorkspaceMemberEventKind::parse(event_type) == Some(WorkspaceMemberEventKind::WorkspaceMemberAdd)
}

pub fn is_workspace_member_update_event_type(event_type: &str) -> bool {
    WorkspaceMemberEventKind::parse(event_type)
        == Some(WorkspaceMemberEventKind::WorkspaceMemberUpdate)
}

pub fn is_workspace_member_remove_event_type(event_type: &str) -> bool {
    WorkspaceMemberEventKind::parse(event_type)
        == Some(WorkspaceMemberEventKind::WorkspaceMemberRemove)
}

pub fn is_workspace_member_ban_event_type(event_type: &str) -> bool {
    WorkspaceMemberEventKind::parse(event_type) == Some(WorkspaceMemberEventKind::WorkspaceMemberBan)
}

/// Any workspace member tag
pub fn is_workspace_member_gateway_event_type(event_type: &str) -> bool {
    WorkspaceMemberEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_workspace_member_add(payload: &Value) -> Option<WorkspaceMemberAddPayload> {
    finish(
        WorkspaceMemberEventKind::WorkspaceMemberAdd.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_member_update(payload: &Value) -> Option<WorkspaceMemberUpdatePayload> {
    finish(
        WorkspaceMemberEventKind::WorkspaceMemberUpdate.as_str(),
        try_member_update(payload),
    )
}

fn try_member_update(payload: &Value) -> Result<WorkspaceMemberUpdatePayload, DecodeError> {
    let update: WorkspaceMemberUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_workspace_member_remove(payload: &Value) -> Option<WorkspaceMemberRemovePayload> {
    finish(
        WorkspaceMemberEventKind::WorkspaceMemberRemove.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_member_ban(payload: &Value) -> Option<WorkspaceMemberBanPayload> {
    finish(
        WorkspaceMemberEventKind::WorkspaceMemberBan.as_str(),
        from_object(payload),
    )
}

/// Decode any workspace member event
pub fn decode_workspace_member_gateway_event(
    event_type: &str,
    payload: &Value,
) -> Option<WorkspaceMemberGatewayEvent> {
    use WorkspaceMemberEventKind as Kind;
    use WorkspaceMemberGatewayEvent as Event;

    match WorkspaceMemberEventKind::parse(event_type)? {
        Kind::WorkspaceMemberAdd => decode_workspace_member_add(payload).map(Event::WorkspaceMemberAdd),
        Kind::WorkspaceMemberUpdate => {
            decode_workspace_member_update(payload).map(Event::WorkspaceMemberUpdate)
        }
        Kind::WorkspaceMemberRemove => {
            decode_workspace_member_remove(payload).map(Event::WorkspaceMemberRemove)
        }
        Kind::WorkspaceMemberBan => decode_workspace_member_ban(payload).map(Event::WorkspaceMemberBan),
    }
}
