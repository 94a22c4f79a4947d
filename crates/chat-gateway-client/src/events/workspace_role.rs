//! Workspace role events: role lifecycle, ordering and member assignment

use chat_core::{GuildId, Permission, RoleId, RoleName, UnixTimestamp, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

/// Workspace role event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceRoleEventKind {
    WorkspaceRoleCreate,
    WorkspaceRoleUpdate,
    WorkspaceRoleDelete,
    WorkspaceRoleReorder,
    WorkspaceRoleAssignmentAdd,
    WorkspaceRoleAssignmentRemove,
}

impl EventKind for WorkspaceRoleEventKind {
    const ALL: &'static [Self] = &[
        Self::WorkspaceRoleCreate,
        Self::WorkspaceRoleUpdate,
        Self::WorkspaceRoleDelete,
        Self::WorkspaceRoleReorder,
        Self::WorkspaceRoleAssignmentAdd,
        Self::WorkspaceRoleAssignmentRemove,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceRoleCreate => "workspace_role_create",
            Self::WorkspaceRoleUpdate => "workspace_role_update",
            Self::WorkspaceRoleDelete => "workspace_role_delete",
            Self::WorkspaceRoleReorder => "workspace_role_reorder",
            Self::WorkspaceRoleAssignmentAdd => "workspace_role_assignment_add",
            Self::WorkspaceRoleAssignmentRemove => "workspace_role_assignment_remove",
        }
    }
}

/// Role snapshot carried by `workspace_role_create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRolePayload {
    pub role_id: RoleId,
    pub name: RoleName,
    pub position: u32,
    pub is_system: bool,
    pub permissions: Vec<Permission>,
}

/// `workspace_role_create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleCreatePayload {
    pub guild_id: GuildId,
    #[serde(deserialize_with = "strict::object")]
    pub role: WorkspaceRolePayload,
    pub created_at_unix: UnixTimestamp,
}

/// `workspace_role_update` deltas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleUpdateFields {
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<RoleName>,
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<Vec<Permission>>,
}

impl UpdateFields for WorkspaceRoleUpdateFields {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.permissions.is_none()
    }
}

/// `workspace_role_update` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleUpdatePayload {
    pub guild_id: GuildId,
    pub role_id: RoleId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: WorkspaceRoleUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

/// `workspace_role_delete` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleDeletePayload {
    pub guild_id: GuildId,
    pub role_id: RoleId,
    pub deleted_at_unix: UnixTimestamp,
}

/// `workspace_role_reorder` payload
///
/// `role_ids` is the complete new order, highest role first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleReorderPayload {
    pub guild_id: GuildId,
    pub role_ids: Vec<RoleId>,
    pub updated_at_unix: UnixTimestamp,
}

/// `workspace_role_assignment_add` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleAssignmentAddPayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub assigned_at_unix: UnixTimestamp,
}

/// `workspace_role_assignment_remove` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkspaceRoleAssignmentRemovePayload {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub removed_at_unix: UnixTimestamp,
}

/// Decoded workspace role event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WorkspaceRoleGatewayEvent {
    WorkspaceRoleCreate(WorkspaceRoleCreatePayload),
    WorkspaceRoleUpdate(WorkspaceRoleUpdatePayload),
    WorkspaceRoleDelete(WorkspaceRoleDeletePayload),
    WorkspaceRoleReorder(WorkspaceRoleReorderPayload),
    WorkspaceRoleAssignmentAdd(WorkspaceRoleAssignmentAddPayload),
    WorkspaceRoleAssignmentRemove(WorkspaceRoleAssignmentRemovePayload),
}

impl WorkspaceRoleGatewayEvent {
    pub fn kind(&self) -> WorkspaceRoleEventKind {
        use WorkspaceRoleEventKind as Kind;
        match self {
            Self::WorkspaceRoleCreate(_) => Kind::WorkspaceRoleCreate,
            Self::WorkspaceRoleUpdate(_) => Kind::WorkspaceRoleUpdate,
            Self::WorkspaceRoleDelete(_) => Kind::WorkspaceRoleDelete,
            Self::WorkspaceRoleReorder(_) => Kind::WorkspaceRoleReorder,
            Self::WorkspaceRoleAssignmentAdd(_) => Kind::WorkspaceRoleAssignmentAdd,
            Self::WorkspaceRoleAssignmentRemove(_) => Kind::WorkspaceRoleAssignmentRemove,
        }
    }
}

// === Type guards ===

pub fn is_workspace_role_create_event_type(event_type: &str) -> bool {
    WorkspaceRoleEventKind::parse(event_type) == Some(WorkspaceRoleEventKind::WorkspaceRoleCreate)
}

pub fn is_workspace_role_update_event_type(event_type: &str) -> bool {
    WorkspaceRoleEventKind::parse(event_type) == Some(WorkspaceRoleEventKind::WorkspaceRoleUpdate)
}

pub fn is_workspace_role_delete_event_type(event_type: &str) -> bool {
    WorkspaceRoleEventKind::parse(event_type) == Some(WorkspaceRoleEventKind::WorkspaceRoleDelete)
}

pub fn is_workspace_role_reorder_event_type(event_type: &str) -> bool {
    WorkspaceRoleEventKind::parse(event_type) == Some(WorkspaceRoleEventKind::WorkspaceRoleReorder)
}

/// `workspace_role_assignment_add` or `workspace_role_assignment_remove`
pub fn is_workspace_role_assignment_event_type(event_type: &str) -> bool {
    matches!(
        WorkspaceRoleEventKind::parse(event_type),
        Some(
            WorkspaceRoleEventKind::WorkspaceRoleAssignmentAdd
                | WorkspaceRoleEventKind::WorkspaceRoleAssignmentRemove
        )
    )
}

/// Any workspace role tag
pub fn is_workspace_role_gateway_event_type(event_type: &str) -> bool {
    WorkspaceRoleEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_workspace_role_create(payload: &Value) -> Option<WorkspaceRoleCreatePayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleCreate.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_role_update(payload: &Value) -> Option<WorkspaceRoleUpdatePayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleUpdate.as_str(),
        try_role_update(payload),
    )
}

fn try_role_update(payload: &Value) -> Result<WorkspaceRoleUpdatePayload, DecodeError> {
    let update: WorkspaceRoleUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_workspace_role_delete(payload: &Value) -> Option<WorkspaceRoleDeletePayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleDelete.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_role_reorder(payload: &Value) -> Option<WorkspaceRoleReorderPayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleReorder.as_str(),
        try_role_reorder(payload),
    )
}

// Full ordering: non-empty, each role once
fn try_role_reorder(payload: &Value) -> Result<WorkspaceRoleReorderPayload, DecodeError> {
    let reorder: WorkspaceRoleReorderPayload = from_object(payload)?;
    if reorder.role_ids.is_empty() {
        return Err(DecodeError::EmptyList { field: "role_ids" });
    }
    let mut seen = HashSet::with_capacity(reorder.role_ids.len());
    if !reorder.role_ids.iter().all(|id| seen.insert(id)) {
        return Err(DecodeError::DuplicateEntry { field: "role_ids" });
    }
    Ok(reorder)
}

pub fn decode_workspace_role_assignment_add(
    payload: &Value,
) -> Option<WorkspaceRoleAssignmentAddPayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleAssignmentAdd.as_str(),
        from_object(payload),
    )
}

pub fn decode_workspace_role_assignment_remove(
    payload: &Value,
) -> Option<WorkspaceRoleAssignmentRemovePayload> {
    finish(
        WorkspaceRoleEventKind::WorkspaceRoleAssignmentRemove.as_str(),
        from_object(payload),
    )
}

/// Decode any workspace role event
pub fn decode_workspace_role_gateway_event(
    event_type: &str,
    payload: &Value,
) -> Option<WorkspaceRoleGatewayEvent> {
    use WorkspaceRoleEventKind as Kind;
    use WorkspaceRoleGatewayEvent as Event;

    match WorkspaceRoleEventKind::parse(event_type)? {
        Kind::WorkspaceRoleCreate => {
            decode_workspace_role_create(payload).map(Event::WorkspaceRoleCreate)
        }
        Kind::WorkspaceRoleUpdate => {
            decode_workspace_role_update(payload).map(Event::WorkspaceRoleUpdate)
        }
        Kind::WorkspaceRoleDelete => {
            decode_workspace_role_delete(payload).map(Event::WorkspaceRoleDelete)
        }
        Kind::WorkspaceRoleReorder => {
            decode_workspace_role_reorder(payload).map(Event::WorkspaceRoleReorder)
        }
        Kind::WorkspaceRoleAssignmentAdd => {
            decode_workspace_role_assignment_add(payload).map(Event::WorkspaceRoleAssignmentAdd)
        }
        Kind::WorkspaceRoleAssignmentRemove => decode_workspace_role_assignment_remove(payload)
            .map(Event::WorkspaceRoleAssignmentRemove),
    }
}
