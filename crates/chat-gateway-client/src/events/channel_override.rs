//! Channel permission overrides
//!
//! `workspace_channel_override_update` exists in two schema versions. The
//! legacy schema only knows workspace-role overrides. The targeted schema
//! also carries per-role or per-user permission overrides, and tries that
//! shape before falling back to the role shape. Both are exposed; the caller
//! picks one with [`ChannelOverrideSchema`].

use chat_core::{
    ChannelId, ChannelOverrideSchema, GuildId, Permission, Permissions, RoleId, UnixTimestamp,
    UserId, WorkspaceRole,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, strict, DecodeError};

/// Channel override event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOverrideEventKind {
    WorkspaceChannelOverrideUpdate,
}

impl EventKind for ChannelOverrideEventKind {
    const ALL: &'static [Self] = &[Self::WorkspaceChannelOverrideUpdate];

    fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceChannelOverrideUpdate => "workspace_channel_override_update",
        }
    }
}

/// Permission delta of an override
///
/// Both lists are required and may be empty, but never share a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct OverrideFields {
    pub allow: Vec<Permission>,
    pub deny: Vec<Permission>,
}

impl OverrideFields {
    pub fn allow_set(&self) -> Permissions {
        Permissions::from_list(&self.allow)
    }

    pub fn deny_set(&self) -> Permissions {
        Permissions::from_list(&self.deny)
    }

    /// Effective permissions after applying this override to `base`
    pub fn apply(&self, base: Permissions) -> Permissions {
        base.apply_override(self.allow_set(), self.deny_set())
    }

    fn validate(&self) -> Result<(), DecodeError> {
        if self.allow_set().has_any(self.deny_set()) {
            return Err(DecodeError::DuplicateEntry { field: "deny" });
        }
        Ok(())
    }
}

/// Override keyed by workspace role; the legacy schema and the targeted
/// schema's fallback shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RoleChannelOverride {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub role: WorkspaceRole,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: OverrideFields,
    pub updated_at_unix: UnixTimestamp,
}

/// Who a permission override applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "targetKind", content = "targetId", rename_all = "snake_case")]
pub enum OverrideTarget {
    Role(RoleId),
    User(UserId),
}

/// Override keyed by a concrete role or user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionChannelOverride {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    #[serde(flatten)]
    pub target: OverrideTarget,
    pub updated_fields: OverrideFields,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TargetKind {
    Role,
    User,
}

// `target_id` only gets its type once `target_kind` is known
#[derive(Deserialize)]
struct PermissionOverrideWire {
    guild_id: GuildId,
    channel_id: ChannelId,
    target_kind: TargetKind,
    target_id: String,
    #[serde(deserialize_with = "strict::object")]
    updated_fields: OverrideFields,
    updated_at_unix: UnixTimestamp,
}

impl TryFrom<PermissionOverrideWire> for PermissionChannelOverride {
    type Error = DecodeError;

    fn try_from(wire: PermissionOverrideWire) -> Result<Self, Self::Error> {
        let target = match wire.target_kind {
            TargetKind::Role => OverrideTarget::Role(RoleId::parse(&wire.target_id)?),
            TargetKind::User => OverrideTarget::User(UserId::parse(&wire.target_id)?),
        };
        Ok(Self {
            guild_id: wire.guild_id,
            channel_id: wire.channel_id,
            target,
            updated_fields: wire.updated_fields,
            updated_at_unix: wire.updated_at_unix,
        })
    }
}

/// Decoded channel override event
///
/// The variant records which shape matched: a legacy role override, or a
/// targeted role or permission override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ChannelOverrideGatewayEvent {
    WorkspaceChannelOverrideUpdate(RoleChannelOverride),
    WorkspaceChannelRoleOverrideUpdate(RoleChannelOverride),
    WorkspaceChannelPermissionOverrideUpdate(PermissionChannelOverride),
}

impl ChannelOverrideGatewayEvent {
    /// Schema version the event was decoded with
    pub fn schema(&self) -> ChannelOverrideSchema {
        match self {
            Self::WorkspaceChannelOverrideUpdate(_) => ChannelOverrideSchema::Legacy,
            Self::WorkspaceChannelRoleOverrideUpdate(_)
            | Self::WorkspaceChannelPermissionOverrideUpdate(_) => ChannelOverrideSchema::Targeted,
        }
    }
}

// === Type guards ===

pub fn is_workspace_channel_override_update_event_type(event_type: &str) -> bool {
    ChannelOverrideEventKind::parse(event_type)
        == Some(ChannelOverrideEventKind::WorkspaceChannelOverrideUpdate)
}

pub fn is_workspace_channel_override_gateway_event_type(event_type: &str) -> bool {
    ChannelOverrideEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

const EVENT_TYPE: &str = "workspace_channel_override_update";

fn reject_keys(payload: &Value, keys: &[&'static str]) -> Result<(), DecodeError> {
    let object = payload.as_object().ok_or(DecodeError::NotAnObject)?;
    match keys.iter().find(|key| object.contains_key(**key)) {
        Some(field) => Err(DecodeError::ShapeConflict { field: *field }),
        None => Ok(()),
    }
}

fn try_role_override(payload: &Value) -> Result<RoleChannelOverride, DecodeError> {
    reject_keys(payload, &["target_kind", "target_id"])?;
    let role_override: RoleChannelOverride = from_object(payload)?;
    role_override.updated_fields.validate()?;
    Ok(role_override)
}

fn try_permission_override(payload: &Value) -> Result<PermissionChannelOverride, DecodeError> {
    reject_keys(payload, &["role"])?;
    let wire: PermissionOverrideWire = from_object(payload)?;
    wire.updated_fields.validate()?;
    PermissionChannelOverride::try_from(wire)
}

/// Legacy schema: role overrides only
pub fn decode_workspace_channel_override_legacy(payload: &Value) -> Option<RoleChannelOverride> {
    finish(EVENT_TYPE, try_role_override(payload))
}

/// Targeted schema, permission shape only
pub fn decode_workspace_channel_permission_override(
    payload: &Value,
) -> Option<PermissionChannelOverride> {
    finish(EVENT_TYPE, try_permission_override(payload))
}

fn try_targeted(payload: &Value) -> Result<ChannelOverrideGatewayEvent, DecodeError> {
    let first = match try_permission_override(payload) {
        Ok(permission_override) => {
            return Ok(ChannelOverrideGatewayEvent::WorkspaceChannelPermissionOverrideUpdate(
                permission_override,
            ))
        }
        Err(error) => error,
    };
    try_role_override(payload)
        .map(ChannelOverrideGatewayEvent::WorkspaceChannelRoleOverrideUpdate)
        .map_err(|fallback| DecodeError::NoShapeMatched {
            first: Box::new(first),
            fallback: Box::new(fallback),
        })
}

/// Targeted schema: permission shape first, then the role shape
pub fn decode_workspace_channel_override_targeted(
    payload: &Value,
) -> Option<ChannelOverrideGatewayEvent> {
    finish(EVENT_TYPE, try_targeted(payload))
}

/// Decode a channel override event under the given schema version
pub fn decode_workspace_channel_override_gateway_event(
    schema: ChannelOverrideSchema,
    event_type: &str,
    payload: &Value,
) -> Option<ChannelOverrideGatewayEvent> {
    ChannelOverrideEventKind::parse(event_type)?;
    match schema {
        ChannelOverrideSchema::Legacy => decode_workspace_channel_override_legacy(payload)
            .map(ChannelOverrideGatewayEvent::WorkspaceChannelOverrideUpdate),
        ChannelOverrideSchema::Targeted => decode_workspace_channel_override_targeted(payload),
    }
}
