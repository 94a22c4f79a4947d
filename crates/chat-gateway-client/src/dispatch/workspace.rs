//! Workspace domain dispatch
//!
//! The workspace domain spans four event families: workspace-level events,
//! roles, members and channel overrides. Channel overrides are delivered in
//! whichever schema version the caller installs handlers for.

use chat_core::ChannelOverrideSchema;
use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_workspace_channel_override_gateway_event, decode_workspace_gateway_event,
    decode_workspace_member_gateway_event, decode_workspace_role_gateway_event,
    is_workspace_channel_override_gateway_event_type, is_workspace_gateway_event_type,
    is_workspace_member_gateway_event_type, is_workspace_role_gateway_event_type,
    ChannelCreatePayload, ChannelOverrideEventKind, ChannelOverrideGatewayEvent, EventKind,
    PermissionChannelOverride, RoleChannelOverride, WorkspaceEventKind, WorkspaceGatewayEvent,
    WorkspaceIpBanSyncPayload, WorkspaceMemberAddPayload, WorkspaceMemberBanPayload,
    WorkspaceMemberEventKind, WorkspaceMemberGatewayEvent, WorkspaceMemberRemovePayload,
    WorkspaceMemberUpdatePayload, WorkspaceRoleAssignmentAddPayload,
    WorkspaceRoleAssignmentRemovePayload, WorkspaceRoleCreatePayload, WorkspaceRoleDeletePayload,
    WorkspaceRoleEventKind, WorkspaceRoleGatewayEvent, WorkspaceRoleReorderPayload,
    WorkspaceRoleUpdatePayload, WorkspaceUpdatePayload,
};

/// Channel override handlers, one variant per schema version
#[derive(Default)]
pub enum ChannelOverrideHandlers<'a> {
    /// No schema chosen; override frames are owned but dropped
    #[default]
    Unsubscribed,
    Legacy {
        on_workspace_channel_override_update: Handler<'a, RoleChannelOverride>,
    },
    Targeted {
        on_workspace_channel_role_override_update: Handler<'a, RoleChannelOverride>,
        on_workspace_channel_permission_override_update: Handler<'a, PermissionChannelOverride>,
    },
}

impl<'a> ChannelOverrideHandlers<'a> {
    pub fn legacy(handler: impl FnMut(RoleChannelOverride) + 'a) -> Self {
        Self::Legacy {
            on_workspace_channel_override_update: Some(Box::new(handler)),
        }
    }

    pub fn targeted(
        on_role_override: impl FnMut(RoleChannelOverride) + 'a,
        on_permission_override: impl FnMut(PermissionChannelOverride) + 'a,
    ) -> Self {
        Self::Targeted {
            on_workspace_channel_role_override_update: Some(Box::new(on_role_override)),
            on_workspace_channel_permission_override_update: Some(Box::new(on_permission_override)),
        }
    }

    /// Empty handlers for a schema, e.g. one read from configuration
    pub fn for_schema(schema: Option<ChannelOverrideSchema>) -> Self {
        match schema {
            None => Self::Unsubscribed,
            Some(ChannelOverrideSchema::Legacy) => Self::Legacy {
                on_workspace_channel_override_update: None,
            },
            Some(ChannelOverrideSchema::Targeted) => Self::Targeted {
                on_workspace_channel_role_override_update: None,
                on_workspace_channel_permission_override_update: None,
            },
        }
    }

    pub fn schema(&self) -> Option<ChannelOverrideSchema> {
        match self {
            Self::Unsubscribed => None,
            Self::Legacy { .. } => Some(ChannelOverrideSchema::Legacy),
            Self::Targeted { .. } => Some(ChannelOverrideSchema::Targeted),
        }
    }
}

impl fmt::Debug for ChannelOverrideHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChannelOverrideHandlers")
            .field(&self.schema())
            .finish()
    }
}

impl ChannelOverrideGatewayEvent {
    /// Route the event to its slot; a schema mismatch with the installed
    /// handlers is dropped
    pub fn dispatch(self, handlers: &mut ChannelOverrideHandlers<'_>) {
        let event_type = ChannelOverrideEventKind::WorkspaceChannelOverrideUpdate.as_str();
        match (self, handlers) {
            (
                Self::WorkspaceChannelOverrideUpdate(payload),
                ChannelOverrideHandlers::Legacy {
                    on_workspace_channel_override_update,
                },
            ) => invoke(event_type, on_workspace_channel_override_update, payload),
            (
                Self::WorkspaceChannelRoleOverrideUpdate(payload),
                ChannelOverrideHandlers::Targeted {
                    on_workspace_channel_role_override_update,
                    ..
                },
            ) => invoke(event_type, on_workspace_channel_role_override_update, payload),
            (
                Self::WorkspaceChannelPermissionOverrideUpdate(payload),
                ChannelOverrideHandlers::Targeted {
                    on_workspace_channel_permission_override_update,
                    ..
                },
            ) => invoke(
                event_type,
                on_workspace_channel_permission_override_update,
                payload,
            ),
            (event, handlers) => tracing::debug!(
                event_type,
                decoded = ?event.schema(),
                installed = ?handlers.schema(),
                "Channel override schema does not match installed handlers"
            ),
        }
    }
}

/// Workspace handler bag
#[derive(Default)]
pub struct WorkspaceHandlers<'a> {
    pub on_channel_create: Handler<'a, ChannelCreatePayload>,
    pub on_workspace_update: Handler<'a, WorkspaceUpdatePayload>,
    pub on_workspace_ip_ban_sync: Handler<'a, WorkspaceIpBanSyncPayload>,
    pub on_workspace_member_add: Handler<'a, WorkspaceMemberAddPayload>,
    pub on_workspace_member_update: Handler<'a, WorkspaceMemberUpdatePayload>,
    pub on_workspace_member_remove: Handler<'a, WorkspaceMemberRemovePayload>,
    pub on_workspace_member_ban: Handler<'a, WorkspaceMemberBanPayload>,
    pub on_workspace_role_create: Handler<'a, WorkspaceRoleCreatePayload>,
    pub on_workspace_role_update: Handler<'a, WorkspaceRoleUpdatePayload>,
    pub on_workspace_role_delete: Handler<'a, WorkspaceRoleDeletePayload>,
    pub on_workspace_role_reorder: Handler<'a, WorkspaceRoleReorderPayload>,
    pub on_workspace_role_assignment_add: Handler<'a, WorkspaceRoleAssignmentAddPayload>,
    pub on_workspace_role_assignment_remove: Handler<'a, WorkspaceRoleAssignmentRemovePayload>,
    pub channel_override: ChannelOverrideHandlers<'a>,
}

impl<'a> WorkspaceHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_channel_create: ChannelCreatePayload,
        on_workspace_update: WorkspaceUpdatePayload,
        on_workspace_ip_ban_sync: WorkspaceIpBanSyncPayload,
        on_workspace_member_add: WorkspaceMemberAddPayload,
        on_workspace_member_update: WorkspaceMemberUpdatePayload,
        on_workspace_member_remove: WorkspaceMemberRemovePayload,
        on_workspace_member_ban: WorkspaceMemberBanPayload,
        on_workspace_role_create: WorkspaceRoleCreatePayload,
        on_workspace_role_update: WorkspaceRoleUpdatePayload,
        on_workspace_role_delete: WorkspaceRoleDeletePayload,
        on_workspace_role_reorder: WorkspaceRoleReorderPayload,
        on_workspace_role_assignment_add: WorkspaceRoleAssignmentAddPayload,
        on_workspace_role_assignment_remove: WorkspaceRoleAssignmentRemovePayload,
    }

    #[must_use]
    pub fn channel_override(mut self, handlers: ChannelOverrideHandlers<'a>) -> Self {
        self.channel_override = handlers;
        self
    }
}

impl fmt::Debug for WorkspaceHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_channel_create", self.on_channel_create.is_some()),
                    ("on_workspace_update", self.on_workspace_update.is_some()),
                    ("on_workspace_ip_ban_sync", self.on_workspace_ip_ban_sync.is_some()),
                    ("on_workspace_member_add", self.on_workspace_member_add.is_some()),
                    ("on_workspace_member_update", self.on_workspace_member_update.is_some()),
                    ("on_workspace_member_remove", self.on_workspace_member_remove.is_some()),
                    ("on_workspace_member_ban", self.on_workspace_member_ban.is_some()),
                    ("on_workspace_role_create", self.on_workspace_role_create.is_some()),
                    ("on_workspace_role_update", self.on_workspace_role_update.is_some()),
                    ("on_workspace_role_delete", self.on_workspace_role_delete.is_some()),
                    ("on_workspace_role_reorder", self.on_workspace_role_reorder.is_some()),
                    (
                        "on_workspace_role_assignment_add",
                        self.on_workspace_role_assignment_add.is_some(),
                    ),
                    (
                        "on_workspace_role_assignment_remove",
                        self.on_workspace_role_assignment_remove.is_some(),
                    ),
                ]),
            )
            .field("channel_override", &self.channel_override)
            .finish()
    }
}

impl WorkspaceGatewayEvent {
    pub fn dispatch(self, handlers: &mut WorkspaceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::ChannelCreate(payload) => {
                invoke(event_type, &mut handlers.on_channel_create, payload);
            }
            Self::WorkspaceUpdate(payload) => {
                invoke(event_type, &mut handlers.on_workspace_update, payload);
            }
            Self::WorkspaceIpBanSync(payload) => {
                invoke(event_type, &mut handlers.on_workspace_ip_ban_sync, payload);
            }
        }
    }
}

impl WorkspaceMemberGatewayEvent {
    pub fn dispatch(self, handlers: &mut WorkspaceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::WorkspaceMemberAdd(payload) => {
                invoke(event_type, &mut handlers.on_workspace_member_add, payload);
            }
            Self::WorkspaceMemberUpdate(payload) => {
                invoke(event_type, &mut handlers.on_workspace_member_update, payload);
            }
            Self::WorkspaceMemberRemove(payload) => {
                invoke(event_type, &mut handlers.on_workspace_member_remove, payload);
            }
            Self::WorkspaceMemberBan(payload) => {
                invoke(event_type, &mut handlers.on_workspace_member_ban, payload);
            }
        }
    }
}

impl WorkspaceRoleGatewayEvent {
    pub fn dispatch(self, handlers: &mut WorkspaceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::WorkspaceRoleCreate(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_create, payload);
            }
            Self::WorkspaceRoleUpdate(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_update, payload);
            }
            Self::WorkspaceRoleDelete(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_delete, payload);
            }
            Self::WorkspaceRoleReorder(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_reorder, payload);
            }
            Self::WorkspaceRoleAssignmentAdd(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_assignment_add, payload);
            }
            Self::WorkspaceRoleAssignmentRemove(payload) => {
                invoke(event_type, &mut handlers.on_workspace_role_assignment_remove, payload);
            }
        }
    }
}

/// Union of the four workspace family guards
pub fn is_workspace_domain_event_type(event_type: &str) -> bool {
    is_workspace_gateway_event_type(event_type)
        || is_workspace_role_gateway_event_type(event_type)
        || is_workspace_member_gateway_event_type(event_type)
        || is_workspace_channel_override_gateway_event_type(event_type)
}

/// Every wire tag owned by the workspace domain
pub fn workspace_event_types() -> Vec<&'static str> {
    let mut types = WorkspaceEventKind::event_types();
    types.extend(WorkspaceRoleEventKind::event_types());
    types.extend(WorkspaceMemberEventKind::event_types());
    types.extend(ChannelOverrideEventKind::event_types());
    types
}

/// Decode and dispatch a workspace event
///
/// Channel override frames decode under the schema of the installed
/// [`ChannelOverrideHandlers`]; with none installed they are owned and
/// dropped without decoding.
pub fn dispatch_workspace_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut WorkspaceHandlers<'_>,
) -> bool {
    if is_workspace_gateway_event_type(event_type) {
        if let Some(event) = decode_workspace_gateway_event(event_type, payload) {
            event.dispatch(handlers);
        }
    } else if is_workspace_role_gateway_event_type(event_type) {
        if let Some(event) = decode_workspace_role_gateway_event(event_type, payload) {
            event.dispatch(handlers);
        }
    } else if is_workspace_member_gateway_event_type(event_type) {
        if let Some(event) = decode_workspace_member_gateway_event(event_type, payload) {
            event.dispatch(handlers);
        }
    } else if is_workspace_channel_override_gateway_event_type(event_type) {
        let Some(schema) = handlers.channel_override.schema() else {
            tracing::trace!(event_type, "No channel override schema installed");
            return true;
        };
        if let Some(event) =
            decode_workspace_channel_override_gateway_event(schema, event_type, payload)
        {
            event.dispatch(&mut handlers.channel_override);
        }
    } else {
        return false;
    }
    true
}
