//! Top-level dispatch registry
//!
//! Every wire tag is owned by exactly one [`GatewayDomain`]. The route table
//! is built once per process from each domain's advertised tags; a tag
//! claimed twice is an internal consistency bug and aborts construction.

mod error;
mod route_table;

use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

pub use error::RegistryError;
pub use route_table::{build_route_table, DomainRoute, RouteTable};

use crate::dispatch::{
    dispatch_friend_gateway_event, dispatch_message_gateway_event,
    dispatch_presence_gateway_event, dispatch_profile_gateway_event, dispatch_voice_gateway_event,
    dispatch_workspace_gateway_event, friend_event_types, message_event_types,
    presence_event_types, profile_event_types, voice_event_types, workspace_event_types,
    ChannelOverrideHandlers, FriendHandlers, MessageHandlers, PresenceHandlers, ProfileHandlers,
    VoiceHandlers, WorkspaceHandlers,
};
use crate::protocol::GatewayFrame;

/// Dispatch domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayDomain {
    Message,
    Workspace,
    Profile,
    Friend,
    Voice,
    Presence,
}

impl GatewayDomain {
    pub const ALL: &'static [Self] = &[
        Self::Message,
        Self::Workspace,
        Self::Profile,
        Self::Friend,
        Self::Voice,
        Self::Presence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Workspace => "workspace",
            Self::Profile => "profile",
            Self::Friend => "friend",
            Self::Voice => "voice",
            Self::Presence => "presence",
        }
    }

    /// Run this domain's dispatcher
    pub fn dispatch(self, event_type: &str, payload: &Value, handlers: &mut GatewayHandlers<'_>) -> bool {
        match self {
            Self::Message => dispatch_message_gateway_event(event_type, payload, &mut handlers.message),
            Self::Workspace => {
                dispatch_workspace_gateway_event(event_type, payload, &mut handlers.workspace)
            }
            Self::Profile => dispatch_profile_gateway_event(event_type, payload, &mut handlers.profile),
            Self::Friend => dispatch_friend_gateway_event(event_type, payload, &mut handlers.friend),
            Self::Voice => dispatch_voice_gateway_event(event_type, payload, &mut handlers.voice),
            Self::Presence => {
                dispatch_presence_gateway_event(event_type, payload, &mut handlers.presence)
            }
        }
    }
}

impl DomainRoute for GatewayDomain {
    fn name(self) -> &'static str {
        self.as_str()
    }

    fn event_types(self) -> Vec<&'static str> {
        match self {
            Self::Message => message_event_types(),
            Self::Workspace => workspace_event_types(),
            Self::Profile => profile_event_types(),
            Self::Friend => friend_event_types(),
            Self::Voice => voice_event_types(),
            Self::Presence => presence_event_types(),
        }
    }
}

impl fmt::Display for GatewayDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler bags for every domain
#[derive(Debug, Default)]
pub struct GatewayHandlers<'a> {
    pub message: MessageHandlers<'a>,
    pub workspace: WorkspaceHandlers<'a>,
    pub profile: ProfileHandlers<'a>,
    pub friend: FriendHandlers<'a>,
    pub voice: VoiceHandlers<'a>,
    pub presence: PresenceHandlers<'a>,
}

impl<'a> GatewayHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, handlers: MessageHandlers<'a>) -> Self {
        self.message = handlers;
        self
    }

    #[must_use]
    pub fn workspace(mut self, handlers: WorkspaceHandlers<'a>) -> Self {
        self.workspace = handlers;
        self
    }

    #[must_use]
    pub fn profile(mut self, handlers: ProfileHandlers<'a>) -> Self {
        self.profile = handlers;
        self
    }

    #[must_use]
    pub fn friend(mut self, handlers: FriendHandlers<'a>) -> Self {
        self.friend = handlers;
        self
    }

    #[must_use]
    pub fn voice(mut self, handlers: VoiceHandlers<'a>) -> Self {
        self.voice = handlers;
        self
    }

    #[must_use]
    pub fn presence(mut self, handlers: PresenceHandlers<'a>) -> Self {
        self.presence = handlers;
        self
    }

    /// Replace the channel override handlers of the workspace bag
    #[must_use]
    pub fn channel_override(mut self, handlers: ChannelOverrideHandlers<'a>) -> Self {
        self.workspace.channel_override = handlers;
        self
    }
}

/// Route table over all gateway domains
#[derive(Debug, Clone)]
pub struct GatewayDispatchRegistry {
    table: RouteTable<GatewayDomain>,
}

impl GatewayDispatchRegistry {
    /// Build the registry
    ///
    /// # Panics
    ///
    /// Panics if two domains claim the same wire tag.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(registry) => registry,
            Err(error) => panic!("invalid gateway dispatch registry: {error}"),
        }
    }

    /// Build the registry, reporting a duplicate tag instead of panicking
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateEventType`] if two domains claim the
    /// same wire tag.
    pub fn try_new() -> Result<Self, RegistryError> {
        let table = build_route_table(GatewayDomain::ALL)?;
        tracing::debug!(event_types = table.len(), "Built gateway dispatch registry");
        Ok(Self { table })
    }

    /// Decode and dispatch one frame
    ///
    /// Returns `false` when no domain owns `event_type`.
    pub fn dispatch(&self, event_type: &str, payload: &Value, handlers: &mut GatewayHandlers<'_>) -> bool {
        match self.table.route(event_type) {
            Some(domain) => domain.dispatch(event_type, payload, handlers),
            None => {
                tracing::debug!(event_type, "Unhandled gateway event type");
                false
            }
        }
    }

    pub fn domain_of(&self, event_type: &str) -> Option<GatewayDomain> {
        self.table.route(event_type)
    }

    /// Every known wire tag, sorted
    pub fn event_types(&self) -> &[&'static str] {
        self.table.event_types()
    }
}

impl Default for GatewayDispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: LazyLock<GatewayDispatchRegistry> = LazyLock::new(GatewayDispatchRegistry::new);

/// Process-wide registry, built on first use
pub fn gateway_dispatch_registry() -> &'static GatewayDispatchRegistry {
    &REGISTRY
}

/// Decode and dispatch an inbound event through the process-wide registry
///
/// `true` means a domain owns `event_type`, not that a handler ran: a
/// malformed payload for a known tag is dropped silently.
pub fn dispatch_gateway_domain_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut GatewayHandlers<'_>,
) -> bool {
    gateway_dispatch_registry().dispatch(event_type, payload, handlers)
}

/// [`dispatch_gateway_domain_event`] over a parsed envelope
pub fn dispatch_gateway_frame(frame: &GatewayFrame, handlers: &mut GatewayHandlers<'_>) -> bool {
    dispatch_gateway_domain_event(frame.event_type(), frame.payload(), handlers)
}

/// Every wire tag any domain owns, sorted
pub fn known_gateway_event_types() -> &'static [&'static str] {
    gateway_dispatch_registry().event_types()
}
