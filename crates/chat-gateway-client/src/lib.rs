//! # chat-gateway-client
//!
//! Client side of the gateway: turns untrusted `(type, payload)` frames into
//! typed domain events and routes each one to at most one caller-supplied
//! handler.
//!
//! ```no_run
//! use chat_gateway_client::{dispatch_gateway_frame, GatewayFrame, GatewayHandlers, MessageHandlers};
//!
//! let frame = GatewayFrame::from_json(r#"{"type": "message_delete"}"#).unwrap();
//! let mut handlers = GatewayHandlers::new()
//!     .message(MessageHandlers::new().on_message_delete(|deleted| println!("{deleted:?}")));
//! dispatch_gateway_frame(&frame, &mut handlers);
//! ```

pub mod dispatch;
pub mod events;
pub mod protocol;
pub mod registry;

// Re-export the dispatch surface at crate root
pub use dispatch::{
    dispatch_friend_gateway_event, dispatch_message_gateway_event,
    dispatch_presence_gateway_event, dispatch_profile_gateway_event, dispatch_voice_gateway_event,
    dispatch_workspace_gateway_event, ChannelOverrideHandlers, FriendHandlers, Handler,
    MessageHandlers, PresenceHandlers, ProfileHandlers, VoiceHandlers, WorkspaceHandlers,
};
pub use events::EventKind;
pub use protocol::{DecodeError, FrameError, GatewayFrame};
pub use registry::{
    dispatch_gateway_domain_event, dispatch_gateway_frame, gateway_dispatch_registry,
    known_gateway_event_types, GatewayDispatchRegistry, GatewayDomain, GatewayHandlers,
    RegistryError,
};
