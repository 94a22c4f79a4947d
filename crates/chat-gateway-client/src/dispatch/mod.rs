//! Domain dispatchers
//!
//! Each domain owns a set of wire tags, a handler bag, and a dispatcher that
//! decodes an owned tag and hands the payload to its slot through an
//! exhaustive `match` on the decoded event.

mod friend;
mod handler;
mod message;
mod presence;
mod profile;
mod voice;
mod workspace;

pub use friend::{dispatch_friend_gateway_event, friend_event_types, FriendHandlers};
pub use handler::Handler;
pub use message::{dispatch_message_gateway_event, message_event_types, MessageHandlers};
pub use presence::{dispatch_presence_gateway_event, presence_event_types, PresenceHandlers};
pub use profile::{dispatch_profile_gateway_event, profile_event_types, ProfileHandlers};
pub use voice::{
    dispatch_voice_gateway_event, is_voice_domain_event_type, voice_event_types, VoiceHandlers,
};
pub use workspace::{
    dispatch_workspace_gateway_event, is_workspace_domain_event_type, workspace_event_types,
    ChannelOverrideHandlers, WorkspaceHandlers,
};
