//! # chat-core
//!
//! Domain layer for the gateway client: validated value objects that every
//! gateway payload is built from, and the validation error they raise.
//! This crate has no I/O and no dependency on the transport.

pub mod error;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use error::ValidationError;
pub use value_objects::{
    AboutMarkdown, AssetVersion, ChannelId, ChannelKind, ChannelName, ChannelOverrideSchema,
    Emoji, FriendRequestId, GuildId, MessageContent, MessageId, Permission, Permissions,
    PresenceStatus, RoleId, RoleName, UnixTimestamp, UserId, Username, WorkspaceName,
    WorkspaceRole, MAX_SAFE_INTEGER,
};
