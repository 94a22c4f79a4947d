//! Channel permission names and the bitflag set they combine into
//!
//! Permission names travel on the wire as snake_case strings inside
//! override `allow`/`deny` lists. Consumers fold those lists into a
//! `Permissions` set to evaluate effective access.

use bitflags::bitflags;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;

/// A single named permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewChannel,
    CreateMessage,
    ManageMessages,
    ManageChannels,
    ManageRoles,
    ManageWorkspace,
    KickMembers,
    BanMembers,
    AddReactions,
    AttachFiles,
    ConnectVoice,
    SpeakVoice,
    StreamVideo,
}

impl Permission {
    /// Every permission, in canonical (bit) order
    pub const ALL: [Self; 13] = [
        Self::ViewChannel,
        Self::CreateMessage,
        Self::ManageMessages,
        Self::ManageChannels,
        Self::ManageRoles,
        Self::ManageWorkspace,
        Self::KickMembers,
        Self::BanMembers,
        Self::AddReactions,
        Self::AttachFiles,
        Self::ConnectVoice,
        Self::SpeakVoice,
        Self::StreamVideo,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewChannel => "view_channel",
            Self::CreateMessage => "create_message",
            Self::ManageMessages => "manage_messages",
            Self::ManageChannels => "manage_channels",
            Self::ManageRoles => "manage_roles",
            Self::ManageWorkspace => "manage_workspace",
            Self::KickMembers => "kick_members",
            Self::BanMembers => "ban_members",
            Self::AddReactions => "add_reactions",
            Self::AttachFiles => "attach_files",
            Self::ConnectVoice => "connect_voice",
            Self::SpeakVoice => "speak_voice",
            Self::StreamVideo => "stream_video",
        }
    }

    /// Parse a wire permission name
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ValidationError::UnknownVariant { field: "permission" })
    }

    /// The flag bit for this permission
    #[must_use]
    pub const fn flag(self) -> Permissions {
        match self {
            Self::ViewChannel => Permissions::VIEW_CHANNEL,
            Self::CreateMessage => Permissions::CREATE_MESSAGE,
            Self::ManageMessages => Permissions::MANAGE_MESSAGES,
            Self::ManageChannels => Permissions::MANAGE_CHANNELS,
            Self::ManageRoles => Permissions::MANAGE_ROLES,
            Self::ManageWorkspace => Permissions::MANAGE_WORKSPACE,
            Self::KickMembers => Permissions::KICK_MEMBERS,
            Self::BanMembers => Permissions::BAN_MEMBERS,
            Self::AddReactions => Permissions::ADD_REACTIONS,
            Self::AttachFiles => Permissions::ATTACH_FILES,
            Self::ConnectVoice => Permissions::CONNECT_VOICE,
            Self::SpeakVoice => Permissions::SPEAK_VOICE,
            Self::StreamVideo => Permissions::STREAM_VIDEO,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of channel permissions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        const VIEW_CHANNEL     = 1 << 0;
        const CREATE_MESSAGE   = 1 << 1;
        const MANAGE_MESSAGES  = 1 << 2;
        const MANAGE_CHANNELS  = 1 << 3;
        const MANAGE_ROLES     = 1 << 4;
        const MANAGE_WORKSPACE = 1 << 5;
        const KICK_MEMBERS     = 1 << 6;
        const BAN_MEMBERS      = 1 << 7;
        const ADD_REACTIONS    = 1 << 8;
        const ATTACH_FILES     = 1 << 9;
        const CONNECT_VOICE    = 1 << 10;
        const SPEAK_VOICE      = 1 << 11;
        const STREAM_VIDEO     = 1 << 12;
    }
}

impl Permissions {
    /// Fold a decoded permission list into a set
    pub fn from_list<'a, I>(permissions: I) -> Self
    where
        I: IntoIterator<Item = &'a Permission>,
    {
        permissions
            .into_iter()
            .fold(Self::empty(), |acc, p| acc | p.flag())
    }

    /// Check if the set has any of the given permissions
    #[inline]
    pub fn has_any(&self, permissions: Permissions) -> bool {
        self.intersects(permissions)
    }

    /// Apply an override: remove `deny`, then add `allow`
    #[must_use]
    pub fn apply_override(self, allow: Permissions, deny: Permissions) -> Self {
        (self - deny) | allow
    }

    /// Names of the permissions that are set, in canonical order
    pub fn names(&self) -> Vec<&'static str> {
        Permission::ALL
            .into_iter()
            .filter(|p| self.contains(p.flag()))
            .map(Permission::as_str)
            .collect()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

// Serialize as the list of names, matching the wire vocabulary
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}
