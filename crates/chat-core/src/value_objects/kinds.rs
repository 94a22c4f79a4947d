//! Closed enumerations shared across event families

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A member's role within a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    Owner,
    Moderator,
    Member,
}

impl WorkspaceRole {
    pub const ALL: [Self; 3] = [Self::Owner, Self::Moderator, Self::Member];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Moderator => "moderator",
            Self::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or(ValidationError::UnknownVariant { field: "role" })
    }
}

/// Channel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Text,
    Voice,
}

impl ChannelKind {
    pub const ALL: [Self; 2] = [Self::Text, Self::Voice];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(ValidationError::UnknownVariant { field: "kind" })
    }
}

/// Online status broadcast by presence events
///
/// The gateway only reports these two states; anything else (`idle`, `dnd`)
/// is not part of the wire contract and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Online,
    Offline,
}

impl PresenceStatus {
    pub const ALL: [Self; 2] = [Self::Online, Self::Offline];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(ValidationError::UnknownVariant { field: "status" })
    }
}

/// Schema revision used to read `workspace_channel_override_update`
///
/// Two incompatible revisions exist on the wire. The client picks one
/// explicitly; there is no implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOverrideSchema {
    /// Single shape keyed by workspace `role`
    Legacy,
    /// Role shape or `target_kind`/`target_id` permission shape
    Targeted,
}

impl ChannelOverrideSchema {
    pub const ALL: [Self; 2] = [Self::Legacy, Self::Targeted];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Targeted => "targeted",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or(ValidationError::UnknownVariant {
                field: "channel_override_schema",
            })
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChannelOverrideSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_role_parse() {
        assert_eq!(WorkspaceRole::parse("member"), Ok(WorkspaceRole::Member));
        assert_eq!(WorkspaceRole::parse("owner"), Ok(WorkspaceRole::Owner));
        assert!(WorkspaceRole::parse("Member").is_err());
        assert!(WorkspaceRole::parse("admin").is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for role in WorkspaceRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
        for kind in ChannelKind::ALL {
            let parsed: ChannelKind =
                serde_json::from_str(&format!("\"{}\"", kind.as_str())).unwrap();
            assert_eq!(parsed, kind);
        }
        for schema in ChannelOverrideSchema::ALL {
            assert_eq!(ChannelOverrideSchema::parse(schema.as_str()), Ok(schema));
        }
    }

    #[test]
    fn test_presence_status_closed_set() {
        assert_eq!(PresenceStatus::parse("online"), Ok(PresenceStatus::Online));
        assert_eq!(
            PresenceStatus::parse("idle"),
            Err(ValidationError::UnknownVariant { field: "status" })
        );
        assert!(serde_json::from_str::<PresenceStatus>("\"idle\"").is_err());
    }
}
