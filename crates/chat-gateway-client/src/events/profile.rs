//! Profile events: field edits and avatar/banner asset bumps

use chat_core::{AboutMarkdown, AssetVersion, UnixTimestamp, UserId, Username};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, require_delta, strict, DecodeError, UpdateFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileEventKind {
    ProfileUpdate,
    ProfileAvatarUpdate,
    ProfileBannerUpdate,
}

impl EventKind for ProfileEventKind {
    const ALL: &'static [Self] = &[
        Self::ProfileUpdate,
        Self::ProfileAvatarUpdate,
        Self::ProfileBannerUpdate,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ProfileUpdate => "profile_update",
            Self::ProfileAvatarUpdate => "profile_avatar_update",
            Self::ProfileBannerUpdate => "profile_banner_update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProfileUpdateFields {
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<Username>,
    /// May be empty, which clears the about section
    #[serde(
        default,
        deserialize_with = "strict::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub about_markdown: Option<AboutMarkdown>,
}

impl UpdateFields for ProfileUpdateFields {
    fn is_empty(&self) -> bool {
        self.username.is_none() && self.about_markdown.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProfileUpdatePayload {
    pub user_id: UserId,
    #[serde(deserialize_with = "strict::object")]
    pub updated_fields: ProfileUpdateFields,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProfileAvatarUpdatePayload {
    pub user_id: UserId,
    pub avatar_version: AssetVersion,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProfileBannerUpdatePayload {
    pub user_id: UserId,
    pub banner_version: AssetVersion,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ProfileGatewayEvent {
    ProfileUpdate(ProfileUpdatePayload),
    ProfileAvatarUpdate(ProfileAvatarUpdatePayload),
    ProfileBannerUpdate(ProfileBannerUpdatePayload),
}

impl ProfileGatewayEvent {
    pub fn kind(&self) -> ProfileEventKind {
        match self {
            Self::ProfileUpdate(_) => ProfileEventKind::ProfileUpdate,
            Self::ProfileAvatarUpdate(_) => ProfileEventKind::ProfileAvatarUpdate,
            Self::ProfileBannerUpdate(_) => ProfileEventKind::ProfileBannerUpdate,
        }
    }

    /// User whose profile changed
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::ProfileUpdate(payload) => &payload.user_id,
            Self::ProfileAvatarUpdate(payload) => &payload.user_id,
            Self::ProfileBannerUpdate(payload) => &payload.user_id,
        }
    }
}

// === Type guards ===

pub fn is_profile_update_event_type(event_type: &str) -> bool {
    ProfileEventKind::parse(event_type) == Some(ProfileEventKind::ProfileUpdate)
}

pub fn is_profile_avatar_update_event_type(event_type: &str) -> bool {
    ProfileEventKind::parse(event_type) == Some(ProfileEventKind::ProfileAvatarUpdate)
}

pub fn is_profile_banner_update_event_type(event_type: &str) -> bool {
    ProfileEventKind::parse(event_type) == Some(ProfileEventKind::ProfileBannerUpdate)
}

pub fn is_profile_gateway_event_type(event_type: &str) -> bool {
    ProfileEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_profile_update(payload: &Value) -> Option<ProfileUpdatePayload> {
    finish(
        ProfileEventKind::ProfileUpdate.as_str(),
        try_profile_update(payload),
    )
}

fn try_profile_update(payload: &Value) -> Result<ProfileUpdatePayload, DecodeError> {
    let update: ProfileUpdatePayload = from_object(payload)?;
    require_delta(&update.updated_fields)?;
    Ok(update)
}

pub fn decode_profile_avatar_update(payload: &Value) -> Option<ProfileAvatarUpdatePayload> {
    finish(
        ProfileEventKind::ProfileAvatarUpdate.as_str(),
        from_object(payload),
    )
}

pub fn decode_profile_banner_update(payload: &Value) -> Option<ProfileBannerUpdatePayload> {
    finish(
        ProfileEventKind::ProfileBannerUpdate.as_str(),
        from_object(payload),
    )
}

pub fn decode_profile_gateway_event(event_type: &str, payload: &Value) -> Option<ProfileGatewayEvent> {
    match ProfileEventKind::parse(event_type)? {
        ProfileEventKind::ProfileUpdate => {
            decode_profile_update(payload).map(ProfileGatewayEvent::ProfileUpdate)
        }
        ProfileEventKind::ProfileAvatarUpdate => {
            decode_profile_avatar_update(payload).map(ProfileGatewayEvent::ProfileAvatarUpdate)
        }
        ProfileEventKind::ProfileBannerUpdate => {
            decode_profile_banner_update(payload).map(ProfileGatewayEvent::ProfileBannerUpdate)
        }
    }
}
