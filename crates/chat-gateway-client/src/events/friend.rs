//! Friend events: request lifecycle and friendship removal

use chat_core::{FriendRequestId, UnixTimestamp, UserId, Username};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::protocol::{finish, from_object, strict, DecodeError};

/// Friend event tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendEventKind {
    FriendRequestCreate,
    FriendRequestUpdate,
    FriendRequestDelete,
    FriendRemove,
}

impl EventKind for FriendEventKind {
    const ALL: &'static [Self] = &[
        Self::FriendRequestCreate,
        Self::FriendRequestUpdate,
        Self::FriendRequestDelete,
        Self::FriendRemove,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::FriendRequestCreate => "friend_request_create",
            Self::FriendRequestUpdate => "friend_request_update",
            Self::FriendRequestDelete => "friend_request_delete",
            Self::FriendRemove => "friend_remove",
        }
    }
}

/// One side of a friend request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FriendUserPayload {
    pub user_id: UserId,
    pub username: Username,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FriendRequestCreatePayload {
    pub request_id: FriendRequestId,
    #[serde(deserialize_with = "strict::object")]
    pub sender: FriendUserPayload,
    #[serde(deserialize_with = "strict::object")]
    pub recipient: FriendUserPayload,
    pub created_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendRequestState {
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FriendRequestUpdatePayload {
    pub request_id: FriendRequestId,
    pub state: FriendRequestState,
    pub updated_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FriendRequestDeletePayload {
    pub request_id: FriendRequestId,
    pub deleted_at_unix: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FriendRemovePayload {
    pub user_id: UserId,
    pub friend_user_id: UserId,
    pub removed_at_unix: UnixTimestamp,
}

/// Decoded friend event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FriendGatewayEvent {
    FriendRequestCreate(FriendRequestCreatePayload),
    FriendRequestUpdate(FriendRequestUpdatePayload),
    FriendRequestDelete(FriendRequestDeletePayload),
    FriendRemove(FriendRemovePayload),
}

impl FriendGatewayEvent {
    pub fn kind(&self) -> FriendEventKind {
        match self {
            Self::FriendRequestCreate(_) => FriendEventKind::FriendRequestCreate,
            Self::FriendRequestUpdate(_) => FriendEventKind::FriendRequestUpdate,
            Self::FriendRequestDelete(_) => FriendEventKind::FriendRequestDelete,
            Self::FriendRemove(_) => FriendEventKind::FriendRemove,
        }
    }
}

// === Type guards ===

pub fn is_friend_request_create_event_type(event_type: &str) -> bool {
    FriendEventKind::parse(event_type) == Some(FriendEventKind::FriendRequestCreate)
}

pub fn is_friend_request_update_event_type(event_type: &str) -> bool {
    FriendEventKind::parse(event_type) == Some(FriendEventKind::FriendRequestUpdate)
}

pub fn is_friend_request_delete_event_type(event_type: &str) -> bool {
    FriendEventKind::parse(event_type) == Some(FriendEventKind::FriendRequestDelete)
}

pub fn is_friend_remove_event_type(event_type: &str) -> bool {
    FriendEventKind::parse(event_type) == Some(FriendEventKind::FriendRemove)
}

pub fn is_friend_gateway_event_type(event_type: &str) -> bool {
    FriendEventKind::parse(event_type).is_some()
}

// === Payload decoders ===

pub fn decode_friend_request_create(payload: &Value) -> Option<FriendRequestCreatePayload> {
    finish(
        FriendEventKind::FriendRequestCreate.as_str(),
        try_friend_request_create(payload),
    )
}

fn try_friend_request_create(payload: &Value) -> Result<FriendRequestCreatePayload, DecodeError> {
    let request: FriendRequestCreatePayload = from_object(payload)?;
    if request.sender.user_id == request.recipient.user_id {
        return Err(DecodeError::DuplicateEntry { field: "recipient" });
    }
    Ok(request)
}

pub fn decode_friend_request_update(payload: &Value) -> Option<FriendRequestUpdatePayload> {
    finish(
        FriendEventKind::FriendRequestUpdate.as_str(),
        from_object(payload),
    )
}

pub fn decode_friend_request_delete(payload: &Value) -> Option<FriendRequestDeletePayload> {
    finish(
        FriendEventKind::FriendRequestDelete.as_str(),
        from_object(payload),
    )
}

pub fn decode_friend_remove(payload: &Value) -> Option<FriendRemovePayload> {
    finish(
        FriendEventKind::FriendRemove.as_str(),
        try_friend_remove(payload),
    )
}

fn try_friend_remove(payload: &Value) -> Result<FriendRemovePayload, DecodeError> {
    let removal: FriendRemovePayload = from_object(payload)?;
    if removal.user_id == removal.friend_user_id {
        return Err(DecodeError::DuplicateEntry { field: "friend_user_id" });
    }
    Ok(removal)
}

pub fn decode_friend_gateway_event(event_type: &str, payload: &Value) -> Option<FriendGatewayEvent> {
    match FriendEventKind::parse(event_type)? {
        FriendEventKind::FriendRequestCreate => {
            decode_friend_request_create(payload).map(FriendGatewayEvent::FriendRequestCreate)
        }
        FriendEventKind::FriendRequestUpdate => {
            decode_friend_request_update(payload).map(FriendGatewayEvent::FriendRequestUpdate)
        }
        FriendEventKind::FriendRequestDelete => {
            decode_friend_request_delete(payload).map(FriendGatewayEvent::FriendRequestDelete)
        }
        FriendEventKind::FriendRemove => {
            decode_friend_remove(payload).map(FriendGatewayEvent::FriendRemove)
        }
    }
}
