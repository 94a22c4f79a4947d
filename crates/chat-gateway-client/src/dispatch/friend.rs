//! Friend domain dispatch

use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_friend_gateway_event, is_friend_gateway_event_type, EventKind, FriendEventKind,
    FriendGatewayEvent, FriendRemovePayload, FriendRequestCreatePayload,
    FriendRequestDeletePayload, FriendRequestUpdatePayload,
};

#[derive(Default)]
pub struct FriendHandlers<'a> {
    pub on_friend_request_create: Handler<'a, FriendRequestCreatePayload>,
    pub on_friend_request_update: Handler<'a, FriendRequestUpdatePayload>,
    pub on_friend_request_delete: Handler<'a, FriendRequestDeletePayload>,
    pub on_friend_remove: Handler<'a, FriendRemovePayload>,
}

impl<'a> FriendHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_friend_request_create: FriendRequestCreatePayload,
        on_friend_request_update: FriendRequestUpdatePayload,
        on_friend_request_delete: FriendRequestDeletePayload,
        on_friend_remove: FriendRemovePayload,
    }
}

impl fmt::Debug for FriendHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FriendHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_friend_request_create", self.on_friend_request_create.is_some()),
                    ("on_friend_request_update", self.on_friend_request_update.is_some()),
                    ("on_friend_request_delete", self.on_friend_request_delete.is_some()),
                    ("on_friend_remove", self.on_friend_remove.is_some()),
                ]),
            )
            .finish()
    }
}

impl FriendGatewayEvent {
    pub fn dispatch(self, handlers: &mut FriendHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::FriendRequestCreate(payload) => {
                invoke(event_type, &mut handlers.on_friend_request_create, payload);
            }
            Self::FriendRequestUpdate(payload) => {
                invoke(event_type, &mut handlers.on_friend_request_update, payload);
            }
            Self::FriendRequestDelete(payload) => {
                invoke(event_type, &mut handlers.on_friend_request_delete, payload);
            }
            Self::FriendRemove(payload) => {
                invoke(event_type, &mut handlers.on_friend_remove, payload);
            }
        }
    }
}

pub fn friend_event_types() -> Vec<&'static str> {
    FriendEventKind::event_types()
}

pub fn dispatch_friend_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut FriendHandlers<'_>,
) -> bool {
    if !is_friend_gateway_event_type(event_type) {
        return false;
    }
    if let Some(event) = decode_friend_gateway_event(event_type, payload) {
        event.dispatch(handlers);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_update_is_owned_without_call() {
        let mut calls = 0;
        let owned = {
            let mut handlers = FriendHandlers::new().on_friend_request_update(|_| calls += 1);
            dispatch_friend_gateway_event(
                "friend_request_update",
                &json!({"request_id": "FR1", "state": "maybe", "updated_at_unix": 1}),
                &mut handlers,
            )
        };
        assert!(owned);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_foreign_type_is_not_owned() {
        let mut handlers = FriendHandlers::new();
        assert!(!dispatch_friend_gateway_event("message_create", &json!({}), &mut handlers));
    }

    #[test]
    fn test_valid_update_calls_handler() {
        let mut states = Vec::new();
        {
            let mut handlers = FriendHandlers::new().on_friend_request_update(|p| states.push(p.state));
            dispatch_friend_gateway_event(
                "friend_request_update",
                &json!({"request_id": "FR1", "state": "declined", "updated_at_unix": 1}),
                &mut handlers,
            );
        }
        assert_eq!(states, [crate::events::FriendRequestState::Declined]);
    }
}
