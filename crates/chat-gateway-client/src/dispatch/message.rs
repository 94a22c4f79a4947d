//! Message domain dispatch

use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_message_gateway_event, is_message_gateway_event_type, EventKind, MessageCreatePayload,
    MessageDeletePayload, MessageEventKind, MessageGatewayEvent, MessageReactionPayload,
    MessageUpdatePayload,
};

/// Message handler bag
#[derive(Default)]
pub struct MessageHandlers<'a> {
    pub on_message_create: Handler<'a, MessageCreatePayload>,
    pub on_message_update: Handler<'a, MessageUpdatePayload>,
    pub on_message_delete: Handler<'a, MessageDeletePayload>,
    pub on_message_reaction: Handler<'a, MessageReactionPayload>,
}

impl<'a> MessageHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_message_create: MessageCreatePayload,
        on_message_update: MessageUpdatePayload,
        on_message_delete: MessageDeletePayload,
        on_message_reaction: MessageReactionPayload,
    }
}

impl fmt::Debug for MessageHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_message_create", self.on_message_create.is_some()),
                    ("on_message_update", self.on_message_update.is_some()),
                    ("on_message_delete", self.on_message_delete.is_some()),
                    ("on_message_reaction", self.on_message_reaction.is_some()),
                ]),
            )
            .finish()
    }
}

impl MessageGatewayEvent {
    /// Route the event to its slot in `handlers`
    pub fn dispatch(self, handlers: &mut MessageHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::MessageCreate(payload) => {
                invoke(event_type, &mut handlers.on_message_create, payload);
            }
            Self::MessageUpdate(payload) => {
                invoke(event_type, &mut handlers.on_message_update, payload);
            }
            Self::MessageDelete(payload) => {
                invoke(event_type, &mut handlers.on_message_delete, payload);
            }
            Self::MessageReaction(payload) => {
                invoke(event_type, &mut handlers.on_message_reaction, payload);
            }
        }
    }
}

/// Every wire tag owned by the message domain
pub fn message_event_types() -> Vec<&'static str> {
    MessageEventKind::event_types()
}

/// Decode and dispatch a message event
///
/// Returns `false` only when `event_type` is not a message tag. A message
/// tag with a malformed payload still returns `true` without calling any
/// handler.
pub fn dispatch_message_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut MessageHandlers<'_>,
) -> bool {
    if !is_message_gateway_event_type(event_type) {
        return false;
    }
    if let Some(event) = decode_message_gateway_event(event_type, payload) {
        event.dispatch(handlers);
    }
    true
}
