//! Presence domain dispatch

use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_presence_gateway_event, is_presence_gateway_event_type, EventKind, PresenceEventKind,
    PresenceGatewayEvent, PresenceSyncPayload, PresenceUpdatePayload,
};

#[derive(Default)]
pub struct PresenceHandlers<'a> {
    pub on_presence_sync: Handler<'a, PresenceSyncPayload>,
    pub on_presence_update: Handler<'a, PresenceUpdatePayload>,
}

impl<'a> PresenceHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_presence_sync: PresenceSyncPayload,
        on_presence_update: PresenceUpdatePayload,
    }
}

impl fmt::Debug for PresenceHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_presence_sync", self.on_presence_sync.is_some()),
                    ("on_presence_update", self.on_presence_update.is_some()),
                ]),
            )
            .finish()
    }
}

impl PresenceGatewayEvent {
    pub fn dispatch(self, handlers: &mut PresenceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::PresenceSync(payload) => invoke(event_type, &mut handlers.on_presence_sync, payload),
            Self::PresenceUpdate(payload) => {
                invoke(event_type, &mut handlers.on_presence_update, payload);
            }
        }
    }
}

pub fn presence_event_types() -> Vec<&'static str> {
    PresenceEventKind::event_types()
}

pub fn dispatch_presence_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut PresenceHandlers<'_>,
) -> bool {
    if !is_presence_gateway_event_type(event_type) {
        return false;
    }
    if let Some(event) = decode_presence_gateway_event(event_type, payload) {
        event.dispatch(handlers);
    }
    true
}
