//! Voice domain dispatch: participants and streams

use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_voice_participant_gateway_event, decode_voice_stream_gateway_event,
    is_voice_participant_gateway_event_type, is_voice_stream_gateway_event_type, EventKind,
    VoiceParticipantEventKind, VoiceParticipantGatewayEvent, VoiceParticipantJoinPayload,
    VoiceParticipantLeavePayload, VoiceParticipantSyncPayload, VoiceParticipantUpdatePayload,
    VoiceStreamEventKind, VoiceStreamGatewayEvent, VoiceStreamPublishPayload,
    VoiceStreamUnpublishPayload,
};

#[derive(Default)]
pub struct VoiceHandlers<'a> {
    pub on_voice_participant_sync: Handler<'a, VoiceParticipantSyncPayload>,
    pub on_voice_participant_join: Handler<'a, VoiceParticipantJoinPayload>,
    pub on_voice_participant_leave: Handler<'a, VoiceParticipantLeavePayload>,
    pub on_voice_participant_update: Handler<'a, VoiceParticipantUpdatePayload>,
    pub on_voice_stream_publish: Handler<'a, VoiceStreamPublishPayload>,
    pub on_voice_stream_unpublish: Handler<'a, VoiceStreamUnpublishPayload>,
}

impl<'a> VoiceHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_voice_participant_sync: VoiceParticipantSyncPayload,
        on_voice_participant_join: VoiceParticipantJoinPayload,
        on_voice_participant_leave: VoiceParticipantLeavePayload,
        on_voice_participant_update: VoiceParticipantUpdatePayload,
        on_voice_stream_publish: VoiceStreamPublishPayload,
        on_voice_stream_unpublish: VoiceStreamUnpublishPayload,
    }
}

impl fmt::Debug for VoiceHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_voice_participant_sync", self.on_voice_participant_sync.is_some()),
                    ("on_voice_participant_join", self.on_voice_participant_join.is_some()),
                    ("on_voice_participant_leave", self.on_voice_participant_leave.is_some()),
                    ("on_voice_participant_update", self.on_voice_participant_update.is_some()),
                    ("on_voice_stream_publish", self.on_voice_stream_publish.is_some()),
                    ("on_voice_stream_unpublish", self.on_voice_stream_unpublish.is_some()),
                ]),
            )
            .finish()
    }
}

impl VoiceParticipantGatewayEvent {
    pub fn dispatch(self, handlers: &mut VoiceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::VoiceParticipantSync(payload) => {
                invoke(event_type, &mut handlers.on_voice_participant_sync, payload);
            }
            Self::VoiceParticipantJoin(payload) => {
                invoke(event_type, &mut handlers.on_voice_participant_join, payload);
            }
            Self::VoiceParticipantLeave(payload) => {
                invoke(event_type, &mut handlers.on_voice_participant_leave, payload);
            }
            Self::VoiceParticipantUpdate(payload) => {
                invoke(event_type, &mut handlers.on_voice_participant_update, payload);
            }
        }
    }
}

impl VoiceStreamGatewayEvent {
    pub fn dispatch(self, handlers: &mut VoiceHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::VoiceStreamPublish(payload) => {
                invoke(event_type, &mut handlers.on_voice_stream_publish, payload);
            }
            Self::VoiceStreamUnpublish(payload) => {
                invoke(event_type, &mut handlers.on_voice_stream_unpublish, payload);
            }
        }
    }
}

pub fn is_voice_domain_event_type(event_type: &str) -> bool {
    is_voice_participant_gateway_event_type(event_type)
        || is_voice_stream_gateway_event_type(event_type)
}

pub fn voice_event_types() -> Vec<&'static str> {
    let mut types = VoiceParticipantEventKind::event_types();
    types.extend(VoiceStreamEventKind::event_types());
    types
}

pub fn dispatch_voice_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut VoiceHandlers<'_>,
) -> bool {
    if is_voice_participant_gateway_event_type(event_type) {
        if let Some(event) = decode_voice_participant_gateway_event(event_type, payload) {
            event.dispatch(handlers);
        }
        true
    } else if is_voice_stream_gateway_event_type(event_type) {
        if let Some(event) = decode_voice_stream_gateway_event(event_type, payload) {
            event.dispatch(handlers);
        }
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::StreamKind;
    use serde_json::json;

    #[test]
    fn test_stream_events_reach_handlers() {
        let mut published = Vec::new();
        let mut unpublished = 0;
        {
            let mut handlers = VoiceHandlers::new()
                .on_voice_stream_publish(|p| published.push(p.stream_kind))
                .on_voice_stream_unpublish(|_| unpublished += 1);
            assert!(dispatch_voice_gateway_event(
                "voice_stream_publish",
                &json!({
                    "guild_id": "G",
                    "channel_id": "V",
                    "user_id": "U1",
                    "stream_kind": "camera",
                    "published_at_unix": 1710000000
                }),
                &mut handlers
            ));
        }
        assert_eq!(published, [StreamKind::Camera]);
        assert_eq!(unpublished, 0);
    }

    #[test]
    fn test_participant_leave_reaches_handler() {
        let mut left = Vec::new();
        {
            let mut handlers =
                VoiceHandlers::new().on_voice_participant_leave(|p| left.push(p.user_id));
            assert!(dispatch_voice_gateway_event(
                "voice_participant_leave",
                &json!({"guild_id": "G", "channel_id": "V", "user_id": "U9", "left_at_unix": 5}),
                &mut handlers
            ));
        }
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].as_str(), "U9");
    }

    #[test]
    fn test_event_types_and_guard() {
        let types = voice_event_types();
        assert_eq!(types.len(), 6);
        assert!(types.iter().all(|t| is_voice_domain_event_type(t)));
        let mut handlers = VoiceHandlers::new();
        assert!(!dispatch_voice_gateway_event("presence_sync", &json!({}), &mut handlers));
        assert!(dispatch_voice_gateway_event("voice_participant_sync", &json!({}), &mut handlers));
    }
}
