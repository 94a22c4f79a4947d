//! Test helpers
//!
//! Handler bags that record which event type reached a callback.

use chat_core::ChannelOverrideSchema;
use chat_gateway_client::{
    ChannelOverrideHandlers, FriendHandlers, GatewayFrame, GatewayHandlers, MessageHandlers,
    PresenceHandlers, ProfileHandlers, VoiceHandlers, WorkspaceHandlers,
};
use serde_json::Value;
use std::cell::RefCell;

/// Event types in the order their handlers ran
pub type EventLog = RefCell<Vec<&'static str>>;

macro_rules! record {
    ($log:ident, $event_type:literal) => {
        move |_| $log.borrow_mut().push($event_type)
    };
}

/// Handlers for every event type, each pushing its own type onto `log`
///
/// Both targeted override callbacks record the legacy event type, since
/// they share one wire tag.
pub fn recording_handlers(log: &EventLog, schema: Option<ChannelOverrideSchema>) -> GatewayHandlers<'_> {
    let channel_override = match schema {
        None => ChannelOverrideHandlers::Unsubscribed,
        Some(ChannelOverrideSchema::Legacy) => {
            ChannelOverrideHandlers::legacy(record!(log, "workspace_channel_override_update"))
        }
        Some(ChannelOverrideSchema::Targeted) => ChannelOverrideHandlers::targeted(
            record!(log, "workspace_channel_override_update"),
            record!(log, "workspace_channel_override_update"),
        ),
    };

    GatewayHandlers::new()
        .message(
            MessageHandlers::new()
                .on_message_create(record!(log, "message_create"))
                .on_message_update(record!(log, "message_update"))
                .on_message_delete(record!(log, "message_delete"))
                .on_message_reaction(record!(log, "message_reaction")),
        )
        .workspace(
            WorkspaceHandlers::new()
                .on_channel_create(record!(log, "channel_create"))
                .on_workspace_update(record!(log, "workspace_update"))
                .on_workspace_ip_ban_sync(record!(log, "workspace_ip_ban_sync"))
                .on_workspace_member_add(record!(log, "workspace_member_add"))
                .on_workspace_member_update(record!(log, "workspace_member_update"))
                .on_workspace_member_remove(record!(log, "workspace_member_remove"))
                .on_workspace_member_ban(record!(log, "workspace_member_ban"))
                .on_workspace_role_create(record!(log, "workspace_role_create"))
                .on_workspace_role_update(record!(log, "workspace_role_update"))
                .on_workspace_role_delete(record!(log, "workspace_role_delete"))
                .on_workspace_role_reorder(record!(log, "workspace_role_reorder"))
                .on_workspace_role_assignment_add(record!(log, "workspace_role_assignment_add"))
                .on_workspace_role_assignment_remove(record!(log, "workspace_role_assignment_remove"))
                .channel_override(channel_override),
        )
        .profile(
            ProfileHandlers::new()
                .on_profile_update(record!(log, "profile_update"))
                .on_profile_avatar_update(record!(log, "profile_avatar_update"))
                .on_profile_banner_update(record!(log, "profile_banner_update")),
        )
        .friend(
            FriendHandlers::new()
                .on_friend_request_create(record!(log, "friend_request_create"))
                .on_friend_request_update(record!(log, "friend_request_update"))
                .on_friend_request_delete(record!(log, "friend_request_delete"))
                .on_friend_remove(record!(log, "friend_remove")),
        )
        .voice(
            VoiceHandlers::new()
                .on_voice_participant_sync(record!(log, "voice_participant_sync"))
                .on_voice_participant_join(record!(log, "voice_participant_join"))
                .on_voice_participant_leave(record!(log, "voice_participant_leave"))
                .on_voice_participant_update(record!(log, "voice_participant_update"))
                .on_voice_stream_publish(record!(log, "voice_stream_publish"))
                .on_voice_stream_unpublish(record!(log, "voice_stream_unpublish")),
        )
        .presence(
            PresenceHandlers::new()
                .on_presence_sync(record!(log, "presence_sync"))
                .on_presence_update(record!(log, "presence_update")),
        )
}

/// Parse a frame fixture, panicking on malformed test data
pub fn parse_frame(value: Value) -> GatewayFrame {
    GatewayFrame::from_value(value).expect("fixture frame should parse")
}
