//! Test fixtures and data generators
//!
//! Wire frames for every known gateway event type, in the snake_case shape
//! the server pushes.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique identifier with a readable prefix, e.g. `U17`
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}{}", unique_suffix())
}

pub const NOW: u64 = 1_710_000_000;

/// Add the `type` sibling to a payload object
pub fn frame(event_type: &str, mut payload: Value) -> Value {
    if let Value::Object(map) = &mut payload {
        map.insert("type".to_string(), Value::String(event_type.to_string()));
    }
    payload
}

fn participant(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "joined_at_unix": NOW,
        "is_muted": false,
        "is_deafened": false,
        "is_speaking": false,
        "is_video_enabled": true,
        "is_screen_sharing": false
    })
}

/// A well-formed payload for a known event type
///
/// `workspace_channel_override_update` uses the role shape, which both
/// schema versions accept.
pub fn valid_payload(event_type: &str) -> Option<Value> {
    let guild = unique_id("G");
    let channel = unique_id("C");
    let user = unique_id("U");
    let payload = match event_type {
        "message_create" => json!({
            "guild_id": guild, "channel_id": channel, "message_id": unique_id("M"),
            "author_id": user, "content": "hello", "created_at_unix": NOW
        }),
        "message_update" => json!({
            "guild_id": guild, "channel_id": channel, "message_id": unique_id("M"),
            "updated_fields": {"content": "edited"}, "updated_at_unix": NOW
        }),
        "message_delete" => json!({
            "guild_id": guild, "channel_id": channel, "message_id": unique_id("M"),
            "deleted_at_unix": NOW
        }),
        "message_reaction" => json!({
            "guild_id": guild, "channel_id": channel, "message_id": unique_id("M"),
            "user_id": user, "emoji": "👍", "action": "remove", "updated_at_unix": NOW
        }),
        "channel_create" => json!({
            "guild_id": guild,
            "channel": {"channel_id": channel, "name": "voice-lounge", "kind": "voice", "position": 4},
            "created_at_unix": NOW
        }),
        "workspace_update" => json!({
            "guild_id": guild, "updated_fields": {"name": "Renamed"}, "updated_at_unix": NOW
        }),
        "workspace_ip_ban_sync" => json!({
            "guild_id": guild, "summary": {"action": "remove", "changed_count": 1},
            "updated_at_unix": NOW
        }),
        "workspace_member_add" => json!({
            "guild_id": guild, "user_id": user, "role": "member", "joined_at_unix": NOW
        }),
        "workspace_member_update" => json!({
            "guild_id": guild, "user_id": user, "updated_fields": {"role": "moderator"},
            "updated_at_unix": NOW
        }),
        "workspace_member_remove" => json!({
            "guild_id": guild, "user_id": user, "reason": "leave", "removed_at_unix": NOW
        }),
        "workspace_member_ban" => json!({
            "guild_id": guild, "user_id": user, "banned_at_unix": NOW
        }),
        "workspace_role_create" => json!({
            "guild_id": guild,
            "role": {
                "role_id": unique_id("R"), "name": "Helpers", "position": 1,
                "is_system": false, "permissions": ["create_message", "add_reactions"]
            },
            "created_at_unix": NOW
        }),
        "workspace_role_update" => json!({
            "guild_id": guild, "role_id": unique_id("R"),
            "updated_fields": {"name": "Helpers+"}, "updated_at_unix": NOW
        }),
        "workspace_role_delete" => json!({
            "guild_id": guild, "role_id": unique_id("R"), "deleted_at_unix": NOW
        }),
        "workspace_role_reorder" => json!({
            "guild_id": guild, "role_ids": [unique_id("R"), unique_id("R")], "updated_at_unix": NOW
        }),
        "workspace_role_assignment_add" => json!({
            "guild_id": guild, "user_id": user, "role_id": unique_id("R"), "assigned_at_unix": NOW
        }),
        "workspace_role_assignment_remove" => json!({
            "guild_id": guild, "user_id": user, "role_id": unique_id("R"), "removed_at_unix": NOW
        }),
        "workspace_channel_override_update" => json!({
            "guild_id": guild, "channel_id": channel, "role": "member",
            "updated_fields": {"allow": [], "deny": ["create_message"]}, "updated_at_unix": NOW
        }),
        "profile_update" => json!({
            "user_id": user, "updated_fields": {"username": "renamed"}, "updated_at_unix": NOW
        }),
        "profile_avatar_update" => json!({
            "user_id": user, "avatar_version": 2, "updated_at_unix": NOW
        }),
        "profile_banner_update" => json!({
            "user_id": user, "banner_version": 7, "updated_at_unix": NOW
        }),
        "friend_request_create" => json!({
            "request_id": unique_id("FR"),
            "sender": {"user_id": user, "username": "sender"},
            "recipient": {"user_id": unique_id("U"), "username": "recipient"},
            "created_at_unix": NOW
        }),
        "friend_request_update" => json!({
            "request_id": unique_id("FR"), "state": "accepted", "updated_at_unix": NOW
        }),
        "friend_request_delete" => json!({
            "request_id": unique_id("FR"), "deleted_at_unix": NOW
        }),
        "friend_remove" => json!({
            "user_id": user, "friend_user_id": unique_id("U"), "removed_at_unix": NOW
        }),
        "voice_participant_sync" => json!({
            "guild_id": guild, "channel_id": channel,
            "participants": [participant(&user), participant(&unique_id("U"))],
            "synced_at_unix": NOW
        }),
        "voice_participant_join" => json!({
            "guild_id": guild, "channel_id": channel, "participant": participant(&user)
        }),
        "voice_participant_leave" => json!({
            "guild_id": guild, "channel_id": channel, "user_id": user, "left_at_unix": NOW
        }),
        "voice_participant_update" => json!({
            "guild_id": guild, "channel_id": channel, "user_id": user,
            "updated_fields": {"is_deafened": true}, "updated_at_unix": NOW
        }),
        "voice_stream_publish" => json!({
            "guild_id": guild, "channel_id": channel, "user_id": user,
            "stream_kind": "camera", "published_at_unix": NOW
        }),
        "voice_stream_unpublish" => json!({
            "guild_id": guild, "channel_id": channel, "user_id": user,
            "stream_kind": "camera", "unpublished_at_unix": NOW
        }),
        "presence_sync" => json!({"guild_id": guild, "user_ids": [user]}),
        "presence_update" => json!({"guild_id": guild, "user_id": user, "status": "online"}),
        _ => return None,
    };
    Some(payload)
}

/// A well-formed frame for a known event type
pub fn valid_frame(event_type: &str) -> Option<Value> {
    valid_payload(event_type).map(|payload| frame(event_type, payload))
}

/// Permission-shape channel override, only valid under the targeted schema
pub fn permission_override_payload(target_kind: &str, target_id: &str) -> Value {
    json!({
        "guild_id": unique_id("G"),
        "channel_id": unique_id("C"),
        "target_kind": target_kind,
        "target_id": target_id,
        "updated_fields": {"allow": ["view_channel"], "deny": []},
        "updated_at_unix": NOW
    })
}
