//! End-to-end dispatch tests
//!
//! Frames go through envelope parsing, the process-wide registry, the domain
//! dispatcher and the payload decoders before reaching a recording handler.

use chat_common::GatewayClientConfig;
use chat_core::ChannelOverrideSchema;
use chat_gateway_client::events::{
    decode_friend_gateway_event, decode_message_gateway_event, decode_presence_gateway_event,
    decode_profile_gateway_event, decode_voice_participant_gateway_event,
    decode_voice_stream_gateway_event, decode_workspace_channel_override_gateway_event,
    decode_workspace_gateway_event, decode_workspace_member_gateway_event,
    decode_workspace_role_gateway_event,
};
use chat_gateway_client::registry::DomainRoute;
use chat_gateway_client::{
    dispatch_friend_gateway_event, dispatch_gateway_domain_event, dispatch_gateway_frame,
    gateway_dispatch_registry, known_gateway_event_types, ChannelOverrideHandlers, GatewayDomain,
    GatewayFrame, GatewayHandlers, WorkspaceHandlers,
};
use integration_tests::{
    frame, parse_frame, permission_override_payload, recording_handlers, unique_id,
    valid_frame, valid_payload, EventLog, NOW,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::cell::RefCell;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

fn encode<T: Serialize>(event: T) -> Value {
    serde_json::to_value(event).expect("decoded events serialize")
}

/// Decode with whichever family owns `event_type`, as `{type, payload}` JSON
fn decode_to_json(event_type: &str, payload: &Value) -> Option<Value> {
    decode_message_gateway_event(event_type, payload)
        .map(encode)
        .or_else(|| decode_workspace_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_workspace_role_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_workspace_member_gateway_event(event_type, payload).map(encode))
        .or_else(|| {
            decode_workspace_channel_override_gateway_event(
                ChannelOverrideSchema::Legacy,
                event_type,
                payload,
            )
            .map(encode)
        })
        .or_else(|| decode_profile_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_friend_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_voice_participant_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_voice_stream_gateway_event(event_type, payload).map(encode))
        .or_else(|| decode_presence_gateway_event(event_type, payload).map(encode))
}

fn snake_to_camel(key: &str) -> String {
    let mut parts = key.split('_');
    let mut camel = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// Rename every object key from snake_case to camelCase, leaving values alone
fn camel_case_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, inner)| (snake_to_camel(key), camel_case_keys(inner)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(camel_case_keys).collect()),
        other => other.clone(),
    }
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_every_known_type_reaches_its_own_handler() {
    init_tracing();
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, Some(ChannelOverrideSchema::Legacy));

    for event_type in known_gateway_event_types() {
        let value = valid_frame(event_type)
            .unwrap_or_else(|| panic!("no fixture for {event_type}"));
        let frame = parse_frame(value);
        assert!(dispatch_gateway_frame(&frame, &mut handlers), "{event_type} not owned");
    }
    drop(handlers);

    assert_eq!(log.into_inner(), known_gateway_event_types());
}

#[test]
fn test_every_known_type_decodes_to_its_camel_case_payload() {
    init_tracing();
    for event_type in known_gateway_event_types() {
        let mut input = valid_frame(event_type)
            .unwrap_or_else(|| panic!("no fixture for {event_type}"));
        let encoded = decode_to_json(event_type, &input)
            .unwrap_or_else(|| panic!("{event_type} fixture did not decode"));

        if let Value::Object(map) = &mut input {
            map.remove("type");
        }
        assert_eq!(encoded["type"], *event_type);
        assert_eq!(encoded["payload"], camel_case_keys(&input), "{event_type}");
    }
}

#[test]
fn test_camel_case_keys() {
    assert_eq!(snake_to_camel("updated_at_unix"), "updatedAtUnix");
    assert_eq!(snake_to_camel("role"), "role");
    assert_eq!(
        camel_case_keys(&json!({"user_ids": ["a_b"], "updated_fields": {"is_muted": true}})),
        json!({"userIds": ["a_b"], "updatedFields": {"isMuted": true}})
    );
}

#[test]
fn test_fixtures_cover_exactly_the_known_types() {
    assert!(valid_payload("message_create").is_some());
    assert!(valid_payload("guild_create").is_none());
    assert!(valid_payload("").is_none());
    assert_eq!(known_gateway_event_types().len(), 33);
}

#[test]
fn test_unknown_type_is_not_owned() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, Some(ChannelOverrideSchema::Targeted));

    for event_type in ["", "MESSAGE_CREATE", "message_create ", "guild_create", "typing_start"] {
        let payload = json!({"guild_id": unique_id("G")});
        assert!(!dispatch_gateway_domain_event(event_type, &payload, &mut handlers));
    }
    drop(handlers);

    assert!(log.into_inner().is_empty());
}

#[test]
fn test_registry_domains_own_their_advertised_types() {
    let registry = gateway_dispatch_registry();
    for domain in GatewayDomain::ALL {
        for event_type in domain.event_types() {
            assert_eq!(registry.domain_of(event_type), Some(*domain));
        }
    }
    assert_eq!(registry.domain_of("voice_stream_publish"), Some(GatewayDomain::Voice));
    assert_eq!(
        registry.domain_of("workspace_channel_override_update"),
        Some(GatewayDomain::Workspace)
    );
    assert_eq!(registry.domain_of("friend_online"), None);
}

#[test]
fn test_frame_from_json_text() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, None);

    let text = format!(
        r#"{{"type":"presence_update","guild_id":"G1","user_id":"U1","status":"offline","seq":{NOW}}}"#
    );
    let frame = GatewayFrame::from_json(&text).unwrap();
    assert!(dispatch_gateway_frame(&frame, &mut handlers));
    drop(handlers);

    assert_eq!(log.into_inner(), ["presence_update"]);
}

// ============================================================================
// Malformed payloads
// ============================================================================

#[test]
fn test_malformed_payload_is_owned_but_dropped() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, Some(ChannelOverrideSchema::Legacy));

    let cases = [
        frame("friend_request_update", json!({"request_id": "FR1", "state": "pending", "updated_at_unix": NOW})),
        frame("message_update", json!({
            "guild_id": "G1", "channel_id": "C1", "message_id": "M1",
            "updated_fields": {}, "updated_at_unix": NOW
        })),
        frame("profile_avatar_update", json!({"user_id": "U1", "avatar_version": -1, "updated_at_unix": NOW})),
        frame("presence_update", json!({"guild_id": "G1", "user_id": "U 1", "status": "online"})),
        frame("workspace_role_reorder", json!({"guild_id": "G1", "role_ids": [], "updated_at_unix": NOW})),
    ];
    for value in cases {
        let frame = parse_frame(value);
        assert!(dispatch_gateway_frame(&frame, &mut handlers), "{frame} not owned");
    }

    for payload in [json!(null), json!([1, 2]), json!("presence_update"), json!(7)] {
        assert!(dispatch_gateway_domain_event("presence_update", &payload, &mut handlers));
    }
    drop(handlers);

    assert!(log.into_inner().is_empty());
}

#[test]
fn test_domain_dispatcher_only_owns_its_family() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, None);

    let invalid = json!({"request_id": "FR1", "state": 3});
    assert!(dispatch_friend_gateway_event("friend_request_update", &invalid, &mut handlers.friend));

    let message = valid_payload("message_create").unwrap();
    assert!(!dispatch_friend_gateway_event("message_create", &message, &mut handlers.friend));
    drop(handlers);

    assert!(log.into_inner().is_empty());
}

// ============================================================================
// Channel override schema
// ============================================================================

#[test]
fn test_override_dropped_without_schema() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, None);

    let frame = parse_frame(valid_frame("workspace_channel_override_update").unwrap());
    assert!(dispatch_gateway_frame(&frame, &mut handlers));
    drop(handlers);

    assert!(log.into_inner().is_empty());
}

#[test]
fn test_override_schema_from_config() {
    let config =
        GatewayClientConfig::from_vars([("CHAT_GATEWAY_CHANNEL_OVERRIDE_SCHEMA", "targeted")])
            .unwrap();

    let targets = RefCell::new(Vec::new());
    let channel_override = match config.channel_override_schema {
        Some(ChannelOverrideSchema::Targeted) => ChannelOverrideHandlers::targeted(
            |role_override| targets.borrow_mut().push(role_override.role.as_str().to_string()),
            |permission_override| {
                targets.borrow_mut().push(format!("{:?}", permission_override.target));
            },
        ),
        schema => ChannelOverrideHandlers::for_schema(schema),
    };
    assert_eq!(channel_override.schema(), Some(ChannelOverrideSchema::Targeted));

    let mut handlers =
        GatewayHandlers::new().workspace(WorkspaceHandlers::new().channel_override(channel_override));

    let role_frame = parse_frame(valid_frame("workspace_channel_override_update").unwrap());
    let user_frame = parse_frame(frame(
        "workspace_channel_override_update",
        permission_override_payload("user", "U42"),
    ));
    assert!(dispatch_gateway_frame(&role_frame, &mut handlers));
    assert!(dispatch_gateway_frame(&user_frame, &mut handlers));
    drop(handlers);

    assert_eq!(targets.into_inner(), ["member", "User(UserId(\"U42\"))"]);
}

#[test]
fn test_legacy_schema_rejects_permission_shape() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, Some(ChannelOverrideSchema::Legacy));

    let frame = parse_frame(frame(
        "workspace_channel_override_update",
        permission_override_payload("role", "R7"),
    ));
    assert!(dispatch_gateway_frame(&frame, &mut handlers));
    drop(handlers);

    assert!(log.into_inner().is_empty());
}

#[test]
fn test_targeted_schema_accepts_both_shapes() {
    let log = EventLog::default();
    let mut handlers = recording_handlers(&log, Some(ChannelOverrideSchema::Targeted));

    for value in [
        valid_frame("workspace_channel_override_update").unwrap(),
        frame("workspace_channel_override_update", permission_override_payload("role", "R7")),
    ] {
        assert!(dispatch_gateway_frame(&parse_frame(value), &mut handlers));
    }
    drop(handlers);

    assert_eq!(log.into_inner().len(), 2);
}
