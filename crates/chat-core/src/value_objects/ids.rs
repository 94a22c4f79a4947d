//! Opaque identifiers
//!
//! IDs are server-issued strings. The client never interprets them, but it
//! does refuse anything outside `[A-Za-z0-9_-]{1,128}` so a hostile frame
//! cannot smuggle whitespace, separators or control bytes into keys the UI
//! later uses for lookups.

use crate::error::ValidationError;

/// Maximum identifier length in characters
pub const MAX_ID_LENGTH: usize = 128;

fn validate_identifier(field: &'static str, raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if raw.len() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_ID_LENGTH,
        });
    }
    if raw.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacter { field });
    }
    if !raw
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err(ValidationError::InvalidCharacter { field });
    }
    Ok(())
}

string_value_object!(
    /// Workspace (guild) identifier
    GuildId,
    |raw| validate_identifier("guild_id", raw)
);

string_value_object!(
    /// Channel identifier
    ChannelId,
    |raw| validate_identifier("channel_id", raw)
);

string_value_object!(
    /// Message identifier
    MessageId,
    |raw| validate_identifier("message_id", raw)
);

string_value_object!(
    /// User identifier
    UserId,
    |raw| validate_identifier("user_id", raw)
);

string_value_object!(
    /// Workspace role identifier
    RoleId,
    |raw| validate_identifier("role_id", raw)
);

string_value_object!(
    /// Friend request identifier
    FriendRequestId,
    |raw| validate_identifier("request_id", raw)
);
