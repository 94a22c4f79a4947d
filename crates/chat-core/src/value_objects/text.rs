//! Bounded free-text values (names, message content, emoji)

use validator::ValidateLength;

use crate::error::ValidationError;

/// Character rules for one text field
struct TextRules {
    field: &'static str,
    max: usize,
    /// Empty (or whitespace-only) input is accepted
    allow_blank: bool,
    /// `\n` and `\t` are accepted despite being control characters
    multiline: bool,
    /// Any whitespace character is rejected
    forbid_whitespace: bool,
}

impl TextRules {
    const fn single_line(field: &'static str, max: usize) -> Self {
        Self {
            field,
            max,
            allow_blank: false,
            multiline: false,
            forbid_whitespace: false,
        }
    }
}

fn validate_text(raw: &str, rules: &TextRules) -> Result<(), ValidationError> {
    let field = rules.field;

    if !rules.allow_blank && raw.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    // Length is measured in Unicode scalar values, not bytes.
    if !raw.validate_length(None, Some(rules.max as u64), None) {
        return Err(ValidationError::TooLong {
            field,
            max: rules.max,
        });
    }
    for c in raw.chars() {
        if rules.forbid_whitespace && c.is_whitespace() {
            return Err(ValidationError::InvalidCharacter { field });
        }
        if c.is_control() && !(rules.multiline && (c == '\n' || c == '\t')) {
            return Err(ValidationError::ControlCharacter { field });
        }
    }
    Ok(())
}

const USERNAME: TextRules = TextRules::single_line("username", 64);
const ROLE_NAME: TextRules = TextRules::single_line("role_name", 64);
const CHANNEL_NAME: TextRules = TextRules::single_line("channel_name", 100);
const WORKSPACE_NAME: TextRules = TextRules::single_line("workspace_name", 100);
const MESSAGE_CONTENT: TextRules = TextRules {
    field: "content",
    max: 4000,
    allow_blank: false,
    multiline: true,
    forbid_whitespace: false,
};
const ABOUT_MARKDOWN: TextRules = TextRules {
    field: "about_markdown",
    max: 2048,
    allow_blank: true,
    multiline: true,
    forbid_whitespace: false,
};
const EMOJI: TextRules = TextRules {
    field: "emoji",
    max: 64,
    allow_blank: false,
    multiline: false,
    forbid_whitespace: true,
};

string_value_object!(
    /// Display username (1-64 characters)
    Username,
    |raw| validate_text(raw, &USERNAME)
);

string_value_object!(
    /// Workspace role name (1-64 characters)
    RoleName,
    |raw| validate_text(raw, &ROLE_NAME)
);

string_value_object!(
    /// Channel name (1-100 characters)
    ChannelName,
    |raw| validate_text(raw, &CHANNEL_NAME)
);

string_value_object!(
    /// Workspace display name (1-100 characters)
    WorkspaceName,
    |raw| validate_text(raw, &WORKSPACE_NAME)
);

string_value_object!(
    /// Message body (1-4000 characters, multi-line)
    MessageContent,
    |raw| validate_text(raw, &MESSAGE_CONTENT)
);

string_value_object!(
    /// Profile "about me" markdown (0-2048 characters, multi-line)
    AboutMarkdown,
    |raw| validate_text(raw, &ABOUT_MARKDOWN)
);

string_value_object!(
    /// Reaction emoji: a unicode emoji sequence or a custom emoji shortcode
    Emoji,
    |raw| validate_text(raw, &EMOJI)
);
