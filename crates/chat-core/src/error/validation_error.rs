//! Validation errors - raised by value object constructors

use thiserror::Error;

/// Error raised when a raw wire value fails a value object's rules
///
/// Every variant names the field that failed so decode logs stay useful
/// without echoing the rejected value back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long: max {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} contains an invalid character")]
    InvalidCharacter { field: &'static str },

    #[error("{field} contains a control character")]
    ControlCharacter { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("{field} has an unrecognized value")]
    UnknownVariant { field: &'static str },
}

impl ValidationError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "EMPTY",
            Self::TooLong { .. } => "TOO_LONG",
            Self::InvalidCharacter { .. } => "INVALID_CHARACTER",
            Self::ControlCharacter { .. } => "CONTROL_CHARACTER",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::UnknownVariant { .. } => "UNKNOWN_VARIANT",
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidCharacter { field }
            | Self::ControlCharacter { field }
            | Self::OutOfRange { field }
            | Self::UnknownVariant { field } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::Empty { field: "username" }.code(), "EMPTY");
        assert_eq!(
            ValidationError::TooLong { field: "username", max: 64 }.code(),
            "TOO_LONG"
        );
        assert_eq!(
            ValidationError::UnknownVariant { field: "permission" }.code(),
            "UNKNOWN_VARIANT"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::TooLong { field: "role_name", max: 64 };
        assert_eq!(err.to_string(), "role_name is too long: max 64 characters");

        let err = ValidationError::OutOfRange { field: "timestamp" };
        assert_eq!(err.to_string(), "timestamp is out of range");
    }

    #[test]
    fn test_error_field() {
        assert_eq!(ValidationError::ControlCharacter { field: "emoji" }.field(), "emoji");
        assert_eq!(ValidationError::TooLong { field: "content", max: 4000 }.field(), "content");
    }
}
