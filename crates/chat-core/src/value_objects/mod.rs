//! Value objects - immutable, validated types for every wire field atom
//!
//! Each type has a single trusted constructor (`parse` / `new`) returning
//! `Result<_, ValidationError>`. Serde deserialization goes through the same
//! constructor, so a payload decoder can never hold an unvalidated value.

/// Declares a validated string newtype.
///
/// The validator is an expression callable as `fn(&str) -> Result<(), ValidationError>`.
macro_rules! string_value_object {
    ($(#[$meta:meta])* $name:ident, $validate:expr) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct from a raw wire string
            pub fn parse(raw: &str) -> Result<Self, $crate::error::ValidationError> {
                ($validate)(raw)?;
                Ok(Self(raw.to_owned()))
            }

            /// Borrow the validated string
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Take the validated string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                ($validate)(raw.as_str())?;
                Ok(Self(raw))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

mod ids;
mod kinds;
mod numeric;
mod permissions;
mod text;

pub use ids::{ChannelId, FriendRequestId, GuildId, MessageId, RoleId, UserId};
pub use kinds::{ChannelKind, ChannelOverrideSchema, PresenceStatus, WorkspaceRole};
pub use numeric::{AssetVersion, UnixTimestamp, MAX_SAFE_INTEGER};
pub use permissions::{Permission, Permissions};
pub use text::{AboutMarkdown, ChannelName, Emoji, MessageContent, RoleName, Username, WorkspaceName};
