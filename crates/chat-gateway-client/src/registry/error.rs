//! Registry construction errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two domains, or one domain twice, claim the same wire tag
    #[error("gateway event type `{event_type}` is claimed by both `{first}` and `{second}`")]
    DuplicateEventType {
        event_type: &'static str,
        first: &'static str,
        second: &'static str,
    },
}
