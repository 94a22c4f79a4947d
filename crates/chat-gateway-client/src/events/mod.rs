//! Gateway events
//!
//! One module per event family. Each family declares its tag allow-list, the
//! typed payloads, type guards, per-event payload decoders and a family
//! decoder over the closed event enum.

mod channel_override;
mod friend;
mod kind;
mod message;
mod presence;
mod profile;
mod voice_participant;
mod voice_stream;
mod workspace;
mod workspace_member;
mod workspace_role;

pub use kind::EventKind;

pub use channel_override::*;
pub use friend::*;
pub use message::*;
pub use presence::*;
pub use profile::*;
pub use voice_participant::*;
pub use voice_stream::*;
pub use workspace::*;
pub use workspace_member::*;
pub use workspace_role::*;
