//! Wire protocol
//!
//! Frame envelope parsing and the strict JSON helpers every payload decoder
//! is built on.

mod frame;
mod wire;

pub use frame::{FrameError, GatewayFrame};
pub use wire::DecodeError;
pub(crate) use wire::{finish, from_object, require_delta, strict, UpdateFields};
