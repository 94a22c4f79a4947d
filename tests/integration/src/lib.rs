//! Integration test utilities for the gateway client

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
