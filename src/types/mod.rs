//! Common types used across the Kuna client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
