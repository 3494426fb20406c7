//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`]s. The session never
//! sees key identities, only commands.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
