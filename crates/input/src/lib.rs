//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Action`]s. Only the
//! initial press of a key produces an action: terminal auto-repeat and key
//! releases are filtered out before mapping.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit, KeyFilter};
