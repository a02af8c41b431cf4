//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benches can write `blockfall::core::GameState`
//! instead of depending on every crate by hand. Configuration loading lives
//! here because only the binary needs it.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
