//! Game driver - turns a stream of actions into a stream of rendered states.
//!
//! Gravity ticks (one source per level) and key presses are merged into a
//! single `tokio::sync::mpsc` channel. One loop drains that channel and folds
//! each action through [`blockfall_core::GameState::apply_action`], handing
//! every resulting state to a [`StateSink`]. Actions are applied strictly in
//! arrival order and never overlap.
//!
//! Tick sources run on independent timers, so how ticks interleave with each
//! other and with input depends on wall-clock firing order. The level filter
//! inside the reducer discards ticks from sources that do not match the
//! current level.

pub mod driver;
pub mod ticks;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{fold, Driver, Event, StateSink};
pub use ticks::{spawn_tick_sources, TickSchedule};
