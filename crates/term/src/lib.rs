//! Terminal rendering of game states.
//!
//! A small, game-oriented rendering layer: [`GameView`] paints a
//! [`blockfall_core::GameState`] into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal, redrawing only
//! the cells that changed. [`TermSink`] plugs the pair into the driver.
//!
//! The engine only exposes grid coordinates; turning them into terminal
//! columns (2 per board cell by default) happens here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, Viewport, MAX_CELL_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TermSink, TerminalRenderer};
