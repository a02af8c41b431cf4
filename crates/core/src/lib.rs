//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules. It has **no dependencies** on UI,
//! timers or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed always produces the same game
//! - **Testable**: every rule is a pure function over values
//! - **Portable**: runs anywhere a driver can feed it actions
//!
//! # Module Structure
//!
//! - [`pieces`]: tetromino catalog and table-driven rotation
//! - [`rng`]: seeded linear congruential piece sequence
//! - [`board`]: 10x20 occupancy grid, merging and row removal
//! - [`collision`]: placement predicates used by the actions
//! - [`scoring`]: row points and the level step function
//! - [`game_state`]: the state snapshot and the action reducer
//!
//! # Game Rules
//!
//! - Pieces fall one row per gravity tick or `MoveDown`
//! - A piece that cannot descend is burned into the board; full rows are
//!   removed and empty rows are inserted at the top
//! - Rotation is rejected outright when the rotated piece does not fit (no
//!   wall kicks)
//! - Hold is available once per piece
//! - The game ends when a piece still above the grid overlaps the stack
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Action;
//!
//! let game = GameState::new(12345);
//!
//! // Rejected actions return None, accepted ones a new snapshot
//! let moved = game.apply_action(Action::MoveRight).expect("room to move");
//! assert_ne!(moved.active(), game.active());
//!
//! // `reduce` folds rejections into "state unchanged"
//! let same = game.reduce(Action::Reset);
//! assert_eq!(same, game);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{catalog, get_shape, Piece};
pub use rng::RandomSequence;
pub use scoring::{level_for_score, score_for_rows};
