//! Collision rules - pure predicates over a candidate piece placement
//!
//! The four primitive predicates each check one kind of violation. The
//! composite rules below them are what the game actions consult.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Any cell lands on an occupied board cell.
///
/// Negative rows are clamped to 0 for the lookup: a spawning piece still above
/// the grid is tested against the top row.
pub fn collides_board(board: &Board, piece: &Piece) -> bool {
    piece
        .cells()
        .iter()
        .any(|cell| board.is_occupied(cell.x, cell.y.max(0)))
}

/// Any cell lies outside columns `[0, width)`
pub fn collides_left_right(piece: &Piece) -> bool {
    piece
        .cells()
        .iter()
        .any(|cell| cell.x < 0 || cell.x >= BOARD_WIDTH as i8)
}

/// Any cell lies on or below row `height`
pub fn collides_bottom(piece: &Piece) -> bool {
    piece.cells().iter().any(|cell| cell.y >= BOARD_HEIGHT as i8)
}

/// Any cell lies above row 0
pub fn collides_top(piece: &Piece) -> bool {
    piece.cells().iter().any(|cell| cell.y < 0)
}

/// The piece is still at the top boundary and already overlaps the stack.
pub fn is_end_game(board: &Board, piece: &Piece) -> bool {
    collides_top(piece) && collides_board(board, piece)
}

/// A piece just placed in play (promoted from the preview or taken from hold)
/// already sits on the stack.
pub fn blocked_on_entry(board: &Board, piece: &Piece) -> bool {
    collides_board(board, piece)
}

/// A piece moved one row down would leave the grid or hit the stack.
pub fn cannot_descend(board: &Board, moved: &Piece) -> bool {
    collides_bottom(moved) || collides_board(board, moved)
}

/// A rotated piece violates any bound or overlaps the stack.
pub fn cannot_rotate(board: &Board, rotated: &Piece) -> bool {
    collides_board(board, rotated)
        || collides_bottom(rotated)
        || collides_left_right(rotated)
        || collides_top(rotated)
}

/// A sideways-shifted piece leaves the side walls or overlaps the stack.
pub fn cannot_slide(board: &Board, shifted: &Piece) -> bool {
    collides_board(board, shifted) || collides_left_right(shifted)
}
