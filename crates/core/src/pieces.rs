//! Pieces module - tetromino catalog and table-driven rotation
//!
//! Every kind has four precomputed layouts, one per rotation index, stored as
//! absolute board coordinates around the spawn box (left column
//! [`SPAWN_COLUMN`], rows 0..4). Rotation never does matrix math: it measures
//! how far the piece has travelled from the catalog layout of its current
//! rotation (anchored on the first cell) and applies that same translation to
//! the catalog layout of the next rotation.
//!
//! There are no wall kicks. Whether a rotated piece fits is decided by the
//! caller with [`crate::collision::cannot_rotate`].

use crate::types::{Cell, PieceKind, Rgb, Rotation, SPAWN_COLUMN};

/// Shape of a piece - 4 offsets inside the 4x4 spawn box
pub type PieceShape = [(i8, i8); 4];

/// Box-relative layout for a kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
    }
}

fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// Absolute catalog coordinates for a kind and rotation
pub fn catalog(kind: PieceKind, rotation: Rotation) -> [Cell; 4] {
    get_shape(kind, rotation).map(|(dx, dy)| Cell::new(SPAWN_COLUMN + dx, dy))
}

/// A falling piece: four occupied cells plus the kind and rotation they came from.
///
/// Pieces are values. Moving or rotating produces a new `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: [Cell; 4],
    kind: PieceKind,
    rotation: Rotation,
}

impl Piece {
    /// Canonical catalog layout (rotation index 1)
    pub fn new(kind: PieceKind) -> Self {
        Self {
            cells: catalog(kind, Rotation::North),
            kind,
            rotation: Rotation::North,
        }
    }

    /// Layout a piece enters play with after a lock: one row above the
    /// catalog layout.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind).shifted(0, -1)
    }

    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Same piece translated by `(dx, dy)`
    #[must_use]
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            cells: self.cells.map(|c| c.offset(dx, dy)),
            ..*self
        }
    }

    /// Same piece at the next rotation index, keeping its travel from the catalog.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let anchor = catalog(self.kind, self.rotation)[0];
        let dx = self.cells[0].x - anchor.x;
        let dy = self.cells[0].y - anchor.y;

        let rotation = self.rotation.next();
        Self {
            cells: catalog(self.kind, rotation).map(|c| c.offset(dx, dy)),
            kind: self.kind,
            rotation,
        }
    }
}
