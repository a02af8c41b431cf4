//! Shared types module - plain data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the driver and the
//! terminal front end. Everything here is plain data with no dependencies, so
//! it can be used from any context (core logic, rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Pieces spawn one row above the visible grid, so piece rows may be negative.
//!
//! # Levels
//!
//! Level is a step function of score:
//!
//! | Score | Level | Default tick period |
//! |-------|-------|---------------------|
//! | 0 | 1 | 1000ms |
//! | 100 | 2 | 800ms |
//! | 300 | 3 | 600ms |
//! | 600 | 4 | 400ms |
//! | 1000 | 5 | 250ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Action, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Draw values map onto piece kinds, 7 and anything unknown fall back to L
//! assert_eq!(PieceKind::from_draw(1), PieceKind::I);
//! assert_eq!(PieceKind::from_draw(7), PieceKind::L);
//!
//! // Rotation indices cycle 1 -> 2 -> 3 -> 4 -> 1
//! assert_eq!(Rotation::West.next(), Rotation::North);
//! assert_eq!(Rotation::North.index(), 1);
//!
//! // Ticks carry the level whose tick source produced them
//! assert_eq!(Action::Tick(2).as_str(), "tick");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Points awarded per cleared row
pub const SCORE_PER_ROW: u32 = 10;

/// Level thresholds as `(minimum score, level)`, ascending.
///
/// The last entry is the final tier; there is no level above it.
pub const LEVEL_THRESHOLDS: [(u32, u32); 5] = [(0, 1), (100, 2), (300, 3), (600, 4), (1000, 5)];

/// Level a fresh game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Default gravity period per level in milliseconds (index 0 = level 1)
pub const DEFAULT_TICK_PERIODS_MS: [u64; 5] = [1000, 800, 600, 400, 250];

/// Column of the catalog origin: every spawn layout starts at this column
pub const SPAWN_COLUMN: i8 = 3;

/// A grid-space coordinate: column `x`, row `y`.
///
/// No bounds are enforced by the type; pieces above the board have negative rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in draw order (draw value 1 is `I`).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Map a random draw onto a kind.
    ///
    /// The mapping is total: 7 and any value outside 1..=6 resolve to `L`.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_draw(3), PieceKind::T);
    /// assert_eq!(PieceKind::from_draw(0), PieceKind::L);
    /// assert_eq!(PieceKind::from_draw(200), PieceKind::L);
    /// ```
    pub fn from_draw(value: u8) -> Self {
        match value {
            1 => PieceKind::I,
            2 => PieceKind::O,
            3 => PieceKind::T,
            4 => PieceKind::S,
            5 => PieceKind::Z,
            6 => PieceKind::J,
            _ => PieceKind::L,
        }
    }

    /// Display color
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::Z => Rgb::new(220, 80, 80),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
        }
    }
}

/// The four rotation states of a piece.
///
/// - **North**: index 1, the spawn orientation
/// - **East**: index 2
/// - **South**: index 3
/// - **West**: index 4
///
/// The cycle goes North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in 1..=4
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.index(), 1);
    /// assert_eq!(Rotation::West.index(), 4);
    /// ```
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 1,
            Rotation::East => 2,
            Rotation::South => 3,
            Rotation::West => 4,
        }
    }

    /// Next rotation index, wrapping 4 → 1
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::East.next(), Rotation::South);
    /// assert_eq!(Rotation::South.next(), Rotation::West);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Discrete transitions applied to the game state.
///
/// Ticks come from the timer collaborator; everything else is mapped 1:1 from
/// a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Gravity tick from the tick source dedicated to the given level
    Tick(u32),
    /// Shift piece one column left
    MoveLeft,
    /// Shift piece one column right
    MoveRight,
    /// Drop piece one row, locking it when it cannot descend
    MoveDown,
    /// Advance to the next rotation index
    Rotate,
    /// Swap the active piece with the held one (once per piece)
    Hold,
    /// Start a fresh game once the current one has ended
    Reset,
}

impl Action {
    /// camelCase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Tick(_) => "tick",
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::Rotate => "rotate",
            Action::Hold => "hold",
            Action::Reset => "reset",
        }
    }
}
