//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies so that the engine,
//! the input mapping and the terminal front end can all agree on it.
//!
//! # Board dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn anchor**: row 0, column `COLS / 2 - 1` = 4
//!
//! # Timing
//!
//! Gravity is constant: one row every [`GRAVITY_MS`] milliseconds. There are
//! no levels and no soft drop.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, COLS, ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_key_name("ArrowUp"), Some(GameAction::Rotate));
//! assert_eq!((ROWS, COLS), (20, 10));
//! ```

/// Number of board rows (20)
pub const ROWS: usize = 20;

/// Number of board columns (10)
pub const COLS: usize = 10;

/// Edge length of one block on the drawing canvas, in pixels
pub const BLOCK_SIZE: u32 = 30;

/// Canvas width in pixels (`COLS * BLOCK_SIZE`)
pub const CANVAS_WIDTH: u32 = COLS as u32 * BLOCK_SIZE;

/// Canvas height in pixels (`ROWS * BLOCK_SIZE`)
pub const CANVAS_HEIGHT: u32 = ROWS as u32 * BLOCK_SIZE;

/// Gravity period: the engine is ticked once every 500ms
pub const GRAVITY_MS: u64 = 500;

/// Anchor row of a freshly spawned piece
pub const SPAWN_ROW: i8 = 0;

/// Anchor column of a freshly spawned piece (`COLS / 2 - 1`)
pub const SPAWN_COL: i8 = (COLS / 2) as i8 - 1;

/// A board cell: 0 is empty, anything else is a locked marker.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;


/// The seven piece kinds
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds, in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }

    /// Non-zero board marker written when a piece of this kind locks
    pub fn marker(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::L => 6,
            PieceKind::J => 7,
        }
    }
}

/// Rotation states
///
/// - **North**: spawn orientation
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 270° clockwise
///
/// Only clockwise rotation exists in the game; four turns return to North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta: -1 for left, +1 for right
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Player actions
///
/// Only horizontal moves and rotation; no drop, hold or pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// Map a DOM-style key identifier to an action.
    ///
    /// Matching is exact; unrecognized keys return `None`.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(GameAction::MoveLeft),
            "ArrowRight" => Some(GameAction::MoveRight),
            "ArrowUp" => Some(GameAction::Rotate),
            _ => None,
        }
    }
}

/// Engine phase.
///
/// - **Falling**: a piece is active and has not landed
/// - **Locking**: gravity was blocked; merge, clear and spawn are in progress
/// - **GameOver**: the last spawn collided and the board was emptied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    Falling,
    Locking,
    GameOver,
}

/// Event emitted by the engine, in the order things happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece merged into the board.
    Locked {
        kind: PieceKind,
        /// Number of full rows removed right after the merge
        lines_cleared: u8,
    },
    /// A freshly spawned piece collided. Emitted before the board reset;
    /// `filled_cells` is the occupancy the reset is about to discard.
    GameOver { filled_cells: u16 },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Locked { .. } => "locked",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}
