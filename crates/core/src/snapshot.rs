use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{EngineState, PieceKind, Rotation, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
}

impl ActiveSnapshot {
    /// Board coordinates (row, col) of every filled cell, including any
    /// above the visible area.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c)| (self.row + r, self.col + c))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            shape: value.shape,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything the renderer reads after each engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; COLS]; ROWS],
    pub active: ActiveSnapshot,
    pub state: EngineState,
    pub episode_id: u32,
    pub piece_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Whether the board cell at (row, col) is locked
    pub fn is_locked(&self, row: usize, col: usize) -> bool {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&c| c != 0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS]; ROWS],
            active: ActiveSnapshot::from(Piece::spawn(PieceKind::I)),
            state: EngineState::Falling,
            episode_id: 0,
            piece_id: 0,
            seed: 0,
        }
    }
}
