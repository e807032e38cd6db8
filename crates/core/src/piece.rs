//! The active falling piece.

use crate::pieces::spawn_shape;
use crate::shape::Shape;
use crate::types::{PieceKind, Rotation, SPAWN_COL, SPAWN_ROW};

/// Active piece: a shape anchored at (row, col) on the board.
///
/// The anchor is the top-left corner of the shape matrix. Rows above the
/// board (negative) are representable; columns are validated by collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece in spawn orientation at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_ROW, SPAWN_COL)
    }

    /// Create a piece in spawn orientation at an arbitrary anchor
    pub fn at(kind: PieceKind, row: i8, col: i8) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            rotation: Rotation::North,
            row,
            col,
        }
    }

    /// Board coordinates (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c)| (self.row + r, self.col + c))
    }

    /// The same piece turned 90° clockwise around its anchor, unclamped
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::COLS;

    #[test]
    fn spawn_is_centered_at_top() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, (COLS / 2) as i8 - 1);
        assert_eq!(piece.rotation, Rotation::North);
    }

    #[test]
    fn cells_are_offset_by_anchor() {
        let piece = Piece::at(PieceKind::O, 3, 7);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 7), (3, 8), (4, 7), (4, 8)]);
    }

    #[test]
    fn rotated_advances_rotation_state() {
        let piece = Piece::spawn(PieceKind::J);
        let r = piece.rotated();
        assert_eq!(r.rotation, Rotation::East);
        assert_eq!((r.row, r.col), (piece.row, piece.col));
        assert_eq!((r.shape.width(), r.shape.height()), (2, 3));
    }
}
