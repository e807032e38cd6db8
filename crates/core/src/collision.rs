//! Collision checking between a piece and the board.

use crate::board::Board;
use crate::piece::Piece;

/// True if any filled cell of `piece` lands on an occupied board position.
///
/// Side walls and the floor count as occupied; space above the board does
/// not. Pure: this is the gate every tentative move, rotation and spawn goes
/// through before it is kept.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece
        .cells()
        .any(|(row, col)| board.is_occupied(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, COLS, ROWS};

    #[test]
    fn spawn_on_empty_board_is_clear() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&board, &Piece::spawn(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        assert!(collides(&board, &Piece::at(PieceKind::O, 0, -1)));
        assert!(collides(&board, &Piece::at(PieceKind::O, 0, COLS as i8 - 1)));
        assert!(collides(&board, &Piece::at(PieceKind::O, ROWS as i8 - 1, 0)));
        assert!(!collides(&board, &Piece::at(PieceKind::O, ROWS as i8 - 2, 0)));
    }

    #[test]
    fn locked_cells_collide() {
        let mut board = Board::new();
        board.set(10, 5, 1);
        assert!(collides(&board, &Piece::at(PieceKind::O, 9, 4)));
        assert!(!collides(&board, &Piece::at(PieceKind::O, 8, 4)));
    }

    #[test]
    fn overhang_above_board_is_allowed() {
        let board = Board::new();
        assert!(!collides(&board, &Piece::at(PieceKind::O, -1, 4)));
        assert!(!collides(&board, &Piece::at(PieceKind::I, -3, 0)));
    }
}
