//! Pieces module - the seven canonical shapes
//!
//! Each kind is defined once, in its spawn orientation. Every other orientation
//! is derived at runtime with [`Shape::rotated_cw`]; there are no kick tables.

use crate::shape::Shape;
use crate::types::PieceKind;

/// I piece: horizontal bar
pub const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);

/// O piece: 2x2 square
pub const O_SHAPE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);

/// T piece: stem up
pub const T_SHAPE: Shape = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);

pub const S_SHAPE: Shape = Shape::from_matrix([[1, 1, 0], [0, 1, 1]]);

pub const Z_SHAPE: Shape = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);

pub const L_SHAPE: Shape = Shape::from_matrix([[1, 1, 1], [1, 0, 0]]);

pub const J_SHAPE: Shape = Shape::from_matrix([[1, 1, 1], [0, 0, 1]]);

/// Spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}
