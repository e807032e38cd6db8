//! Core game logic - pure, deterministic and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! timers, no I/O. Front ends read a [`GameSnapshot`] and call [`Engine`]
//! operations.
//!
//! # Module Structure
//!
//! - [`shape`]: fixed-size occupancy matrices and clockwise rotation
//! - [`pieces`]: the seven canonical spawn shapes
//! - [`piece`]: the active piece (shape + anchor + rotation state)
//! - [`board`]: 20x10 grid with occupancy queries, merge and line clearing
//! - [`collision`]: the single collision predicate
//! - [`engine`]: tick / move / rotate / spawn orchestration
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Gravity moves the piece one row per tick; when it cannot, the piece
//!   locks, full lines clear and a new piece spawns at row 0, column 4.
//! - Left/right moves and clockwise rotation are single attempts; a blocked
//!   attempt is silently reverted. There are no wall kicks.
//! - If a fresh piece collides on spawn the board is emptied and play goes on.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_core::types::{Direction, EngineState};
//!
//! let mut engine = Engine::new(12345);
//! engine.move_horizontal(Direction::Left);
//! engine.rotate();
//! engine.tick();
//!
//! assert_eq!(engine.state(), EngineState::Falling);
//! assert_eq!(engine.board().filled_count(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod engine;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use engine::Engine;
pub use piece::Piece;
pub use pieces::spawn_shape;
pub use rng::PieceRng;
pub use shape::{Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
