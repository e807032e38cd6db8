//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Only the
//! three arrow keys drive the game; everything else is ignored, apart from
//! the quit chords the runner needs to leave raw mode.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_key, action_for_key_name, is_dismiss_key, should_quit};
