//! Terminal front end.
//!
//! The engine only knows how to produce a [`core::GameSnapshot`]. This crate
//! turns snapshots into pictures:
//!
//! - [`surface`]: the canvas-level drawing interface (filled and stroked
//!   squares in pixel coordinates) and the frame drawing routine
//! - [`fb`]: a framebuffer of styled terminal cells
//! - [`game_view`]: lays out border, play field, side panel and notices
//! - [`renderer`]: flushes framebuffers to a crossterm terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{draw_frame, DrawCommand, DrawSurface, TermSurface};
