//! Blockfall (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `blockfall::{core,input,term,types}` and adds what the binary
//! needs around the engine: configuration, the JSON-lines event log, the
//! interactive session and the headless simulator.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;
pub mod session;
pub mod simulate;
