//! JSON-lines event log.
//!
//! One line per engine event, written as it is drained from the engine:
//!
//! ```text
//! {"episode_id":0,"piece_id":12,"event":"locked","kind":"t","lines_cleared":1}
//! {"episode_id":0,"piece_id":31,"event":"gameOver","filled_cells":142}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::Engine;
use crate::types::GameEvent;

/// One serialized engine event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Episode the event belongs to (a game over ends its episode).
    pub episode_id: u32,
    /// Piece that locked, or the spawn that collided.
    pub piece_id: u32,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled_cells: Option<u16>,
}

impl EventRecord {
    /// Attribute a batch of drained events to episodes and pieces.
    ///
    /// `episode_id` and `piece_id` are the engine counters after the batch.
    /// Every lock is followed by one spawn and a game over happens inside a
    /// spawn, so the counters can be walked back from the newest event.
    pub fn batch(events: &[GameEvent], episode_id: u32, piece_id: u32) -> Vec<EventRecord> {
        let mut episode = episode_id;
        let mut spawn = piece_id;

        let mut records: Vec<EventRecord> = events
            .iter()
            .rev()
            .map(|event| match *event {
                GameEvent::GameOver { filled_cells } => {
                    episode = episode.wrapping_sub(1);
                    EventRecord {
                        episode_id: episode,
                        piece_id: spawn,
                        event: event.as_str(),
                        kind: None,
                        lines_cleared: None,
                        filled_cells: Some(filled_cells),
                    }
                }
                GameEvent::Locked {
                    kind,
                    lines_cleared,
                } => {
                    spawn = spawn.wrapping_sub(1);
                    EventRecord {
                        episode_id: episode,
                        piece_id: spawn,
                        event: event.as_str(),
                        kind: Some(kind.as_str()),
                        lines_cleared: Some(lines_cleared),
                        filled_cells: None,
                    }
                }
            })
            .collect();
        records.reverse();
        records
    }

    /// Drain the engine's pending events as records.
    pub fn drain(engine: &mut Engine) -> Vec<EventRecord> {
        let events = engine.take_events();
        Self::batch(&events, engine.episode_id(), engine.piece_id())
    }
}

/// Appends [`EventRecord`]s to a writer, one JSON object per line
pub struct EventLog<W: Write> {
    out: W,
    written: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn record(&mut self, record: &EventRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("serialize event")?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
