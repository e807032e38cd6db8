//! Interactive session: the engine plus what the player currently sees.
//!
//! A game over empties the board before the front end learns about it. The
//! session keeps the last frame it handed out, so the GAME OVER notice is
//! drawn over the stack that ended the game. While the notice is up the
//! engine is frozen; dismissing it resumes play on the fresh board.

use std::io::Write;

use anyhow::Result;

use crate::core::{Engine, GameSnapshot};
use crate::event_log::{EventLog, EventRecord};
use crate::types::{EngineState, GameAction};

/// Running totals for the end-of-session summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub pieces: u32,
    pub lines: u32,
    pub game_overs: u32,
}

pub struct Session {
    engine: Engine,
    shown: GameSnapshot,
    notice: bool,
    stats: SessionStats,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        let shown = engine.snapshot();
        Self {
            engine,
            shown,
            notice: false,
            stats: SessionStats::default(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Forward a player action. Ignored while the notice is up.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.notice {
            return false;
        }
        self.engine.apply_action(action)
    }

    /// Gravity step. Ignored while the notice is up.
    pub fn tick(&mut self) -> bool {
        if self.notice {
            return false;
        }
        self.engine.tick()
    }

    /// Log pending engine events and refresh the visible frame.
    ///
    /// On a game over the previous frame stays visible with its state
    /// switched to [`EngineState::GameOver`].
    pub fn drain<W: Write>(&mut self, mut log: Option<&mut EventLog<W>>) -> Result<()> {
        for record in EventRecord::drain(&mut self.engine) {
            if let Some(log) = log.as_mut() {
                log.record(&record)?;
            }
            self.stats.lines += u32::from(record.lines_cleared.unwrap_or(0));
            if record.event == "gameOver" {
                self.stats.game_overs += 1;
                self.notice = true;
            }
        }
        self.stats.pieces = self.engine.piece_id();

        if self.notice {
            self.shown.state = EngineState::GameOver;
        } else {
            self.engine.snapshot_into(&mut self.shown);
        }
        Ok(())
    }

    /// The frame to render
    pub fn frame(&self) -> &GameSnapshot {
        &self.shown
    }

    pub fn notice_up(&self) -> bool {
        self.notice
    }

    /// Close the notice. Gravity that came due meanwhile fires now.
    pub fn dismiss(&mut self) {
        if self.notice {
            self.notice = false;
            self.engine.tick();
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece};
    use crate::types::PieceKind;

    /// An I about to land while row 0 blocks every spawn.
    fn doomed_session() -> Session {
        let mut board = Board::new();
        for col in 4..8 {
            board.set(0, col, 2);
        }
        Session::new(Engine::from_parts(board, Piece::at(PieceKind::I, 19, 0), 3))
    }

    #[test]
    fn notice_shows_the_stack_that_ended_the_game() {
        let mut session = doomed_session();
        let mut log = EventLog::new(Vec::new());

        session.tick();
        session.drain(Some(&mut log)).unwrap();

        assert!(session.notice_up());
        assert_eq!(session.frame().state, EngineState::GameOver);
        assert_eq!(session.frame().board[0][4], 2);
        assert_eq!(session.engine().board().filled_count(), 0);
        assert_eq!(session.stats().game_overs, 1);

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert!(text.lines().any(|l| l.contains("\"gameOver\"")));
    }

    #[test]
    fn engine_is_frozen_while_notice_is_up() {
        let mut session = doomed_session();
        session.tick();
        session.drain(None::<&mut EventLog<Vec<u8>>>).unwrap();

        let before = *session.engine().active();
        assert!(!session.tick());
        assert!(!session.apply_action(GameAction::MoveRight));
        assert_eq!(*session.engine().active(), before);
    }

    #[test]
    fn dismiss_resumes_on_the_empty_board() {
        let mut session = doomed_session();
        session.tick();
        session.drain(None::<&mut EventLog<Vec<u8>>>).unwrap();
        let row = session.engine().active().row;

        session.dismiss();
        session.drain(None::<&mut EventLog<Vec<u8>>>).unwrap();

        assert!(!session.notice_up());
        assert_eq!(session.frame().state, EngineState::Falling);
        assert_eq!(session.frame().board[0][4], 0);
        assert_eq!(session.engine().active().row, row + 1);
    }

    #[test]
    fn stats_track_pieces_and_lines() {
        let mut board = Board::new();
        for col in 4..10 {
            board.set(19, col, 1);
        }
        let mut session = Session::new(Engine::from_parts(board, Piece::at(PieceKind::I, 19, 0), 1));

        assert!(session.tick());
        session.drain(None::<&mut EventLog<Vec<u8>>>).unwrap();

        let stats = session.stats();
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.game_overs, 0);
        assert_eq!(stats.pieces, 1);
        assert_eq!(session.frame().board[19][4], 0);
    }
}
