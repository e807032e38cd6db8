//! Engine module - owns the board and the active piece
//!
//! All mutation goes through the operations here: [`Engine::tick`] for
//! gravity, [`Engine::move_horizontal`] and [`Engine::rotate`] for player
//! input, and [`Engine::spawn_new_piece`] for replacing the active piece.
//! Every tentative change is checked with [`collides`] and reverted if it
//! fails, so between calls the active piece never overlaps the board.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, EngineState, GameAction, GameEvent, PieceKind, COLS};

/// Game-state engine
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Piece,
    rng: PieceRng,
    state: EngineState,
    /// Events not yet taken by the front end, oldest first.
    events: Vec<GameEvent>,
    /// Incremented every time a game-over empties the board.
    episode_id: u32,
    /// Incremented on every spawn, including the one that ends an episode.
    piece_id: u32,
}

impl Engine {
    /// Create an engine with an empty board and a freshly spawned piece
    pub fn new(seed: u64) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// Create an engine over an existing board and spawn the first piece.
    ///
    /// The spawn goes through [`Engine::spawn_new_piece`], so a board that
    /// blocks the spawn area ends the first episode immediately.
    pub fn with_board(board: Board, seed: u64) -> Self {
        let mut rng = PieceRng::new(seed);
        let first = rng.next_kind();
        let mut engine = Self::assemble(board, Piece::spawn(first), rng);
        engine.spawn_piece_of(first);
        engine
    }

    /// Assemble an engine from a board and an already-placed piece.
    ///
    /// Nothing is spawned or validated; this is how fixtures put a piece at
    /// an exact position.
    pub fn from_parts(board: Board, active: Piece, seed: u64) -> Self {
        Self::assemble(board, active, PieceRng::new(seed))
    }

    fn assemble(board: Board, active: Piece, rng: PieceRng) -> Self {
        Self {
            board,
            active,
            rng,
            state: EngineState::Falling,
            events: Vec::new(),
            episode_id: 0,
            piece_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// State reached by the most recent operation
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Events queued since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Gravity step.
    ///
    /// Moves the piece down one row. If that collides, the piece goes back up,
    /// locks into the board, full lines clear and a new piece spawns. Returns
    /// true when the piece locked.
    pub fn tick(&mut self) -> bool {
        self.state = EngineState::Falling;

        self.active.row += 1;
        if !collides(&self.board, &self.active) {
            return false;
        }
        self.active.row -= 1;

        self.state = EngineState::Locking;
        self.board.merge(&self.active);
        let cleared = self.board.clear_full_lines();
        self.events.push(GameEvent::Locked {
            kind: self.active.kind,
            lines_cleared: cleared.len() as u8,
        });

        self.spawn_new_piece();
        true
    }

    /// Shift the piece one column. A blocked move is reverted silently;
    /// returns whether the piece moved.
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        self.state = EngineState::Falling;

        self.active.col += direction.delta();
        if collides(&self.board, &self.active) {
            self.active.col -= direction.delta();
            return false;
        }
        true
    }

    /// Rotate the piece 90° clockwise.
    ///
    /// The anchor column is clamped into `0..=COLS - width` of the rotated
    /// shape on both sides. Exactly one orientation is tried: if it collides,
    /// shape, column and rotation state all revert. Returns whether the
    /// rotation was kept.
    pub fn rotate(&mut self) -> bool {
        self.state = EngineState::Falling;

        let previous = self.active;
        let mut rotated = previous.rotated();
        let max_col = COLS as i8 - rotated.shape.width() as i8;
        rotated.col = rotated.col.clamp(0, max_col);

        self.active = rotated;
        if collides(&self.board, &self.active) {
            self.active = previous;
            return false;
        }
        true
    }

    /// Replace the active piece with a uniformly random kind
    pub fn spawn_new_piece(&mut self) {
        let kind = self.rng.next_kind();
        self.spawn_piece_of(kind);
    }

    /// Replace the active piece with `kind` at the spawn anchor.
    ///
    /// If the new piece collides this is a game over: a
    /// [`GameEvent::GameOver`] is queued, then the board is emptied. The
    /// colliding piece stays active; play continues on the empty board.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) {
        self.active = Piece::spawn(kind);
        self.piece_id = self.piece_id.wrapping_add(1);

        if collides(&self.board, &self.active) {
            self.events.push(GameEvent::GameOver {
                filled_cells: self.board.filled_count() as u16,
            });
            self.board.reset_all();
            self.episode_id = self.episode_id.wrapping_add(1);
            self.state = EngineState::GameOver;
        } else {
            self.state = EngineState::Falling;
        }
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(Direction::Left),
            GameAction::MoveRight => self.move_horizontal(Direction::Right),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Fill `out` with everything a renderer needs
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.state = self.state;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
