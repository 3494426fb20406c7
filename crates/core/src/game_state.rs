//! Game state module - the single owner of a play session
//!
//! Ties together the board, piece catalog, bag and scoring rules. Every
//! mutation goes through [`GameSession::apply`], whether the command came from
//! the gravity clock, a key press or a test, so all drivers observe the same
//! transitions.
//!
//! Commands never fail: anything that would collide, or arrives while the
//! session is paused or over, is a no-op.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{self, Piece};
use crate::rng::RandomizerBag;
use crate::scoring::{gravity_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, PieceKind, KICK_OFFSETS};

/// Externally observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active piece; the next processed command spawns one
    Spawning,
    Falling,
    Paused,
    GameOver,
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    bag: RandomizerBag,
    active: Option<Piece>,
    next: Option<PieceKind>,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a session whose piece sequence is determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_bag(RandomizerBag::new(seed))
    }

    /// Create a session with an OS-seeded bag
    pub fn from_entropy() -> Self {
        Self::with_bag(RandomizerBag::from_entropy())
    }

    /// Create a seeded session on a prepared board
    pub fn with_board(seed: u64, board: Board) -> Self {
        Self {
            board,
            ..Self::new(seed)
        }
    }

    fn with_bag(mut bag: RandomizerBag) -> Self {
        let next = Some(bag.draw());
        Self {
            board: Board::new(),
            bag,
            active: None,
            next,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) -> bool {
        self.spawn_if_needed()
    }

    pub fn state(&self) -> SessionState {
        if self.game_over {
            SessionState::GameOver
        } else if self.paused {
            SessionState::Paused
        } else if self.active.is_none() {
            SessionState::Spawning
        } else {
            SessionState::Falling
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current gravity period in milliseconds
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    /// Where the active piece would land; never written back into the session
    pub fn ghost(&self) -> Option<Piece> {
        let active = self.active?;
        Some(active.translated(0, self.board.drop_distance(&active)))
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(PieceSnapshot::from);
        out.ghost = self.ghost().map(PieceSnapshot::from);
        out.next = self.next;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Process one command.
    ///
    /// After the command itself, a missing active piece is spawned if the
    /// session is running. Returns true if anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::MoveLeft => self.shift(-1, 0),
            Command::MoveRight => self.shift(1, 0),
            Command::SoftDrop => self.shift(0, 1),
            Command::Rotate => self.rotate_with_kicks(),
            Command::HardDrop => self.drop_to_floor(),
            Command::TogglePause => self.toggle_paused(),
            Command::Reset => {
                self.restart();
                true
            }
            Command::Tick => self.gravity_step(),
        };
        let spawned = self.spawn_if_needed();
        changed || spawned
    }

    pub fn move_left(&mut self) -> bool {
        self.apply(Command::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply(Command::MoveRight)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.apply(Command::SoftDrop)
    }

    pub fn rotate(&mut self) -> bool {
        self.apply(Command::Rotate)
    }

    pub fn hard_drop(&mut self) -> bool {
        self.apply(Command::HardDrop)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply(Command::TogglePause)
    }

    pub fn reset(&mut self) -> bool {
        self.apply(Command::Reset)
    }

    pub fn tick(&mut self) -> bool {
        self.apply(Command::Tick)
    }

    /// Active piece, if the session currently accepts piece commands
    fn controllable(&self) -> Option<Piece> {
        if self.paused || self.game_over {
            return None;
        }
        self.active
    }

    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        if self.board.collides(&active, dx, dy, None) {
            return false;
        }
        self.active = Some(active.translated(dx, dy));
        true
    }

    fn rotate_with_kicks(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };

        let rotation = active.next_rotation();
        let matrix = pieces::matrix(active.kind, rotation);

        for &dx in KICK_OFFSETS.iter() {
            if !self.board.collides(&active, dx, 0, Some(matrix)) {
                let rotated = Piece {
                    rotation,
                    x: active.x + dx,
                    ..active
                };
                self.active = Some(rotated);
                return rotated != active;
            }
        }

        false
    }

    fn drop_to_floor(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        let distance = self.board.drop_distance(&active);
        self.lock(active.translated(0, distance));
        true
    }

    fn gravity_step(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        if self.board.collides(&active, 0, 1, None) {
            self.lock(active);
        } else {
            self.active = Some(active.translated(0, 1));
        }
        true
    }

    fn toggle_paused(&mut self) -> bool {
        // Game over is left only through reset.
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        info!(paused = self.paused, "pause toggled");
        true
    }

    fn restart(&mut self) {
        let seed = self.bag.reseed();
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = episode_id;
        info!(episode_id, "session reset");
    }

    /// Merge the piece, clear rows, score, then bring in the next piece
    fn lock(&mut self, piece: Piece) {
        let (board, cleared) = self.board.merged(&piece).cleared();
        self.board = board;
        self.active = None;

        let points = line_clear_points(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared as u32;

        let level = level_for_lines(self.lines).max(self.level);
        let level_up = level > self.level;
        self.level = level;

        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            cleared,
            points,
            "piece locked"
        );
        if level_up {
            info!(level, lines = self.lines, "level up");
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            level_up,
        });

        // Lock-out: a piece that never entered the visible field means the
        // stack has reached the spawn area. Spawns start entirely above row 0,
        // where `collides` skips the fill check, so the spawn test alone can
        // never end the game.
        if piece.cells().iter().all(|&(_, y)| y < 0) {
            self.end_game();
            return;
        }

        self.spawn_if_needed();
    }

    fn spawn_if_needed(&mut self) -> bool {
        if self.active.is_some() || self.paused || self.game_over {
            return false;
        }

        let kind = match self.next {
            Some(kind) => kind,
            None => self.bag.draw(),
        };
        let piece = Piece::spawn(kind);

        if self.board.collides(&piece, 0, 0, None) {
            self.next = Some(kind);
            self.end_game();
            return false;
        }

        self.active = Some(piece);
        self.next = Some(self.bag.draw());
        debug!(kind = kind.as_str(), next = ?self.next, "piece spawned");
        true
    }

    fn end_game(&mut self) {
        self.active = None;
        self.game_over = true;
        self.paused = true;
        info!(
            score = self.score,
            level = self.level,
            lines = self.lines,
            "game over"
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
