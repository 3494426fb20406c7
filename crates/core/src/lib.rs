//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Tests drive the same command path as live play
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection, merging and line clearing
//! - [`game_state`]: The play session: spawn, gravity, lock, scoring, pause, reset
//! - [`pieces`]: Tetromino rotation-state matrices and spawn positions
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: Line-clear points, leveling, gravity speed
//! - [`snapshot`]: Read-only view of a session for renderers
//! - [`timer`]: Gravity scheduler feeding ticks into a session
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of 7 draws aligned to a bag holds each kind once
//! - **Rotation**: cycles through a per-kind list of states; horizontal kicks `[0, -1, 1, -2, 2]`
//! - **Ghost Piece**: Shows where the current piece will land
//! - **Scoring**: `[0, 100, 300, 500, 800]` by rows cleared, times the level
//! - **Leveling**: one level per 10 lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::Command;
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! // The locked piece is on the board and the next one is falling.
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The session itself has no clock. Drive it with [`GravityTimer::advance`]
//! from a frame loop, or issue [`Command::Tick`](types::Command::Tick) directly.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameSession, LockEvent, SessionState};
pub use pieces::{matrix, rotations, spawn_position, Matrix, Piece};
pub use rng::RandomizerBag;
pub use scoring::{gravity_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use timer::GravityTimer;
