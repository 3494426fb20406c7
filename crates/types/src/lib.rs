//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - Pieces spawn entirely above row 0 and fall into view
//!
//! # Gravity
//!
//! Gravity period in milliseconds per row is
//! `max(MIN_GRAVITY_MS, BASE_GRAVITY_MS - (level - 1) * GRAVITY_STEP_MS)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 730ms |
//! | 5 | 520ms |
//! | 10 | 170ms |
//! | 11+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Render/input poll cadence of the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity period at level 1
pub const BASE_GRAVITY_MS: u32 = 800;

/// Gravity speed-up per level
pub const GRAVITY_STEP_MS: u32 = 70;

/// Fastest gravity period
pub const MIN_GRAVITY_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points by rows cleared in one lock (multiplied by the current level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, when a rotation collides.
///
/// Shared by every piece kind and every rotation transition; there are no
/// vertical kicks.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order (the order a fresh bag starts from before shuffling)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used in the side panel and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Tag written into the snapshot grid (0 is reserved for empty)
    pub fn cell_code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_code`]
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Display color of this kind
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0xef, 0x44, 0x44),
            PieceKind::O => Rgb::new(0xf9, 0x73, 0x16),
            PieceKind::T => Rgb::new(0x22, 0xc5, 0x5e),
            PieceKind::S => Rgb::new(0x06, 0xb6, 0xd4),
            PieceKind::Z => Rgb::new(0xea, 0xb3, 0x08),
            PieceKind::J => Rgb::new(0x8b, 0x5c, 0xf6),
            PieceKind::L => Rgb::new(0x14, 0xb8, 0xa6),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color used for a filled cell whose tag does not name a piece kind
pub const FILLED_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Resolve a snapshot grid tag to a display color.
///
/// `0` is empty. Unknown non-zero tags degrade to [`FILLED_COLOR`].
///
/// ```
/// use blockfall_types::{color_for_cell, PieceKind, FILLED_COLOR};
///
/// assert_eq!(color_for_cell(0), None);
/// assert_eq!(color_for_cell(PieceKind::T.cell_code()), Some(PieceKind::T.color()));
/// assert_eq!(color_for_cell(42), Some(FILLED_COLOR));
/// ```
pub fn color_for_cell(code: u8) -> Option<Rgb> {
    if code == 0 {
        return None;
    }
    Some(
        PieceKind::from_cell_code(code)
            .map(PieceKind::color)
            .unwrap_or(FILLED_COLOR),
    )
}

/// Commands accepted by the game session
///
/// Input adapters produce every variant except `Tick`, which comes from the
/// gravity clock. Tests drive all of them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Advance to the next rotation state (with horizontal kicks)
    Rotate,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Toggle pause state
    TogglePause,
    /// Start a fresh session
    Reset,
    /// One gravity step
    Tick,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("togglepause"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "togglepause" => Some(Command::TogglePause),
            "reset" => Some(Command::Reset),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// camelCase name, as used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::TogglePause => "togglePause",
            Command::Reset => "reset",
            Command::Tick => "tick",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_codes_roundtrip_for_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_cell_code(kind.cell_code()), Some(kind));
        }
        assert_eq!(PieceKind::from_cell_code(0), None);
        assert_eq!(PieceKind::from_cell_code(8), None);
    }

    #[test]
    fn every_command_name_parses_back() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
            Command::TogglePause,
            Command::Reset,
            Command::Tick,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn piece_colors_are_distinct() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let c = kind.color();
            assert!(!seen.contains(&c), "duplicate color for {:?}", kind);
            assert_ne!(c, FILLED_COLOR);
            seen.push(c);
        }
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_GRAVITY_MS, 800);
        assert_eq!(GRAVITY_STEP_MS, 70);
        assert_eq!(MIN_GRAVITY_MS, 100);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(KICK_OFFSETS, [0, -1, 1, -2, 2]);
    }
}
