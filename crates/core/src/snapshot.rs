use crate::pieces::{Matrix, Piece};
use crate::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl PieceSnapshot {
    pub fn matrix(&self) -> Matrix {
        crate::pieces::matrix(self.kind, self.rotation)
    }

    /// Occupied cells in board coordinates (rows may be negative)
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.matrix()
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub next: Option<PieceKind>,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            next: None,
            paused: false,
            game_over: false,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
