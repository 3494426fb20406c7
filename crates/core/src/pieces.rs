//! Pieces module - tetromino geometry and rotation states
//!
//! Every kind owns a fixed, ordered list of rotation-state matrices. Rotation
//! cycles through that list by index modulo its length, so the cycle length
//! depends on the kind:
//!
//! | Kind | States |
//! |------|--------|
//! | O | 1 |
//! | I, S, Z | 2 |
//! | T, J, L | 4 |

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// Offset of a single mino relative to the matrix origin (column, row)
pub type MinoOffset = (i8, i8);

/// Row-major occupancy grid of one rotation state (non-zero = filled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix(&'static [&'static [u8]]);

impl Matrix {
    pub fn width(&self) -> u8 {
        self.0.first().map_or(0, |row| row.len() as u8)
    }

    pub fn height(&self) -> u8 {
        self.0.len() as u8
    }

    /// Occupied cells as (dx, dy) offsets, row by row
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for (dy, row) in self.0.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((dx as i8, dy as i8));
                }
            }
        }
        out
    }

    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.0
    }
}

const I_STATES: [Matrix; 2] = [
    Matrix(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
    Matrix(&[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]]),
];

const O_STATES: [Matrix; 1] = [Matrix(&[&[1, 1], &[1, 1]])];

const T_STATES: [Matrix; 4] = [
    Matrix(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
    Matrix(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
    Matrix(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
    Matrix(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
];

const S_STATES: [Matrix; 2] = [
    Matrix(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
    Matrix(&[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]]),
];

const Z_STATES: [Matrix; 2] = [
    Matrix(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    Matrix(&[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]]),
];

const J_STATES: [Matrix; 4] = [
    Matrix(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
    Matrix(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
    Matrix(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]]),
    Matrix(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
];

const L_STATES: [Matrix; 4] = [
    Matrix(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    Matrix(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
    Matrix(&[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]]),
    Matrix(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
];

/// Ordered rotation states of a kind
pub fn rotations(kind: PieceKind) -> &'static [Matrix] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Matrix for a rotation index (taken modulo the kind's state count)
pub fn matrix(kind: PieceKind, rotation: u8) -> Matrix {
    let states = rotations(kind);
    states[rotation as usize % states.len()]
}

/// Spawn origin: horizontally centered, entirely above the visible board
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let m = matrix(kind, 0);
    let x = (BOARD_WIDTH - m.width()) / 2;
    (x as i8, -(m.height() as i8))
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Index into [`rotations`] for this kind
    pub rotation: u8,
    /// Column of the matrix origin
    pub x: i8,
    /// Row of the matrix origin (negative while above the board)
    pub y: i8,
}

impl Piece {
    /// Create a piece in its first rotation state at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    pub fn matrix(&self) -> Matrix {
        matrix(self.kind, self.rotation)
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Index of the state that follows the current one
    pub fn next_rotation(&self) -> u8 {
        (self.rotation + 1) % rotation_count(self.kind)
    }

    pub fn translated(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Occupied cells in board coordinates (rows may be negative)
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.matrix()
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}
