//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) form a buffer zone that is always empty.
//!
//! Merging and line clearing never mutate the receiver; they return a fresh
//! board so the session swaps whole grids between ticks.

use crate::pieces::{Matrix, Piece};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from rows, top to bottom.
    ///
    /// Missing rows at the top are left empty, so fixtures only need to spell
    /// out the bottom of the well. Extra rows or columns are ignored.
    pub fn from_rows(rows: &[[Cell; BOARD_WIDTH as usize]]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let skip = rows.len().saturating_sub(height);
        let offset = height - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            let y = offset + i;
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Whether `piece`, shifted by (dx, dy) and optionally drawn with another
    /// rotation state, would leave the well or overlap a filled cell.
    ///
    /// Columns are always bound-checked. Rows at or below the floor collide;
    /// rows above the board only take the column check.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8, matrix: Option<Matrix>) -> bool {
        let matrix = matrix.unwrap_or_else(|| piece.matrix());
        matrix.minos().iter().any(|&(mx, my)| {
            let x = piece.x + mx + dx;
            let y = piece.y + my + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Rows the piece can fall before it would collide.
    ///
    /// A piece that already collides (or touches the floor) gets 0.
    pub fn drop_distance(&self, piece: &Piece) -> i8 {
        let mut distance = 0;
        while !self.collides(piece, 0, distance + 1, None) {
            distance += 1;
        }
        distance
    }

    /// New board with the piece's cells written in; cells above row 0 are dropped
    pub fn merged(&self, piece: &Piece) -> Board {
        let mut out = self.clone();
        for (x, y) in piece.cells() {
            if y >= 0 {
                out.set(x, y, Some(piece.kind));
            }
        }
        out
    }

    /// New board with every full row removed at once and the rest shifted down.
    ///
    /// Uses a two-pointer compaction from the bottom. Returns the board and
    /// the number of rows removed.
    pub fn cleared(&self) -> (Board, usize) {
        let mut out = self.clone();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                let dst_start = write_y * width;
                out.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        // Clear the remaining rows at the top
        out.cells[..write_y * width].fill(None);

        (out, cleared)
    }

    /// Write the board into a `u8` grid (0 = empty, otherwise [`PieceKind::cell_code`])
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, PieceKind::cell_code);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = BOARD_WIDTH as usize;

    fn full_row(kind: PieceKind) -> [Cell; W] {
        [Some(kind); W]
    }

    fn row_with_gap(kind: PieceKind, gap: usize) -> [Cell; W] {
        let mut row = full_row(kind);
        row[gap] = None;
        row
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_from_rows_aligns_to_bottom() {
        let board = Board::from_rows(&[full_row(PieceKind::I), row_with_gap(PieceKind::T, 3)]);
        assert!(board.is_row_full(18));
        assert!(!board.is_row_full(19));
        assert_eq!(board.get(3, 19), Some(None));
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert!(board.rows().take(18).flatten().all(|c| c.is_none()));
    }

    #[test]
    fn test_collides_in_buffer_zone_only_checks_columns() {
        let board = Board::from_rows(&[full_row(PieceKind::Z)]);
        let mut piece = Piece::spawn(PieceKind::O);
        piece.y = -5;
        assert!(!board.collides(&piece, 0, 0, None));
        piece.x = -1;
        assert!(board.collides(&piece, 0, 0, None));
    }

    #[test]
    fn test_collides_with_matrix_override() {
        let board = Board::new();
        // Vertical I hugging the right wall.
        let piece = Piece {
            kind: PieceKind::I,
            rotation: 1,
            x: 7,
            y: 0,
        };
        assert!(!board.collides(&piece, 0, 0, None));
        let horizontal = crate::pieces::matrix(PieceKind::I, 0);
        assert!(board.collides(&piece, 0, 0, Some(horizontal)));
    }

    #[test]
    fn test_merge_is_pure_and_drops_buffer_cells() {
        let board = Board::new();
        let piece = Piece {
            kind: PieceKind::O,
            rotation: 0,
            x: 0,
            y: -1,
        };
        let merged = board.merged(&piece);
        assert!(board.is_empty());
        assert_eq!(merged.get(0, 0), Some(Some(PieceKind::O)));
        assert_eq!(merged.get(1, 0), Some(Some(PieceKind::O)));
        assert_eq!(merged.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_cleared_removes_non_adjacent_rows() {
        let board = Board::from_rows(&[
            row_with_gap(PieceKind::S, 0),
            full_row(PieceKind::I),
            row_with_gap(PieceKind::J, 5),
            full_row(PieceKind::L),
        ]);
        let (out, cleared) = board.cleared();
        assert_eq!(cleared, 2);
        assert_eq!(out.get(0, 19), Some(Some(PieceKind::J)));
        assert_eq!(out.get(5, 19), Some(None));
        assert_eq!(out.get(0, 18), Some(None));
        assert_eq!(out.get(1, 18), Some(Some(PieceKind::S)));
        assert!(out.rows().take(18).flatten().all(|c| c.is_none()));
        // Input untouched.
        assert!(board.is_row_full(19));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O);
        // O spawns at y = -2 and rests with its top row at 18.
        assert_eq!(board.drop_distance(&piece), 20);
    }

    #[test]
    fn test_write_u8_grid_uses_cell_codes() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        let mut grid = [[0u8; W]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][0], PieceKind::L.cell_code());
        assert_eq!(grid[19][1], 0);
    }
}
