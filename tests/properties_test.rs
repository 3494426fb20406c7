//! Property tests for board geometry, the bag and session counters.

use proptest::prelude::*;

use blockfall::core::{level_for_lines, Board, GameSession, Piece, RandomizerBag};
use blockfall::types::{Cell, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Rows that are full about half the time, otherwise random.
fn row() -> impl Strategy<Value = [Cell; W]> {
    (any::<bool>(), prop::array::uniform10(any::<bool>())).prop_map(|(full, bits)| {
        let mut row = [None; W];
        for (cell, bit) in row.iter_mut().zip(bits) {
            if full || bit {
                *cell = Some(PieceKind::T);
            }
        }
        row
    })
}

fn board() -> impl Strategy<Value = Vec<[Cell; W]>> {
    prop::collection::vec(row(), H)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Tick),
        2 => Just(Command::MoveLeft),
        2 => Just(Command::MoveRight),
        1 => Just(Command::SoftDrop),
        2 => Just(Command::Rotate),
        2 => Just(Command::HardDrop),
        1 => Just(Command::TogglePause),
    ]
}

proptest! {
    #[test]
    fn collides_outside_columns_or_below_floor(
        rows in board(),
        kind in kind(),
        rotation in 0u8..4,
        x in -6i8..14,
        y in -6i8..24,
    ) {
        let board = Board::from_rows(&rows);
        let piece = Piece { kind, rotation, x, y };
        let out_of_bounds = piece
            .cells()
            .iter()
            .any(|&(cx, cy)| cx < 0 || cx >= W as i8 || cy >= H as i8);
        if out_of_bounds {
            prop_assert!(board.collides(&piece, 0, 0, None));
        }
        prop_assert!(out_of_bounds || !Board::new().collides(&piece, 0, 0, None));
    }

    #[test]
    fn cleared_removes_exactly_full_rows_in_order(rows in board()) {
        let board = Board::from_rows(&rows);
        let (out, cleared) = board.cleared();

        let kept: Vec<[Cell; W]> = rows
            .iter()
            .copied()
            .filter(|r| !r.iter().all(|c| c.is_some()))
            .collect();
        prop_assert_eq!(cleared, H - kept.len());
        prop_assert_eq!(out.rows().count(), H);
        prop_assert_eq!(out, Board::from_rows(&kept));
    }

    #[test]
    fn bag_holds_each_kind_once_per_aligned_group(seed in any::<u64>(), bags in 1usize..8) {
        let mut bag = RandomizerBag::new(seed);
        for _ in 0..bags {
            let mut group: Vec<PieceKind> = (0..7).map(|_| bag.draw()).collect();
            group.sort();
            prop_assert_eq!(group, PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn level_tracks_lines_and_never_drops(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..300),
    ) {
        let mut session = GameSession::new(seed);
        session.start();
        let mut level = session.level();

        for command in commands {
            session.apply(command);
            prop_assert!(session.level() >= level);
            prop_assert_eq!(session.level(), level_for_lines(session.lines()));
            level = session.level();

            if let Some(active) = session.active() {
                for (x, y) in active.cells() {
                    prop_assert!((0..W as i8).contains(&x));
                    prop_assert!(y < H as i8);
                    prop_assert!(!session.board().is_occupied(x, y));
                }
            }
        }
    }
}
