//! Piece catalog tests - rotation states and spawn placement

use blockfall::core::pieces::rotation_count;
use blockfall::core::{matrix, rotations, spawn_position, Piece};
use blockfall::types::PieceKind;

#[test]
fn test_rotation_state_counts() {
    assert_eq!(rotation_count(PieceKind::O), 1);
    for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
        assert_eq!(rotation_count(kind), 2, "{:?}", kind);
    }
    for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
        assert_eq!(rotation_count(kind), 4, "{:?}", kind);
    }
}

#[test]
fn test_rotation_cycles_back_to_start() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        for _ in 0..rotation_count(kind) {
            piece.rotation = piece.next_rotation();
        }
        assert_eq!(piece.rotation, 0, "{:?}", kind);
        assert_eq!(piece.matrix(), matrix(kind, 0));
    }
}

#[test]
fn test_matrix_index_wraps() {
    assert_eq!(matrix(PieceKind::S, 2), matrix(PieceKind::S, 0));
    assert_eq!(matrix(PieceKind::O, 3), matrix(PieceKind::O, 0));
    assert_eq!(matrix(PieceKind::T, 5), rotations(PieceKind::T)[1]);
}

#[test]
fn test_shapes() {
    assert_eq!(
        matrix(PieceKind::I, 0).minos().as_slice(),
        &[(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        matrix(PieceKind::I, 1).minos().as_slice(),
        &[(2, 0), (2, 1), (2, 2), (2, 3)]
    );
    assert_eq!(
        matrix(PieceKind::O, 0).minos().as_slice(),
        &[(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        matrix(PieceKind::T, 0).minos().as_slice(),
        &[(1, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_spawn_positions_center_above_board() {
    assert_eq!(spawn_position(PieceKind::I), (3, -4));
    assert_eq!(spawn_position(PieceKind::O), (4, -2));
    for kind in [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        assert_eq!(spawn_position(kind), (3, -3), "{:?}", kind);
    }
}

#[test]
fn test_spawned_piece_is_fully_hidden() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.rotation, 0);
        assert!(piece.cells().iter().all(|&(_, y)| y < 0), "{:?}", kind);
        assert_eq!(piece.color(), kind.color());
    }
}
