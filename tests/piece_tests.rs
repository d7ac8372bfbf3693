//! Piece tests - shape data and transform behavior.

use blockfall::core::Piece;
use blockfall::types::{Position, TetrominoKind};

#[test]
fn test_canonical_shapes_have_four_blocks() {
    for kind in TetrominoKind::ALL {
        assert_eq!(Piece::new(kind, 0, 0).blocks().len(), 4);
    }
}

#[test]
fn test_bounding_box_sizes() {
    assert_eq!(Piece::new(TetrominoKind::I, 0, 0).size, 4);
    assert_eq!(Piece::new(TetrominoKind::O, 0, 0).size, 2);
    for kind in [
        TetrominoKind::T,
        TetrominoKind::S,
        TetrominoKind::Z,
        TetrominoKind::J,
        TetrominoKind::L,
    ] {
        assert_eq!(Piece::new(kind, 0, 0).size, 3);
    }
}

#[test]
fn test_rotate_four_times_round_trips() {
    for kind in TetrominoKind::ALL {
        let piece = Piece::new(kind, 3, 5);
        let turned = piece.rotate().rotate().rotate().rotate();
        assert_eq!(turned, piece, "kind {:?}", kind);
    }
}

#[test]
fn test_o_shape_invariant_under_single_rotation() {
    let piece = Piece::new(TetrominoKind::O, 0, 0);
    assert_eq!(piece.rotate(), piece);
}

#[test]
fn test_rotation_keeps_position() {
    let piece = Piece::new(TetrominoKind::Z, 7, 11);
    assert_eq!(piece.rotate().position, Position::new(7, 11));
}

#[test]
fn test_transforms_do_not_mutate_the_source() {
    let piece = Piece::new(TetrominoKind::L, 3, 0);
    let copy = piece;

    let _ = piece.rotate();
    let _ = piece.translated(2, 3);
    assert_eq!(piece, copy);
}

#[test]
fn test_translation_accumulates() {
    let piece = Piece::new(TetrominoKind::S, 3, 0)
        .translated(1, 0)
        .translated(1, 0)
        .translated(0, 2);
    assert_eq!(piece.position, Position::new(5, 2));
}

#[test]
fn test_i_piece_blocks_at_spawn() {
    // Horizontal I sits on the second row of its bounding box.
    let blocks = Piece::new(TetrominoKind::I, 3, 0).blocks();
    assert_eq!(
        blocks.as_slice(),
        &[
            Position::new(3, 1),
            Position::new(4, 1),
            Position::new(5, 1),
            Position::new(6, 1),
        ]
    );
}

#[test]
fn test_t_piece_blocks_at_spawn() {
    let blocks = Piece::new(TetrominoKind::T, 3, 0).blocks();
    assert_eq!(
        blocks.as_slice(),
        &[
            Position::new(4, 0),
            Position::new(3, 1),
            Position::new(4, 1),
            Position::new(5, 1),
        ]
    );
}

#[test]
fn test_rotation_moves_blocks_within_bounding_box() {
    // The rotated J must stay inside its own 3x3 box.
    let rotated = Piece::new(TetrominoKind::J, 0, 0).rotate();
    for block in rotated.blocks() {
        assert!((0..3).contains(&block.x));
        assert!((0..3).contains(&block.y));
    }
}
