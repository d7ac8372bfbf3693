//! Piece module - tetromino shapes and bounding-box rotation
//!
//! A `Piece` is a value: every transform returns a new instance. Shapes are
//! N×N 0/1 matrices rotated within their own bounding box, so rotation may
//! shift a piece's visual center. That drift is part of the rules here, not
//! something to correct.

use arrayvec::ArrayVec;

use crate::types::{Position, TetrominoKind};

/// Largest shape bounding box (the I piece).
pub const MAX_SHAPE: usize = 4;

/// Shape matrix stored in the top-left corner of a fixed 4×4 array;
/// only the leading `size × size` block is meaningful.
pub type ShapeMatrix = [[u8; MAX_SHAPE]; MAX_SHAPE];

/// 24-bit display color associated with a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const I_SHAPE: ShapeMatrix = [
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const O_SHAPE: ShapeMatrix = [
    [1, 1, 0, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const T_SHAPE: ShapeMatrix = [
    [0, 1, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const S_SHAPE: ShapeMatrix = [
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const Z_SHAPE: ShapeMatrix = [
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const J_SHAPE: ShapeMatrix = [
    [1, 0, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const L_SHAPE: ShapeMatrix = [
    [0, 0, 1, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

/// Canonical (spawn-orientation) shape and bounding-box size for a kind.
pub fn canonical_shape(kind: TetrominoKind) -> (ShapeMatrix, usize) {
    match kind {
        TetrominoKind::I => (I_SHAPE, 4),
        TetrominoKind::O => (O_SHAPE, 2),
        TetrominoKind::T => (T_SHAPE, 3),
        TetrominoKind::S => (S_SHAPE, 3),
        TetrominoKind::Z => (Z_SHAPE, 3),
        TetrominoKind::J => (J_SHAPE, 3),
        TetrominoKind::L => (L_SHAPE, 3),
    }
}

/// Display color for a kind.
pub fn piece_color(kind: TetrominoKind) -> PieceColor {
    match kind {
        TetrominoKind::I => PieceColor::new(0x00, 0xf5, 0xff),
        TetrominoKind::O => PieceColor::new(0xff, 0xff, 0x00),
        TetrominoKind::T => PieceColor::new(0xa0, 0x00, 0xf0),
        TetrominoKind::S => PieceColor::new(0x00, 0xf0, 0x00),
        TetrominoKind::Z => PieceColor::new(0xf0, 0x00, 0x00),
        TetrominoKind::J => PieceColor::new(0x00, 0x00, 0xf0),
        TetrominoKind::L => PieceColor::new(0xff, 0x80, 0x00),
    }
}

/// A falling tetromino: kind, current shape matrix, and the board position
/// of the shape's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: TetrominoKind,
    pub shape: ShapeMatrix,
    pub size: usize,
    pub position: Position,
}

impl Piece {
    /// Create a piece in its canonical orientation at (x, y).
    pub fn new(kind: TetrominoKind, x: i32, y: i32) -> Self {
        let (shape, size) = canonical_shape(kind);
        Self {
            kind,
            shape,
            size,
            position: Position::new(x, y),
        }
    }

    pub fn color(&self) -> PieceColor {
        piece_color(self.kind)
    }

    /// 90° clockwise rotation within the bounding box: `new[x][n-1-y] = old[y][x]`.
    /// Position is unchanged.
    pub fn rotate(&self) -> Piece {
        let n = self.size;
        let mut rotated = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (y, row) in self.shape.iter().enumerate().take(n) {
            for (x, &cell) in row.iter().enumerate().take(n) {
                rotated[x][n - 1 - y] = cell;
            }
        }
        Piece {
            shape: rotated,
            ..*self
        }
    }

    /// A copy translated by (dx, dy).
    pub fn translated(&self, dx: i32, dy: i32) -> Piece {
        Piece {
            position: Position::new(self.position.x + dx, self.position.y + dy),
            ..*self
        }
    }

    /// Absolute board positions of the occupied shape cells, in row-major
    /// scan order of the shape matrix. Every canonical shape has exactly
    /// four blocks.
    pub fn blocks(&self) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        for (y, row) in self.shape.iter().enumerate().take(self.size) {
            for (x, &cell) in row.iter().enumerate().take(self.size) {
                if cell != 0 {
                    let _ = out.try_push(Position::new(
                        self.position.x + x as i32,
                        self.position.y + y as i32,
                    ));
                }
            }
        }
        out
    }
}
