//! Core module - pure game rules with no external dependencies
//!
//! Board, pieces, RNG, and scoring. No UI, no I/O, no timing; everything in
//! here is deterministic and unit-testable.

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use piece::{Piece, PieceColor};
pub use rng::{PieceGenerator, SimpleRng};
