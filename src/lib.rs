//! blockfall - a falling-block puzzle game for the terminal.
//!
//! The crate splits into pure game rules (`core`), the input timing state
//! machine (`input`), the orchestrating `engine`, and the terminal render
//! pipeline (`term`). Everything except `term::renderer`, `input::map`, and
//! the binary is free of terminal I/O and deterministic per RNG seed.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;
