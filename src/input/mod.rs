//! Input module - press/release timing and terminal key mapping
//!
//! `controller` is pure (no terminal types) so the timing state machine can
//! be unit-tested with synthetic elapsed times; `map` is the only file that
//! knows about crossterm key codes.

pub mod controller;
pub mod map;

pub use controller::{InputController, InputTiming};
pub use map::{map_key, should_quit};
