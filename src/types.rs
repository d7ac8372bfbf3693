//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const BOARD_WIDTH: u32 = 10;
pub const BOARD_HEIGHT: u32 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_DECREMENT_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 50;

/// Input repeat timing (milliseconds)
pub const INITIAL_DELAY_MS: u32 = 250;
pub const REPEAT_RATE_MS: u32 = 120;
pub const DOWN_REPEAT_RATE_MS: u32 = 50;

/// Line clear scoring base values, indexed by lines cleared in one lock
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl TetrominoKind {
    /// All seven kinds, in canonical order
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::S,
        TetrominoKind::Z,
        TetrominoKind::J,
        TetrominoKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "I",
            TetrominoKind::O => "O",
            TetrominoKind::T => "T",
            TetrominoKind::S => "S",
            TetrominoKind::Z => "Z",
            TetrominoKind::J => "J",
            TetrominoKind::L => "L",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<TetrominoKind>;

/// Board-relative block position; y grows downward, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Logical input keys tracked by the timing controller.
///
/// These name the game actions a key stands for, not physical key codes;
/// the terminal key map translates crossterm events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Left,
    Right,
    Down,
    Up,
    Space,
    Pause,
    Restart,
}

impl InputKey {
    pub const ALL: [InputKey; 7] = [
        InputKey::Left,
        InputKey::Right,
        InputKey::Down,
        InputKey::Up,
        InputKey::Space,
        InputKey::Pause,
        InputKey::Restart,
    ];

    /// Movement keys fire immediately on press and then auto-repeat.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, InputKey::Left | InputKey::Right | InputKey::Down)
    }
}

/// Per-frame control snapshot consumed by the engine.
///
/// `pause` is a toggle that persists across frames; everything else is
/// cleared by `reset_one_time_controls` once the engine has consumed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
    pub space: bool,
    pub pause: bool,
    pub restart: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeatable_keys() {
        assert!(InputKey::Left.is_repeatable());
        assert!(InputKey::Right.is_repeatable());
        assert!(InputKey::Down.is_repeatable());

        assert!(!InputKey::Up.is_repeatable());
        assert!(!InputKey::Space.is_repeatable());
        assert!(!InputKey::Pause.is_repeatable());
        assert!(!InputKey::Restart.is_repeatable());
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in TetrominoKind::ALL.iter().enumerate() {
            for b in &TetrominoKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_controls_default_all_false() {
        let c = Controls::default();
        assert!(!c.left && !c.right && !c.down && !c.up && !c.space && !c.pause && !c.restart);
    }
}
