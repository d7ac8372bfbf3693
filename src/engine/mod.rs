//! Game engine - owns the board, the falling piece, and the game flow
//!
//! The engine runs one frame at a time: advance the input controller, read
//! the control snapshot, resolve pause/restart, apply at most one piece
//! action, clear the one-shot controls, then run gravity. Locking a piece
//! places it, clears lines, applies scoring and leveling, and either spawns
//! the next piece or ends the game.

use crate::core::{scoring, Board, Piece, PieceGenerator};
use crate::input::InputController;
use crate::types::{Controls, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH};

/// Offsets tried, in order, when an in-place rotation collides. The first
/// offset that yields a valid position wins; if none do, the rotation is
/// rejected. This fixed list is the whole kick system; there is no
/// rotation-state-dependent kick table.
const WALL_KICKS: [(i32, i32); 5] = [(-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// Engine configuration, overridable at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u32,
    pub board_height: u32,
    /// Gravity interval at level 1.
    pub drop_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}

/// Score, level, and line totals plus the paused/game-over flags.
/// Reset wholesale on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub is_paused: bool,
    pub is_game_over: bool,
}

impl GameStats {
    fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            is_paused: false,
            is_game_over: false,
        }
    }
}

/// The game orchestrator.
pub struct GameEngine {
    board: Board,
    current: Option<Piece>,
    /// Lookahead of depth 1, promoted to `current` on spawn.
    next: Option<Piece>,
    generator: PieceGenerator,
    stats: GameStats,
    config: GameConfig,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl GameEngine {
    /// Create an engine and spawn the first piece.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut engine = Self {
            board: Board::new(config.board_width, config.board_height),
            current: None,
            next: None,
            generator: PieceGenerator::new(seed),
            stats: GameStats::new(),
            config,
            drop_interval_ms: config.drop_interval_ms,
            drop_timer_ms: 0,
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Where the falling piece would land if dropped straight down.
    pub fn ghost_piece(&self) -> Option<Piece> {
        self.current.as_ref().map(|piece| self.board.ghost_piece(piece))
    }

    /// Run one frame: advance input timers, consume the control snapshot,
    /// clear the one-shot controls, then apply gravity.
    pub fn frame(&mut self, elapsed_ms: u32, input: &mut InputController) {
        input.advance(elapsed_ms);
        let controls = input.controls();
        self.handle_controls(&controls);
        input.reset_one_time_controls();
        self.update(elapsed_ms);
    }

    /// Consume one frame's control snapshot.
    ///
    /// Pause tracks the controller's toggle and restart is honored only after
    /// game over; both work regardless of game state. Piece actions are
    /// skipped while paused or over, and at most one applies per frame.
    pub fn handle_controls(&mut self, controls: &Controls) {
        if controls.pause != self.stats.is_paused {
            self.stats.is_paused = controls.pause;
        }

        if controls.restart && self.stats.is_game_over {
            self.restart();
        }

        if self.stats.is_paused || self.stats.is_game_over || self.current.is_none() {
            return;
        }

        if controls.left {
            self.try_move(-1, 0);
        } else if controls.right {
            self.try_move(1, 0);
        } else if controls.down {
            self.try_move(0, 1);
        } else if controls.up {
            self.try_rotate();
        } else if controls.space {
            self.hard_drop();
        }
    }

    /// Accumulate elapsed time and apply gravity when the drop interval has
    /// passed. A piece that cannot descend on a gravity tick locks.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.stats.is_paused || self.stats.is_game_over || self.current.is_none() {
            return;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            if !self.try_move(0, 1) {
                self.lock_piece();
            }
        }
    }

    /// Try to translate the falling piece; the piece is replaced wholesale on
    /// success and untouched on collision.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let moved = current.translated(dx, dy);
        if self.board.is_valid_position(&moved) {
            self.current = Some(moved);
            return true;
        }

        false
    }

    /// Rotate the falling piece, trying the in-place rotation first and then
    /// each wall-kick offset against the rotated shape at its original
    /// position. A rotation with no valid placement leaves the piece as-is.
    pub fn try_rotate(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let rotated = current.rotate();
        if self.board.is_valid_position(&rotated) {
            self.current = Some(rotated);
            return true;
        }

        for (dx, dy) in WALL_KICKS {
            let kicked = rotated.translated(dx, dy);
            if self.board.is_valid_position(&kicked) {
                self.current = Some(kicked);
                return true;
            }
        }

        false
    }

    /// Drop the falling piece to the lowest valid position, score 2 points
    /// per cell descended, and lock immediately.
    pub fn hard_drop(&mut self) {
        if self.current.is_none() {
            return;
        }

        let mut distance = 0u32;
        while self.try_move(0, 1) {
            distance += 1;
        }

        self.stats.score += scoring::hard_drop_score(distance);
        self.lock_piece();
    }

    /// Commit the falling piece to the board, clear lines, update
    /// score/level, and spawn the next piece unless the board has topped out.
    fn lock_piece(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };

        self.board.place_piece(&current);
        let cleared = self.board.clear_lines();
        self.apply_line_clears(cleared);

        if self.board.is_game_over() {
            self.stats.is_game_over = true;
        } else {
            self.spawn_piece();
        }
    }

    fn apply_line_clears(&mut self, cleared: u32) {
        if cleared == 0 {
            return;
        }

        self.stats.lines += cleared;
        // Score uses the level in effect when the lines were cleared.
        self.stats.score += scoring::line_clear_score(cleared, self.stats.level);

        let new_level = scoring::level_for_lines(self.stats.lines);
        if new_level > self.stats.level {
            self.stats.level = new_level;
            self.drop_interval_ms = scoring::drop_interval_ms(new_level);
        }
    }

    /// Promote the lookahead piece to current at the spawn position, draw a
    /// fresh lookahead, and end the game if the spawned piece has no room.
    fn spawn_piece(&mut self) {
        let spawn_x = self.spawn_x();

        self.current = Some(match self.next.take() {
            Some(next) => Piece::new(next.kind, spawn_x, 0),
            None => Piece::new(self.generator.draw(), spawn_x, 0),
        });
        self.next = Some(Piece::new(self.generator.draw(), spawn_x, 0));

        if let Some(current) = &self.current {
            if !self.board.is_valid_position(current) {
                self.stats.is_game_over = true;
            }
        }
    }

    /// Spawn column: centers the widest bounding box; column 3 on the
    /// default 10-wide board.
    fn spawn_x(&self) -> i32 {
        (self.config.board_width as i32 - 4) / 2
    }

    /// Start over: empty board, fresh stats and timers, new pieces.
    fn restart(&mut self) {
        self.board.clear();
        self.stats = GameStats::new();
        self.drop_interval_ms = self.config.drop_interval_ms;
        self.drop_timer_ms = 0;
        self.current = None;
        self.next = None;
        self.spawn_piece();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }
}
