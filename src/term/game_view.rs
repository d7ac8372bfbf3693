//! GameView: maps engine state into a terminal surface.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::piece::piece_color;
use crate::core::{Piece, PieceColor};
use crate::engine::GameEngine;
use crate::term::fb::{Rgb, Style, Surface};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, pieces, and status readouts into a `Surface`.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

fn piece_rgb(color: PieceColor) -> Rgb {
    Rgb::new(color.r, color.g, color.b)
}

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame of the game into a fresh surface.
    pub fn render(&self, engine: &GameEngine, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);

        let board = engine.board();
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(&mut surface, start_x, start_y, frame_w, frame_h, border);

        // Grid dots and locked cells.
        for y in 0..board.height() as i32 {
            for x in 0..board.width() as i32 {
                match board.get(x, y).unwrap_or(None) {
                    Some(kind) => {
                        self.draw_cell(&mut surface, start_x, start_y, x, y, piece_color(kind));
                    }
                    None => self.draw_grid_dot(&mut surface, start_x, start_y, x, y),
                }
            }
        }

        // Ghost outline under the falling piece.
        if let Some(ghost) = engine.ghost_piece() {
            let style = Style {
                fg: Rgb::new(140, 140, 140),
                bg: PLAYFIELD_BG,
                bold: false,
                dim: true,
            };
            for block in ghost.blocks() {
                if block.y >= 0 {
                    self.fill_cell_rect(&mut surface, start_x, start_y, block.x, block.y, '░', style);
                }
            }
        }

        // The falling piece itself.
        if let Some(piece) = engine.current_piece() {
            for block in piece.blocks() {
                if block.y >= 0 {
                    self.draw_cell(&mut surface, start_x, start_y, block.x, block.y, piece.color());
                }
            }
        }

        self.draw_side_panel(&mut surface, engine, viewport, start_x, start_y, frame_w);

        let stats = engine.stats();
        if stats.is_paused {
            self.draw_overlay_text(&mut surface, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if stats.is_game_over {
            self.draw_overlay_text(&mut surface, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        surface
    }

    fn draw_border(&self, surface: &mut Surface, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        surface.put_char(x, y, '┌', style);
        surface.put_char(x + w - 1, y, '┐', style);
        surface.put_char(x, y + h - 1, '└', style);
        surface.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            surface.put_char(x + dx, y, '─', style);
            surface.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            surface.put_char(x, y + dy, '│', style);
            surface.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_dot(&self, surface: &mut Surface, start_x: u16, start_y: u16, x: i32, y: i32) {
        let style = Style {
            fg: Rgb::new(70, 70, 80),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(surface, start_x, start_y, x, y, '·', style);
    }

    fn draw_cell(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        x: i32,
        y: i32,
        color: PieceColor,
    ) {
        let style = Style {
            fg: piece_rgb(color),
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(surface, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: Style,
    ) {
        if cell_x < 0 || cell_y < 0 {
            return;
        }
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16 * self.cell_h;
        surface.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        surface: &mut Surface,
        engine: &GameEngine,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let stats = engine.stats();
        let mut y = start_y;
        surface.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", stats.score), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", stats.level), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", stats.lines), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = engine.next_piece() {
            self.draw_preview(surface, next, panel_x, y);
        }
    }

    /// Draw the lookahead piece's shape matrix in a small box of its own.
    fn draw_preview(&self, surface: &mut Surface, piece: &Piece, x: u16, y: u16) {
        let style = Style {
            fg: piece_rgb(piece.color()),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (sy, row) in piece.shape.iter().enumerate().take(piece.size) {
            for (sx, &cell) in row.iter().enumerate().take(piece.size) {
                if cell != 0 {
                    let px = x + sx as u16 * self.cell_w;
                    let py = y + sy as u16 * self.cell_h;
                    surface.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                }
            }
        }
    }

    fn draw_overlay_text(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        surface.put_str(x, mid_y, text, style);
    }
}
