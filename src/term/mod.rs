//! Terminal rendering module.
//!
//! Renders into a plain character surface that is flushed to the terminal
//! with diffed updates. `fb` and `game_view` are pure; `renderer` owns the
//! actual terminal session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Glyph, Rgb, Style, Surface};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
