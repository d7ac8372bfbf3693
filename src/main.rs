//! Terminal blockfall runner.
//!
//! Fixed-timestep loop: draw the current frame, poll input with a timeout
//! until the next tick, feed press/release events to the timing controller,
//! and run one engine frame per tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::engine::{GameConfig, GameEngine};
use blockfall::input::{map_key, should_quit, InputController};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut engine = GameEngine::new(GameConfig::default(), seed);
    let mut input = InputController::new();
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let surface = view.render(&engine, Viewport::new(w, h));
        term.draw(&surface)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(logical) = map_key(key.code) {
                            input.press(logical);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; the controller owns
                        // repeat timing.
                    }
                    KeyEventKind::Release => {
                        if let Some(logical) = map_key(key.code) {
                            input.release(logical);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.frame(TICK_MS, &mut input);
        }
    }
}
