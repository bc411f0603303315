//! Terminal Columns runner (default binary).
//!
//! Owns the wall clock: the session only ever sees milliseconds since start.
//! Uses crossterm for input and the framebuffer renderer from `columns-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_columns::core::{GameConfig, GameSession, GameSnapshot};
use tui_columns::input::{handle_key_event, should_quit};
use tui_columns::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_columns::types::TICK_MS;

/// Static screens (title, game over) redraw at most this often.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    tui_columns::logging::init_from_env()?;
    let config = GameConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut session = GameSession::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let is_static = !snap.phase.is_playing();
        if throttle.should_render(now_ms(), snap.fingerprint(), is_static) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until the next tick or paced step, whichever
        // comes first.
        let mut timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if let Some(due_ms) = session.next_deadline_ms() {
            timeout = timeout.min(Duration::from_millis(due_ms.saturating_sub(now_ms())));
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action, now_ms());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let now = now_ms();
        let step_due = session.next_deadline_ms().is_some_and(|due_ms| due_ms <= now);
        if step_due || last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(now);
        }
    }
}
