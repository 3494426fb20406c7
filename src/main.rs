//! Terminal runner (default binary).
//!
//! Wires crossterm input and the framebuffer renderer to a [`GameSession`],
//! with a [`GravityTimer`] turning wall time into ticks.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, trace};

use blockfall::core::{GameSession, GameSnapshot, GravityTimer};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when one is configured. Stderr would draw over the
/// alternate screen, so without a file nothing is installed.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = match config.seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };
    session.start();
    info!(seed = ?config.seed, "session started");

    let mut timer = GravityTimer::new(&session);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        let cells = term.present(&fb)?;
        if cells > 0 {
            trace!(cells, "presented frame");
        }

        // Input with timeout until the next frame.
        let timeout = (last + frame).saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let changed = session.apply(command);
                        trace!(command = command.as_str(), changed, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. Whole milliseconds only; the remainder carries over.
        let elapsed_ms = last.elapsed().as_millis();
        if elapsed_ms > 0 {
            let elapsed_ms = u32::try_from(elapsed_ms).unwrap_or(u32::MAX);
            last += Duration::from_millis(elapsed_ms as u64);
            timer.advance(elapsed_ms, &mut session);
        }

        if let Some(event) = session.take_last_event() {
            debug!(
                lines = event.lines_cleared,
                points = event.points,
                level_up = event.level_up,
                score = session.score(),
                "lock"
            );
        }
    }
}
