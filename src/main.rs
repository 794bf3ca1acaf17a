//! Terminal raycaster runner (default binary).
//!
//! Renders the first-person view into a pixel buffer, folds pixel pairs into
//! half-block cells and flushes them through the diffing terminal renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, warn};

use tui_raycaster::cli::{self, Cli};
use tui_raycaster::core::Session;
use tui_raycaster::input::{should_quit, HeldKeys};
use tui_raycaster::logging;
use tui_raycaster::term::{pixel_viewport, FrameBuffer, GameView, Hud, PixelBuffer, TerminalRenderer};
use tui_raycaster::types::TILE_SIZE;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_path(), cli.verbose)?;

    let seed = cli.seed.unwrap_or_else(cli::clock_seed);
    let (grid, source) = cli
        .map_source(seed)
        .load_or_default(TILE_SIZE)
        .context("failed to load map")?;
    info!(map = source.label(), seed, fps = cli.fps, "starting");

    // Build the session before touching the terminal so config errors print normally.
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut session = Session::new(grid, pixel_viewport(cols, rows), cli.settings())
        .context("failed to set up session")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &cli, source.label());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "session aborted");
    }
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, cli: &Cli, map: &'static str) -> Result<()> {
    let mut held = HeldKeys::new();
    if term.reports_key_release() {
        held = held.with_release_events();
    }

    let view = GameView::default();
    let viewport = session.viewport();
    let mut pixels = PixelBuffer::new(viewport.width, viewport.height);
    let mut fb = FrameBuffer::new(0, 0);
    let mut meter = FpsMeter::new(Instant::now());

    let frame_duration = cli.frame_duration();
    // Backdate so the first frame renders immediately.
    let mut last_frame = Instant::now()
        .checked_sub(frame_duration)
        .unwrap_or_else(Instant::now);

    loop {
        // Frame.
        if last_frame.elapsed() >= frame_duration {
            let now = Instant::now();
            last_frame = now;

            let viewport = session.viewport();
            pixels.resize(viewport.width, viewport.height);
            let stats = session.tick(held.update(now), &mut pixels);

            let hud = Hud {
                map,
                x: stats.pose.x,
                y: stats.pose.y,
                angle: stats.pose.angle,
                fps: meter.frame(now),
            };
            view.render_into(&pixels, Some(&hud), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    held.handle_key_event(key, Instant::now());
                }
                Event::Resize(cols, rows) => {
                    let viewport = pixel_viewport(cols, rows);
                    // An unusable size keeps the last layout until the terminal grows again.
                    if let Err(err) = session.resize(viewport) {
                        warn!(cols, rows, error = %err, "resize rejected, keeping previous layout");
                    }
                    term.invalidate();
                }
                Event::FocusLost => held.clear(),
                _ => {}
            }
        }
    }
}

/// Frames counted over one-second windows.
struct FpsMeter {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsMeter {
    fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0,
        }
    }

    fn frame(&mut self, now: Instant) -> u32 {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
            self.frames = 0;
            self.window_start = now;
        }
        self.fps
    }
}
