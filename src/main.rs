//! Blockfall runner (default binary).
//!
//! `blockfall [play]` opens the terminal game; `blockfall simulate` runs the
//! engine headless and prints its events as JSON lines.
//! Rendering uses crossterm and the framebuffer renderer from the term crate.

use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::{parse_args, GameConfig, Mode};
use blockfall::core::Engine;
use blockfall::event_log::EventLog;
use blockfall::input::{action_for_key, is_dismiss_key, should_quit};
use blockfall::session::{Session, SessionStats};
use blockfall::simulate;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GRAVITY_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let config = command.apply(GameConfig::from_env());

    let mut log = match &config.event_log {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    match command.mode {
        Mode::Simulate { ticks } => run_simulate(&config, ticks, log.as_mut()),
        Mode::Play => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config, log.as_mut());

            // Always try to restore terminal state.
            let _ = term.exit();
            let events = match log.as_mut() {
                Some(log) => {
                    log.flush()?;
                    log.written()
                }
                None => 0,
            };

            let stats = result?;
            eprintln!(
                "[blockfall] seed={} pieces={} lines={} game_overs={} events={}",
                config.seed, stats.pieces, stats.lines, stats.game_overs, events
            );
            Ok(())
        }
    }
}

fn run_simulate<W: Write>(
    config: &GameConfig,
    ticks: u32,
    mut log: Option<&mut EventLog<W>>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut lines = EventLog::new(BufWriter::new(stdout.lock()));

    let summary = simulate::run(config.seed, ticks, |record| {
        lines.record(record)?;
        if let Some(log) = log.as_mut() {
            log.record(record)?;
        }
        Ok(())
    })?;

    let mut out = lines.into_inner();
    serde_json::to_writer(&mut out, &summary)?;
    out.write_all(b"\n")?;
    out.flush()?;
    if let Some(log) = log {
        log.flush()?;
    }
    Ok(())
}

fn run<W: Write>(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    mut log: Option<&mut EventLog<W>>,
) -> Result<SessionStats> {
    let mut session = Session::new(Engine::new(config.seed));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        session.drain(log.as_deref_mut())?;

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.frame(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if session.notice_up() {
            // Modal: block until a key dismisses the notice.
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(session.stats());
                    }
                    if is_dismiss_key(key) {
                        session.dismiss();
                        last_tick = Instant::now();
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        // Input with timeout until the next gravity step.
        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(session.stats());
                    }
                    if let Some(action) = action_for_key(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
