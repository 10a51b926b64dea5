//! The paced terminal loop and its headless twin.

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    Terminal,
};
use tracing::{error, info, warn};

use super::palette::Palette;
use super::widget::BoardWidget;
use crate::sim::{RunStats, Simulation};

/// What a key press asks the loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Quit,
    TogglePause,
    Reseed,
    Ignore,
}

impl Control {
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _)
            | (KeyCode::Char('q'), _)
            | (KeyCode::Char('Q'), _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Control::Quit,
            (KeyCode::Char(' '), _) => Control::TogglePause,
            (KeyCode::Char('r'), _) | (KeyCode::Char('R'), _) => Control::Reseed,
            _ => Control::Ignore,
        }
    }
}

/// Run interactively until the user quits.
///
/// The terminal is restored on every exit path, errors included.
pub fn run_terminal(sim: &mut Simulation, palette: &Palette) -> Result<RunStats> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(err).context("failed to enter alternate screen");
    }

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .context("failed to build terminal backend")
        .and_then(|mut terminal| {
            terminal.hide_cursor().ok();
            terminal.clear().ok();
            let outcome = event_loop(&mut terminal, sim, palette);
            terminal.show_cursor().ok();
            if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
                error!(?err, "failed to leave alternate screen");
            }
            outcome
        });

    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }

    if let Ok(stats) = &result {
        info!(
            ticks = stats.ticks,
            reseeds = stats.reseeds,
            births_per_tick = stats.births_per_tick(),
            final_population = stats.final_population,
            "terminal run finished"
        );
    }
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sim: &mut Simulation,
    palette: &Palette,
) -> Result<RunStats> {
    let interval = sim.config().tick_interval();
    let mut stats = RunStats::new();
    let mut paused = false;
    let mut deadline = Instant::now();

    loop {
        if !paused {
            stats.record(&sim.tick());
        }
        draw(terminal, sim, palette)?;

        deadline += interval;
        // Input is only handled between ticks.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("failed to poll terminal events")? {
                break;
            }
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match Control::from_key(key) {
                    Control::Quit => return Ok(stats),
                    Control::TogglePause => paused = !paused,
                    Control::Reseed => {
                        sim.reseed();
                        draw(terminal, sim, palette)?;
                    }
                    Control::Ignore => {}
                },
                Event::Resize(width, height) => {
                    if let Err(err) = sim.resize(u32::from(width), u32::from(height)) {
                        warn!(%err, "ignoring terminal resize");
                    }
                }
                _ => {}
            }
        }

        // Don't try to catch up after a stall.
        let now = Instant::now();
        if now > deadline + interval {
            deadline = now;
        }
    }
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, sim: &Simulation, palette: &Palette) -> Result<()> {
    terminal
        .draw(|frame| frame.render_widget(BoardWidget::new(sim.board(), palette), frame.area()))
        .context("failed to draw frame")?;
    Ok(())
}

/// Run a fixed number of ticks without a real terminal.
///
/// Frames are still drawn into an in-memory backend of the simulation's
/// size, so rendering is exercised without touching stdout.
pub fn run_headless(sim: &mut Simulation, palette: &Palette, frames: usize) -> Result<RunStats> {
    let width = u16::try_from(sim.config().width).unwrap_or(u16::MAX);
    let height = u16::try_from(sim.config().height).unwrap_or(u16::MAX);
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).context("failed to build test backend")?;

    let mut stats = RunStats::new();
    for _ in 0..frames {
        stats.record(&sim.tick());
        draw(&mut terminal, sim, palette)?;
    }

    info!(
        frames,
        reseeds = stats.reseeds,
        births_per_tick = stats.births_per_tick(),
        peak_population = stats.peak_population,
        final_population = stats.final_population,
        "headless run finished"
    );
    Ok(stats)
}

/// Frame budget from `CONWAY_HEADLESS_FRAMES`, if set to a positive number.
#[must_use]
pub fn headless_frames_from_env() -> Option<usize> {
    std::env::var("CONWAY_HEADLESS_FRAMES")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|frames| *frames > 0)
}
