//! Terminal UI: key handling, app state and rendering.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::draw;

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the player quits.
///
/// Once raw mode is on, the terminal is restored on every exit path before
/// any error is returned.
#[instrument(skip(config))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Enabling raw mode")?;
    with_restore(|| play(config), restore_terminal)
}

/// Runs `session`, then always runs `restore`.
///
/// A session error is returned ahead of a restore error; the restore error
/// is still logged.
fn with_restore(
    session: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let res = session();
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }

    res?;
    restored.context("Restoring terminal")
}

fn restore_terminal() -> io::Result<()> {
    // Attempt every step even if an earlier one fails.
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn play(config: &TuiConfig) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config);
    let res = run_game(&mut terminal, &mut app, config);
    info!(moves = app.store().history().len() - 1, "Rewind TUI exited");
    res
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(config.tick_rate())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match action_for(key.code) {
                Some(action) => app.handle_action(action),
                None => debug!(key = ?key.code, "Unbound key"),
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
