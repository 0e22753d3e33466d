//! Terminal UI: terminal setup, event loop and rendering.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, Focus, Hitboxes};
pub use input::{digit_position, move_cursor};
pub use terminal::{TerminalGuard, install_panic_hook, restore_terminal};
pub use ui::draw;

use anyhow::Result;
use crossterm::event;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::{AppConfig, GameController};

/// Routes tracing output to the configured log file.
///
/// Logging to the terminal would corrupt the alternate screen, so events go
/// to a file with ANSI colours disabled. `RUST_LOG` wins over the configured
/// filter.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game in the terminal until the user quits.
///
/// The terminal is restored on every exit path: normal quit and loop errors
/// through [`TerminalGuard`], panics through the hook from
/// [`install_panic_hook`].
#[instrument(skip_all, fields(sort_order = %config.sort_order()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter(io::stdout())?;
    install_panic_hook();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(GameController::new(*config.sort_order()));
    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, &mut app, tick_rate);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.controller().history().len() - 1, "Leaving tic-tac-toe TUI");
    res
}

/// Draw, wait for one event, apply it; repeat until quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(tick_rate)? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}
