//! Raw mode, alternate screen and mouse capture, undone on every exit.

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, error};

/// Puts the terminal into game mode and restores it when dropped.
///
/// The guard exists as soon as raw mode is on, so a failure while entering
/// the alternate screen still unwinds through [`Drop`].
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    writer: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, the alternate screen and mouse capture on `writer`.
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { writer };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered game mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut self.writer) {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor.
///
/// Every step runs even if an earlier one fails; the first error is
/// returned.
pub fn restore_terminal<W: Write>(writer: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        writer,
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    );
    raw.and(screen)
}

/// Restores the terminal before the default panic report is printed.
///
/// Without this the message lands on the alternate screen and vanishes.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        hook(info);
    }));
}
