//! Terminal setup and teardown.

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action on drop. Arm it right after raw mode is enabled so
/// every later `?` leaves the terminal usable.
pub struct TerminalGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> TerminalGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor. Failures are logged; teardown keeps going.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}
