//! Terminal front end for Strictly Rewind.
//!
//! The game itself lives in [`strictly_rewind`]; this crate draws it with
//! ratatui and turns keyboard and mouse input into game events.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};
pub use input::{Action, action_for_key, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{self, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use crate::terminal::{TerminalGuard, restore_terminal};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_tui(config: TuiConfig) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Draw, block for input, apply, repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}
