//! UI rendering using ratatui.
//!
//! Rendering is a pure function of [`App`]: every frame re-derives the
//! [`GameView`](strictly_rewind::GameView) and lays it out with [`Regions`].

mod board;
mod layout;
mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_rewind::Status;

pub use board::{render_board, render_square};
pub use layout::{Hit, Regions};
pub use moves::{render_moves, render_toggle};

const HELP: &str =
    "Click or 1-9/Enter: move | [ ]: step | Home/End | s: order | q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let regions = Regions::compute(
        frame.area(),
        view.moves().entries().len(),
        view.moves().current_index(),
    );

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    render_board(frame, &regions, view.board(), app.cursor(), app.glyphs());

    let status_color = match view.status() {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status_text().as_str())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    render_toggle(frame, &regions, view.moves());
    render_moves(frame, &regions, view.moves());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}
