//! Move list and sort-order toggle.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_rewind::MoveList;

use super::layout::Regions;

/// Renders the visible window of the move history. The live step is bold.
pub fn render_moves(frame: &mut Frame, regions: &Regions, moves: &MoveList) {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    frame.render_widget(block, regions.moves);

    let window = moves.entries().iter().skip(regions.move_offset);
    for (entry, area) in window.zip(regions.move_rows.iter()) {
        let style = if *entry.current() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if *entry.current() { "> " } else { "  " };
        let row = Paragraph::new(Line::styled(format!("{}{}", marker, entry.label()), style));
        frame.render_widget(row, *area);
    }
}

/// Renders the sort-order toggle button.
pub fn render_toggle(frame: &mut Frame, regions: &Regions, moves: &MoveList) {
    let button = Paragraph::new(format!("[ {} ]", moves.toggle_label()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Order (s)"));
    frame.render_widget(button, regions.toggle);
}
