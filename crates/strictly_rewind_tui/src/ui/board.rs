//! Board and square rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strictly_rewind::{BoardView, Cell, Glyphs, Mark, Position, SquareView};

use super::layout::Regions;

/// Renders the 3x3 grid, highlighting the winning line and the cursor.
pub fn render_board(
    frame: &mut Frame,
    regions: &Regions,
    board: &BoardView,
    cursor: Position,
    glyphs: &Glyphs,
) {
    for square in board.squares() {
        let area = regions.squares[square.position().to_index()];
        render_square(frame, area, square, *square.position() == cursor, glyphs);
    }
    for area in regions.row_separators {
        render_separator(frame, area);
    }
    for area in regions.column_separators {
        render_separator_vertical(frame, area);
    }
}

/// Renders one square. Highlighted squares get a yellow background.
pub fn render_square(
    frame: &mut Frame,
    area: Rect,
    square: &SquareView,
    focused: bool,
    glyphs: &Glyphs,
) {
    let (symbol, base_style) = match square.cell() {
        Cell::Empty => (
            (square.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            glyphs.glyph(Mark::X).to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            glyphs.glyph(Mark::O).to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if *square.highlighted() {
        base_style.bg(Color::Yellow)
    } else {
        base_style
    };
    let style = if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    // Vertically center the glyph inside the cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(lines)
        .style(if *square.highlighted() {
            Style::default().bg(Color::Yellow)
        } else {
            Style::default()
        })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
