//! Screen regions shared by rendering and mouse hit-testing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use strictly_rewind::Position;
use tracing::instrument;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board square.
    Square(Position),
    /// A move-list row, by display index.
    Move(usize),
    /// The sort-order toggle.
    Toggle,
}

/// Every region drawn on screen for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Board squares, row-major.
    pub squares: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per board row.
    pub column_separators: [Rect; 6],
    /// Status line.
    pub status: Rect,
    /// Sort-order toggle.
    pub toggle: Rect,
    /// Move list, including its border.
    pub moves: Rect,
    /// One rect per visible move-list row. Row `i` shows entry
    /// `move_offset + i`.
    pub move_rows: Vec<Rect>,
    /// Display index of the first visible move-list entry.
    pub move_offset: usize,
    /// Key help line.
    pub help: Rect,
}

impl Regions {
    /// Lays out a frame of size `area` showing `move_count` history entries.
    ///
    /// When the list is taller than its box, the window scrolls so the entry
    /// at display index `current` stays visible.
    #[instrument]
    pub fn compute(area: Rect, move_count: usize, current: Option<usize>) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 6), Constraint::Min(0)])
            .split(outer[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Toggle
                Constraint::Min(0),    // Moves
            ])
            .split(body[1]);

        let (squares, row_separators, column_separators) = board_cells(body[0]);

        let inner = Block::default().borders(Borders::ALL).inner(info[2]);
        let visible = move_count.min(inner.height as usize);
        let move_offset = match current {
            Some(c) if visible > 0 && c >= visible => (c + 1 - visible).min(move_count - visible),
            _ => 0,
        };
        let move_rows = (0..visible)
            .map(|i| Rect::new(inner.x, inner.y + i as u16, inner.width, 1))
            .collect();

        Self {
            title: outer[0],
            squares,
            row_separators,
            column_separators,
            status: info[0],
            toggle: info[1],
            moves: info[2],
            move_rows,
            move_offset,
            help: outer[2],
        }
    }

    /// Finds what lies under the terminal cell `(column, row)`.
    #[instrument(skip(self))]
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some(i) = self.squares.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(i).map(Hit::Square);
        }
        if let Some(i) = self.move_rows.iter().position(|r| contains(*r, column, row)) {
            return Some(Hit::Move(self.move_offset + i));
        }
        contains(self.toggle, column, row).then_some(Hit::Toggle)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn board_cells(area: Rect) -> ([Rect; 9], [Rect; 2], [Rect; 6]) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut squares = [Rect::default(); 9];
    let mut column_separators = [Rect::default(); 6];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        squares[r * 3] = cols[0];
        squares[r * 3 + 1] = cols[2];
        squares[r * 3 + 2] = cols[4];
        column_separators[r * 2] = cols[1];
        column_separators[r * 2 + 1] = cols[3];
    }

    (squares, [rows[1], rows[3]], column_separators)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_squares_are_row_major_and_disjoint() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), 1, Some(0));
        for pos in Position::ALL {
            let (x, y) = center(regions.squares[pos.to_index()]);
            assert_eq!(regions.hit(x, y), Some(Hit::Square(pos)));
        }
        assert!(regions.squares[0].x < regions.squares[1].x);
        assert!(regions.squares[0].y < regions.squares[3].y);
    }

    #[test]
    fn test_move_rows_follow_move_count() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), 4, Some(3));
        assert_eq!(regions.move_rows.len(), 4);
        let (x, y) = center(regions.move_rows[2]);
        assert_eq!(regions.hit(x, y), Some(Hit::Move(2)));
    }

    #[test]
    fn test_move_window_scrolls_to_current() {
        // Two rows fit in the move box at this height.
        let area = Rect::new(0, 0, 80, 16);
        let top = Regions::compute(area, 10, Some(1));
        assert_eq!(top.move_rows.len(), 2);
        assert_eq!(top.move_offset, 0);

        let middle = Regions::compute(area, 10, Some(7));
        assert_eq!(middle.move_offset, 6);
        let (x, y) = center(middle.move_rows[1]);
        assert_eq!(middle.hit(x, y), Some(Hit::Move(7)));

        let bottom = Regions::compute(area, 10, Some(9));
        assert_eq!(bottom.move_offset, 8);
        let (x, y) = center(bottom.move_rows[0]);
        assert_eq!(bottom.hit(x, y), Some(Hit::Move(8)));
    }

    #[test]
    fn test_toggle_and_empty_space() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), 1, Some(0));
        let (x, y) = center(regions.toggle);
        assert_eq!(regions.hit(x, y), Some(Hit::Toggle));
        let (x, y) = center(regions.title);
        assert_eq!(regions.hit(x, y), None);
    }
}
