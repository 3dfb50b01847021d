//! View models derived from a [`GameState`].
//!
//! These structs are what a front end renders. They hold no game logic.
//! Anything clickable carries the [`GameEvent`] it produces, so a host only
//! has to hand that event back to [`GameState::apply`].

use crate::game::{GameEvent, GameState, SortOrder, Status};
use crate::rules::Line;
use crate::{Board, Cell, Mark, Position};
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Text used to draw each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Glyphs {
    /// Glyph for X.
    first: String,
    /// Glyph for O.
    second: String,
}

impl Glyphs {
    /// Returns the glyph for `mark`.
    pub fn glyph(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.first,
            Mark::O => &self.second,
        }
    }

    /// Renders a status line using these glyphs.
    pub fn status_text(&self, status: Status) -> String {
        match status {
            Status::Winner(mark) => format!("Winner: {}", self.glyph(mark)),
            Status::Draw => Status::Draw.to_string(),
            Status::NextPlayer(mark) => format!("Next player: {}", self.glyph(mark)),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(Mark::X.to_string(), Mark::O.to_string())
    }
}

/// One board cell as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SquareView {
    position: Position,
    cell: Cell,
    highlighted: bool,
}

impl SquareView {
    /// Event emitted when this square is activated.
    pub fn on_activate(&self) -> GameEvent {
        GameEvent::Activate(self.position)
    }
}

/// The 3x3 grid as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    squares: [SquareView; 9],
}

impl BoardView {
    /// Builds the grid; a square is highlighted iff it is on `line`.
    #[instrument(level = "trace")]
    pub fn new(board: &Board, line: Option<Line>) -> Self {
        let squares = Position::ALL.map(|position| SquareView {
            position,
            cell: board.get(position),
            highlighted: line.is_some_and(|l| l.contains(&position)),
        });
        Self { squares }
    }

    /// All squares, row-major.
    pub fn squares(&self) -> &[SquareView; 9] {
        &self.squares
    }

    /// Square at `pos`.
    pub fn square(&self, pos: Position) -> &SquareView {
        &self.squares[pos.to_index()]
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(3)
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    step: usize,
    label: String,
    current: bool,
}

impl MoveEntry {
    /// Event emitted when this entry is selected.
    pub fn on_select(&self) -> GameEvent {
        GameEvent::JumpTo(self.step)
    }
}

/// The move list in display order.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveList {
    entries: Vec<MoveEntry>,
    order: SortOrder,
}

impl MoveList {
    /// Builds the move list for `state`.
    #[instrument(level = "trace", skip(state))]
    pub fn from_state(state: &GameState) -> Self {
        let mut entries: Vec<MoveEntry> = state
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry {
                step,
                label: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{} {}", step, entry.location_label())
                },
                current: step == state.step(),
            })
            .collect();
        if state.order() == SortOrder::Descending {
            entries.reverse();
        }
        Self {
            entries,
            order: state.order(),
        }
    }

    /// Display index of the live entry.
    pub fn current_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.current)
    }

    /// Label for the order toggle.
    pub fn toggle_label(&self) -> &'static str {
        self.order.label()
    }

    /// Event emitted by the order toggle.
    pub fn on_toggle(&self) -> GameEvent {
        GameEvent::ToggleOrder
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    board: BoardView,
    status: Status,
    status_text: String,
    moves: MoveList,
}

impl GameView {
    /// Derives the view for `state`.
    #[instrument(level = "trace", skip(state, glyphs))]
    pub fn new(state: &GameState, glyphs: &Glyphs) -> Self {
        let status = state.status();
        Self {
            board: BoardView::new(state.current_board(), state.winning_line()),
            status,
            status_text: glyphs.status_text(status),
            moves: MoveList::from_state(state),
        }
    }
}
