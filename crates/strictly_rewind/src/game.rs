//! Game controller: state plus a pure transition function.
//!
//! [`GameState`] owns the history, the live step, whose turn it is and the
//! move-list order. Every change goes through [`GameState::apply`], which
//! takes a [`GameEvent`] and returns the next state. Illegal events come back
//! unchanged. Nothing derived (winner, status) is stored.

use crate::history::{History, HistoryEntry};
use crate::rules::{self, Line};
use crate::{Board, Mark, Position};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Input to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A board cell was activated.
    Activate(Position),
    /// Travel to the given history step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleOrder,
}

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Chronological.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label shown on the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Normal",
            Self::Descending => "Reversed",
        }
    }
}

/// Outcome of the live snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full, no line.
    #[display("It's a draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    step: usize,
    x_is_next: bool,
    order: SortOrder,
}

impl GameState {
    /// Creates a new game: empty board, X to move, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            x_is_next: true,
            order,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the live step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// Returns the live history entry.
    pub fn current(&self) -> &HistoryEntry {
        // step is kept in range by every transition
        &self.history.entries()[self.step]
    }

    /// Returns the live board snapshot.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Winning line on the live board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.current_board())
    }

    /// Status of the live board.
    #[instrument(level = "trace", skip(self), fields(step = self.step))]
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(mark) = rules::winner(board) {
            Status::Winner(mark)
        } else if rules::is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// Applies an event and returns the resulting state.
    ///
    /// Events whose preconditions fail return the state unchanged.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply(self, event: GameEvent) -> Self {
        match event {
            GameEvent::Activate(pos) => self.activate(pos),
            GameEvent::JumpTo(step) => self.jump_to(step),
            GameEvent::ToggleOrder => self.toggle_order(),
        }
    }

    fn activate(mut self, pos: Position) -> Self {
        let board = *self.current_board();
        if rules::winning_line(&board).is_some() {
            debug!(position = ?pos, "Ignoring move: game already decided");
            return self;
        }
        if !board.is_empty(pos) {
            debug!(position = ?pos, "Ignoring move: cell occupied");
            return self;
        }

        let mark = self.to_move();
        let next = board.with_mark(pos, mark);
        self.step = self.history.branch(self.step, HistoryEntry::new(next, Some(pos)));
        self.x_is_next = !self.x_is_next;
        debug!(position = ?pos, %mark, step = self.step, board = %next, "Move applied");
        self
    }

    fn jump_to(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "Ignoring jump: no such step");
            return self;
        }
        self.step = step;
        self.x_is_next = Mark::to_move_after(step) == Mark::X;
        debug!(step, "Jumped");
        self
    }

    fn toggle_order(mut self) -> Self {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move list order toggled");
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
