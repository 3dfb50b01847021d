//! Core domain types for tic-tac-toe.

use crate::position::Position;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark whose turn it is after `moves` moves have been played.
    pub fn to_move_after(moves: usize) -> Self {
        if moves % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// A snapshot of the 3x3 board.
///
/// Cells are stored row-major, so the cell at `(col, row)` lives at
/// index `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// The receiver is left untouched, so snapshots already stored in a
    /// history never change.
    #[instrument(level = "trace")]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, Cell::Occupied(mark));
        next
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Cell::Empty => write!(f, "{}", i + 1)?,
                Cell::Occupied(mark) => write!(f, "{}", mark)?,
            }
            if i % 3 < 2 {
                write!(f, "|")?;
            } else if i < 8 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.mark_count(), 1);
    }

    #[test]
    fn test_to_move_after() {
        assert_eq!(Mark::to_move_after(0), Mark::X);
        assert_eq!(Mark::to_move_after(1), Mark::O);
        assert_eq!(Mark::to_move_after(4), Mark::X);
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
