//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The 8 winning lines in priority order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line holding three identical marks, if any.
///
/// When more than one line is complete (only possible on boards that legal
/// play cannot reach) the earliest line in [`LINES`] wins.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}

/// Returns the mark occupying the winning line, if any.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[first, _, _]| board.get(first).mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected_alone() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(winning_line(&board), Some(line));
                assert_eq!(winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::O)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_wins_priority() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }
}
