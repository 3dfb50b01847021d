//! Named board positions.

use derive_more::{Display, Error};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based column and row.
    pub fn from_coords(col: usize, row: usize) -> Option<Self> {
        if col < 3 && row < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based column (0 = left).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Zero-based row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Human-readable location label, `"(col, row)"` with 1-based coordinates.
    #[instrument]
    pub fn location(self) -> String {
        format!("({}, {})", self.column() + 1, self.row() + 1)
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
            .ok_or_else(|| PositionError::new(format!("Index {} out of range (must be 0-8)", index)))
    }
}

/// Invalid board position.
#[derive(Debug, Clone, Display, Error)]
#[display("Position error: {} at {}:{}", message, file, line)]
pub struct PositionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
