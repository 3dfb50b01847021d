//! Move history for time-travel.
//!
//! Entry `i` holds the board after the `i`-th move; entry 0 is the empty
//! board. Entries are never edited. The only way an entry disappears is
//! [`History::branch`], which drops everything after the step being played
//! from before appending the new snapshot.

use crate::{Board, Position};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

/// One snapshot in the history, with the location of the move that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played; `None` for the initial entry.
    location: Option<Position>,
}

impl HistoryEntry {
    /// The initial entry: an empty board with no move location.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Human-readable location, `"(col, row)"`, or empty for the initial entry.
    pub fn location_label(&self) -> String {
        self.location.map(Position::location).unwrap_or_default()
    }
}

/// Ordered sequence of [`HistoryEntry`] values. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Keeps entries `0..=step`, appends `entry`, and returns its index.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let keep = (step + 1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(dropped = self.entries.len() - keep, "Discarding future history");
        }
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn entry(pos: Position) -> HistoryEntry {
        HistoryEntry::new(Board::new().with_mark(pos, Mark::X), Some(pos))
    }

    #[test]
    fn test_initial_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_step(), 0);
        assert_eq!(history.entries()[0].location_label(), "");
    }

    #[test]
    fn test_branch_at_tip_appends() {
        let mut history = History::new();
        assert_eq!(history.branch(0, entry(Position::Center)), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].location_label(), "(2, 2)");
    }

    #[test]
    fn test_branch_in_past_truncates() {
        let mut history = History::new();
        history.branch(0, entry(Position::Center));
        history.branch(1, entry(Position::TopLeft));
        history.branch(2, entry(Position::TopRight));

        let step = history.branch(1, entry(Position::BottomRight));
        assert_eq!(step, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(*history.entries()[2].location(), Some(Position::BottomRight));
    }
}
