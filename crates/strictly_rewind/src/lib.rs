//! Strictly Rewind - tic-tac-toe with move history and time-travel.
//!
//! This crate is host-agnostic: it knows nothing about terminals or
//! windows. A front end holds one [`GameState`], feeds it [`GameEvent`]s,
//! and draws the [`GameView`] derived from it.
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameEvent, GameState, Position, Status, Mark};
//!
//! let state = GameState::new()
//!     .apply(GameEvent::Activate(Position::Center))
//!     .apply(GameEvent::Activate(Position::TopLeft))
//!     .apply(GameEvent::JumpTo(1));
//!
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.status(), Status::NextPlayer(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use game::{GameEvent, GameState, SortOrder, Status};
pub use history::{History, HistoryEntry};
pub use position::{Position, PositionError};
pub use rules::{LINES, Line, winning_line};
pub use types::{Board, Cell, Mark};
pub use view::{BoardView, GameView, Glyphs, MoveEntry, MoveList, SquareView};
