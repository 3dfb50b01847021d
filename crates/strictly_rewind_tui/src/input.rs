//! Keyboard handling: cursor movement and key bindings.

use crossterm::event::KeyCode;
use strictly_rewind::{GameEvent, GameState, Position};
use tracing::instrument;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the game.
    Game(GameEvent),
    /// Move the board cursor.
    Cursor(Position),
    /// Leave the app.
    Quit,
}

/// Moves cursor based on arrow keys. Edges do not wrap.
#[instrument]
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.column(), cursor.row());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (c, row)),
        KeyCode::Right => Some((col + 1, row)),
        KeyCode::Up => row.checked_sub(1).map(|r| (col, r)),
        KeyCode::Down => Some((col, row + 1)),
        _ => None,
    };
    target
        .and_then(|(c, r)| Position::from_coords(c, r))
        .unwrap_or(cursor)
}

/// Maps a key to an [`Action`], given the cursor and the current game.
#[instrument(skip(state), fields(step = state.step()))]
pub fn action_for_key(key: KeyCode, cursor: Position, state: &GameState) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Game(GameEvent::Activate(cursor))),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::try_from(d as usize - 1).ok())
            .map(|pos| Action::Game(GameEvent::Activate(pos))),
        KeyCode::Char('[') => state
            .step()
            .checked_sub(1)
            .map(|step| Action::Game(GameEvent::JumpTo(step))),
        KeyCode::Char(']') => Some(Action::Game(GameEvent::JumpTo(state.step() + 1))),
        KeyCode::Home => Some(Action::Game(GameEvent::JumpTo(0))),
        KeyCode::End => Some(Action::Game(GameEvent::JumpTo(
            state.history().last_step(),
        ))),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Game(GameEvent::ToggleOrder)),
        _ => None,
    }
}
