//! Application state and input dispatch.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_rewind::{GameEvent, GameState, GameView, Glyphs, Position};
use tracing::{debug, info, instrument};

use crate::config::TuiConfig;
use crate::input::{Action, action_for_key};
use crate::ui::{Hit, Regions};

/// Main application state.
///
/// Owns the single [`GameState`]. All game changes go through
/// [`App::dispatch`].
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    glyphs: Glyphs,
    should_quit: bool,
}

impl App {
    /// Creates a new application from config.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: GameState::with_order(*config.initial_order()),
            cursor: Position::Center,
            glyphs: config.glyphs(),
            should_quit: false,
        }
    }

    /// Gets the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the mark glyphs.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derives the view for the current frame.
    pub fn view(&self) -> GameView {
        GameView::new(&self.state, &self.glyphs)
    }

    /// Applies a game event.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        debug!(step = self.state.step(), status = %self.state.status(), "State updated");
    }

    /// Handles a key press. Release events are ignored.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match action_for_key(key.code, self.cursor, &self.state) {
            Some(Action::Game(event)) => {
                if let GameEvent::Activate(pos) = event {
                    self.cursor = pos;
                }
                self.dispatch(event);
            }
            Some(Action::Cursor(pos)) => self.cursor = pos,
            Some(Action::Quit) => {
                info!("User quit");
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Handles a mouse event on a frame of size `area`.
    ///
    /// Only left-button presses do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let view = self.view();
        let regions = Regions::compute(
            area,
            view.moves().entries().len(),
            view.moves().current_index(),
        );
        let event = match regions.hit(mouse.column, mouse.row) {
            Some(Hit::Square(pos)) => {
                self.cursor = pos;
                Some(view.board().square(pos).on_activate())
            }
            Some(Hit::Move(i)) => view.moves().entries().get(i).map(|e| e.on_select()),
            Some(Hit::Toggle) => Some(view.moves().on_toggle()),
            None => None,
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }
}
