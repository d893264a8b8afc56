//! Application state and logic.

use super::input::{Action, Direction, move_cursor};
use crate::config::TuiConfig;
use rewind_tictactoe::{GameStore, GameView, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history highlight.
    History,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    store: GameStore,
    cursor: Position,
    focus: Focus,
    history_selection: usize,
    always_allow_reset: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_store(GameStore::new(), *config.always_allow_reset())
    }

    /// Creates an application around an existing store.
    pub fn with_store(store: GameStore, always_allow_reset: bool) -> Self {
        let history_selection = store.current_move();
        Self {
            store,
            cursor: Position::Center,
            focus: Focus::Board,
            history_selection,
            always_allow_reset,
            should_quit: false,
        }
    }

    /// Gets the game store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted history entry.
    pub fn history_selection(&self) -> usize {
        self.history_selection
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true if the reset key does anything right now.
    pub fn reset_available(&self) -> bool {
        self.always_allow_reset || self.store.status().is_terminal()
    }

    /// Returns the render output of the game.
    pub fn view(&self) -> GameView {
        self.store.view()
    }

    /// Applies one player action.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Navigate(direction) => self.navigate(direction),
            Action::Confirm => match self.focus {
                Focus::Board => self.store.apply_move(self.cursor.to_index()),
                Focus::History => self.store.jump_to(self.history_selection),
            },
            Action::PlaceAt(cell) => {
                self.store.apply_move(cell);
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            Action::Undo => self.store.undo_last(),
            Action::Reset => {
                if self.reset_available() {
                    self.store.reset();
                } else {
                    debug!("Reset unavailable while the game is in progress");
                }
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }

        if !matches!(action, Action::Navigate(_)) {
            self.history_selection = self.store.current_move();
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.store.history().len() - 1;
                self.history_selection = match direction {
                    Direction::Up => self.history_selection.saturating_sub(1),
                    Direction::Down => (self.history_selection + 1).min(last),
                    Direction::Left | Direction::Right => self.history_selection,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_confirm_places_at_cursor() {
        let mut app = app();
        app.handle_action(Action::Navigate(Direction::Up));
        app.handle_action(Action::Confirm);
        assert_eq!(app.store().history().placed_at(1), Some((1, rewind_tictactoe::Player::X)));
        assert_eq!(app.history_selection(), 1);
    }

    #[test]
    fn test_history_navigation_stays_in_range() {
        let mut app = app();
        app.handle_action(Action::PlaceAt(0));
        app.handle_action(Action::ToggleFocus);
        app.handle_action(Action::Navigate(Direction::Down));
        app.handle_action(Action::Navigate(Direction::Down));
        assert_eq!(app.history_selection(), 1);
        app.handle_action(Action::Navigate(Direction::Up));
        app.handle_action(Action::Navigate(Direction::Up));
        assert_eq!(app.history_selection(), 0);
    }
}
