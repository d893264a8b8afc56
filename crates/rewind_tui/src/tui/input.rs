//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the history highlight.
    Navigate(Direction),
    /// Place at the cursor, or jump to the highlighted history entry.
    Confirm,
    /// Place directly at a square index (0-8).
    PlaceAt(usize),
    /// Switch focus between board and history.
    ToggleFocus,
    /// Step back one move.
    Undo,
    /// Start over.
    Reset,
    /// Leave the UI.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::Navigate(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Navigate(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Navigate(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Navigate(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char(c @ '1'..='9') => Action::PlaceAt(c as usize - '1' as usize),
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Char('u') | KeyCode::Backspace => Action::Undo,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
