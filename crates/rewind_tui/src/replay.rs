//! Headless play: apply a move list and print what the UI would show.

use rewind_tictactoe::{GameStore, GameView};
use tracing::{debug, instrument};

/// Plays `moves` from a fresh game, then jumps to `jump` if given.
///
/// Moves and jumps that the game rejects are skipped.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> GameStore {
    let mut store = GameStore::new();
    for &cell in moves {
        if let Err(e) = store.try_apply_move(cell) {
            debug!(cell, error = %e, "Skipping move");
        }
    }
    if let Some(index) = jump {
        store.jump_to(index);
    }
    store
}

/// Renders a view as plain text: board, status, then the move list.
///
/// The current history entry is prefixed with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board.display();
    out.push_str("\n\n");
    out.push_str(&view.status.to_string());
    out.push_str("\n\n");

    for entry in &view.history {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}", marker, entry.index, entry.description));
        if let Some((pos, player)) = entry.placed {
            out.push_str(&format!(" ({} {})", player, pos.label()));
        }
        out.push('\n');
    }
    out
}

/// Renders a view as pretty-printed JSON.
pub fn render_json(view: &GameView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_moves_are_skipped() {
        let store = replay(&[4, 4, 9, 0], None);
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_jump_applies_after_moves() {
        let store = replay(&[4, 0, 8], Some(1));
        assert_eq!(store.current_move(), 1);
        assert_eq!(store.history().len(), 4);
    }
}
