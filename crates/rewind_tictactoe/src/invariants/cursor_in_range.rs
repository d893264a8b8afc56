//! Cursor invariant: the current move names a snapshot.

use super::super::GameStore;
use super::Invariant;

/// Invariant: `current_move < history.len()`.
pub struct CursorInRangeInvariant;

impl Invariant<GameStore> for CursorInRangeInvariant {
    fn holds(store: &GameStore) -> bool {
        store.current_move() < store.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing history entry"
    }
}
