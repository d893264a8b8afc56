//! History chain invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameStore};
use super::Invariant;

/// Invariant: history starts empty and grows one mark per snapshot.
///
/// Index 0 is the empty board. Every later snapshot differs from the one
/// before it in exactly one square, which went from empty to occupied.
pub struct HistoryChainInvariant;

impl Invariant<GameStore> for HistoryChainInvariant {
    fn holds(store: &GameStore) -> bool {
        let history = store.history();
        history.get(0) == Some(&Board::new())
            && (1..history.len()).all(|index| history.placed_at(index).is_some())
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark to an empty square"
    }
}
