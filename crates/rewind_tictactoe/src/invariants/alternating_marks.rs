//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameStore, Player, Square};
use super::Invariant;

/// Invariant: the marks added along history alternate, starting with X.
///
/// Every square that becomes occupied in step `i` holds the mark of the
/// player whose turn it was at `i - 1`.
pub struct AlternatingMarksInvariant;

impl Invariant<GameStore> for AlternatingMarksInvariant {
    fn holds(store: &GameStore) -> bool {
        store
            .history()
            .boards()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Square::Occupied(Player::for_turn(step));
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before.is_empty() && !after.is_empty())
                    .all(|(_, after)| *after == expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... along history"
    }
}
