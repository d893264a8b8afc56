//! Render output: what a front end draws for the current store state.

use super::position::Position;
use super::rules::{Status, winning_line};
use super::store::GameStore;
use super::types::{Board, Player};
use serde::Serialize;
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// Label shown for the entry.
    pub description: String,
    /// Square and mark placed by this move (`None` for game start).
    pub placed: Option<(Position, Player)>,
    /// True for the displayed snapshot.
    pub is_current: bool,
}

/// Label for the history entry at `index`.
pub fn describe_move(index: usize) -> String {
    if index > 0 {
        format!("Go to move #{}", index)
    } else {
        "Go to game start".to_string()
    }
}

/// Snapshot of everything the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The displayed board.
    pub board: Board,
    /// Status line.
    pub status: Status,
    /// Index of the displayed snapshot.
    pub current_move: usize,
    /// Move list, one entry per snapshot.
    pub history: Vec<HistoryEntry>,
    /// Squares of the completed line, if the displayed board is won.
    pub winning_line: Option<[Position; 3]>,
    /// Whether "undo last move" is offered.
    pub can_undo: bool,
    /// Whether "reset" is offered (only once the game has ended).
    pub can_reset: bool,
}

impl GameView {
    /// Builds the view of a store.
    #[instrument(skip(store), fields(current_move = store.current_move()))]
    pub fn from_store(store: &GameStore) -> Self {
        let history = store.history();
        let current_move = store.current_move();
        let status = store.status();

        let entries = (0..history.len())
            .map(|index| HistoryEntry {
                index,
                description: describe_move(index),
                placed: history
                    .placed_at(index)
                    .and_then(|(cell, player)| Position::from_index(cell).map(|pos| (pos, player))),
                is_current: index == current_move,
            })
            .collect();

        Self {
            board: *store.current_board(),
            status,
            current_move,
            history: entries,
            winning_line: winning_line(store.current_board()).map(|(_, line)| line),
            can_undo: store.can_undo(),
            can_reset: status.is_terminal(),
        }
    }
}
