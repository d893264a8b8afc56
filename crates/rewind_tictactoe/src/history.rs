//! Board snapshots from game start to the latest move.

use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error that can occur when addressing or replacing history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The move index is past the last snapshot.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested move index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// A history must contain at least the starting board.
    #[display("History cannot be empty")]
    Empty,

    /// The snapshots do not form a legal game from the empty board.
    #[display("History is not a legal sequence of moves")]
    Broken,
}

impl std::error::Error for HistoryError {}

/// Ordered board snapshots. Index 0 is the starting board.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
}

// A history always holds the starting board, so `is_empty` would be constant.
#[allow(clippy::len_without_is_empty)]
impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Creates a history from snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if `boards` is empty.
    pub fn from_boards(boards: Vec<Board>) -> Result<Self, HistoryError> {
        if boards.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self { boards })
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Returns all snapshots.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the latest snapshot.
    pub fn latest(&self) -> &Board {
        // Non-empty by construction.
        &self.boards[self.boards.len() - 1]
    }

    /// Returns a new history that keeps snapshots `0..=at` and appends `board`.
    ///
    /// Anything after `at` (the redo branch) is dropped. `at` past the end
    /// keeps every snapshot.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub fn branch_from(&self, at: usize, board: Board) -> Self {
        let keep = (at + 1).min(self.boards.len());
        let mut boards = Vec::with_capacity(keep + 1);
        boards.extend_from_slice(&self.boards[..keep]);
        boards.push(board);
        Self { boards }
    }

    /// Returns the square index and mark that move `index` placed.
    ///
    /// `None` for the starting board, an out-of-range index, or a step that
    /// did not add exactly one mark.
    pub fn placed_at(&self, index: usize) -> Option<(usize, Player)> {
        if index == 0 {
            return None;
        }
        let before = self.boards.get(index - 1)?;
        let after = self.boards.get(index)?;

        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .filter(|(_, (b, a))| b != a);

        match (changed.next(), changed.next()) {
            (Some((cell, (Square::Empty, Square::Occupied(player)))), None) => Some((cell, *player)),
            _ => None,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
