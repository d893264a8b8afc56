//! Caller-owned game state with history and time travel.

use super::action::{MoveError, place_mark};
use super::history::{History, HistoryError};
use super::invariants::{InvariantSet, StoreInvariants};
use super::rules::{Status, board_status, check_winner};
use super::state_cell::StateCell;
use super::types::{Board, Player};
use super::view::GameView;
use tracing::{debug, instrument, warn};

/// Game state: board snapshots plus the index of the displayed one.
///
/// The four game operations ([`apply_move`](Self::apply_move),
/// [`jump_to`](Self::jump_to), [`undo_last`](Self::undo_last),
/// [`reset`](Self::reset)) ignore invalid input. The `try_` variants
/// report why an input was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    history: StateCell<History>,
    current_move: StateCell<usize>,
}

impl GameStore {
    /// Creates a store at game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: StateCell::new(History::new()),
            current_move: StateCell::new(0),
        }
    }

    /// Builds a store without validating that `current_move` is in range.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(history: History, current_move: usize) -> Self {
        Self {
            history: StateCell::new(history),
            current_move: StateCell::new(current_move),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Reads
    // ─────────────────────────────────────────────────────────────

    /// Returns every snapshot, including any redo branch.
    pub fn history(&self) -> &History {
        self.history.get()
    }

    /// Returns the index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        *self.current_move.get()
    }

    /// Returns the displayed board.
    pub fn current_board(&self) -> &Board {
        let history = self.history.get();
        history.get(self.current_move()).unwrap_or(history.latest())
    }

    /// Returns the player who moves next from the displayed board.
    pub fn active_player(&self) -> Player {
        Player::for_turn(self.current_move())
    }

    /// Returns the winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns the status of the displayed board.
    pub fn status(&self) -> Status {
        board_status(self.current_board(), self.active_player())
    }

    /// Returns true if there is an earlier move to step back to.
    pub fn can_undo(&self) -> bool {
        self.current_move() > 0
    }

    /// Returns everything a front end needs to draw the game.
    pub fn view(&self) -> GameView {
        GameView::from_store(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Game operations
    // ─────────────────────────────────────────────────────────────

    /// Places the active player's mark at `cell`, or does nothing if the
    /// move is not allowed.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) {
        if let Err(e) = self.try_apply_move(cell) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the active player's mark at `cell`.
    ///
    /// Drops any snapshots after the current move, appends the new board,
    /// and makes it current.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from validation; the store is unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move()))]
    pub fn try_apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let player = self.active_player();
        let next = place_mark(self.current_board(), cell, player)?;

        let at = self.current_move();
        self.history.update(|history| history.branch_from(at, next));
        self.current_move.set(self.history.get().len() - 1);

        debug!(%player, current_move = self.current_move(), "Move applied");
        debug_assert!(self.verify(), "store invariants violated after move");
        Ok(())
    }

    /// Displays snapshot `index`, or does nothing if it does not exist.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        if let Err(e) = self.try_jump_to(index) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Displays snapshot `index`. History is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` is past the last
    /// snapshot.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.set_current_move(index)?;
        debug!(index, "Jumped");
        debug_assert!(self.verify(), "store invariants violated after jump");
        Ok(())
    }

    /// Steps back one move. Does nothing at game start.
    #[instrument(skip(self), fields(current_move = self.current_move()))]
    pub fn undo_last(&mut self) {
        match self.current_move().checked_sub(1) {
            Some(previous) => self.jump_to(previous),
            None => debug!("Nothing to undo"),
        }
    }

    /// Returns to a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.set(History::new());
        self.current_move.set(0);
        debug!("Game reset");
        debug_assert!(self.verify(), "store invariants violated after reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Low-level state access
    // ─────────────────────────────────────────────────────────────

    /// Replaces the whole history.
    ///
    /// A current move past the end of the new history is moved to its last
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Broken`] if the history does not start from
    /// the empty board and add one alternating mark per step; the store is
    /// unchanged.
    #[instrument(skip(self, history), fields(len = history.len()))]
    pub fn set_history(&mut self, history: History) -> Result<(), HistoryError> {
        let current_move = self.current_move().min(history.len() - 1);
        let candidate = Self {
            history: StateCell::new(history),
            current_move: StateCell::new(current_move),
        };
        if let Err(violations) = StoreInvariants::check_all(&candidate) {
            for violation in &violations {
                debug!(invariant = %violation.description, "History rejected");
            }
            return Err(HistoryError::Broken);
        }

        if current_move != self.current_move() {
            debug!(from = self.current_move(), to = current_move, "Current move clamped");
        }
        *self = candidate;
        Ok(())
    }

    /// Replaces the history with one derived from the current history.
    ///
    /// # Errors
    ///
    /// Same as [`set_history`](Self::set_history).
    #[instrument(skip(self, f))]
    pub fn update_history(&mut self, f: impl FnOnce(&History) -> History) -> Result<(), HistoryError> {
        let next = f(self.history.get());
        self.set_history(next)
    }

    /// Sets the current move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` is past the last
    /// snapshot; the store is unchanged.
    #[instrument(skip(self))]
    pub fn set_current_move(&mut self, index: usize) -> Result<(), HistoryError> {
        let len = self.history.get().len();
        if index >= len {
            return Err(HistoryError::OutOfRange { index, len });
        }
        self.current_move.set(index);
        Ok(())
    }

    /// Sets the current move from a function of the current move.
    ///
    /// # Errors
    ///
    /// Same as [`set_current_move`](Self::set_current_move).
    #[instrument(skip(self, f))]
    pub fn update_current_move(&mut self, f: impl FnOnce(usize) -> usize) -> Result<(), HistoryError> {
        self.set_current_move(f(self.current_move()))
    }

    /// Checks the store invariants, logging each violation.
    fn verify(&self) -> bool {
        match StoreInvariants::check_all(self) {
            Ok(()) => true,
            Err(violations) => {
                for violation in &violations {
                    warn!(invariant = %violation.description, "Store invariant violated");
                }
                false
            }
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_apply_move_appends_and_advances() {
        let mut store = GameStore::new();
        store.apply_move(4);
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.current_move(), 1);
        assert_eq!(store.current_board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(store.active_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut store = GameStore::new();
        store.apply_move(4);
        let before = store.clone();
        store.apply_move(4);
        assert_eq!(store, before);
        assert_eq!(store.try_apply_move(4), Err(MoveError::SquareOccupied(4)));
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut store = GameStore::new();
        store.apply_move(0);
        store.jump_to(5);
        assert_eq!(store.current_move(), 1);
        assert_eq!(store.try_jump_to(2), Err(HistoryError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut store = GameStore::new();
        store.undo_last();
        assert_eq!(store, GameStore::new());
    }

    #[test]
    fn test_undo_keeps_redo_branch() {
        let mut store = GameStore::new();
        store.apply_move(0);
        store.apply_move(1);
        store.undo_last();
        assert_eq!(store.current_move(), 1);
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_set_history_clamps_cursor() {
        let mut store = GameStore::new();
        for cell in [0, 1, 2] {
            store.apply_move(cell);
        }
        store.set_history(History::new()).unwrap();
        assert_eq!(store.current_move(), 0);
    }

    #[test]
    fn test_update_history_branches_from_callback() {
        let mut store = GameStore::new();
        store.apply_move(0);
        store.apply_move(1);
        let first = *store.history().get(1).unwrap();
        store
            .update_history(|h| History::from_boards(h.boards()[..2].to_vec()).unwrap())
            .unwrap();
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.current_board(), &first);
    }

    fn two_x_marks_in_one_step() -> History {
        let x = Square::Occupied(Player::X);
        let e = Square::Empty;
        let bad = Board::from_squares([x, x, e, e, e, e, e, e, e]);
        History::from_boards(vec![Board::new(), bad]).unwrap()
    }

    #[test]
    fn test_set_history_rejects_broken_chain() {
        let mut store = GameStore::new();
        store.apply_move(4);
        let before = store.clone();

        assert_eq!(store.set_history(two_x_marks_in_one_step()), Err(HistoryError::Broken));
        assert_eq!(store, before);

        // The store stays usable after the rejection.
        store.jump_to(0);
        store.jump_to(1);
        store.apply_move(0);
        store.undo_last();
        assert_eq!(store.current_move(), 1);
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_update_history_rejects_broken_chain() {
        let mut store = GameStore::new();
        assert_eq!(
            store.update_history(|_| two_x_marks_in_one_step()),
            Err(HistoryError::Broken)
        );
        assert_eq!(store, GameStore::new());
        store.apply_move(8);
        assert_eq!(store.current_move(), 1);
    }

    #[test]
    fn test_update_current_move() {
        let mut store = GameStore::new();
        store.apply_move(0);
        store.apply_move(1);
        store.update_current_move(|m| m - 1).unwrap();
        assert_eq!(store.current_move(), 1);
        assert!(store.update_current_move(|m| m + 5).is_err());
        assert_eq!(store.current_move(), 1);
    }
}
