//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Counts the empty squares left on the board.
#[instrument]
pub fn empty_count(board: &Board) -> usize {
    board.squares().iter().filter(|s| **s == Square::Empty).count()
}

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    empty_count(board) == 0
}

/// Checks if the board is a draw: full, and nobody has three in a row.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
