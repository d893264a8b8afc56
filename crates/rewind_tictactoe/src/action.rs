//! Move validation and application.
//!
//! Placing a mark is a pure function from a board to a new board. The
//! input board is never modified.

use super::rules::is_terminal;
use super::types::{Board, CELL_COUNT, Player, Square};
use tracing::{debug, instrument};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Square {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Places `mark` at `index`, returning the resulting board.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not 0-8.
/// - [`MoveError::GameOver`] if `board` already has a winner or is full.
/// - [`MoveError::SquareOccupied`] if the square holds a mark.
#[instrument(skip(board, mark), fields(player = %mark))]
pub fn place_mark(board: &Board, index: usize, mark: Player) -> Result<Board, MoveError> {
    if index >= CELL_COUNT {
        return Err(MoveError::OutOfBounds(index));
    }

    if is_terminal(board) {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(index) {
        return Err(MoveError::SquareOccupied(index));
    }

    debug!("Mark placed");
    Ok(board.with_square(index, Square::Occupied(mark)))
}
