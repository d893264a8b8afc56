//! Status line resolution.

use super::super::{Board, Player};
use super::draw::{empty_count, is_draw};
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line shows for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Board is full and nobody won.
    #[display("Draw")]
    Draw,
    /// A player completed a line.
    #[display("Winner {}", _0)]
    Winner(Player),
    /// Game is ongoing; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns true once the game has ended (win or draw).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            _ => None,
        }
    }
}

/// Resolves the status from a winner, the number of empty squares and the
/// player to move.
#[instrument]
pub fn resolve_status(winner: Option<Player>, empty_squares: usize, active: Player) -> Status {
    match winner {
        Some(player) => Status::Winner(player),
        None if empty_squares == 0 => Status::Draw,
        None => Status::NextPlayer(active),
    }
}

/// Resolves the status of a board with `active` to move.
#[instrument]
pub fn board_status(board: &Board, active: Player) -> Status {
    resolve_status(check_winner(board), empty_count(board), active)
}

/// Returns true if no further moves may be played on this board.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_draw(board)
}
