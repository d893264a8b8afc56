//! Rewind Tic-Tac-Toe - game state engine with time travel
//!
//! A tic-tac-toe engine that keeps every board snapshot so play can jump
//! back to any earlier move and branch from there.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure functions for placement, win, draw and status
//! - **Store**: [`GameStore`], the caller-owned history with
//!   `apply_move` / `jump_to` / `undo_last` / `reset`
//! - **View**: [`GameView`], the render output for front ends
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStore, Player, Status};
//!
//! let mut store = GameStore::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     store.apply_move(cell);
//! }
//! assert_eq!(store.status(), Status::Winner(Player::X));
//! assert_eq!(store.status().to_string(), "Winner X");
//!
//! // Rewind two moves and take a different branch.
//! store.jump_to(3);
//! store.apply_move(8);
//! assert_eq!(store.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state_cell;
mod store;
mod types;
mod view;

pub use action::{MoveError, place_mark};
pub use history::{History, HistoryError};
pub use position::Position;
pub use rules::{Status, check_winner, resolve_status};
pub use state_cell::StateCell;
pub use store::GameStore;
pub use types::{Board, CELL_COUNT, Player, Square};
pub use view::{GameView, HistoryEntry, describe_move};

/// Alias for a player's symbol on the board.
pub type Mark = Player;
