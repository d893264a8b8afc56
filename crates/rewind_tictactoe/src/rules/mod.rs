//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and from the history store so they can be tested alone.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{empty_count, is_draw, is_full};
pub use status::{Status, board_status, is_terminal, resolve_status};
pub use win::{LINES, check_winner, winning_line};
