//! Property tests for rules and the history store.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{InvariantSet, StoreInvariants};
use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, GameStore, History, HistoryError, Player, Position, Square, check_winner};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Apply(usize),
    /// Picks the n-th (wrapping) empty square of the displayed board.
    Play(usize),
    Jump(usize),
    Undo,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..10).prop_map(Op::Apply),
        3 => (0usize..9).prop_map(Op::Play),
        2 => (0usize..12).prop_map(Op::Jump),
        1 => Just(Op::Undo),
        1 => Just(Op::Reset),
    ]
}

fn line_owned_by(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.square(*pos) == Square::Occupied(player)))
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

proptest! {
    #[test]
    fn winner_only_with_a_full_line(squares in proptest::array::uniform9(square())) {
        let board = Board::from_squares(squares);
        match check_winner(&board) {
            Some(player) => prop_assert!(line_owned_by(&board, player)),
            None => {
                prop_assert!(!line_owned_by(&board, Player::X));
                prop_assert!(!line_owned_by(&board, Player::O));
            }
        }
    }

    #[test]
    fn operations_preserve_store_invariants(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = GameStore::new();

        for op in ops {
            let before = store.clone();
            match op {
                Op::Apply(cell) => match store.try_apply_move(cell) {
                    Ok(()) => {
                        prop_assert_eq!(store.history().len(), before.current_move() + 2);
                        prop_assert_eq!(store.current_move(), store.history().len() - 1);
                    }
                    Err(_) => prop_assert_eq!(&store, &before),
                },
                Op::Play(n) => {
                    let open = Position::valid_moves(store.current_board());
                    if let Some(pos) = open.get(n % open.len().max(1)) {
                        let result = store.try_apply_move(pos.to_index());
                        prop_assert_eq!(result.is_ok(), !before.status().is_terminal());
                    }
                }
                Op::Jump(index) => {
                    store.jump_to(index);
                    prop_assert_eq!(store.history(), before.history());
                    if index >= before.history().len() {
                        prop_assert_eq!(store.current_move(), before.current_move());
                    } else {
                        prop_assert_eq!(store.current_move(), index);
                    }
                }
                Op::Undo => {
                    store.undo_last();
                    prop_assert_eq!(store.current_move(), before.current_move().saturating_sub(1));
                }
                Op::Reset => {
                    store.reset();
                    prop_assert_eq!(store.history().len(), 1);
                    prop_assert_eq!(store.current_move(), 0);
                }
            }
            prop_assert!(StoreInvariants::check_all(&store).is_ok());
        }
    }

    #[test]
    fn replaced_histories_keep_the_store_usable(
        boards in prop::collection::vec(board(), 1..5),
        cell in 0usize..9,
    ) {
        let mut store = GameStore::new();
        store.apply_move(4);
        let before = store.clone();

        let history = History::from_boards(boards).unwrap();
        match store.set_history(history) {
            Ok(()) => prop_assert!(StoreInvariants::check_all(&store).is_ok()),
            Err(e) => {
                prop_assert_eq!(e, HistoryError::Broken);
                prop_assert_eq!(&store, &before);
            }
        }

        store.jump_to(0);
        store.apply_move(cell);
        store.undo_last();
        prop_assert!(StoreInvariants::check_all(&store).is_ok());
    }
}
