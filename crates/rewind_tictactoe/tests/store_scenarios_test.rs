//! Scenario tests for the history store.

use rewind_tictactoe::{Board, GameStore, History, HistoryError, MoveError, Player, Position, Square, Status};

fn play(cells: &[usize]) -> GameStore {
    let mut store = GameStore::new();
    for &cell in cells {
        store.apply_move(cell);
    }
    store
}

#[test]
fn test_top_row_win() {
    let store = play(&[0, 4, 1, 5, 2]);

    assert_eq!(store.winner(), Some(Player::X));
    assert_eq!(store.status(), Status::Winner(Player::X));
    assert_eq!(store.status().to_string(), "Winner X");
    assert_eq!(
        store.view().winning_line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut store = play(&[0, 4, 1, 5, 2]);
    let before = store.clone();

    assert_eq!(store.try_apply_move(8), Err(MoveError::GameOver));
    store.apply_move(8);
    assert_eq!(store, before);
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let store = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(store.winner(), None);
    assert_eq!(store.status(), Status::Draw);
    assert_eq!(store.status().to_string(), "Draw");
    assert!(store.view().can_reset);
}

#[test]
fn test_status_names_next_player() {
    let store = play(&[4]);
    assert_eq!(store.status().to_string(), "Next player: O");
}

#[test]
fn test_history_grows_by_one_after_move() {
    let mut store = play(&[0, 4]);
    let previous = store.current_move();

    store.apply_move(8);

    assert_eq!(store.history().len(), previous + 2);
    assert_eq!(store.current_move(), store.history().len() - 1);
}

#[test]
fn test_jump_then_move_discards_redo_branch() {
    let mut store = play(&[0, 4, 1, 5]);
    assert_eq!(store.history().len(), 5);

    store.jump_to(2);
    assert_eq!(store.history().len(), 5);
    assert_eq!(store.active_player(), Player::X);

    store.apply_move(8);

    assert_eq!(store.history().len(), 4);
    assert_eq!(store.current_move(), 3);
    assert_eq!(store.current_board().get(8), Some(Square::Occupied(Player::X)));
    assert_eq!(store.current_board().get(1), Some(Square::Empty));
}

#[test]
fn test_jump_to_finished_game_and_back() {
    let mut store = play(&[0, 4, 1, 5, 2]);

    store.jump_to(4);
    assert_eq!(store.status(), Status::NextPlayer(Player::X));
    assert!(store.try_apply_move(2).is_ok());
    assert_eq!(store.status(), Status::Winner(Player::X));
}

#[test]
fn test_jump_out_of_range_changes_nothing() {
    let mut store = play(&[0, 4]);
    let before = store.clone();

    assert_eq!(
        store.try_jump_to(3),
        Err(HistoryError::OutOfRange { index: 3, len: 3 })
    );
    store.jump_to(99);
    assert_eq!(store, before);
}

#[test]
fn test_undo_last_steps_back_one() {
    let mut store = play(&[0, 4, 1]);

    store.undo_last();
    assert_eq!(store.current_move(), 2);
    store.undo_last();
    store.undo_last();
    assert_eq!(store.current_move(), 0);
    store.undo_last();
    assert_eq!(store.current_move(), 0);
    assert_eq!(store.history().len(), 4);
}

#[test]
fn test_reset_returns_to_start() {
    let mut store = play(&[0, 4, 1, 5, 2]);
    store.jump_to(2);

    store.reset();

    assert_eq!(store.history().boards(), &[Board::new()]);
    assert_eq!(store.current_move(), 0);
    assert_eq!(store.active_player(), Player::X);
}

#[test]
fn test_out_of_bounds_cell_is_ignored() {
    let mut store = GameStore::new();
    assert_eq!(store.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
    store.apply_move(42);
    assert_eq!(store, GameStore::new());
}

#[test]
fn test_view_serializes_for_front_ends() {
    let view = play(&[4]).view();
    let json = serde_json::to_value(&view).expect("view serializes");

    assert_eq!(json["current_move"], 1);
    assert_eq!(json["history"][1]["description"], "Go to move #1");
    assert_eq!(json["can_undo"], true);
}

#[test]
fn test_replacing_history_with_an_illegal_game_is_refused() {
    let mut store = play(&[0, 4]);
    let before = store.clone();

    // X takes two squares in the first step.
    let x = Square::Occupied(Player::X);
    let e = Square::Empty;
    let cheat = Board::from_squares([x, x, e, e, e, e, e, e, e]);
    let history = History::from_boards(vec![Board::new(), cheat]).unwrap();

    assert_eq!(store.set_history(history), Err(HistoryError::Broken));
    assert_eq!(store, before);

    store.jump_to(1);
    store.apply_move(8);
    assert_eq!(store.current_move(), 2);
    assert_eq!(store.history().placed_at(2), Some((8, Player::O)));
}

#[test]
fn test_replacing_history_with_a_legal_game() {
    let mut store = play(&[0, 4, 8]);
    let shorter = play(&[2]).history().clone();

    store.set_history(shorter).unwrap();
    assert_eq!(store.current_move(), 1);
    assert_eq!(store.active_player(), Player::O);
    assert_eq!(Position::valid_moves(store.current_board()).len(), 8);
}
