//! Tests for clicks, history and time travel through the public game API.

use strictly_timetravel::{Board, Game, History, HistoryError, Player, Position, Square, Status};

fn play(game: &mut Game, squares: &[usize]) {
    for &n in squares {
        game.click(Position::from_index(n).expect("valid index"));
    }
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_n_moves_grow_history() {
    let mut game = Game::new();
    let squares = [4, 0, 8, 2, 1, 7];
    for (n, &square) in squares.iter().enumerate() {
        play(&mut game, &[square]);
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.current_move(), n + 1);
    }
}

#[test]
fn test_click_on_occupied_square_is_ignored() {
    let mut game = Game::new();
    play(&mut game, &[4]);
    let before = game.clone();

    game.click(Position::Center);

    assert_eq!(game, before);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 3, 4, 6]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    let before = game.clone();

    for pos in Position::ALL {
        game.click(pos);
        assert_eq!(game, before, "click on {pos}");
    }
}

#[test]
fn test_marks_alternate_by_move_number() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8, 2, 1, 7, 3]);

    let moves = game.moves();
    for entry in moves.iter().skip(1) {
        let action = entry.action().expect("every later entry has a move");
        let expected = if entry.index() % 2 == 1 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(action.player, expected, "move #{}", entry.index());
    }
}

#[test]
fn test_turn_follows_cursor_after_jump() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);

    game.jump_to(1).unwrap();
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
    game.jump_to(2).unwrap();
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
    game.jump_to(0).unwrap();
    assert_eq!(game.status(), Status::NextPlayer(Player::X));

    // Jumping never changes the stored snapshots.
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_play_after_jump_discards_future() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8, 2]);
    let kept: Vec<Board> = game.history().snapshots()[..=2].to_vec();

    game.jump_to(2).unwrap();
    play(&mut game, &[6]);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(&game.history().snapshots()[..=2], kept.as_slice());
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    assert!(game.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_rejected_click_after_jump_keeps_future() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);
    game.jump_to(1).unwrap();

    // Center is already taken at move 1.
    game.click(Position::Center);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_win_then_jump_back_allows_play() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 3, 4, 6]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );

    // Back to move 2, where X is to play, and take the center instead.
    game.jump_to(2).unwrap();
    play(&mut game, &[4]);

    assert_eq!(game.history().len(), 4);
    let expected = Board::new()
        .with(Position::TopLeft, Square::Occupied(Player::X))
        .with(Position::TopCenter, Square::Occupied(Player::O))
        .with(Position::Center, Square::Occupied(Player::X));
    assert_eq!(game.current_board(), &expected);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = Game::new();
    play(&mut game, &[4]);

    assert_eq!(
        game.jump_to(2),
        Err(HistoryError::OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_move_list_labels() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);

    let labels: Vec<String> = game.moves().iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_history_rejects_board_that_skips_a_turn() {
    let mut history = History::new();
    let two_marks = Board::new()
        .with(Position::Center, Square::Occupied(Player::X))
        .with(Position::TopLeft, Square::Occupied(Player::O));

    assert_eq!(
        history.play(two_marks),
        Err(HistoryError::NotAMove {
            cursor: 0,
            player: Player::X,
        })
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), &Board::new());
}
