//! Tests for scripted replays.

use strictly_timetravel::replay::{apply_steps, parse_steps, render_text};
use strictly_timetravel::{Game, Player, Status};

fn replay(script: &[&str]) -> Game {
    let steps = parse_steps(script).expect("valid script");
    let mut game = Game::new();
    apply_steps(&mut game, &steps).expect("script runs");
    game
}

#[test]
fn test_column_win_then_branch() {
    let game = replay(&["1", "2", "4", "5", "7"]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.history().len(), 6);

    let game = replay(&["1", "2", "4", "5", "7", "@2", "5"]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_ignored_clicks_do_not_count() {
    let game = replay(&["5", "5", "5"]);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_render_after_win() {
    let game = replay(&["1", "2", "4", "5", "7"]);
    let text = render_text(&game, true);

    let expected_board = "X|O|3\n-+-+-\nX|O|6\n-+-+-\nX|8|9";
    assert!(text.starts_with(expected_board), "{text}");
    assert!(text.contains("\nWinner: X\n"));
    assert!(text.contains("   1. Go to game start\n"));
    assert!(text.contains(">  6. Go to move #5 (X at Bottom-left)\n"));
}

#[test]
fn test_render_after_jump_marks_viewed_move() {
    let game = replay(&["1", "2", "@1"]);
    let text = render_text(&game, false);

    assert!(text.contains("\nNext player: O\n"));
    assert!(text.contains(">  2. Go to move #1 (X at Top-left)\n"));
    assert!(text.contains("   3. Go to move #2 (O at Top-center)\n"));
}
