//! Headless replay: drive a game from a script of clicks and jumps.
//!
//! A script is a list of steps. A step is either a square to click,
//! given as its number (`1`-`9`) or label (`center`), or a jump written
//! `@N`, where `@0` is the game start.

use crate::games::tictactoe::{Game, HistoryError, Position};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Click a square.
    Click(Position),
    /// Jump to a move in the history.
    Jump(usize),
}

/// Errors raised while parsing or running a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A step could not be parsed.
    #[display("Invalid step '{}': expected 1-9, a square name, or @N", _0)]
    InvalidStep(#[error(not(source))] String),

    /// A jump named a move that does not exist.
    #[display("Step {}: {}", step, source)]
    Jump {
        /// 1-based position of the step in the script.
        step: usize,
        /// Underlying history error.
        source: HistoryError,
    },
}

impl FromStr for Step {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(index) = s.strip_prefix('@') {
            return index
                .parse()
                .map(Step::Jump)
                .map_err(|_| ReplayError::InvalidStep(s.to_string()));
        }

        Position::parse(s)
            .map(Step::Click)
            .ok_or_else(|| ReplayError::InvalidStep(s.to_string()))
    }
}

/// Parses every step, failing on the first invalid one.
#[instrument(skip(steps))]
pub fn parse_steps<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>, ReplayError> {
    steps.iter().map(|s| s.as_ref().parse()).collect()
}

/// Applies `steps` to `game` in order.
///
/// Clicks follow the game's rules, so rejected clicks are ignored. A jump
/// to a move that does not exist stops the replay with an error.
#[instrument(skip(game, steps), fields(steps = steps.len()))]
pub fn apply_steps(game: &mut Game, steps: &[Step]) -> Result<(), ReplayError> {
    for (i, step) in steps.iter().enumerate() {
        debug!(?step, "Applying step");
        match *step {
            Step::Click(pos) => game.click(pos),
            Step::Jump(index) => game
                .jump_to(index)
                .map_err(|source| ReplayError::Jump { step: i + 1, source })?,
        }
    }
    Ok(())
}

/// Renders the board, status line and move list as plain text.
pub fn render_text(game: &Game, hints: bool) -> String {
    let mut out = String::new();
    out.push_str(&game.current_board().display(hints));
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");

    for entry in game.moves() {
        let marker = if *entry.current() { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:>2}. {}",
            marker,
            entry.index() + 1,
            entry.label()
        ));
        if let Some(action) = entry.action() {
            out.push_str(&format!(" ({action})"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse_steps(&["1", "center", "@0", " 9"]).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Click(Position::TopLeft),
                Step::Click(Position::Center),
                Step::Jump(0),
                Step::Click(Position::BottomRight),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_steps(&["1", "10"]),
            Err(ReplayError::InvalidStep("10".to_string()))
        );
        assert_eq!(
            "@x".parse::<Step>(),
            Err(ReplayError::InvalidStep("@x".to_string()))
        );
    }

    #[test]
    fn test_jump_out_of_range_reports_step() {
        let mut game = Game::new();
        let err = apply_steps(&mut game, &[Step::Click(Position::Center), Step::Jump(5)])
            .unwrap_err();
        assert_eq!(
            err,
            ReplayError::Jump {
                step: 2,
                source: HistoryError::OutOfRange { index: 5, len: 2 },
            }
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_render_text() {
        let mut game = Game::new();
        apply_steps(&mut game, &[Step::Click(Position::TopLeft)]).unwrap();

        let text = render_text(&game, false);
        assert_eq!(
            text,
            "X| | \n-+-+-\n | | \n-+-+-\n | | \n\n\
             Next player: O\n\n\
             \x20  1. Go to game start\n\
             >  2. Go to move #1 (X at Top-left)\n"
        );
    }
}
