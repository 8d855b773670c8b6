//! Key bindings for the terminal UI.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select an entry in the move list.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Move the board cursor by `(d_row, d_col)`.
    MoveCursor(isize, isize),
    /// Click the square under the board cursor.
    ClickCursor,
    /// Click a square directly.
    Click(Position),
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Select the previous move list entry.
    SelectPrevious,
    /// Select the next move list entry.
    SelectNext,
    /// Jump to the selected move list entry.
    JumpSelected,
    /// Jump to the game start.
    JumpStart,
}

/// Maps a key to a command given the focused pane.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<Command> {
    let command = match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Command::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => Command::ToggleFocus,
        (KeyCode::Home, _) => Command::JumpStart,
        (KeyCode::Char(c), _) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            Command::Click(Position::from_number(digit)?)
        }

        (KeyCode::Up, Focus::Board) => Command::MoveCursor(-1, 0),
        (KeyCode::Down, Focus::Board) => Command::MoveCursor(1, 0),
        (KeyCode::Left, Focus::Board) => Command::MoveCursor(0, -1),
        (KeyCode::Right, Focus::Board) => Command::MoveCursor(0, 1),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Command::ClickCursor,

        (KeyCode::Up, Focus::Moves) => Command::SelectPrevious,
        (KeyCode::Down, Focus::Moves) => Command::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => Command::JumpSelected,

        _ => return None,
    };
    Some(command)
}
