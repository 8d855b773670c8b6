//! Application state and logic.

use super::input::{Command, Focus, command_for};
use crate::games::tictactoe::{Game, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the game start.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_hints,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their numbers.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key, self.focus) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::MoveCursor(d_row, d_col) => {
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Command::ClickCursor => self.click(self.cursor),
            Command::Click(pos) => {
                self.cursor = pos;
                self.click(pos);
            }
            Command::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_move();
            }
            Command::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Command::SelectNext => {
                self.selected = (self.selected + 1).min(self.game.history().len() - 1);
            }
            Command::JumpSelected => self.jump(self.selected),
            Command::JumpStart => self.jump(0),
        }
    }

    fn click(&mut self, pos: Position) {
        self.game.click(pos);
        self.selected = self.game.current_move();
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.selected = index,
            Err(e) => warn!(error = %e, "Jump failed"),
        }
    }
}
