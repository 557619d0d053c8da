//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::move_cursor;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe::{Game, GameError, GameEvent, GameSnapshot, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list and sort toggle.
    Moves,
}

/// Main application state.
///
/// The app owns the single game instance and keeps the snapshot returned by
/// the last operation; rendering only ever reads that snapshot.
#[derive(Debug)]
pub struct App {
    game: Game,
    snapshot: GameSnapshot,
    cursor: Position,
    focus: Focus,
    /// Row in the move panel: entries first, then the sort toggle.
    selected: usize,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        let game = Game::with_sort_order(*config.sort_order());
        let snapshot = game.snapshot();
        Self {
            game,
            snapshot,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// The snapshot to render.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the move panel.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of selectable rows in the move panel.
    fn move_rows(&self) -> usize {
        self.snapshot.entries().len() + 1
    }

    /// Whether the sort toggle row is selected.
    pub fn sort_toggle_selected(&self) -> bool {
        self.selected == self.snapshot.entries().len()
    }

    /// Handles a crossterm key event, ignoring releases and repeats.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), GameError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        self.handle_key(key.code)
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates a failed time travel, which only happens if the move list
    /// and the game disagree.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), GameError> {
        let event = match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                None
            }
            KeyCode::Char('s') => Some(GameEvent::SortToggleClicked),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| Position::from_index(d as usize - 1))
                .map(GameEvent::CellClicked),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            arrow => {
                self.navigate(arrow);
                None
            }
        };

        match event {
            Some(event) => self.apply(event),
            None => Ok(()),
        }
    }

    /// Event for the focused control, if it is activatable.
    fn activate(&self) -> Option<GameEvent> {
        match self.focus {
            Focus::Board => Some(GameEvent::CellClicked(self.cursor)),
            Focus::Moves if self.sort_toggle_selected() => Some(GameEvent::SortToggleClicked),
            Focus::Moves => self
                .snapshot
                .entries()
                .get(self.selected)
                .filter(|entry| entry.is_activatable())
                .map(|entry| GameEvent::HistoryEntryClicked(*entry.index())),
        }
    }

    fn navigate(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, code),
            Focus::Moves => match code {
                KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                KeyCode::Down => self.selected = (self.selected + 1).min(self.move_rows() - 1),
                _ => {}
            },
        }
    }

    /// Sends one event to the game and keeps the returned snapshot.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: GameEvent) -> Result<(), GameError> {
        let on_toggle = self.sort_toggle_selected();
        self.snapshot = self.game.dispatch(event)?;
        self.selected = if on_toggle {
            self.move_rows() - 1
        } else {
            self.selected.min(self.move_rows() - 1)
        };
        debug!(
            history_len = *self.snapshot.history_len(),
            status = %self.snapshot.status(),
            "Snapshot updated"
        );
        Ok(())
    }
}
