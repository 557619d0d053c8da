//! The game state machine: move history, time travel and sort order.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::error::GameError;
use super::event::GameEvent;
use super::history::History;
use super::rules::{self, WinningLine};
use super::snapshot::GameSnapshot;
use super::sort_order::SortOrder;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with a rewindable move history.
///
/// A `Game` owns the history and the move-list display order. Every
/// operation returns a fresh [`GameSnapshot`] for the view to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: History,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            sort_order,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns the latest board.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Returns the player whose mark goes next.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Returns the completed line on the latest board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current_board())
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.history, self.sort_order)
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the latest board already has a
    /// winner, or `MoveError::SquareOccupied` if `pos` is taken. The game is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move(), len = self.history.len()))]
    pub fn try_play(&mut self, pos: Position) -> Result<GameSnapshot, MoveError> {
        PlayContract::pre(&self.history, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.history.clone();

        let player = self.to_move();
        let board = self.current_board().with_mark(pos, player);
        self.history.push(Move::new(board, pos));
        debug!(%player, position = pos.label(), "Move applied");

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, &self.history) {
            self.history = before;
            return Err(e);
        }

        if let Some(line) = self.winning_line() {
            info!(winner = %line.player(), cells = ?line.cells(), "Game won");
        } else if rules::is_full(self.current_board()) {
            info!("Game drawn");
        }

        Ok(self.snapshot())
    }

    /// Places the next player's mark at `pos`, ignoring illegal moves.
    ///
    /// Clicking a taken square or playing on after a win leaves the game
    /// unchanged; the returned snapshot then equals the previous one.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> GameSnapshot {
        match self.try_play(pos) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.snapshot()
            }
        }
    }

    /// Rewinds to history entry `index`, forgetting every later move.
    ///
    /// # Errors
    ///
    /// Returns `HistoryIndexOutOfRange` if `index` is not an existing entry.
    /// Views only offer indices taken from a snapshot, so this signals a
    /// caller bug.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn time_travel(&mut self, index: usize) -> Result<GameSnapshot, GameError> {
        self.history.truncate_to(index)?;
        info!(index, to_move = %self.to_move(), "Travelled back in time");
        Ok(self.snapshot())
    }

    /// Flips the move-list order. The history is untouched.
    #[instrument(skip(self), fields(from = ?self.sort_order))]
    pub fn toggle_sort_order(&mut self) -> GameSnapshot {
        self.sort_order = self.sort_order.toggled();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
        self.snapshot()
    }

    /// Routes a view event to its operation.
    ///
    /// # Errors
    ///
    /// Only `HistoryEntryClicked` can fail, see [`Game::time_travel`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> Result<GameSnapshot, GameError> {
        match event {
            GameEvent::CellClicked(pos) => Ok(self.play(pos)),
            GameEvent::HistoryEntryClicked(index) => self.time_travel(index),
            GameEvent::SortToggleClicked => Ok(self.toggle_sort_order()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move_is_x() {
        let mut game = Game::new();
        let snapshot = game.play(Position::Center);
        assert_eq!(snapshot.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(*snapshot.to_move(), Player::O);
        assert_eq!(*snapshot.history_len(), 2);
    }

    #[test]
    fn test_try_play_reports_occupied() {
        let mut game = Game::new();
        game.play(Position::Center);
        assert_eq!(
            game.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_play_on_occupied_is_silent() {
        let mut game = Game::new();
        let before = game.play(Position::Center);
        let after = game.play(Position::Center);
        assert_eq!(before, after);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_postcondition_failure_restores_history() {
        use crate::invariants::fixtures::{forced, overwrite, played};

        let history = played(&[Position::Center]);
        let board = overwrite(&history, Position::Center, Player::X);
        let mut game = Game {
            history: forced(history, board, Position::Center),
            sort_order: SortOrder::Ascending,
        };
        let before = game.clone();

        assert!(matches!(
            game.try_play(Position::TopLeft),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_time_travel_out_of_range() {
        let mut game = Game::new();
        game.play(Position::Center);
        let before = game.clone();
        assert!(game.time_travel(2).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut game = Game::new();
        game.dispatch(GameEvent::CellClicked(Position::TopLeft))
            .expect("play never fails");
        game.dispatch(GameEvent::CellClicked(Position::Center))
            .expect("play never fails");
        let snapshot = game
            .dispatch(GameEvent::SortToggleClicked)
            .expect("toggle never fails");
        assert_eq!(*snapshot.sort_order(), SortOrder::Descending);

        let snapshot = game
            .dispatch(GameEvent::HistoryEntryClicked(1))
            .expect("index in range");
        assert_eq!(*snapshot.history_len(), 2);
        assert_eq!(*snapshot.to_move(), Player::O);
    }
}
