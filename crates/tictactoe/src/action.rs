//! History entries and move errors for tic-tac-toe.
//!
//! A `Move` is a board snapshot paired with the square that was just
//! filled. Snapshots are stored rather than replayed so time travel is a
//! plain truncation.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// One entry in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The board after this move.
    board: Board,
    /// The square filled by this move; `None` for the starting board.
    position: Option<Position>,
}

impl Move {
    /// The starting entry: an empty board with no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Creates the entry produced by filling `position`.
    pub(crate) fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position filled by this move.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Option<Player> {
        self.position.and_then(|pos| self.board.get(pos).player())
    }

    /// Move-list label for this entry at history `index`.
    pub fn label(&self, index: usize) -> String {
        match self.position {
            None => "Go to Starting".to_string(),
            Some(pos) => format!("Go to #{} {}", index, pos),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.player(), self.position) {
            (Some(player), Some(pos)) => write!(f, "{} -> {}", player, pos.label()),
            _ => write!(f, "Start"),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.label())]
    SquareOccupied(Position),

    /// The game has already been won.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entry_label() {
        let start = Move::initial();
        assert_eq!(start.label(0), "Go to Starting");
        assert_eq!(start.player(), None);
        assert_eq!(start.to_string(), "Start");
    }

    #[test]
    fn test_entry_label_uses_row_and_column() {
        let board = Board::new().with_mark(Position::MiddleRight, Player::O);
        let entry = Move::new(board, Position::MiddleRight);
        assert_eq!(entry.label(2), "Go to #2 (1, 2)");
        assert_eq!(entry.player(), Some(Player::O));
    }
}
