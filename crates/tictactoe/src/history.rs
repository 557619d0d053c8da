//! Move history with time-travel truncation.

use super::action::Move;
use super::error::{GameError, GameErrorKind};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots, oldest first.
///
/// The starting entry lives apart from the played moves, so a history can
/// never be empty and entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    start: Move,
    played: Vec<Move>,
}

impl History {
    /// Creates a history holding only the starting board.
    pub fn new() -> Self {
        Self {
            start: Move::initial(),
            played: Vec::new(),
        }
    }

    /// Number of entries, starting board included. Always at least 1.
    pub fn len(&self) -> usize {
        self.played.len() + 1
    }

    /// Never true: the starting board is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the latest entry.
    pub fn current_index(&self) -> usize {
        self.played.len()
    }

    /// The latest entry.
    pub fn current(&self) -> &Move {
        self.played.last().unwrap_or(&self.start)
    }

    /// The latest board.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose mark goes next.
    pub fn to_move(&self) -> Player {
        Player::to_move_after(self.len())
    }

    /// Entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Move> {
        match index {
            0 => Some(&self.start),
            i => self.played.get(i - 1),
        }
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> {
        std::iter::once(&self.start).chain(self.played.iter())
    }

    /// Appends an entry.
    pub(crate) fn push(&mut self, entry: Move) {
        self.played.push(entry);
    }

    /// Keeps entries `0..=index` and discards everything after.
    ///
    /// # Errors
    ///
    /// Returns `HistoryIndexOutOfRange` if `index` is not an existing entry;
    /// the history is left untouched.
    #[instrument(skip(self), fields(len = self.len()))]
    pub(crate) fn truncate_to(&mut self, index: usize) -> Result<(), GameError> {
        let len = self.len();
        if index >= len {
            return Err(GameErrorKind::HistoryIndexOutOfRange { index, len }.into());
        }
        self.played.truncate(index);
        debug!(discarded = len - self.len(), "History truncated");
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn history_of(positions: &[Position]) -> History {
        let mut history = History::new();
        for pos in positions {
            let board = history.current_board().with_mark(*pos, history.to_move());
            history.push(Move::new(board, *pos));
        }
        history
    }

    #[test]
    fn test_new_history_has_start_only() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current(), &Move::initial());
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    fn test_get_indexes_start_then_moves() {
        let history = history_of(&[Position::Center, Position::TopLeft]);
        assert_eq!(history.get(0), Some(&Move::initial()));
        assert_eq!(history.get(1).and_then(Move::position), Some(Position::Center));
        assert_eq!(history.get(2).and_then(Move::position), Some(Position::TopLeft));
        assert_eq!(history.get(3), None);
        assert_eq!(history.iter().count(), 3);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut history = history_of(&[Position::Center, Position::TopLeft, Position::TopRight]);
        history.truncate_to(1).expect("index in range");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().position(), Some(Position::Center));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_truncate_to_current_is_noop() {
        let mut history = history_of(&[Position::Center]);
        let before = history.clone();
        history.truncate_to(1).expect("index in range");
        assert_eq!(history, before);
    }

    #[test]
    fn test_truncate_out_of_range_leaves_history() {
        let mut history = history_of(&[Position::Center]);
        let before = history.clone();
        let err = history.truncate_to(2).unwrap_err();
        assert_eq!(
            err.kind,
            GameErrorKind::HistoryIndexOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(history, before);
    }
}
