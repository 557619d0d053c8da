//! Error types for the game state machine.

use derive_more::{Display, Error};

/// Specific game error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Time travel was asked for an entry that does not exist.
    #[display("History index {index} out of range (history has {len} entries)")]
    HistoryIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Game error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
