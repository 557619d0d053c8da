//! Tic-tac-toe with time travel.
//!
//! A pure, synchronous game state machine. The game keeps every board
//! snapshot so the view can jump back to any earlier position; jumping back
//! forgets the moves that followed.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a [`Board`]
//! - **History**: non-empty sequence of [`Move`] snapshots
//! - **Game**: the state machine owning history and [`SortOrder`]
//! - **Snapshot**: the immutable [`GameSnapshot`] every operation returns
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Position, Status, Player};
//!
//! let mut game = Game::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleRight,
//!     Position::TopRight,
//! ] {
//!     game.play(pos);
//! }
//! assert_eq!(*game.snapshot().status(), Status::Winner(Player::X));
//!
//! let snapshot = game.time_travel(0).unwrap();
//! assert_eq!(snapshot.status().to_string(), "Next player is X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod event;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod sort_order;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, NoWinnerYet, PlayContract, SquareIsEmpty};
pub use error::{GameError, GameErrorKind};
pub use event::GameEvent;
pub use game::Game;
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, FrozenAfterWinInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, StepwiseHistoryInvariant,
};
pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, is_draw, is_full, winning_line};
pub use snapshot::{GameSnapshot, MoveListEntry, Status};
pub use sort_order::SortOrder;
pub use types::{Board, Player, Square};
