//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(history, position)} play {Q(before, after)}.

use super::action::MoveError;
use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use super::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the square must be empty on the latest board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &History) -> Result<(), MoveError> {
        if history.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: nobody has completed a line on the latest board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks the precondition.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), MoveError> {
        match check_winner(history.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Contract for play actions.
///
/// Preconditions:
/// - No winner on the latest board
/// - Square must be empty
///
/// Postconditions:
/// - History grew by exactly one entry
/// - All history invariants hold
pub struct PlayContract;

impl Contract<History, Position> for PlayContract {
    fn pre(history: &History, pos: &Position) -> Result<(), MoveError> {
        NoWinnerYet::check(history)?;
        SquareIsEmpty::check(*pos, history)
    }

    fn post(before: &History, after: &History) -> Result<(), MoveError> {
        if after.len() != before.len() + 1 {
            warn!(before = before.len(), after = after.len(), "History did not grow by one");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history grew from {} to {} entries",
                before.len(),
                after.len()
            )));
        }
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::fixtures::{forced, played};
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        let history = History::new();
        assert!(PlayContract::pre(&history, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let history = played(&[Position::Center]);
        assert_eq!(
            PlayContract::pre(&history, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let history = played(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ]);
        assert_eq!(
            PlayContract::pre(&history, &Position::BottomLeft),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = played(&[Position::Center]);
        let after = played(&[Position::Center, Position::TopLeft]);
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = played(&[Position::Center]);
        let board = before
            .current_board()
            .with_mark(Position::Center, Player::O);
        let after = forced(before.clone(), board, Position::Center);
        assert!(matches!(
            PlayContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_growth() {
        let before = played(&[Position::Center]);
        assert!(PlayContract::post(&before, &before).is_err());
    }
}
