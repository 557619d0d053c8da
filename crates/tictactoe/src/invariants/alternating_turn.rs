//! Alternating turn invariant: marks go X, O, X, O, ...

use super::super::history::History;
use super::super::Player;
use super::Invariant;

/// Invariant: the mark placed by entry `i` belongs to the player whose turn
/// it was with `i` entries in the history.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, entry)| entry.player() == Some(Player::to_move_after(index)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
