//! Stepwise history invariant: each entry fills exactly one empty square.

use super::super::history::History;
use super::super::{Board, Square};
use super::Invariant;

/// Invariant: every entry after the start differs from its predecessor in
/// exactly one previously-empty square, and that square is the entry's
/// recorded position.
pub struct StepwiseHistoryInvariant;

impl Invariant<History> for StepwiseHistoryInvariant {
    fn holds(history: &History) -> bool {
        let mut entries = history.iter();
        let Some(start) = entries.next() else {
            return false;
        };
        if start.position().is_some() || *start.board() != Board::new() {
            return false;
        }

        let mut previous = start.board();
        for entry in entries {
            let Some(pos) = entry.position() else {
                return false;
            };
            if previous.get(pos) != Square::Empty
                || entry.board().get(pos) == Square::Empty
                || previous.diff(entry.board()) != [pos]
            {
                return false;
            }
            previous = entry.board();
        }
        true
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one previously-empty square"
    }
}
