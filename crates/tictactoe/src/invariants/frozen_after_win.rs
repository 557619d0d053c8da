//! Frozen-after-win invariant: nothing is played past a completed line.

use super::super::history::History;
use super::super::rules::winning_line;
use super::Invariant;

/// Invariant: only the latest entry may hold a completed line.
pub struct FrozenAfterWinInvariant;

impl Invariant<History> for FrozenAfterWinInvariant {
    fn holds(history: &History) -> bool {
        history
            .iter()
            .rev()
            .skip(1)
            .all(|entry| winning_line(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a completed line"
    }
}
