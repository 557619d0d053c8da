//! View callbacks as first-class events.

use super::Position;
use serde::{Deserialize, Serialize};

/// An interaction reported by the view layer.
///
/// Each event maps onto exactly one game operation, see
/// [`Game::dispatch`](crate::Game::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board cell was activated.
    CellClicked(Position),
    /// A move-list entry was activated.
    HistoryEntryClicked(usize),
    /// The sort-order toggle was activated.
    SortToggleClicked,
}
