//! Non-interactive play-through of a cell sequence.

use derive_more::{Display, Error, From};
use tictactoe::{Game, GameError, GameEvent, GameSnapshot, Position, SortOrder};
use tracing::{debug, instrument};

/// Errors from a replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {_0} is off the board (expected 0-8)")]
    #[from(ignore)]
    InvalidCell(#[error(not(source))] usize),

    /// The game rejected an event.
    #[display("{_0}")]
    Game(GameError),
}

/// Clicks each cell in turn and returns the final snapshot.
///
/// Clicks on taken squares or after a win are ignored, exactly as in the
/// interactive game.
#[instrument]
pub fn replay(cells: &[usize], sort_order: SortOrder) -> Result<GameSnapshot, ReplayError> {
    if let Some(&cell) = cells.iter().find(|&&cell| Position::from_index(cell).is_none()) {
        return Err(ReplayError::InvalidCell(cell));
    }

    let mut game = Game::with_sort_order(sort_order);
    let mut snapshot = game.snapshot();
    for event in events(cells) {
        snapshot = game.dispatch(event)?;
    }
    debug!(history_len = *snapshot.history_len(), "Replay finished");
    Ok(snapshot)
}

/// Plain-text rendering of a snapshot: status, board and move list.
pub fn render_text(snapshot: &GameSnapshot) -> String {
    let mut out = format!("{}\n\n{}\n\n", snapshot.status(), snapshot.board().display());
    if *snapshot.is_draw() {
        out.push_str("The game is a draw.\n\n");
    }
    for entry in snapshot.entries() {
        let marker = if *entry.is_current() { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out.push_str(&format!("[{}]", snapshot.sort_toggle_label()));
    out
}

/// Converts a replay into the events the view would have sent.
pub fn events(cells: &[usize]) -> Vec<GameEvent> {
    cells
        .iter()
        .filter_map(|&cell| Position::from_index(cell))
        .map(GameEvent::CellClicked)
        .collect()
}
