//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in detection order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three squares in a row held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    cells: [Position; 3],
}

impl WinningLine {
    /// The player holding the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are checked rows first, then columns, then the main and anti
/// diagonals. Returns `None` when no line is complete.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|cells| {
        let [a, b, c] = cells;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinningLine { player, cells })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player())
}
