//! Immutable views derived from the game state.
//!
//! Every game operation hands back a [`GameSnapshot`]. Views render from the
//! snapshot alone and never reach into the state machine.

use super::history::History;
use super::rules::{self, WinningLine};
use super::sort_order::SortOrder;
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// No winner yet.
    #[display("Next player is {}", _0)]
    NextPlayer(Player),
    /// A line has been completed.
    #[display("winner is {}", _0)]
    Winner(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveListEntry {
    /// History index this entry travels to.
    index: usize,
    /// Text shown for the entry.
    label: String,
    /// Square filled by the move, `None` for the start.
    position: Option<Position>,
    /// Whether this is the latest entry (rendered as plain text).
    is_current: bool,
}

impl MoveListEntry {
    /// Only past entries act as time-travel controls.
    pub fn is_activatable(&self) -> bool {
        !self.is_current
    }
}

/// Read-only picture of a game at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// The latest board.
    board: Board,
    /// Player whose mark goes next.
    to_move: Player,
    /// Completed line on the latest board, if any.
    winning_line: Option<WinningLine>,
    /// Status line.
    status: Status,
    /// Whether the board is full with no line.
    is_draw: bool,
    /// Move list in display order.
    entries: Vec<MoveListEntry>,
    /// Current display order.
    sort_order: SortOrder,
    /// Number of history entries.
    history_len: usize,
}

impl GameSnapshot {
    /// Derives a snapshot from the history and display order.
    pub(crate) fn capture(history: &History, sort_order: SortOrder) -> Self {
        let board = history.current_board().clone();
        let to_move = history.to_move();
        let winning_line = rules::winning_line(&board);
        let status = match winning_line {
            Some(line) => Status::Winner(line.player()),
            None => Status::NextPlayer(to_move),
        };
        let is_draw = rules::is_draw(&board);
        let current = history.current_index();
        let entries = history
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                MoveListEntry::new(index, entry.label(index), entry.position(), index == current)
            })
            .collect();

        Self {
            board,
            to_move,
            winning_line,
            status,
            is_draw,
            entries: sort_order.arrange(entries),
            sort_order,
            history_len: history.len(),
        }
    }

    /// The winner, if a line is complete.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line.map(|line| line.player())
    }

    /// Whether no more moves will be accepted.
    pub fn is_over(&self) -> bool {
        self.winning_line.is_some() || self.is_draw
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// History index of the latest entry.
    pub fn current_index(&self) -> usize {
        self.history_len - 1
    }

    /// Label for the sort-order toggle.
    pub fn sort_toggle_label(&self) -> &'static str {
        self.sort_order.toggle_label()
    }
}
