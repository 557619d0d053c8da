//! Tests for the non-interactive replay command.

use tictactoe::{Player, Position, SortOrder, Status};
use tictactoe_tui::{ReplayError, render_text, replay};

#[test]
fn test_replay_stops_accepting_moves_after_win() {
    let snapshot = replay(&[0, 4, 1, 5, 2, 3], SortOrder::Ascending).expect("valid cells");

    assert_eq!(*snapshot.status(), Status::Winner(Player::X));
    assert_eq!(*snapshot.history_len(), 6);
    assert!(snapshot.board().is_empty(Position::MiddleLeft));
}

#[test]
fn test_replay_ignores_repeated_cells() {
    let snapshot = replay(&[4, 4, 4, 0], SortOrder::Ascending).expect("valid cells");
    assert_eq!(*snapshot.history_len(), 3);
    assert_eq!(*snapshot.to_move(), Player::X);
}

#[test]
fn test_replay_descending_text() {
    let snapshot = replay(&[0, 8], SortOrder::Descending).expect("valid cells");
    let text = render_text(&snapshot);

    let moves: Vec<&str> = text.lines().skip(8).collect();
    assert_eq!(
        moves,
        vec![
            "* Go to #2 (2, 2)",
            "  Go to #1 (0, 0)",
            "  Go to Starting",
            "[Sort DESC]"
        ]
    );
}

#[test]
fn test_replay_off_board_cell() {
    let err = replay(&[3, 12], SortOrder::Ascending).unwrap_err();
    assert_eq!(err, ReplayError::InvalidCell(12));
    assert_eq!(err.to_string(), "Cell 12 is off the board (expected 0-8)");
}

#[test]
fn test_replay_draw_text() {
    let snapshot =
        replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], SortOrder::Ascending).expect("valid cells");
    let text = render_text(&snapshot);
    assert!(text.starts_with("Next player is O\n"));
    assert!(text.contains("The game is a draw."));
}
