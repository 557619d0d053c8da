//! Tic-tac-toe board rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{GameSnapshot, Player, Position, Square};

/// Renders the board with winning-line and cursor highlights.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        render_row(frame, rows[row * 2], app, row);
        if row < 2 {
            render_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let cursor = app.focus() == Focus::Board && app.cursor() == pos;
            let cell = cell_span(app.snapshot(), pos, cursor, app.show_cell_numbers());
            // Center the symbol vertically in the 3-line cell.
            let text = vec![Line::default(), Line::from(cell)];
            frame.render_widget(
                Paragraph::new(text).alignment(Alignment::Center),
                cols[col * 2],
            );
        }
        if col < 2 {
            render_vertical_sep(frame, cols[col * 2 + 1]);
        }
    }
}

/// Symbol and style for one square.
pub fn cell_span(
    snapshot: &GameSnapshot,
    pos: Position,
    cursor: bool,
    show_number: bool,
) -> Span<'static> {
    let (text, mut style) = match snapshot.board().get(pos) {
        Square::Empty if show_number => (
            format!(" {} ", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => ("   ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if snapshot.is_winning_cell(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::Game;

    fn won() -> GameSnapshot {
        let mut game = Game::new();
        for pos in [
            Position::MiddleLeft,
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::MiddleRight,
        ] {
            game.play(pos);
        }
        game.snapshot()
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let snapshot = won();
        let span = cell_span(&snapshot, Position::Center, false, true);
        assert_eq!(span.content, " X ");
        assert_eq!(span.style.bg, Some(Color::Green));

        let span = cell_span(&snapshot, Position::TopLeft, false, true);
        assert_eq!(span.content, " O ");
        assert_eq!(span.style.bg, None);
    }

    #[test]
    fn test_empty_cells_show_numbers_when_enabled() {
        let snapshot = Game::new().snapshot();
        assert_eq!(cell_span(&snapshot, Position::BottomLeft, false, true).content, " 7 ");
        assert_eq!(cell_span(&snapshot, Position::BottomLeft, false, false).content, "   ");
    }

    #[test]
    fn test_cursor_reverses_style() {
        let snapshot = Game::new().snapshot();
        let span = cell_span(&snapshot, Position::Center, true, true);
        assert!(span.style.add_modifier.contains(Modifier::REVERSED));
    }
}
