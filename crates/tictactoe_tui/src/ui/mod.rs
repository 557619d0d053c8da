//! Stateless UI rendering for the game.

pub mod board;
pub mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::GameSnapshot;

/// Key help shown at the bottom of the screen.
pub const HELP: &str =
    "arrows move | enter/space select | 1-9 play | tab switch panel | s sort | q quit";

/// Renders the whole screen from the app's snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Status
            Constraint::Min(13),   // Board and moves
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(status_line(app.snapshot()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    board::render_board(frame, body[0], app);
    moves::render_moves(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Status text, with a draw notice once the board is full.
pub fn status_line(snapshot: &GameSnapshot) -> Line<'static> {
    let color = if snapshot.winner().is_some() {
        Color::Green
    } else {
        Color::Yellow
    };
    let mut spans = vec![Span::styled(
        snapshot.status().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if *snapshot.is_draw() {
        spans.push(Span::styled(" (draw)", Style::default().fg(Color::Magenta)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_game_screen() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Next player is X"));
        assert!(screen.contains("Go to Starting"));
        assert!(screen.contains("Sort ASC"));
    }

    #[test]
    fn test_won_game_screen() {
        let mut app = App::new(&TuiConfig::default());
        for c in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(c)).expect("key handled");
        }
        let screen = render(&app);
        assert!(screen.contains("winner is X"));
        assert!(screen.contains("Go to #5 (0, 2)"));
    }

    #[test]
    fn test_draw_notice() {
        let mut app = App::new(&TuiConfig::default());
        for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(KeyCode::Char(c)).expect("key handled");
        }
        let line = status_line(app.snapshot());
        assert_eq!(line.to_string(), "Next player is O (draw)");
    }
}
