//! Move list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tictactoe::MoveListEntry;

/// Renders the move list followed by the sort toggle.
pub fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let snapshot = app.snapshot();

    let mut items: Vec<ListItem> = snapshot
        .entries()
        .iter()
        .enumerate()
        .map(|(row, entry)| ListItem::new(entry_line(entry, focused && app.selected() == row)))
        .collect();
    items.push(ListItem::new(Line::default()));
    items.push(ListItem::new(button_line(
        snapshot.sort_toggle_label(),
        focused && app.sort_toggle_selected(),
    )));

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Moves"),
    );
    frame.render_widget(list, area);
}

/// One move-list row.
///
/// The latest entry is plain text; earlier entries are drawn as buttons.
pub fn entry_line(entry: &MoveListEntry, selected: bool) -> Line<'static> {
    if entry.is_activatable() {
        button_line(entry.label(), selected)
    } else {
        let style = Style::default().add_modifier(Modifier::ITALIC);
        let marker = if selected { "> " } else { "  " };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(entry.label().clone(), style),
        ])
    }
}

fn button_line(label: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let marker = if selected { "> " } else { "  " };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("[ {} ]", label), style),
    ])
}
