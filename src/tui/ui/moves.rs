//! Move list rendering: one "Go to ..." entry per history snapshot.

use crate::tui::app::App;
use crate::tui::input::Focus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move list; the viewed move is bold, the selection highlighted.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.current() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(
                format!("{:>2}. {}", entry.index() + 1, entry.label()),
                style,
            )];
            if let Some(action) = entry.action() {
                spans.push(Span::styled(
                    format!(" {action}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let highlight = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("History"),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let selected = focused.then_some(app.selected());
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
