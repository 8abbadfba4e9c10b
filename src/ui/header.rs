//! Top header with the hostname, plus the bottom key-hint line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let title = format!("vmdash | host: {}", app.hostname);
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}

pub fn draw_footer(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let hints = match app.mode {
        InputMode::Normal => "q: quit | s: suspend to shell | c: run integrity check | i: command input",
        InputMode::Editing => "Enter: run command | Esc: leave input",
    };
    let p = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(p, area);
}
