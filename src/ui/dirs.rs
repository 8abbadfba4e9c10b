//! File-system panel: top-level directory sizes from the slow tick.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn draw_dirs(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let title = format!("File System: top directories in {}", app.cfg.root_path.display());
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines: Vec<Line> = Vec::new();
    if app.report.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "Loading file system info...",
            Style::default().add_modifier(Modifier::DIM),
        )));
    } else {
        for entry in &app.report.entries {
            lines.push(Line::from(Span::styled(
                entry.clone(),
                Style::default().fg(Color::Cyan),
            )));
        }
    }
    if let Some(diag) = &app.report.diagnostic {
        lines.push(Line::from(Span::styled(
            diag.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
