//! Command runner panel: one-line input box over the scrollback log.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::ui::util::draw_log_tail;

pub fn draw_console(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let editing = app.mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Command Runner ('i' to type)");
    let input = Paragraph::new(app.console.input.as_str()).block(input_block);
    f.render_widget(input, rows[0]);

    if editing {
        // cursor sits one cell past the typed text, inside the border
        f.set_cursor_position((
            rows[0].x + 1 + app.console.input.len() as u16,
            rows[0].y + 1,
        ));
    }

    let log_block = Block::default().borders(Borders::ALL).title("Output");
    let inner = log_block.inner(rows[1]);
    f.render_widget(log_block, rows[1]);
    draw_log_tail(f, inner, &app.console.log);
}
