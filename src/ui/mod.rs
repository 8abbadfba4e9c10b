//! UI module root: overall layout plus per-panel draw functions.

pub mod console;
pub mod dirs;
pub mod header;
pub mod integrity;
pub mod status;
pub mod util;

use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(f: &mut ratatui::Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // panels
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    header::draw_header(f, rows[0], app);
    header::draw_footer(f, rows[2], app);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    // Left: VM status over the integrity log
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(cols[0]);

    // Right: directory sizes over the command console
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(cols[1]);

    status::draw_status(f, left[0], &app.snapshot);
    integrity::draw_integrity(f, left[1], app);
    dirs::draw_dirs(f, right[0], app);
    console::draw_console(f, right[1], app);
}
