//! Integrity panel: scrollback log for the on-demand check.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::ui::util::draw_log_tail;

pub fn draw_integrity(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Integrity Checks ('c' to run)");
    let inner = block.inner(area);
    f.render_widget(block, area);
    draw_log_tail(f, inner, &app.integrity.log);
}
