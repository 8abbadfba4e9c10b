//! Small UI helpers: human-readable sizes and tail-pinned log rendering.

use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::scrollback::Scrollback;

pub fn human(b: u64) -> String {
    const K: f64 = 1024.0;
    let b = b as f64;
    if b < K {
        return format!("{b:.0}B");
    }
    let kb = b / K;
    if kb < K {
        return format!("{kb:.1}KB");
    }
    let mb = kb / K;
    if mb < K {
        return format!("{mb:.1}MB");
    }
    let gb = mb / K;
    if gb < K {
        return format!("{gb:.1}GB");
    }
    format!("{:.2}TB", gb / K)
}

/// Render a scrollback log into `inner`, always scrolled to the tail
/// (auto-scroll: the newest lines win when the log outgrows the viewport).
pub fn draw_log_tail(f: &mut ratatui::Frame<'_>, inner: Rect, log: &Scrollback) {
    let offset = (log.len() as u16).saturating_sub(inner.height);
    let p = Paragraph::new(log.lines().to_vec()).scroll((offset, 0));
    f.render_widget(p, inner);
}
