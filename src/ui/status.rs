//! VM status panel: CPU, memory, and root-disk utilization lines.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::metrics::MetricsSnapshot;
use crate::ui::util::human;

// Line formatting is split out so tests can pin the one-decimal contract.

pub fn cpu_line(s: &MetricsSnapshot) -> String {
    format!("CPU:  {:.1}%", s.cpu_percent.clamp(0.0, 100.0))
}

pub fn mem_line(s: &MetricsSnapshot) -> String {
    format!(
        "Mem:  {:.1}% used ({} / {})",
        s.mem_percent.clamp(0.0, 100.0),
        human(s.mem_used),
        human(s.mem_total)
    )
}

pub fn disk_line(s: &MetricsSnapshot) -> String {
    format!(
        "Disk: {:.1}% used ({} / {})",
        s.disk_percent.clamp(0.0, 100.0),
        human(s.disk_used),
        human(s.disk_total)
    )
}

fn load_color(pct: f32) -> Color {
    if pct < 70.0 {
        Color::Green
    } else if pct < 90.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn draw_status(f: &mut ratatui::Frame<'_>, area: Rect, s: &MetricsSnapshot) {
    let lines = vec![
        Line::from(Span::styled(
            cpu_line(s),
            Style::default().fg(load_color(s.cpu_percent)),
        )),
        Line::from(Span::styled(
            mem_line(s),
            Style::default().fg(load_color(s.mem_percent)),
        )),
        Line::from(Span::styled(
            disk_line(s),
            Style::default().fg(load_color(s.disk_percent)),
        )),
    ];
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("VM Status"));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_format_to_one_decimal_place() {
        let s = MetricsSnapshot {
            cpu_percent: 12.345,
            mem_percent: 45.678,
            disk_percent: 99.999,
            mem_used: 1024,
            mem_total: 2048,
            disk_used: 0,
            disk_total: 0,
        };
        assert!(cpu_line(&s).contains("12.3%"));
        assert!(mem_line(&s).contains("45.7%"));
        assert!(disk_line(&s).contains("100.0%"));
    }

    #[test]
    fn out_of_range_values_render_clamped() {
        let s = MetricsSnapshot {
            cpu_percent: 250.0,
            mem_percent: -3.0,
            ..Default::default()
        };
        assert!(cpu_line(&s).contains("100.0%"));
        assert!(mem_line(&s).contains("0.0%"));
    }
}
