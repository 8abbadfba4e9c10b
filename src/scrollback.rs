//! Append-only styled line buffers backing the scrollback panels.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Append-only log of styled lines. Rendering always pins to the tail, so
/// there is no scroll state to keep here. Two independent instances exist
/// (command console and integrity panel); they are never merged.
#[derive(Default)]
pub struct Scrollback {
    lines: Vec<Line<'static>>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.lines.push(Line::from(text.into()));
    }

    pub fn push_dim(&mut self, text: impl Into<String>) {
        self.push_styled(text, Style::default().add_modifier(Modifier::DIM));
    }

    pub fn push_ok(&mut self, text: impl Into<String>) {
        self.push_styled(text, Style::default().fg(Color::Green));
    }

    pub fn push_warn(&mut self, text: impl Into<String>) {
        self.push_styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push_styled(text, Style::default().fg(Color::Red));
    }

    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.lines
            .push(Line::from(Span::styled(text.into(), style)));
    }

    /// Append a multi-line blob as individual lines in one style. The whole
    /// blob lands in a single synchronous call, so a block from one command
    /// can never interleave with a block from another.
    pub fn push_block(&mut self, text: &str, style: Style) {
        for l in text.lines() {
            self.lines.push(Line::from(Span::styled(l.to_string(), style)));
        }
    }

    /// Plain-text view of one line, ignoring styling.
    pub fn line_text(&self, idx: usize) -> String {
        self.lines[idx]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_block_splits_lines_in_order() {
        let mut sb = Scrollback::new();
        sb.push_block("one\ntwo\nthree\n", Style::default());
        assert_eq!(sb.len(), 3);
        assert_eq!(sb.line_text(0), "one");
        assert_eq!(sb.line_text(2), "three");
    }

    #[test]
    fn line_text_joins_spans() {
        let mut sb = Scrollback::new();
        sb.push(Line::from(vec![
            Span::raw("$ "),
            Span::styled("ls -la", Style::default().fg(Color::Green)),
        ]));
        assert_eq!(sb.line_text(0), "$ ls -la");
    }
}
