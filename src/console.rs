//! Command console: input line plus scrollback log, delegating execution to
//! the runner.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::runner::CommandResult;
use crate::scrollback::Scrollback;

pub struct ConsoleState {
    pub input: String,
    pub log: Scrollback,
}

impl ConsoleState {
    pub fn new() -> Self {
        let mut log = Scrollback::new();
        log.push_ok("Welcome to the VM dashboard!");
        log.push_dim("Press 'i', type a non-interactive command, and hit Enter.");
        log.push_dim("For interactive commands (e.g. nano, top), press 's' to suspend (then 'fg' to return).");
        log.push_dim("Alternatively, open a separate SSH session for a full terminal.");
        Self {
            input: String::new(),
            log,
        }
    }

    /// Take the pending command, if any. The read and the clear happen in
    /// this one synchronous call, with no suspension point in between, so a
    /// rapid double submit can never resend stale text. Whitespace-only
    /// input is ignored entirely: no log entry, nothing spawned.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let command = std::mem::take(&mut self.input).trim().to_string();
        self.log.push(Line::from(vec![
            Span::styled(
                "$ ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(command.clone(), Style::default().fg(Color::Green)),
        ]));
        Some(command)
    }

    /// Append one finished command's output as a contiguous block: stdout,
    /// then stderr in red, then an exit notice when the command did not
    /// succeed. Launch failures render as their own distinct message.
    pub fn apply_result(&mut self, res: &CommandResult) {
        if let Some(err) = &res.launch_error {
            self.log
                .push_error(format!("error: command could not be started: {err}"));
            return;
        }
        if !res.stdout.is_empty() {
            self.log.push_block(&res.stdout, Style::default());
        }
        if !res.stderr.is_empty() {
            self.log
                .push_block(&res.stderr, Style::default().fg(Color::Red));
        }
        match res.exit_code {
            Some(0) => {}
            Some(code) => self.log.push_error(format!("command exited with code {code}")),
            None => self.log.push_error("command terminated by signal"),
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_result(stdout: &str) -> CommandResult {
        CommandResult {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
            launch_error: None,
        }
    }

    #[test]
    fn whitespace_submit_is_a_noop() {
        let mut c = ConsoleState::new();
        let before = c.log.len();
        c.input = "   \t ".into();
        assert!(c.submit().is_none());
        assert_eq!(c.log.len(), before);
        // input left untouched; nothing was consumed
        assert_eq!(c.input, "   \t ");
    }

    #[test]
    fn submit_clears_input_before_any_result_arrives() {
        let mut c = ConsoleState::new();
        c.input = "echo hi".into();
        let cmd = c.submit().expect("command accepted");
        assert_eq!(cmd, "echo hi");
        assert!(c.input.is_empty());
        assert!(c.log.line_text(c.log.len() - 1).contains("echo hi"));
    }

    #[test]
    fn nonzero_exit_gets_an_explicit_notice() {
        let mut c = ConsoleState::new();
        c.apply_result(&CommandResult {
            stdout: String::new(),
            stderr: "oops\n".into(),
            exit_code: Some(2),
            launch_error: None,
        });
        let last = c.log.line_text(c.log.len() - 1);
        assert!(last.contains("exited with code 2"));
    }

    #[test]
    fn launch_failure_renders_distinctly_from_nonzero_exit() {
        let mut c = ConsoleState::new();
        c.apply_result(&CommandResult {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            launch_error: Some("No such file or directory".into()),
        });
        let last = c.log.line_text(c.log.len() - 1);
        assert!(last.contains("could not be started"));
        assert!(!last.contains("exited with code"));
    }

    #[test]
    fn two_rapid_submissions_produce_ordered_blocks() {
        let mut c = ConsoleState::new();
        let base = c.log.len();

        c.input = "first".into();
        c.submit().unwrap();
        c.input = "second".into();
        c.submit().unwrap();

        // Completions land strictly in arrival order, each as one block.
        c.apply_result(&ok_result("out-first\n"));
        c.apply_result(&ok_result("out-second\n"));

        assert!(c.log.line_text(base).contains("first"));
        assert!(c.log.line_text(base + 1).contains("second"));
        assert_eq!(c.log.line_text(base + 2), "out-first");
        assert_eq!(c.log.line_text(base + 3), "out-second");
    }
}
