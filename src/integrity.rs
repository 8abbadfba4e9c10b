//! Integrity-check panel: a fixed privileged command with the wrapped
//! tool's tri-state exit-code policy.

use chrono::Local;
use ratatui::style::{Color, Style};

use crate::runner::CommandResult;
use crate::scrollback::Scrollback;

/// AIDE's exit-code contract: 0 is a clean run, 5 means differences were
/// found (not an execution failure), anything else (or death by signal) is
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Clean,
    ChangesDetected,
    Failed(Option<i32>),
}

pub fn classify(exit_code: Option<i32>) -> CheckOutcome {
    match exit_code {
        Some(0) => CheckOutcome::Clean,
        Some(5) => CheckOutcome::ChangesDetected,
        other => CheckOutcome::Failed(other),
    }
}

pub struct IntegrityState {
    pub log: Scrollback,
}

impl IntegrityState {
    pub fn new() -> Self {
        let mut log = Scrollback::new();
        log.push_dim("Check status and results will appear here.");
        Self { log }
    }

    /// Log the timestamped trigger line. The actual run is spawned by the
    /// caller; results come back through the event channel.
    pub fn trigger(&mut self, command: &str) {
        let ts = Local::now().format("%H:%M:%S");
        self.log
            .push_warn(format!("Triggering integrity check at {ts} ({command})..."));
    }

    /// Append the check's output and its classification. Only the exit code
    /// decides the tier; stdout/stderr content is informational.
    pub fn apply_result(&mut self, res: &CommandResult) {
        if let Some(err) = &res.launch_error {
            self.log
                .push_error(format!("error: check could not be started: {err}"));
            return;
        }
        if !res.stdout.is_empty() {
            self.log.push_block(&res.stdout, Style::default());
        }
        if !res.stderr.is_empty() {
            self.log
                .push_block(&res.stderr, Style::default().fg(Color::Red));
        }
        match classify(res.exit_code) {
            CheckOutcome::Clean => {
                self.log
                    .push_ok("Integrity check completed successfully (exit code 0).");
            }
            CheckOutcome::ChangesDetected => {
                self.log.push_warn(
                    "Integrity check completed with warnings/changes detected (exit code 5).",
                );
                self.log.push_dim(
                    "This usually means integrity violations or legitimate changes were found.",
                );
            }
            CheckOutcome::Failed(code) => {
                let code = code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "none (signal)".into());
                self.log
                    .push_error(format!("Integrity check failed with unexpected exit code {code}."));
                self.log.push_dim("Check the output above for details.");
            }
        }
    }
}

impl Default for IntegrityState {
    fn default() -> Self {
        Self::new()
    }
}
