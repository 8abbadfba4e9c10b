//! Async shell command execution with full output capture.

use std::process::Stdio;

use tokio::process::Command;

/// Outcome of one shell command. `exit_code` is `None` when the process was
/// killed by a signal; `launch_error` is set only when the shell itself could
/// not be spawned, which is a different failure than a nonzero exit.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub launch_error: Option<String>,
}

impl CommandResult {
    pub fn is_launch_failure(&self) -> bool {
        self.launch_error.is_some()
    }
}

/// Run `command` through `sh -c`, buffering all of stdout and stderr until
/// the process exits. Suspends the calling task while the process runs; the
/// UI loop keeps going. Never returns `Err`: spawn failures are folded into
/// the result so callers always have something renderable.
///
/// Full shell interpretation applies (pipes, redirection, globbing). That is
/// the point of the command console, not an oversight.
pub async fn run(command: &str) -> CommandResult {
    let spawned = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .await;

    match spawned {
        Ok(out) => CommandResult {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            exit_code: out.status.code(),
            launch_error: None,
        },
        Err(e) => CommandResult {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            launch_error: Some(e.to_string()),
        },
    }
}
