//! Top-level directory inventory: one batched, privilege-elevated `du`
//! invocation per refresh, with permission-denied filtering.

use std::path::{Path, PathBuf};

use tokio::process::Command;

pub const PERMISSION_MARKER: &str = "Permission denied";
pub const PLACEHOLDER: &str = "no accessible directories (or permission denied for all)";

/// Renderable report for the file-system panel. `entries` holds at most
/// `max_dirs` size lines; `diagnostic` carries residual collection errors as
/// one visually distinct trailing line. Rebuilt wholesale on every slow tick.
#[derive(Debug, Clone, Default)]
pub struct DirectoryReport {
    pub entries: Vec<String>,
    pub diagnostic: Option<String>,
}

impl DirectoryReport {
    /// Build a report from raw size-tool output. Drops any line carrying the
    /// permission-denied marker (stdout and stderr alike) and substitutes a
    /// single placeholder line when nothing survives the filter.
    pub fn from_output(stdout: &str, stderr: &str, max_entries: usize) -> Self {
        let mut entries: Vec<String> = stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter(|l| !l.contains(PERMISSION_MARKER))
            .take(max_entries)
            .map(str::to_string)
            .collect();
        if entries.is_empty() {
            entries.push(PLACEHOLDER.to_string());
        }

        let residual: Vec<&str> = stderr
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter(|l| !l.contains(PERMISSION_MARKER))
            .collect();
        let diagnostic = if residual.is_empty() {
            None
        } else {
            Some(format!("error collecting sizes: {}", residual.join("; ")))
        };

        Self { entries, diagnostic }
    }

    /// Collapse a collection failure into a one-line report. This module
    /// never propagates an error to the scheduler; it always hands back
    /// something renderable.
    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            entries: vec![format!("error reading directory info: {err}")],
            diagnostic: None,
        }
    }
}

/// List immediate subdirectories of `root` and size up to `max_dirs` of them
/// with a single batched invocation of `du_command` (typically
/// `sudo du -sh`). One process per refresh, not one per directory.
pub async fn inventory(root: &Path, du_command: &str, max_dirs: usize) -> DirectoryReport {
    let dirs = match list_dirs(root, max_dirs) {
        Ok(d) => d,
        Err(e) => return DirectoryReport::from_error(e),
    };
    if dirs.is_empty() {
        return DirectoryReport {
            entries: vec![PLACEHOLDER.to_string()],
            diagnostic: None,
        };
    }

    let mut parts = du_command.split_whitespace();
    let Some(program) = parts.next() else {
        return DirectoryReport::from_error("size command is empty");
    };
    let out = match Command::new(program).args(parts).args(&dirs).output().await {
        Ok(o) => o,
        Err(e) => return DirectoryReport::from_error(format!("failed to run {program}: {e}")),
    };

    DirectoryReport::from_output(
        &String::from_utf8_lossy(&out.stdout),
        &String::from_utf8_lossy(&out.stderr),
        max_dirs,
    )
}

/// Immediate child directories of `root`, capped at `max_dirs`, in whatever
/// order the OS enumeration yields (deliberately unsorted; see DESIGN.md).
fn list_dirs(root: &Path, max_dirs: usize) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            dirs.push(entry.path());
            if dirs.len() == max_dirs {
                break;
            }
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_permission_denied_lines() {
        let stdout = "4.0K\t/a\ndu: cannot read directory '/b': Permission denied\n8.0K\t/c\n";
        let r = DirectoryReport::from_output(stdout, "", 10);
        assert_eq!(r.entries.len(), 2);
        assert!(r.entries.iter().all(|l| !l.contains(PERMISSION_MARKER)));
        assert!(r.diagnostic.is_none());
    }

    #[test]
    fn caps_entries_at_max() {
        let stdout = (0..25)
            .map(|i| format!("1K\t/d{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let r = DirectoryReport::from_output(&stdout, "", 10);
        assert_eq!(r.entries.len(), 10);
    }

    #[test]
    fn placeholder_when_everything_is_filtered() {
        let stdout = "du: /secret: Permission denied\n";
        let stderr = "du: /other: Permission denied\n";
        let r = DirectoryReport::from_output(stdout, stderr, 10);
        assert_eq!(r.entries, vec![PLACEHOLDER.to_string()]);
        assert!(r.diagnostic.is_none());
    }

    #[test]
    fn stderr_becomes_trailing_diagnostic() {
        let r = DirectoryReport::from_output("4.0K\t/a\n", "du: invalid option\n", 10);
        assert_eq!(r.entries.len(), 1);
        let diag = r.diagnostic.expect("diagnostic line");
        assert!(diag.contains("invalid option"));
    }

    #[test]
    fn error_report_is_single_line() {
        let r = DirectoryReport::from_error("boom");
        assert_eq!(r.entries.len(), 1);
        assert!(r.entries[0].contains("boom"));
    }

    #[test]
    fn list_dirs_skips_files_and_caps() {
        let td = tempfile::tempdir().unwrap();
        for i in 0..5 {
            std::fs::create_dir(td.path().join(format!("dir{i}"))).unwrap();
        }
        std::fs::write(td.path().join("afile"), b"x").unwrap();

        let all = list_dirs(td.path(), 10).unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|p| p.is_dir()));

        let capped = list_dirs(td.path(), 3).unwrap();
        assert_eq!(capped.len(), 3);
    }
}
