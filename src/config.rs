//! Dashboard configuration: simple JSON file under the XDG config dir,
//! $XDG_CONFIG_HOME/vmdash/config.json (fallback ~/.config/vmdash/config.json).

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root path whose child directories get size-inventoried, and whose
    /// filesystem backs the disk gauge.
    pub root_path: PathBuf,
    /// Fast tick period (metrics), seconds.
    pub fast_secs: u64,
    /// Slow tick period (directory inventory), seconds.
    pub slow_secs: u64,
    /// Cap on directories passed to the size tool per refresh.
    pub max_dirs: usize,
    /// Fixed privileged command for the integrity panel.
    pub check_command: String,
    /// Batched size-summarization command; child paths are appended.
    pub du_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("/"),
            fast_secs: 2,
            slow_secs: 10,
            max_dirs: 10,
            check_command: "sudo aide --check".into(),
            du_command: "sudo du -sh".into(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("vmdash")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vmdash")
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load the config, falling back to defaults when the file is missing or
/// unparseable. Configuration problems are never fatal.
pub fn load_config() -> Config {
    match fs::read_to_string(config_path()) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn save_config(c: &Config) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(c).expect("serialize config");
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_observed_behavior() {
        let c = Config::default();
        assert_eq!(c.root_path, PathBuf::from("/"));
        assert_eq!(c.fast_secs, 2);
        assert_eq!(c.slow_secs, 10);
        assert_eq!(c.max_dirs, 10);
        assert!(c.check_command.contains("aide"));
        assert!(c.du_command.contains("du"));
    }

    #[test]
    fn partial_json_fills_missing_fields_from_defaults() {
        let c: Config = serde_json::from_str(r#"{ "slow_secs": 30 }"#).unwrap();
        assert_eq!(c.slow_secs, 30);
        assert_eq!(c.fast_secs, 2);
        assert_eq!(c.max_dirs, 10);
    }
}
