//! Local metrics sampling via sysinfo: CPU, memory, and the disk backing
//! the monitored root path.

use std::path::{Path, PathBuf};

use sysinfo::{Disks, System};

/// One wholesale utilization snapshot. Rebuilt on every fast tick; no
/// history is retained. Percentages are clamped to 0..=100.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub mem_used: u64,
    pub mem_total: u64,
    pub disk_percent: f32,
    pub disk_used: u64,
    pub disk_total: u64,
}

/// Persistent sysinfo handles. CPU usage needs state between refreshes, so
/// the `System` lives for the duration of the app.
pub struct MetricsSource {
    sys: System,
    disks: Disks,
    mount: PathBuf,
}

impl MetricsSource {
    pub fn new(mount: &Path) -> Self {
        Self {
            sys: System::new(),
            disks: Disks::new_with_refreshed_list(),
            mount: mount.to_path_buf(),
        }
    }

    /// Sample instantaneous utilization. Never fails: metrics that cannot be
    /// read come back as zeros. The first CPU sample after startup may read
    /// 0% until sysinfo has two measurements to diff.
    pub fn sample(&mut self) -> MetricsSnapshot {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.disks.refresh();

        let mem_used = self.sys.used_memory();
        let mem_total = self.sys.total_memory();

        // Pick the disk whose mount point is the longest prefix of the
        // monitored path ("/" matches the root filesystem).
        let (disk_used, disk_total) = self
            .disks
            .list()
            .iter()
            .filter(|d| self.mount.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .map(|d| {
                let total = d.total_space();
                (total.saturating_sub(d.available_space()), total)
            })
            .unwrap_or((0, 0));

        MetricsSnapshot {
            cpu_percent: self.sys.global_cpu_usage().clamp(0.0, 100.0),
            mem_percent: percent(mem_used, mem_total),
            mem_used,
            mem_total,
            disk_percent: percent(disk_used, disk_total),
            disk_used,
            disk_total,
        }
    }
}

fn percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped_and_zero_safe() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(50, 100), 50.0);
        assert_eq!(percent(100, 100), 100.0);
        // used > total can happen transiently on some filesystems
        assert_eq!(percent(200, 100), 100.0);
    }

    #[test]
    fn sample_stays_in_range() {
        let mut src = MetricsSource::new(Path::new("/"));
        let s = src.sample();
        assert!((0.0..=100.0).contains(&s.cpu_percent));
        assert!((0.0..=100.0).contains(&s.mem_percent));
        assert!((0.0..=100.0).contains(&s.disk_percent));
        assert!(s.mem_used <= s.mem_total || s.mem_total == 0);
    }
}
