//! vmdash: terminal dashboard for a single VM. Live CPU/memory/disk
//! utilization, periodic top-level directory sizes, on-demand integrity
//! checks, and a pass-through shell command console.

pub mod app;
pub mod config;
pub mod console;
pub mod integrity;
pub mod inventory;
pub mod metrics;
pub mod runner;
pub mod scrollback;
pub mod ui;
