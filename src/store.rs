// src/store.rs
//
// Report persistence: one JSON file per run, for offline inspection.
// Optional; the run result is complete without it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::consts::SALES_FILE;
use crate::core::dates::DateWindow;
use crate::error::Result;
use crate::present::nhl::StatsReport;
use crate::present::sales::SaleView;

/// Write a stats report to `<out_dir>/<start>_to_<end>.json`.
pub fn write_stats_report(
    report: &StatsReport,
    out_dir: &Path,
    window: &DateWindow,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}_to_{}.json", window.start, window.end));
    write_json(&path, report)?;
    Ok(path)
}

/// Write sale views to `<out_dir>/garage_sales.json`.
pub fn write_sales_report(sales: &[SaleView], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(SALES_FILE);
    write_json(&path, &sales)?;
    Ok(path)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
