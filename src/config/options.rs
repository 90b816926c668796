// src/config/options.rs

use std::path::PathBuf;

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::core::dates::DateWindow;
use crate::present::filters::StatFilters;

/// Options for one stats run, resolved from CLI args before any I/O.
#[derive(Clone, Debug)]
pub struct StatsOptions {
    pub window: DateWindow,
    pub filters: StatFilters,
    pub out_dir: PathBuf,
    /// Skip writing the JSON report, print only.
    pub no_write: bool,
}

impl StatsOptions {
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            filters: StatFilters::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            no_write: false,
        }
    }
}

/// Options for one garage-sale run.
#[derive(Clone, Debug)]
pub struct SalesOptions {
    /// Store names to query; empty means every known store.
    pub stores: Vec<String>,
    pub out_dir: PathBuf,
    pub no_write: bool,
}

impl Default for SalesOptions {
    fn default() -> Self {
        Self {
            stores: Vec::new(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            no_write: false,
        }
    }
}
