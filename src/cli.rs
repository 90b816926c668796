// src/cli.rs

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::options::{SalesOptions, StatsOptions};
use crate::core::dates::{self, DateWindow};
use crate::core::net::Fetcher;
use crate::error::Result;
use crate::present::filters::StatFilters;
use crate::progress::Progress;
use crate::{present, scrape, store};

#[derive(Parser)]
#[command(
    name = "statdash",
    version,
    about = "Scrape and aggregate NHL player stats and REI garage sales"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate skater and goalie stats over a date window
    Nhl {
        /// Days to collect, counting back from and including today
        #[arg(required_unless_present = "start")]
        days: Option<i64>,

        /// Start date, YYYY-MM-DD
        #[arg(long, conflicts_with = "days", requires = "end")]
        start: Option<String>,

        /// End date, YYYY-MM-DD
        #[arg(long, conflicts_with = "days", requires = "start")]
        end: Option<String>,

        /// Read-side filter as key=value (name=<substring>, top=<N>)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Output directory for the JSON report
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// Print only, skip writing the report file
        #[arg(long)]
        no_write: bool,
    },
    /// Fetch members-only garage sales for the given stores (default: all)
    Sales {
        /// Store names, e.g. berkeley sf
        stores: Vec<String>,

        /// Output directory for the JSON report
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// Print only, skip writing the report file
        #[arg(long)]
        no_write: bool,
    },
}

pub async fn run() -> Result<()> {
    match Cli::parse().command {
        Command::Nhl { days, start, end, filters, out, no_write } => {
            let window = resolve_window(days, start.as_deref(), end.as_deref())?;
            let mut options = StatsOptions::new(window);
            options.filters = StatFilters::parse(&filters)?;
            options.out_dir = out;
            options.no_write = no_write;
            run_nhl(options).await
        }
        Command::Sales { stores, out, no_write } => {
            let options = SalesOptions { stores, out_dir: out, no_write };
            run_sales(options).await
        }
    }
}

/// Validate date arguments before any I/O.
fn resolve_window(
    days: Option<i64>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateWindow> {
    match (days, start, end) {
        (Some(days), _, _) => dates::window_from_days(days, Local::now().date_naive()),
        (None, Some(start), Some(end)) => {
            dates::window_from_bounds(dates::parse_date(start)?, dates::parse_date(end)?)
        }
        // clap enforces days-or-bounds, but don't panic if it ever doesn't.
        _ => dates::window_from_days(1, Local::now().date_naive()),
    }
}

async fn run_nhl(options: StatsOptions) -> Result<()> {
    info!(
        start = %options.window.start,
        end = %options.window.end,
        "retrieving stats for games in window"
    );
    let fetcher = Fetcher::new()?;
    let mut progress = ConsoleProgress::default();
    let stats =
        scrape::collect_player_stats(&fetcher, &options.window, Some(&mut progress)).await?;

    let report = present::nhl::present(&stats, &options.window, &options.filters);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !options.no_write {
        store::write_stats_report(&report, &options.out_dir, &options.window)?;
    }
    Ok(())
}

async fn run_sales(options: SalesOptions) -> Result<()> {
    let fetcher = Fetcher::new()?;
    let mut progress = ConsoleProgress::default();
    let run = scrape::collect_garage_sales(&fetcher, &options.stores, Some(&mut progress)).await?;

    let views = present::sales::present(&run);
    println!("{}", serde_json::to_string_pretty(&views)?);

    if !options.no_write {
        store::write_sales_report(&views, &options.out_dir)?;
    }
    Ok(())
}

/// Progress sink for terminal runs.
#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        info!("[{}/{}] {label}", self.done, self.total);
    }

    fn finish(&mut self) {
        info!("{} of {} documents folded in", self.done, self.total);
    }
}
