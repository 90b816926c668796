// src/scrape.rs
//
// Run orchestration: discover locators, fan the fetches out, parse each
// payload, fan back in. Discovery failures abort; per-document failures are
// folded into the run result instead.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::aggregate::{self, Failure, PlayerStats};
use crate::core::dates::DateWindow;
use crate::core::net::Fetcher;
use crate::error::{Result, StatError};
use crate::model::GarageSale;
use crate::progress::Progress;
use crate::specs::{boxscore, sales, schedule};

/// Collect and aggregate player stats for a date window.
#[instrument(skip_all, fields(start = %window.start, end = %window.end))]
pub async fn collect_player_stats(
    fetcher: &Fetcher,
    window: &DateWindow,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PlayerStats> {
    // Discovery: schedule lookup. A failure here aborts the run.
    let sched_url = schedule::schedule_url(window);
    let payload = fetcher.get_text(&sched_url).await?;
    let feeds = schedule::parse(&sched_url, &payload)?;
    info!(feeds = feeds.len(), "discovered game feeds");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(feeds.len());
        p.log("Fetching game feeds…");
    }

    let game_times: HashMap<String, DateTime<Utc>> = feeds
        .iter()
        .map(|f| (f.url.clone(), f.game_time))
        .collect();
    let urls: Vec<String> = feeds.into_iter().map(|f| f.url).collect();

    // Fan-out, then parse each payload on its own.
    let fetched = fetcher.fetch_all(urls).await;
    let mut results = Vec::with_capacity(fetched.len());
    for (url, outcome) in fetched {
        let parsed = outcome.and_then(|payload| match game_times.get(&url) {
            Some(&ts) => boxscore::parse(&url, &payload, ts),
            None => Err(StatError::parse(&url, "locator not in discovered set")),
        });
        if parsed.is_ok() {
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&url);
            }
        }
        results.push((url, parsed));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    aggregate::aggregate(results)
}

/// One garage-sale run's outcome: the sales that parsed, plus the failures
/// that were excluded.
#[derive(Debug, Default)]
pub struct SalesRun {
    pub sales: Vec<GarageSale>,
    pub failures: Vec<Failure>,
}

/// Fetch the members-only garage sale for each requested store.
#[instrument(skip_all, fields(stores = stores.len()))]
pub async fn collect_garage_sales(
    fetcher: &Fetcher,
    stores: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Result<SalesRun> {
    // Discovery: store directory lookup, all bad names reported at once.
    let locators = sales::store_locators(stores)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(locators.len());
        p.log("Fetching event pages…");
    }

    let attempted = locators.len();
    let urls: Vec<String> = locators.into_iter().map(|l| l.url).collect();
    let fetched = fetcher.fetch_all(urls).await;

    let mut run = SalesRun::default();
    for (url, outcome) in fetched {
        match outcome.and_then(|html| sales::parse(&url, &html)) {
            Ok(sale) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&sale.store);
                }
                run.sales.push(sale);
            }
            Err(error) => {
                warn!(%url, %error, "event page excluded");
                run.failures.push(Failure { url, error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if attempted > 0 && run.sales.is_empty() {
        return Err(StatError::AllSourcesFailed { attempted });
    }
    run.sales.sort_by(|a, b| a.store.cmp(&b.store));
    Ok(run)
}
