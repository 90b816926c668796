// src/aggregate.rs
//
// Fan-in step of the pipeline. Consumes per-document outcomes in any order
// and folds them into cumulative per-identity maps; counter merge is
// commutative and associative, and the team tie-break compares game dates,
// so the result never depends on completion order.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Result, StatError};
use crate::model::{Goalie, Skater};
use crate::specs::boxscore::{GameStats, fold_goalie, fold_skater};

/// A per-document failure, kept out of the totals but reportable.
#[derive(Debug)]
pub struct Failure {
    pub url: String,
    pub error: StatError,
}

/// One run's cumulative stats. Built empty, folded once, read-only after.
#[derive(Debug, Default)]
pub struct PlayerStats {
    pub skaters: BTreeMap<String, Skater>,
    pub goalies: BTreeMap<String, Goalie>,
    /// Source documents successfully folded in.
    pub games: usize,
    pub failures: Vec<Failure>,
}

/// One document's contribution: its locator plus either partial records or
/// the captured fetch/parse error.
pub type DocStats = (String, Result<GameStats>);

/// Merge every successful document into cumulative totals.
///
/// Empty input is a valid zero-entity run. Non-empty input where every
/// document failed is `AllSourcesFailed`; "nothing fetched" must stay
/// distinguishable from "no games played".
pub fn aggregate(results: Vec<DocStats>) -> Result<PlayerStats> {
    let attempted = results.len();
    let mut out = PlayerStats::default();

    for (url, outcome) in results {
        match outcome {
            Ok(stats) => {
                out.games += 1;
                for (_, partial) in stats.skaters {
                    fold_skater(&mut out.skaters, partial)?;
                }
                for (_, partial) in stats.goalies {
                    fold_goalie(&mut out.goalies, partial)?;
                }
            }
            Err(error) => {
                warn!(%url, %error, "source document excluded");
                out.failures.push(Failure { url, error });
            }
        }
    }

    if attempted > 0 && out.games == 0 {
        return Err(StatError::AllSourcesFailed { attempted });
    }
    Ok(out)
}
