// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatError>;

/// Run-level and per-document failure taxonomy.
///
/// Pre-flight variants (`InvalidRange`, `UnknownStores`) abort before any I/O.
/// `Fetch` and `Parse` are per-document: captured into the run's failure list,
/// never propagated past the fan-in. `IdentityMismatch` is an invariant
/// violation, unreachable through the normal pipeline.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    #[error("unrecognized store location(s): {}", .0.join(", "))]
    UnknownStores(Vec<String>),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("parse failed for {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("cannot aggregate stats for two different players: {left} vs {right}")]
    IdentityMismatch { left: String, right: String },

    #[error("all {attempted} source documents failed")]
    AllSourcesFailed { attempted: usize },

    #[error("unknown filter key: {0}")]
    UnknownFilter(String),

    #[error("invalid value for filter {key}: {value}")]
    InvalidFilterValue { key: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl StatError {
    /// Tag a generic parse problem with the locator it came from.
    pub fn parse(url: impl Into<String>, reason: impl ToString) -> Self {
        StatError::Parse { url: url.into(), reason: reason.to_string() }
    }
}
