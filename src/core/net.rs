// src/core/net.rs
//
// HTTPS transport for the run: one shared client, per-request timeout,
// fan-out helper that gathers every locator's outcome without short-circuiting.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::consts::{MAX_IN_FLIGHT, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, StatError};

pub struct Fetcher {
    client: reqwest::Client,
    in_flight: usize,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_limit(MAX_IN_FLIGHT)
    }

    /// Cap on concurrently open requests. Fan-out still accepts any number of
    /// locators; excess ones wait for a permit.
    pub fn with_limit(in_flight: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| StatError::Fetch { url: "<client setup>".into(), source })?;
        Ok(Self { client, in_flight: in_flight.max(1) })
    }

    /// GET one document as text. Non-2xx statuses are fetch errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        get_text(&self.client, url).await
    }

    /// Fetch every locator concurrently, one task each, and gather all
    /// outcomes. A slow or failing locator never blocks or aborts the rest;
    /// completion order is not meaningful to callers.
    pub async fn fetch_all(&self, urls: Vec<String>) -> Vec<(String, Result<String>)> {
        let permits = Arc::new(Semaphore::new(self.in_flight));
        let mut tasks = JoinSet::new();

        for url in urls {
            let client = self.client.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await.expect("semaphore never closed");
                debug!(%url, "fetching");
                let outcome = get_text(&client, &url).await;
                (url, outcome)
            });
        }

        let mut out = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(pair) => out.push(pair),
                // A panicked task loses its locator; record nothing but the log.
                Err(e) => warn!(error = %e, "fetch task died before returning"),
            }
        }
        out
    }
}

async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| StatError::Fetch { url: url.to_string(), source })?;
    resp.text()
        .await
        .map_err(|source| StatError::Fetch { url: url.to_string(), source })
}
