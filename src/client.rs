//! HTTP client for the snapshot endpoint.

use crate::config::Config;
use crate::error::{MirrorDashError, Result};
use crate::snapshot::Snapshot;
use reqwest::Client;
use std::time::Duration;

/// Client for the dashboard data endpoint.
///
/// Wraps a configured `reqwest::Client`; one GET per `fetch_snapshot` call,
/// no retries and no polling.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: Client,
    data_url: String,
}

impl DataClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.system.request_timeout_ms))
            .user_agent(format!("mirror-dash/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            data_url: config.system.data_url.clone(),
        })
    }

    /// Issue one GET to the data endpoint and parse the body as a snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        tracing::debug!(url = %self.data_url, "fetching snapshot");
        let resp = self.http.get(&self.data_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MirrorDashError::Http {
                message: format!("{} returned {}", self.data_url, status),
            });
        }
        let snapshot = resp.json::<Snapshot>().await?;
        Ok(snapshot)
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}
