//! Remote collection client.
//!
//! The remote side is an opaque HTTP resource: GET returns the full list of
//! records, POST accepts a single quote. Every transport or status failure is
//! reported as [`QuoteError::SyncFailed`]; nothing escapes uncaught.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::core::config::SyncConfig;
use crate::core::models::{Quote, RemoteRecord};
use crate::errors::QuoteError;

const REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch the full remote collection, translated into quotes.
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError>;

    /// Submit one locally added quote to the remote side.
    async fn push(&self, quote: &Quote) -> Result<(), QuoteError>;
}

pub struct HttpRemoteClient {
    client: Client,
    url: String,
    server_category: String,
}

impl HttpRemoteClient {
    pub fn new(config: &SyncConfig) -> Self {
        let client = Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: config.remote_url.clone(),
            server_category: config.server_category.clone(),
        }
    }
}

#[async_trait]
impl RemoteCollection for HttpRemoteClient {
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| QuoteError::SyncFailed(format!("remote fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(QuoteError::SyncFailed(format!(
                "remote fetch returned status {}",
                response.status()
            )));
        }

        let records: Vec<RemoteRecord> = response
            .json()
            .await
            .map_err(|e| QuoteError::SyncFailed(format!("unreadable remote payload: {e}")))?;

        info!("Fetched {} records from the remote collection", records.len());

        // The remote list has no category dimension; stamp the fixed label.
        Ok(records
            .into_iter()
            .map(|r| Quote::new(r.title, self.server_category.clone()))
            .collect())
    }

    async fn push(&self, quote: &Quote) -> Result<(), QuoteError> {
        let response = self
            .client
            .post(&self.url)
            .json(quote)
            .send()
            .await
            .map_err(|e| QuoteError::SyncFailed(format!("remote push failed: {e}")))?;

        if !response.status().is_success() {
            return Err(QuoteError::SyncFailed(format!(
                "remote push returned status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
