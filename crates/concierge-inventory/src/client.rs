//! Inventory HTTP client adapter.
//!
//! A thin adapter over the inventory API: one `GET`, both accepted response
//! shapes normalized into an [`InventoryTable`], no retries. Every failure
//! mode — connection error, timeout, non-2xx status, undecodable body —
//! surfaces as an [`InventoryError`] for the caller to map to its single
//! user-facing "inventory unavailable" reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::table::InventoryTable;

/// Default fetch timeout. Expiry surfaces as [`InventoryError::Request`].
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from fetching the inventory table.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inventory endpoint returned HTTP status {0}")]
    Status(u16),
}

/// Source of the current inventory table.
///
/// The production implementation is [`HttpInventoryClient`]; tests substitute
/// in-memory sources.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn fetch_inventory(&self) -> Result<InventoryTable, InventoryError>;
}

/// HTTP implementation of [`InventorySource`].
pub struct HttpInventoryClient {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpInventoryClient {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: Client::new(),
        }
    }

    /// Override the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InventorySource for HttpInventoryClient {
    async fn fetch_inventory(&self) -> Result<InventoryTable, InventoryError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let table = InventoryTable::from_response(body);
        debug!(rows = table.len(), "Inventory fetched");
        Ok(table)
    }
}
