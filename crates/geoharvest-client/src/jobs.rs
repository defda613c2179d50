//! CRUD client for persisted ingest jobs.

use std::time::Duration;

use geoharvest_core::error::Result;
use geoharvest_core::models::IngestJob;
use tracing::debug;

use crate::config::ClientConfig;
use crate::transport::{check_status, network_error, read_json};

/// Thin CRUD transport for the `rest/ingests` collection.
///
/// No client-side business logic, validation, or retries; whatever the
/// transport reports is surfaced unchanged.
pub struct IngestJobClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl IngestJobClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.value.clone(),
            timeout: config.timeout(),
        }
    }

    /// Create against a specific base URL with default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = ClientConfig::with_defaults();
        config.base_url.value = crate::config::normalize_base_url(base_url.into());
        Self::new(&config)
    }

    /// All persisted ingest jobs.
    pub async fn list(&self) -> Result<Vec<IngestJob>> {
        let url = format!("{}/rest/ingests", self.base_url);
        debug!(%url, "Listing ingest jobs");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, "ingests").await
    }

    /// A single job by its server-assigned id.
    pub async fn get(&self, id: &str) -> Result<IngestJob> {
        let url = format!("{}/rest/ingests/{}", self.base_url, id);
        debug!(%url, "Fetching ingest job");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, &format!("ingest {}", id)).await
    }

    /// Submit a new job; the backend assigns the id and returns the
    /// persisted record.
    pub async fn create(&self, job: &IngestJob) -> Result<IngestJob> {
        let url = format!("{}/rest/ingests", self.base_url);
        debug!(%url, name = ?job.configuration.ingest_name, "Creating ingest job");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(job)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, "ingests").await
    }

    /// Replace an existing job.
    pub async fn update(&self, id: &str, job: &IngestJob) -> Result<IngestJob> {
        let url = format!("{}/rest/ingests/{}", self.base_url, id);
        debug!(%url, "Updating ingest job");

        let response = self
            .client
            .put(&url)
            .timeout(self.timeout)
            .json(job)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, &format!("ingest {}", id)).await
    }

    /// Delete a job by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/rest/ingests/{}", self.base_url, id);
        debug!(%url, "Deleting ingest job");

        let response = self
            .client
            .delete(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        check_status(response, &format!("ingest {}", id)).await?;
        Ok(())
    }
}
