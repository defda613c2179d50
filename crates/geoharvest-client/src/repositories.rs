//! Read-only discovery of remote harvestable sources.

use std::collections::BTreeMap;
use std::time::Duration;

use geoharvest_core::error::{Error, Result};
use geoharvest_core::models::{InstanceType, RemoteSource, RepositoryEntry};
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::transport::{network_error, read_json};

/// Client for the backend's repository and remote-source endpoints.
///
/// Every call re-queries the backend; nothing is cached. Calls are
/// independent of one another, and an in-flight future may simply be
/// dropped when the caller navigates away; no shared state is touched.
pub struct RepositoryClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Body of the by-url probe request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeRequest<'a> {
    repo_type: InstanceType,
    repo_url: &'a str,
}

impl RepositoryClient {
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

    /// Remote sources available under a repository already registered
    /// with the backend.
    ///
    /// The id is not validated locally; an unknown id comes back from
    /// the backend as [`Error::NotFound`].
    pub async fn remote_sources_by_repo_id(&self, repo_id: &str) -> Result<Vec<RemoteSource>> {
        let url = format!("{}/rest/repositories/{}/remoteSources", self.base_url, repo_id);
        debug!(%url, "Fetching remote sources by repository id");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, &format!("repository {}", repo_id)).await
    }

    /// Probe an arbitrary external URL declared to speak the given
    /// protocol and enumerate its sources.
    ///
    /// The backend connects to the third-party host live, so this is
    /// slower and less reliable than the id-based lookup; callers should
    /// treat it as retryable. A reachable URL that is not a valid
    /// catalog of the declared type surfaces as [`Error::Probe`].
    pub async fn remote_sources_by_url(
        &self,
        repo_type: InstanceType,
        repo_url: &str,
    ) -> Result<Vec<RemoteSource>> {
        let url = format!("{}/rest/repositoriesbyurl/remoteSources", self.base_url);
        debug!(%url, %repo_type, repo_url, "Probing remote repository by URL");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&ProbeRequest {
                repo_type,
                repo_url,
            })
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if status.is_client_error() {
            // The backend reached the URL but rejected it as a catalog
            // of the declared type
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Probe {
                repo_type: repo_type.to_string(),
                url: repo_url.to_string(),
                reason: if body.is_empty() {
                    format!("backend returned {}", status)
                } else {
                    body
                },
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Network {
                reason: format!("backend returned {} for probe: {}", status, body),
            });
        }

        response.json().await.map_err(|e| Error::Decode(e.to_string()))
    }

    /// Locally registered repositories grouped by instance type.
    pub async fn repositories_by_type(&self) -> Result<BTreeMap<String, Vec<RepositoryEntry>>> {
        let url = format!("{}/rest/repositories", self.base_url);
        debug!(%url, "Listing registered repositories");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, "repositories").await
    }

    /// Institutions known to the deployment's local SOLR index.
    pub async fn local_solr_institutions(&self) -> Result<Vec<RemoteSource>> {
        let url = format!("{}/rest/localSolr/institutions", self.base_url);
        debug!(%url, "Listing local SOLR institutions");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, "localSolr institutions").await
    }
}
