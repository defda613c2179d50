//! Shared mapping from transport outcomes into the core error taxonomy.

use geoharvest_core::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// A request that never produced a response: refused connection, DNS
/// failure, timeout.
pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::Network {
        reason: err.to_string(),
    }
}

/// Decode a JSON response body, classifying 404 as [`Error::NotFound`]
/// for the named resource and any other non-success status as
/// [`Error::Network`].
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    resource: &str,
) -> Result<T> {
    let response = check_status(response, resource).await?;
    response.json().await.map_err(|e| Error::Decode(e.to_string()))
}

/// Status classification without body decoding, for responses whose body
/// is not interesting (e.g. DELETE).
pub(crate) async fn check_status(response: Response, resource: &str) -> Result<Response> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound {
            resource: resource.to_string(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, resource, "Backend request failed");
        return Err(Error::Network {
            reason: format!("backend returned {} for {}: {}", status, resource, body),
        });
    }

    Ok(response)
}
