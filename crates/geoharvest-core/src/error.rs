//! Error types for GeoHarvest

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Transport errors
    #[error("Network error talking to the harvester backend: {reason}")]
    Network { reason: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    // Probe errors: the backend reached the URL but it is not a valid
    // catalog of the declared instance type
    #[error("Probe of {url} failed for type {repo_type}: {reason}")]
    Probe {
        repo_type: String,
        url: String,
        reason: String,
    },

    // Response body could not be decoded into the expected shape
    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display() {
        let err = Error::Network {
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Network error talking to the harvester backend: connection refused"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound {
            resource: "ingest 42".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: ingest 42");
    }

    #[test]
    fn test_probe_display_carries_type_and_url() {
        let err = Error::Probe {
            repo_type: "CSW".to_string(),
            url: "http://example.org/csw".to_string(),
            reason: "no capabilities document".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CSW"));
        assert!(msg.contains("http://example.org/csw"));
        assert!(msg.contains("no capabilities document"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
