use serde::{Deserialize, Serialize};

use super::ingest::IngestConfiguration;

/// A persisted ingest job: the submitted configuration plus the
/// server-assigned identifier.
///
/// The id is opaque to this layer; it is absent until the backend has
/// accepted a create and is never generated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub configuration: IngestConfiguration,
}

impl IngestJob {
    /// Wrap a finished configuration for submission.
    pub fn from_configuration(configuration: IngestConfiguration) -> Self {
        Self {
            id: None,
            configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ingest::InstanceType;

    #[test]
    fn test_unsubmitted_job_omits_id() {
        let job = IngestJob::from_configuration(IngestConfiguration::default());
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["typeOfInstance"], "SOLR");
    }

    #[test]
    fn test_persisted_job_round_trip() {
        let json = r#"{"id": "31", "ingestName": "WebDAV sweep", "typeOfInstance": "WEBDAV"}"#;
        let job: IngestJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.id.as_deref(), Some("31"));
        assert_eq!(job.configuration.ingest_name.as_deref(), Some("WebDAV sweep"));
        assert_eq!(job.configuration.type_of_instance, InstanceType::Webdav);
    }
}
