use serde::{Deserialize, Serialize};

/// A discoverable remote catalog endpoint that can serve as harvest input.
///
/// The backend serializes these as key/value entry pairs; the key is the
/// source identifier within its repository and the value is the display
/// name shown in selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSource {
    /// Source identifier, opaque to this layer
    #[serde(rename = "key")]
    pub id: String,

    /// Human-readable name for selection lists
    #[serde(rename = "value")]
    pub name: String,
}

impl RemoteSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A locally registered repository, as returned by the grouped
/// repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Backend-assigned repository id
    #[serde(rename = "key")]
    pub id: i64,

    /// Repository name
    #[serde(rename = "value")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_source_wire_shape() {
        let json = r#"{"key": "tufts", "value": "Tufts University"}"#;
        let source: RemoteSource = serde_json::from_str(json).unwrap();
        assert_eq!(source, RemoteSource::new("tufts", "Tufts University"));
    }

    #[test]
    fn test_repository_entry_wire_shape() {
        let json = r#"{"key": 7, "value": "Harvard Geodata"}"#;
        let entry: RepositoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.name, "Harvard Geodata");
    }
}
