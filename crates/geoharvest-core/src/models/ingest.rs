use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::source::RemoteSource;

use crate::error::Error;

/// Protocol discriminator selecting which configuration field group is
/// semantically active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceType {
    /// Generic OGP repository backed by a SOLR index
    #[default]
    Solr,
    Geonetwork,
    Csw,
    Webdav,
}

impl InstanceType {
    pub const ALL: [InstanceType; 4] = [
        InstanceType::Solr,
        InstanceType::Geonetwork,
        InstanceType::Csw,
        InstanceType::Webdav,
    ];

    /// Wire name used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceType::Solr => "SOLR",
            InstanceType::Geonetwork => "GEONETWORK",
            InstanceType::Csw => "CSW",
            InstanceType::Webdav => "WEBDAV",
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SOLR" => Ok(InstanceType::Solr),
            "GEONETWORK" => Ok(InstanceType::Geonetwork),
            "CSW" => Ok(InstanceType::Csw),
            "WEBDAV" => Ok(InstanceType::Webdav),
            _ => Err(Error::ConfigInvalid {
                key: "typeOfInstance".to_string(),
                reason: format!("Unknown instance type: {}. Use SOLR, GEONETWORK, CSW, or WEBDAV", s),
            }),
        }
    }
}

/// How often a scheduled ingest runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

/// The in-progress ingest job specification.
///
/// One flattened record carries the field groups of all supported
/// harvesting protocols; the UI binds every group's widgets at once and
/// switches visibility by [`InstanceType`], so groups irrelevant to the
/// selected protocol simply keep their defaulted values. At submit time
/// only the active group is meaningful to the backend.
///
/// `Default` produces the canonical empty specification: every scalar
/// unset, every list and map empty, `type_of_instance` SOLR and
/// `frequency` once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngestConfiguration {
    // Identity / scheduling
    pub ingest_name: Option<String>,
    pub type_of_instance: InstanceType,
    pub begin_date: Option<NaiveDate>,
    pub frequency: Frequency,

    // Generic / SOLR source
    pub catalog_of_services: Option<String>,
    pub name_ogp_repository: Option<String>,
    pub url: Option<String>,
    pub extent: Option<String>,
    pub theme_keyword: Option<String>,
    pub place_keyword: Option<String>,
    pub topic: Option<String>,
    pub range_from: Option<String>,
    pub range_to: Option<String>,
    pub originator: Option<String>,
    pub data_types: Vec<String>,
    pub data_repositories: Vec<RemoteSource>,
    pub exclude_restricted: bool,
    pub range_solr_from: Option<String>,
    pub range_solr_to: Option<String>,
    /// Metadata field name to whether a record missing it is skipped
    pub required_fields: BTreeMap<String, bool>,

    // GeoNetwork source
    pub geonetwork_url: Option<String>,
    #[serde(rename = "dataRepositoriesGN")]
    pub data_repositories_gn: Vec<RemoteSource>,
    pub gn_title: Option<String>,
    pub gn_keyword: Option<String>,
    pub gn_abstract_text: Option<String>,
    pub gn_free_text: Option<String>,
    pub gn_sources: Option<String>,

    // CSW source
    pub csw_data_repositories: Vec<RemoteSource>,
    pub csw_location: Option<String>,
    pub csw_title: Option<String>,
    pub csw_subject: Option<String>,
    pub csw_free_text: Option<String>,
    pub csw_range_from: Option<NaiveDate>,
    pub csw_range_to: Option<NaiveDate>,
    pub csw_custom_query: Option<String>,

    // WebDAV source
    pub webdav_data_repositories: Vec<RemoteSource>,
    pub webdav_from_last_modified: Option<NaiveDate>,
    pub webdav_to_last_modified: Option<NaiveDate>,
}
