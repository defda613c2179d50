//! GeoHarvest Core - Domain models, ingest session state, and error types
//!
//! This crate contains the job specification aggregate shared across a
//! multi-step ingest form, the session store that owns it, and the error
//! taxonomy the REST clients map transport outcomes into.

pub mod error;
pub mod models;
pub mod session;

pub use error::{Error, Result};
pub use models::{
    Frequency, IngestConfiguration, IngestJob, InstanceType, RemoteSource, RepositoryEntry,
};
pub use session::{IngestSession, ValidationIssue, ValidationReport};
