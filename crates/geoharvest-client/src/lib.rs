//! GeoHarvest Client - REST clients for the harvester backend
//!
//! This crate talks to the harvester's REST surface: CRUD on submitted
//! ingest jobs and read-only discovery of remote harvestable sources.
//! Both clients are thin pass-throughs; failures from the transport are
//! mapped into the [`geoharvest_core::Error`] taxonomy and surfaced to
//! the caller unchanged, with no retries or local recovery.

pub mod config;
pub mod jobs;
pub mod repositories;

mod transport;

pub use config::{ClientConfig, ConfigSource, ConfigValue};
pub use jobs::IngestJobClient;
pub use repositories::RepositoryClient;
