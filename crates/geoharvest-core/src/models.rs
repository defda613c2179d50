pub mod ingest;
pub mod job;
pub mod source;

pub use ingest::{Frequency, IngestConfiguration, InstanceType};
pub use job::IngestJob;
pub use source::{RemoteSource, RepositoryEntry};
