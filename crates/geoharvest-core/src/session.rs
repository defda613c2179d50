//! Session-scoped holder of the in-progress ingest specification.
//!
//! One [`IngestSession`] exists per active form workflow. It owns the
//! single live [`IngestConfiguration`]; the form mutates the aggregate in
//! place through [`IngestSession::configuration_mut`] as the user steps
//! through the wizard, and [`IngestSession::reset`] discards everything
//! by rebuilding the aggregate from its defaults.

use serde::Serialize;

use crate::models::IngestConfiguration;

/// Single source of truth for the in-progress ingest specification.
///
/// Deliberately a plain context object rather than process-global state;
/// whatever owns the form workflow owns the session and hands out access.
#[derive(Debug, Default)]
pub struct IngestSession {
    current: IngestConfiguration,
}

impl IngestSession {
    /// Create a session holding the canonical default specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all in-progress edits and rebuild the aggregate from its
    /// defaults. Infallible and callable at any point in the workflow.
    pub fn reset(&mut self) {
        tracing::debug!("Resetting in-progress ingest specification");
        self.current = IngestConfiguration::default();
    }

    /// The live specification.
    pub fn configuration(&self) -> &IngestConfiguration {
        &self.current
    }

    /// Mutable access to the live specification. Field writes are not
    /// intercepted or validated; call [`IngestSession::validate`] before
    /// submission.
    pub fn configuration_mut(&mut self) -> &mut IngestConfiguration {
        &mut self.current
    }

    /// Validation extension point.
    ///
    /// The core mandates no rules; deployments with stricter submission
    /// contracts hook their checks in here. An empty report means the
    /// specification may be submitted.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport::default()
    }
}

/// A single problem found while validating a specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Wire name of the offending field
    pub field: String,
    pub message: String,
}

/// Outcome of [`IngestSession::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}
