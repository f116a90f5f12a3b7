//! Error types for the fleet view core

use thiserror::Error;

/// Errors that can occur in the fleet view state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("no vehicle with id '{id}' in the fleet")]
    InvalidSelection { id: String },

    #[error("duplicate vehicle id '{id}'")]
    DuplicateVehicleId { id: String },
}

/// Errors the initial load task can report.
///
/// These never surface as a failure state: the load gate logs them and
/// still reports readiness (loading is over either way).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("initial load timed out")]
    Timeout,
}
