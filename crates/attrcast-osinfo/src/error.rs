//! Error types for attrcast-osinfo

use thiserror::Error;

/// Errors that can occur during distribution detection
#[derive(Error, Debug, Clone)]
pub enum OsInfoError {
    /// os-release file could not be read
    #[error("os-release unavailable: {0}")]
    OsReleaseUnavailable(String),

    /// A probe command failed
    #[error("probe failed: {0}")]
    ProbeFailed(String),

    /// Command execution error
    #[error("execution error: {0}")]
    ExecutionError(String),
}
