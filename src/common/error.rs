//! Error handling for the smoke-test sequence

use thiserror::Error;

/// Main error type for smoke-test operations.
///
/// One variant per required step, each carrying the underlying engine error
/// so the engine-supplied diagnostic passes through unmodified. Capability
/// probes do not appear here: a failed probe is a finding, not an error.
#[derive(Error, Debug)]
pub enum LitmusError {
    #[error("Can't open database: {0}")]
    Open(rusqlite::Error),

    #[error("Schema creation failed: {0}")]
    Schema(rusqlite::Error),

    #[error("Data load failed: {0}")]
    Load(rusqlite::Error),

    #[error("Query failed: {0}")]
    Query(rusqlite::Error),

    #[error("Failed to close database: {0}")]
    Close(rusqlite::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LitmusError>;

/// Result type alias for smoke-test operations (alias for Result)
pub type LitmusResult<T> = std::result::Result<T, LitmusError>;
