use thiserror::Error;

/// Result type alias using SkyfareError
pub type Result<T> = std::result::Result<T, SkyfareError>;

/// Error taxonomy for the data-access layer
///
/// Absence on a read path is not an error: lookups return `Option` and
/// listings return an empty vec. These variants cover rejected writes,
/// unusable input, and infrastructure faults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyfareError {
    /// A gated mutation affected a row count other than one; the
    /// transaction was rolled back and no audit row was written
    #[error("write conflict in {op}: expected 1 affected row, got {affected}")]
    WriteConflict {
        op: String,
        /// Primary key of the targeted flight, when one was known
        flight_id: Option<i64>,
        affected: usize,
    },

    /// Caller-supplied record is unusable for the requested operation
    #[error("invalid input for {op}: {message}")]
    InvalidInput { op: String, message: String },

    /// The underlying store reported a fault; never swallowed here
    #[error("persistence failure in {op}: {message}")]
    Persistence { op: String, message: String },

    /// A schema migration could not be applied or failed verification
    #[error("migration {migration_id} failed: {message}")]
    Migration {
        migration_id: String,
        message: String,
    },
}

impl SkyfareError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the external contract and never change once
    /// published.
    pub fn code(&self) -> &'static str {
        match self {
            SkyfareError::WriteConflict { .. } => "ERR_WRITE_CONFLICT",
            SkyfareError::InvalidInput { .. } => "ERR_INVALID_INPUT",
            SkyfareError::Persistence { .. } => "ERR_PERSISTENCE",
            SkyfareError::Migration { .. } => "ERR_MIGRATION",
        }
    }
}
