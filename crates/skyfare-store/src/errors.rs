//! Error handling for skyfare-store
//!
//! Wraps the skyfare-core taxonomy with store-specific constructors

use skyfare_core::errors::SkyfareError;

/// Result type alias using SkyfareError
pub type Result<T> = skyfare_core::errors::Result<T>;

/// Map a rusqlite fault into the persistence kind, tagged with the
/// repository operation it occurred in
pub fn persistence(op: &str, err: rusqlite::Error) -> SkyfareError {
    SkyfareError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Build a write-conflict error for a gated mutation
pub fn write_conflict(op: &str, flight_id: Option<i64>, affected: usize) -> SkyfareError {
    SkyfareError::WriteConflict {
        op: op.to_string(),
        flight_id,
        affected,
    }
}

/// Build an invalid-input error
pub fn invalid_input(op: &str, message: impl Into<String>) -> SkyfareError {
    SkyfareError::InvalidInput {
        op: op.to_string(),
        message: message.into(),
    }
}

/// Build a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> SkyfareError {
    SkyfareError::Migration {
        migration_id: migration_id.to_string(),
        message: reason.to_string(),
    }
}

/// Build a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> SkyfareError {
    SkyfareError::Migration {
        migration_id: migration_id.to_string(),
        message: format!("checksum mismatch: recorded {}, computed {}", expected, actual),
    }
}
