use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// FlightModification - one entry in the append-only audit trail
///
/// Written exclusively by the flight write paths, in the same transaction
/// as the row mutation it records. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightModification {
    /// Flight the modification applied to (no foreign key: a REMOVED
    /// entry outlives its flight)
    pub flight_id: i64,

    /// Account that performed the modification
    pub account_id: i64,

    /// Action prefix plus the caller-supplied reason, e.g. "UPDATE: fare change"
    pub comment: String,

    /// When the modification was committed
    pub time: DateTime<Utc>,
}

impl FlightModification {
    pub fn new(flight_id: i64, account_id: i64, comment: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            flight_id,
            account_id,
            comment: comment.into(),
            time,
        }
    }
}
