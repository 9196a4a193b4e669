//! Repository layer over an injected SQLite connection
//!
//! Reads take `&Connection`; gated writes take `&mut Connection` so the
//! row mutation and its audit entry share one transaction.

pub mod airport_repo;
pub mod flight_repo;
pub mod search;

pub use airport_repo::AirportRepo;
pub use flight_repo::FlightRepo;
pub use search::FlightSearchFilters;

use chrono::{DateTime, Utc};

/// Decode an epoch-seconds column into a timestamp
pub(crate) fn datetime_from_epoch(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}
