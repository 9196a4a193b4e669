//! Skyfare core - domain models and error taxonomy for the flight-booking
//! data-access layer.
//!
//! Persistence lives in `skyfare-store`; this crate holds what both sides
//! of that boundary share: the `Flight`/`Airport`/`FlightModification`
//! records, the error taxonomy, and the logging facility.

pub mod errors;
pub mod logging;
pub mod model;

// Re-export key types
pub use errors::{Result, SkyfareError};
