pub mod airport;
pub mod flight;
pub mod modification;

pub use airport::Airport;
pub use flight::Flight;
pub use modification::FlightModification;
