use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flight - a scheduled leg between two airports
///
/// The persisted columns are the key, the two airport foreign keys, the
/// two schedule times, and the class. The `*_airport_*` enrichment fields
/// are resolved from the airports table at read time and never written
/// back to the flights table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Primary key; `None` until the store assigns one on insert
    pub flight_pk: Option<i64>,

    /// Departure airport foreign key
    pub depart_airport_id: i64,

    /// Arrival airport foreign key
    pub arrival_airport_id: i64,

    /// Scheduled departure time
    pub depart_time: DateTime<Utc>,

    /// Scheduled arrival time
    pub arrival_time: DateTime<Utc>,

    /// Cabin classification (opaque to this layer, matched by equality)
    pub class_type: String,

    /// Departure airport code, resolved at read time
    pub depart_airport_code: Option<String>,

    /// Departure airport name, resolved at read time
    pub depart_airport_name: Option<String>,

    /// Departure airport city, resolved on the joined read paths only
    pub depart_airport_city: Option<String>,

    /// Departure airport country, resolved on the joined read paths only
    pub depart_airport_country: Option<String>,

    /// Arrival airport code, resolved at read time
    pub arrival_airport_code: Option<String>,

    /// Arrival airport name, resolved at read time
    pub arrival_airport_name: Option<String>,

    /// Arrival airport city, resolved on the joined read paths only
    pub arrival_airport_city: Option<String>,

    /// Arrival airport country, resolved on the joined read paths only
    pub arrival_airport_country: Option<String>,
}

impl Flight {
    /// Create a new unpersisted Flight with no enrichment
    pub fn new(
        depart_airport_id: i64,
        arrival_airport_id: i64,
        depart_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        class_type: impl Into<String>,
    ) -> Self {
        Self {
            flight_pk: None,
            depart_airport_id,
            arrival_airport_id,
            depart_time,
            arrival_time,
            class_type: class_type.into(),
            depart_airport_code: None,
            depart_airport_name: None,
            depart_airport_city: None,
            depart_airport_country: None,
            arrival_airport_code: None,
            arrival_airport_name: None,
            arrival_airport_city: None,
            arrival_airport_country: None,
        }
    }

    /// Check if the store has assigned this flight a primary key
    pub fn is_persisted(&self) -> bool {
        self.flight_pk.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Flight {
        let depart = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let arrival = Utc.with_ymd_and_hms(2026, 3, 14, 13, 45, 0).unwrap();
        Flight::new(1, 2, depart, arrival, "economy")
    }

    #[test]
    fn test_new_flight_is_unpersisted() {
        let flight = sample();

        assert!(!flight.is_persisted());
        assert_eq!(flight.class_type, "economy");
        assert!(flight.depart_airport_code.is_none());
        assert!(flight.arrival_airport_country.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut flight = sample();
        flight.flight_pk = Some(9);
        flight.depart_airport_code = Some("SFO".to_string());

        let json = serde_json::to_string(&flight).unwrap();
        let back: Flight = serde_json::from_str(&json).unwrap();

        assert_eq!(back, flight);
    }
}
