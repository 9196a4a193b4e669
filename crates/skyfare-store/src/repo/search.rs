//! Conditional search-query assembly
//!
//! The search query is built from an explicit, fixed-order predicate list
//! over a base select that always joins the airports table twice for
//! enrichment. Filter predicates reference the same two join aliases, so
//! each join serves filtering and enrichment at once and is never
//! duplicated.

use chrono::{DateTime, Utc};
use rusqlite::ToSql;
use skyfare_core::model::Flight;

use crate::repo::datetime_from_epoch;

/// Search criteria; an unset field contributes no predicate
#[derive(Debug, Clone, Default)]
pub struct FlightSearchFilters {
    /// Substring match on the departure airport code
    pub depart_airport: Option<String>,

    /// Substring match on the arrival airport code
    pub arrival_airport: Option<String>,

    /// Departure strictly after this time
    pub depart_time_start: Option<DateTime<Utc>>,

    /// Departure at or before this time
    pub depart_time_end: Option<DateTime<Utc>>,

    /// Arrival at or after this time
    pub arrive_time_start: Option<DateTime<Utc>>,

    /// Arrival at or before this time
    pub arrive_time_end: Option<DateTime<Utc>>,

    /// Exact class match
    pub class_type: Option<String>,

    /// Require both endpoint airports to be domestic
    pub is_domestic: bool,
}

/// Base select with both enrichment joins
///
/// Every row produced through this select carries full airport details
/// for both endpoints, whatever filters were active.
pub(crate) const ENRICHED_SELECT: &str =
    "SELECT flights.flight_pk, flights.depart_airport_id, flights.arrival_airport_id, \
            flights.depart_time, flights.arrival_time, flights.class_type, \
            depart_airport.code, depart_airport.name, depart_airport.city, depart_airport.country, \
            arrival_airport.code, arrival_airport.name, arrival_airport.city, arrival_airport.country \
     FROM flights \
     JOIN airports AS depart_airport ON flights.depart_airport_id = depart_airport.airport_pk \
     JOIN airports AS arrival_airport ON flights.arrival_airport_id = arrival_airport.airport_pk";

/// Map one row of the enriched select into a Flight
pub(crate) fn map_enriched_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Flight> {
    let depart_time: i64 = row.get(3)?;
    let arrival_time: i64 = row.get(4)?;
    let class_type: String = row.get(5)?;

    let mut flight = Flight::new(
        row.get(1)?,
        row.get(2)?,
        datetime_from_epoch(depart_time),
        datetime_from_epoch(arrival_time),
        class_type,
    );
    flight.flight_pk = Some(row.get(0)?);
    flight.depart_airport_code = Some(row.get(6)?);
    flight.depart_airport_name = Some(row.get(7)?);
    flight.depart_airport_city = Some(row.get(8)?);
    flight.depart_airport_country = Some(row.get(9)?);
    flight.arrival_airport_code = Some(row.get(10)?);
    flight.arrival_airport_name = Some(row.get(11)?);
    flight.arrival_airport_city = Some(row.get(12)?);
    flight.arrival_airport_country = Some(row.get(13)?);

    Ok(flight)
}

/// Assemble the search SQL and its positional parameters
///
/// Predicates are appended in a fixed order so a given filter set always
/// produces the same SQL. Conjunction is AND throughout; no row cap.
pub(crate) fn build_search_query(filters: &FlightSearchFilters) -> (String, Vec<Box<dyn ToSql>>) {
    let mut predicates: Vec<&'static str> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(class_type) = &filters.class_type {
        predicates.push("flights.class_type = ?");
        params.push(Box::new(class_type.clone()));
    }
    if let Some(start) = filters.depart_time_start {
        // Lower bound on departure is strict; the other three are inclusive
        predicates.push("flights.depart_time > ?");
        params.push(Box::new(start.timestamp()));
    }
    if let Some(end) = filters.depart_time_end {
        predicates.push("flights.depart_time <= ?");
        params.push(Box::new(end.timestamp()));
    }
    if let Some(start) = filters.arrive_time_start {
        predicates.push("flights.arrival_time >= ?");
        params.push(Box::new(start.timestamp()));
    }
    if let Some(end) = filters.arrive_time_end {
        predicates.push("flights.arrival_time <= ?");
        params.push(Box::new(end.timestamp()));
    }
    if let Some(code) = &filters.depart_airport {
        predicates.push("depart_airport.code LIKE '%' || ? || '%'");
        params.push(Box::new(code.clone()));
    }
    if let Some(code) = &filters.arrival_airport {
        predicates.push("arrival_airport.code LIKE '%' || ? || '%'");
        params.push(Box::new(code.clone()));
    }
    if filters.is_domestic {
        predicates.push("depart_airport.is_domestic = 1");
        predicates.push("arrival_airport.is_domestic = 1");
    }

    let mut sql = String::from(ENRICHED_SELECT);
    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }

    (sql, params)
}
