// Integration tests for airport listings and code resolution.

use rusqlite::Connection;
use skyfare_store::repo::AirportRepo;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    skyfare_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn seed_airport(conn: &Connection, code: &str, city: &str, country: &str, domestic: bool) {
    conn.execute(
        "INSERT INTO airports (code, name, city, country, is_domestic) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            code,
            format!("{} International", city),
            city,
            country,
            domestic as i64
        ],
    )
    .unwrap();
}

#[test]
fn test_listing_returns_all_summary_fields() {
    let conn = setup_test_db();
    seed_airport(&conn, "SFO", "San Francisco", "USA", true);
    seed_airport(&conn, "LHR", "London", "UK", false);

    let airports = AirportRepo::airports(&conn, false).unwrap();

    assert_eq!(airports.len(), 2);
    let sfo = airports.iter().find(|a| a.code == "SFO").unwrap();
    assert_eq!(sfo.name, "San Francisco International");
    assert_eq!(sfo.city, "San Francisco");
    assert_eq!(sfo.country, "USA");
    assert!(sfo.is_domestic);
    assert!(sfo.airport_pk > 0);
}

#[test]
fn test_domestic_only_filters_the_listing() {
    let conn = setup_test_db();
    seed_airport(&conn, "SFO", "San Francisco", "USA", true);
    seed_airport(&conn, "LAX", "Los Angeles", "USA", true);
    seed_airport(&conn, "LHR", "London", "UK", false);

    let airports = AirportRepo::airports(&conn, true).unwrap();

    assert_eq!(airports.len(), 2);
    assert!(airports.iter().all(|a| a.is_domestic));
}

#[test]
fn test_code_to_id_exact_match_only() {
    let conn = setup_test_db();
    seed_airport(&conn, "SFO", "San Francisco", "USA", true);

    let pk = AirportRepo::airport_code_to_id(&conn, "SFO").unwrap();
    assert!(pk.is_some());

    // Substring of a known code is not a match on this path
    assert_eq!(AirportRepo::airport_code_to_id(&conn, "SF").unwrap(), None);
    assert_eq!(AirportRepo::airport_code_to_id(&conn, "XXX").unwrap(), None);
}

#[test]
fn test_empty_code_short_circuits_without_a_query() {
    // No schema at all: if the lookup issued a query it would fail
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(AirportRepo::airport_code_to_id(&conn, "").unwrap(), None);
}
