use serde::{Deserialize, Serialize};

/// Airport - a lookup record, read-only from this layer
///
/// `code` is the unique public identifier (e.g. "SFO"); `airport_pk` is
/// the store key the flights table references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Primary key
    pub airport_pk: i64,

    /// Unique airport code
    pub code: String,

    /// Full airport name
    pub name: String,

    pub city: String,

    pub country: String,

    /// Whether the airport is domestic
    pub is_domestic: bool,
}
