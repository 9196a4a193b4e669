//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent application with per-migration transactions
//! - SHA-256 checksum recording and drift verification

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
