//! Checksum computation for migrations
//!
//! SHA-256 over the migration SQL, recorded at apply time and verified
//! on later runs to catch edits to an already-applied migration.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 checksum of migration SQL as lowercase hex
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_shape() {
        let checksum = compute_checksum("CREATE TABLE t (id INTEGER)");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_deterministic() {
        assert_eq!(compute_checksum("SELECT 1"), compute_checksum("SELECT 1"));
        assert_ne!(compute_checksum("SELECT 1"), compute_checksum("SELECT 2"));
    }
}
