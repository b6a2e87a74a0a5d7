//! Password digest used for storage and equality comparison.

use sha2::{Digest, Sha256};

/// Deterministic one-way digest of a password: lowercase hex SHA-256.
///
/// The stored value is only ever compared for equality, never decoded.
pub fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
