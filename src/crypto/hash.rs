//! Hashing utilities for the ledger
//!
//! SHA-256 is used for block hashes, signing digests and address checksums.

use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes double SHA-256 hash (SHA-256 of SHA-256)
/// Used for address checksums
pub fn double_sha256(data: &[u8]) -> Vec<u8> {
    sha256(&sha256(data))
}

/// Computes SHA-256 hash and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Checks if a hex-encoded hash meets the difficulty target.
/// The hash must start with `difficulty` `'0'` characters.
pub fn meets_difficulty(hash_hex: &str, difficulty: usize) -> bool {
    hash_hex.len() >= difficulty && hash_hex.bytes().take(difficulty).all(|c| c == b'0')
}
