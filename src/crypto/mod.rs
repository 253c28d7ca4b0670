//! Cryptographic utilities for the ledger
//!
//! This module provides:
//! - SHA-256 hashing and the proof-of-work target check
//! - ECDSA key management (secp256k1) and address derivation

pub mod hash;
pub mod keys;

pub use hash::{double_sha256, meets_difficulty, sha256, sha256_hex};
pub use keys::{
    public_key_from_hex, public_key_to_address, sign_message, verify_signature, KeyError, KeyPair,
    ADDRESS_VERSION,
};
