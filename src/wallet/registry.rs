//! Address → public key lookup used by chain validation

use crate::crypto::{public_key_to_address, KeyPair};
use secp256k1::PublicKey;
use std::collections::HashMap;

/// Explicit registry of known signers.
///
/// Built by the caller and handed to `Ledger::validate`; there is no
/// process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: HashMap<String, PublicKey>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key pair under its own address
    pub fn register(&mut self, key_pair: &KeyPair) {
        self.keys
            .insert(key_pair.address().to_string(), *key_pair.public_key());
    }

    /// Register a bare public key under its derived address
    pub fn register_public_key(&mut self, public_key: PublicKey) {
        self.keys.insert(public_key_to_address(&public_key), public_key);
    }

    /// Map an address to a public key as-is, without deriving anything
    pub fn insert(&mut self, address: impl Into<String>, public_key: PublicKey) {
        self.keys.insert(address.into(), public_key);
    }

    pub fn get(&self, address: &str) -> Option<&PublicKey> {
        self.keys.get(address)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.keys.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> FromIterator<&'a KeyPair> for KeyRegistry {
    fn from_iter<I: IntoIterator<Item = &'a KeyPair>>(iter: I) -> Self {
        let mut registry = Self::new();
        for key_pair in iter {
            registry.register(key_pair);
        }
        registry
    }
}
