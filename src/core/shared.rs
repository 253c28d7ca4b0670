//! Thread-safe handle around a [`Ledger`]
//!
//! The ledger itself has no internal locking. `SharedLedger` is the
//! single lock boundary: `submit` and `mine` take the write lock, reads
//! take the read lock. Reads run alongside each other, never alongside
//! a mutation.

use super::ledger::{ChainStats, Ledger, LedgerError};
use crate::core::Block;
use crate::crypto::KeyPair;
use crate::storage::ChainStore;
use crate::wallet::KeyRegistry;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Cloneable, lock-guarded ledger handle
pub struct SharedLedger<S: ChainStore> {
    inner: Arc<RwLock<Ledger<S>>>,
}

impl<S: ChainStore> Clone for SharedLedger<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ChainStore> SharedLedger<S> {
    pub fn new(ledger: Ledger<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn submit(
        &self,
        sender: &str,
        recipient: &str,
        amount: u64,
        key_pair: Option<&KeyPair>,
    ) -> Result<u64, LedgerError> {
        self.inner.write().submit(sender, recipient, amount, key_pair)
    }

    /// Mine under the write lock; every other caller waits for the whole
    /// proof-of-work search.
    pub fn mine(&self, miner_address: &str) -> Result<Block, LedgerError> {
        self.inner.write().mine(miner_address).cloned()
    }

    pub fn balance_of(&self, address: &str) -> u64 {
        self.inner.read().balance_of(address)
    }

    pub fn validate(&self, registry: &KeyRegistry) -> bool {
        self.inner.read().validate(registry)
    }

    pub fn stats(&self) -> ChainStats {
        self.inner.read().stats()
    }

    /// Hold the read lock for several reads in a row
    pub fn read(&self) -> RwLockReadGuard<'_, Ledger<S>> {
        self.inner.read()
    }
}
