//! Transaction pool (mempool) for pending transactions
//!
//! Holds submitted transactions in arrival order until the next block is
//! mined. The pool is transient: it is never persisted and is cleared
//! whenever a block is appended.

use crate::core::Transaction;

/// Pool of submitted, not-yet-mined transactions
#[derive(Debug, Clone, Default)]
pub struct Mempool {
    transactions: Vec<Transaction>,
}

impl Mempool {
    /// Create a new mempool
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a transaction behind everything already pending
    pub fn add(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Pending transactions in arrival order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
