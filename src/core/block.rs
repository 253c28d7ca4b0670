//! Block implementation for the ledger
//!
//! A block is an ordered batch of transactions plus a proof-of-work
//! header linking it to the previous block.

use crate::core::transaction::Transaction;
use crate::crypto::{meets_difficulty, sha256_hex};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `previous_hash` of the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Fixed genesis timestamp (2024-01-01T00:00:00Z) so every ledger
/// starts from the same genesis hash
pub const GENESIS_TIMESTAMP: i64 = 1_704_067_200;

/// Block errors
#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Wire format error: {0}")]
    WireError(#[from] serde_json::Error),
}

/// A block in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block index/height
    pub(crate) index: u64,
    /// Block creation timestamp
    pub(crate) timestamp: DateTime<Utc>,
    /// Transactions, reward first
    pub(crate) transactions: Vec<Transaction>,
    /// Hash of the previous block
    pub(crate) previous_hash: String,
    /// Nonce used for proof of work
    pub(crate) nonce: u64,
    /// Block hash (cached)
    pub(crate) hash: String,
}

impl Block {
    /// Build an unmined block: nonce 0 and the hash of that state
    pub fn assemble(
        index: u64,
        timestamp: DateTime<Utc>,
        transactions: Vec<Transaction>,
        previous_hash: &str,
    ) -> Self {
        let mut block = Self {
            index,
            timestamp,
            transactions,
            previous_hash: previous_hash.to_string(),
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.calculate_hash();
        block
    }

    /// Create the genesis block
    pub fn genesis() -> Self {
        let timestamp = Utc
            .timestamp_opt(GENESIS_TIMESTAMP, 0)
            .single()
            .unwrap_or_default();
        Self::assemble(0, timestamp, Vec::new(), GENESIS_PREVIOUS_HASH)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Recompute the hash over index, timestamp, transactions,
    /// previous hash and nonce, in that order.
    pub fn calculate_hash(&self) -> String {
        let transactions = self
            .transactions
            .iter()
            .map(Transaction::hash_encoding)
            .collect::<Vec<_>>()
            .join("|");

        let data = format!(
            "{}{}[{}]{}{}",
            self.index,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            transactions,
            self.previous_hash,
            self.nonce
        );
        sha256_hex(data.as_bytes())
    }

    /// Mine the block: bump the nonce until the hash starts with
    /// `difficulty` zeros. Returns the number of extra hashes computed.
    ///
    /// Unbounded; blocks the calling thread until a nonce is found.
    pub fn mine(&mut self, difficulty: usize) -> u64 {
        let mut attempts = 0u64;

        while !meets_difficulty(&self.hash, difficulty) {
            self.nonce = self.nonce.wrapping_add(1);
            self.hash = self.calculate_hash();
            attempts += 1;
        }

        attempts
    }

    /// Check if the stored hash meets a difficulty target
    pub fn is_valid_pow(&self, difficulty: usize) -> bool {
        meets_difficulty(&self.hash, difficulty)
    }

    /// Verify the stored hash against a fresh recomputation
    pub fn verify_hash(&self) -> bool {
        self.hash == self.calculate_hash()
    }

    /// Get the reward transaction (first transaction)
    pub fn reward_tx(&self) -> Option<&Transaction> {
        self.transactions.first().filter(|tx| tx.is_reward())
    }

    /// Get number of transactions in this block
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn to_wire(&self) -> Result<String, BlockError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a block from its wire form. The stored hash is kept as-is;
    /// comparing it with [`Block::calculate_hash`] is validation's job.
    pub fn from_wire(wire: &str) -> Result<Self, BlockError> {
        Ok(serde_json::from_str(wire)?)
    }
}
