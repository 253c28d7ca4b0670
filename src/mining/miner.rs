//! Proof-of-work engine for the ledger
//!
//! Builds the reward transaction, assembles the candidate block and runs
//! the nonce search. The miner never touches chain state; the ledger
//! decides what to do with the sealed block.

use crate::core::{Block, Transaction, TransactionError};
use chrono::Utc;
use log::info;
use std::time::Instant;

/// Mining statistics
#[derive(Debug, Clone)]
pub struct MiningStats {
    /// Number of hash attempts
    pub hash_attempts: u64,
    /// Time taken in milliseconds
    pub time_ms: u128,
    /// Hash rate (hashes per second)
    pub hash_rate: f64,
}

/// Miner for creating new blocks
#[derive(Debug, Clone)]
pub struct Miner {
    /// Miner's address for receiving rewards
    pub address: String,
    /// Reward minted per block
    pub reward: u64,
}

impl Miner {
    /// Create a new miner
    pub fn new(address: &str, reward: u64) -> Self {
        Self {
            address: address.to_string(),
            reward,
        }
    }

    /// The reward transaction paying this miner
    pub fn reward_tx(&self) -> Result<Transaction, TransactionError> {
        Transaction::reward(&self.address, self.reward)
    }

    /// Assemble and mine a block on top of `previous_hash`.
    ///
    /// `transactions` must already start with the reward transaction.
    /// CPU-bound and unbounded; returns only once a nonce is found.
    pub fn seal(
        &self,
        index: u64,
        previous_hash: &str,
        transactions: Vec<Transaction>,
        difficulty: usize,
    ) -> (Block, MiningStats) {
        let start = Instant::now();

        let mut block = Block::assemble(index, Utc::now(), transactions, previous_hash);

        info!(
            "Mining block {} with difficulty {} ({} transactions)...",
            index,
            difficulty,
            block.tx_count()
        );

        let attempts = block.mine(difficulty);

        let elapsed = start.elapsed().as_millis();
        let hash_rate = if elapsed > 0 {
            (attempts as f64) / (elapsed as f64 / 1000.0)
        } else {
            attempts as f64
        };

        let stats = MiningStats {
            hash_attempts: attempts,
            time_ms: elapsed,
            hash_rate,
        };

        info!(
            "Block {} mined in {}ms ({} attempts, {:.2} H/s)",
            block.index(),
            elapsed,
            attempts,
            hash_rate
        );

        (block, stats)
    }
}
