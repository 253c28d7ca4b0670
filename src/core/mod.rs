//! Core ledger components
//!
//! This module contains the fundamental building blocks:
//! - Transactions (signed transfers and rewards)
//! - Blocks (with proof of work)
//! - Balance replay over the chain
//! - The ledger (chain + mempool) and its thread-safe handle

pub mod balance;
pub mod block;
pub mod ledger;
pub mod shared;
pub mod transaction;

pub use balance::{scan_balance, BalanceSheet};
pub use block::{Block, BlockError, GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP};
pub use ledger::{
    ChainStats, ChainViolation, Ledger, LedgerConfig, LedgerError, DEFAULT_DIFFICULTY,
    MINING_REWARD,
};
pub use shared::SharedLedger;
pub use transaction::{Transaction, TransactionError};
