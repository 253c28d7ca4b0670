//! Raven Ledger: an append-only, proof-of-work value-transfer ledger
//!
//! This crate provides:
//! - secp256k1 key pairs with Base58Check addresses
//! - Signed transfers and sender-less mining rewards
//! - Blocks linked by SHA-256 hashes and sealed by proof of work
//! - A ledger owning the chain and mempool, deriving balances by replay
//!   and validating the whole chain against an explicit key registry
//! - A pluggable chain store (JSON file or in-memory)
//!
//! # Example
//!
//! ```rust
//! use raven_ledger::core::{Ledger, LedgerConfig};
//! use raven_ledger::crypto::KeyPair;
//! use raven_ledger::storage::MemoryStore;
//! use raven_ledger::wallet::KeyRegistry;
//!
//! let config = LedgerConfig { difficulty: 1, mining_reward: 10 };
//! let mut ledger = Ledger::open(MemoryStore::new(), config).unwrap();
//!
//! let alice = KeyPair::generate();
//! ledger.submit(alice.address(), "bob", 4, Some(&alice)).unwrap();
//! ledger.mine(alice.address()).unwrap();
//!
//! assert_eq!(ledger.balance_of(alice.address()), 6);
//! assert_eq!(ledger.balance_of("bob"), 4);
//!
//! let registry: KeyRegistry = [&alice].into_iter().collect();
//! assert!(ledger.validate(&registry));
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod mining;
pub mod storage;
pub mod wallet;

// Re-export commonly used types
pub use core::{
    Block, ChainViolation, Ledger, LedgerConfig, LedgerError, SharedLedger, Transaction,
    DEFAULT_DIFFICULTY, MINING_REWARD,
};
pub use crypto::KeyPair;
pub use mining::{Mempool, Miner};
pub use storage::{ChainStore, JsonFileStore, MemoryStore, StorageError};
pub use wallet::{KeyRegistry, Wallet, WalletManager};
