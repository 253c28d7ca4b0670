//! Ledger implementation
//!
//! The ledger owns the chain of blocks and the mempool. It is the only
//! component that appends blocks, and it hands every new block to the
//! chain store before making it visible.
//!
//! Policies:
//! - Submission never checks balances. Overdrafts are caught when a block
//!   is assembled (the transfer is left out) and when the chain is
//!   validated (the chain is rejected).
//! - A reward is spendable as soon as its block is on the chain, even
//!   while that block is the tip. It is the first transaction of its
//!   block, so the miner can spend it within the same block.

use crate::core::balance::{scan_balance, BalanceSheet};
use crate::core::block::Block;
use crate::core::transaction::{Transaction, TransactionError};
use crate::crypto::KeyPair;
use crate::mining::{Mempool, Miner};
use crate::storage::{ChainStore, StorageError};
use crate::wallet::KeyRegistry;
use log::{debug, info, warn};
use thiserror::Error;

/// Default mining difficulty (number of leading zero hex characters)
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Default block reward in base units
pub const MINING_REWARD: u64 = 10;

/// Ledger-related errors
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction amount must be positive")]
    InvalidAmount,
    #[error("Insufficient balance for {address}: has {have}, needs {need}")]
    InsufficientBalance {
        address: String,
        have: u64,
        need: u64,
    },
    #[error("Chain has no blocks")]
    ChainEmpty,
    #[error("Stored chain does not start with the genesis block")]
    InvalidGenesis,
    #[error("Key for {signer} cannot sign for sender {sender}")]
    SignerMismatch { sender: String, signer: String },
    #[error("Transaction error: {0}")]
    TransactionError(TransactionError),
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),
}

impl From<TransactionError> for LedgerError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::InvalidAmount => LedgerError::InvalidAmount,
            other => LedgerError::TransactionError(other),
        }
    }
}

/// First integrity problem found while validating the chain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainViolation {
    #[error("First block is not the genesis block")]
    GenesisMismatch,
    #[error("Block {index} hash does not match its contents")]
    HashMismatch { index: u64 },
    #[error("Block {index} does not link to the previous block")]
    BrokenLink { index: u64 },
    #[error("Block at position {position} carries index {found}")]
    IndexMismatch { position: u64, found: u64 },
    #[error("Block {index}: signer {address} is not in the registry")]
    UnknownSigner { index: u64, address: String },
    #[error("Block {index}: invalid signature from {address}")]
    BadSignature { index: u64, address: String },
    #[error("Block {index}: {address} overdraws (has {have}, needs {need})")]
    Overdraft {
        index: u64,
        address: String,
        have: u64,
        need: u64,
    },
}

/// Ledger configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Leading zero hex characters required of every mined block hash
    pub difficulty: usize,
    /// Amount minted to the miner of each block
    pub mining_reward: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            mining_reward: MINING_REWARD,
        }
    }
}

/// The chain, its mempool and the store behind it
#[derive(Debug)]
pub struct Ledger<S: ChainStore> {
    blocks: Vec<Block>,
    pending: Mempool,
    config: LedgerConfig,
    store: S,
}

impl<S: ChainStore> Ledger<S> {
    /// Load the chain from `store`. An empty store gets a genesis block,
    /// which is persisted before the ledger is returned.
    pub fn open(mut store: S, config: LedgerConfig) -> Result<Self, LedgerError> {
        if config.mining_reward == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut blocks = store.load_chain()?;
        if blocks.is_empty() {
            let genesis = Block::genesis();
            store.append_block(&genesis)?;
            info!("Created genesis block {}", genesis.hash());
            blocks.push(genesis);
        }
        if blocks[0] != Block::genesis() {
            return Err(LedgerError::InvalidGenesis);
        }

        info!(
            "Ledger ready: {} blocks, difficulty {}, reward {}",
            blocks.len(),
            config.difficulty,
            config.mining_reward
        );

        Ok(Self {
            blocks,
            pending: Mempool::new(),
            config,
            store,
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get a block by index
    pub fn block(&self, index: u64) -> Option<&Block> {
        self.blocks.get(index as usize)
    }

    /// Get the latest block
    pub fn latest_block(&self) -> Result<&Block, LedgerError> {
        self.blocks.last().ok_or(LedgerError::ChainEmpty)
    }

    /// Number of blocks on top of genesis
    pub fn height(&self) -> u64 {
        self.blocks.len().saturating_sub(1) as u64
    }

    /// Transactions waiting for the next block
    pub fn pending(&self) -> &[Transaction] {
        self.pending.transactions()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Queue a transfer for the next block.
    ///
    /// With a key pair the transfer is signed, and the key pair must own
    /// `sender`. Balances are not checked here. Returns the index of the
    /// block that will hold the transfer.
    pub fn submit(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: u64,
        key_pair: Option<&KeyPair>,
    ) -> Result<u64, LedgerError> {
        let mut tx = Transaction::new(sender, recipient, amount)?;

        if let Some(key_pair) = key_pair {
            if key_pair.address() != sender {
                return Err(LedgerError::SignerMismatch {
                    sender: sender.to_string(),
                    signer: key_pair.address().to_string(),
                });
            }
            tx.sign(key_pair)?;
        }

        let next_index = self.latest_block()?.index() + 1;
        debug!(
            "Queued {} from {} to {} for block {}",
            amount, sender, recipient, next_index
        );
        self.pending.add(tx);
        Ok(next_index)
    }

    /// Mine the mempool into a new block paying `miner_address`.
    ///
    /// The block is `[reward] + pending`, minus any transfer its sender
    /// cannot cover. It is persisted before it joins the chain; if the
    /// store fails, chain and mempool are left exactly as they were.
    pub fn mine(&mut self, miner_address: &str) -> Result<&Block, LedgerError> {
        let miner = Miner::new(miner_address, self.config.mining_reward);
        let reward = miner.reward_tx()?;

        let previous_hash = self.latest_block()?.hash().to_string();
        let index = self.blocks.len() as u64;
        let transactions = self.screen_pending(reward)?;

        let (block, stats) = miner.seal(index, &previous_hash, transactions, self.config.difficulty);

        self.store.append_block(&block)?;

        info!(
            "Appended block {} ({} transactions, {} attempts) hash {}",
            block.index(),
            block.tx_count(),
            stats.hash_attempts,
            block.hash()
        );

        self.pending.clear();
        self.blocks.push(block);
        self.latest_block()
    }

    /// Replay the chain, credit the reward, then keep every pending
    /// transfer that its sender can still cover, in arrival order.
    fn screen_pending(&self, reward: Transaction) -> Result<Vec<Transaction>, LedgerError> {
        let mut sheet = BalanceSheet::from_blocks(&self.blocks)?;
        sheet.apply(&reward)?;

        let mut transactions = vec![reward];
        for tx in self.pending.transactions() {
            match sheet.apply(tx) {
                Ok(()) => transactions.push(tx.clone()),
                Err(e) => warn!("Leaving transaction out of block: {}", e),
            }
        }

        Ok(transactions)
    }

    /// Balance of an address, derived by scanning the whole chain
    pub fn balance_of(&self, address: &str) -> u64 {
        scan_balance(&self.blocks, address)
    }

    /// All confirmed transactions sent or received by an address
    pub fn history(&self, address: &str) -> Vec<&Transaction> {
        self.blocks
            .iter()
            .flat_map(Block::transactions)
            .filter(|tx| tx.sender() == Some(address) || tx.recipient() == address)
            .collect()
    }

    /// Check the chain end to end, stopping at the first violation.
    ///
    /// For every block after genesis: the stored hash matches the
    /// contents, the previous hash matches the prior block, signed
    /// transfers verify against `registry`, and no sender overdraws.
    pub fn verify_chain(&self, registry: &KeyRegistry) -> Result<(), ChainViolation> {
        // Genesis is fixed and empty; the replay starts after it
        if self.blocks.first() != Some(&Block::genesis()) {
            return Err(ChainViolation::GenesisMismatch);
        }
        let mut sheet = BalanceSheet::new();

        for (position, pair) in self.blocks.windows(2).enumerate() {
            let (previous, block) = (&pair[0], &pair[1]);
            let index = block.index();

            if !block.verify_hash() {
                return Err(ChainViolation::HashMismatch { index });
            }
            if block.previous_hash() != previous.hash() {
                return Err(ChainViolation::BrokenLink { index });
            }
            if index != position as u64 + 1 {
                return Err(ChainViolation::IndexMismatch {
                    position: position as u64 + 1,
                    found: index,
                });
            }

            for tx in block.transactions() {
                if let (Some(sender), true) = (tx.sender(), tx.is_signed()) {
                    let public_key =
                        registry
                            .get(sender)
                            .ok_or_else(|| ChainViolation::UnknownSigner {
                                index,
                                address: sender.to_string(),
                            })?;
                    if !tx.verify(public_key) {
                        return Err(ChainViolation::BadSignature {
                            index,
                            address: sender.to_string(),
                        });
                    }
                }

                if let Err(LedgerError::InsufficientBalance {
                    address,
                    have,
                    need,
                }) = sheet.apply(tx)
                {
                    return Err(ChainViolation::Overdraft {
                        index,
                        address,
                        have,
                        need,
                    });
                }
            }
        }

        Ok(())
    }

    /// `true` when [`Ledger::verify_chain`] finds nothing wrong.
    /// Never mutates the ledger.
    pub fn validate(&self, registry: &KeyRegistry) -> bool {
        match self.verify_chain(registry) {
            Ok(()) => true,
            Err(violation) => {
                warn!("Chain validation failed: {}", violation);
                false
            }
        }
    }

    /// Get chain statistics
    pub fn stats(&self) -> ChainStats {
        let total_transactions: usize = self.blocks.iter().map(Block::tx_count).sum();

        ChainStats {
            height: self.height(),
            total_blocks: self.blocks.len() as u64,
            total_transactions: total_transactions as u64,
            pending_transactions: self.pending.len(),
            difficulty: self.config.difficulty,
            latest_hash: self
                .blocks
                .last()
                .map(|b| b.hash().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Chain statistics
#[derive(Debug, Clone)]
pub struct ChainStats {
    pub height: u64,
    pub total_blocks: u64,
    pub total_transactions: u64,
    pub pending_transactions: usize,
    pub difficulty: usize,
    pub latest_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use chrono::Utc;

    fn test_config() -> LedgerConfig {
        LedgerConfig {
            difficulty: 2,
            mining_reward: 10,
        }
    }

    fn new_ledger() -> Ledger<MemoryStore> {
        Ledger::open(MemoryStore::new(), test_config()).unwrap()
    }

    /// Store that can be told to reject appends
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_appends: bool,
    }

    impl ChainStore for FlakyStore {
        fn load_chain(&self) -> Result<Vec<Block>, StorageError> {
            self.inner.load_chain()
        }

        fn append_block(&mut self, block: &Block) -> Result<(), StorageError> {
            if self.fail_appends {
                return Err(StorageError::InvalidData("disk full".to_string()));
            }
            self.inner.append_block(block)
        }
    }

    /// Alice holds a key, earns one reward and pays Bob 5 in the same block
    fn ledger_with_transfer() -> (Ledger<MemoryStore>, KeyPair, KeyPair) {
        let mut ledger = new_ledger();
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();

        ledger
            .submit(alice.address(), bob.address(), 5, Some(&alice))
            .unwrap();
        ledger.mine(alice.address()).unwrap();
        (ledger, alice, bob)
    }

    #[test]
    fn test_genesis_only_ledger() {
        let ledger = new_ledger();

        assert_eq!(ledger.blocks().len(), 1);
        assert_eq!(ledger.height(), 0);
        assert_eq!(ledger.latest_block().unwrap(), &Block::genesis());
        assert_eq!(ledger.balance_of("anyone"), 0);
        assert!(ledger.validate(&KeyRegistry::new()));
        assert_eq!(ledger.store().blocks(), &[Block::genesis()]);
    }

    #[test]
    fn test_zero_reward_rejected() {
        let config = LedgerConfig {
            mining_reward: 0,
            ..test_config()
        };
        assert!(matches!(
            Ledger::open(MemoryStore::new(), config),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn test_stored_chain_without_genesis_rejected() {
        let mut block = Block::assemble(1, Utc::now(), Vec::new(), Block::genesis().hash());
        block.mine(2);

        assert!(matches!(
            Ledger::open(MemoryStore::with_blocks(vec![block]), test_config()),
            Err(LedgerError::InvalidGenesis)
        ));
    }

    #[test]
    fn test_forged_genesis_rejected() {
        let minted = Transaction::reward("mallory", 1_000).unwrap();
        let forged = Block::assemble(0, Utc::now(), vec![minted], "whatever");

        assert!(matches!(
            Ledger::open(MemoryStore::with_blocks(vec![forged]), test_config()),
            Err(LedgerError::InvalidGenesis)
        ));
    }

    #[test]
    fn test_replaced_genesis_invalidates_chain() {
        let mut ledger = new_ledger();
        ledger.mine("miner").unwrap();

        let minted = Transaction::reward("mallory", 1_000).unwrap();
        let mut forged = Block::genesis();
        forged.transactions.push(minted);
        forged.hash = forged.calculate_hash();
        ledger.blocks[0] = forged;

        assert_eq!(
            ledger.verify_chain(&KeyRegistry::new()),
            Err(ChainViolation::GenesisMismatch)
        );
        assert!(!ledger.validate(&KeyRegistry::new()));
    }

    #[test]
    fn test_mine_once() {
        let mut ledger = new_ledger();
        let miner = KeyPair::generate();

        let block = ledger.mine(miner.address()).unwrap().clone();

        assert_eq!(block.index(), 1);
        assert!(block.hash().starts_with("00"));
        assert_eq!(block.previous_hash(), Block::genesis().hash());
        assert_eq!(ledger.blocks().len(), 2);
        assert!(ledger.validate(&KeyRegistry::new()));
        // Rewards count while their block is the tip
        assert_eq!(ledger.balance_of(miner.address()), 10);
        assert_eq!(ledger.store().blocks().len(), 2);
    }

    #[test]
    fn test_rewards_accumulate() {
        let mut ledger = new_ledger();
        ledger.mine("miner").unwrap();
        ledger.mine("miner").unwrap();

        assert_eq!(ledger.balance_of("miner"), 20);
        assert_eq!(ledger.height(), 2);
        assert!(ledger.validate(&KeyRegistry::new()));
    }

    #[test]
    fn test_zero_difficulty_accepts_first_hash() {
        let config = LedgerConfig {
            difficulty: 0,
            ..test_config()
        };
        let mut ledger = Ledger::open(MemoryStore::new(), config).unwrap();
        let block = ledger.mine("miner").unwrap();
        assert_eq!(block.nonce(), 0);
    }

    #[test]
    fn test_reward_comes_first() {
        let (ledger, alice, bob) = ledger_with_transfer();
        let block = ledger.latest_block().unwrap();

        assert_eq!(block.tx_count(), 2);
        assert_eq!(block.reward_tx().map(|tx| tx.recipient()), Some(alice.address()));
        assert_eq!(block.transactions()[1].recipient(), bob.address());
    }

    #[test]
    fn test_value_is_conserved() {
        let (ledger, alice, bob) = ledger_with_transfer();

        assert_eq!(ledger.balance_of(alice.address()), 5);
        assert_eq!(ledger.balance_of(bob.address()), 5);
        assert_eq!(
            ledger.balance_of(alice.address()) + ledger.balance_of(bob.address()),
            ledger.config().mining_reward
        );
        assert!(ledger.pending().is_empty());

        let registry: KeyRegistry = [&alice].into_iter().collect();
        assert!(ledger.validate(&registry));
    }

    #[test]
    fn test_submit_returns_next_block_index() {
        let mut ledger = new_ledger();
        assert_eq!(ledger.submit("a", "b", 1, None).unwrap(), 1);
        ledger.mine("miner").unwrap();
        assert_eq!(ledger.submit("a", "b", 1, None).unwrap(), 2);
    }

    #[test]
    fn test_submit_rejects_zero_amount() {
        let mut ledger = new_ledger();
        assert!(matches!(
            ledger.submit("a", "b", 0, None),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn test_submit_rejects_foreign_key() {
        let mut ledger = new_ledger();
        let alice = KeyPair::generate();
        let mallory = KeyPair::generate();

        assert!(matches!(
            ledger.submit(alice.address(), "bob", 1, Some(&mallory)),
            Err(LedgerError::SignerMismatch { .. })
        ));
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn test_submit_does_not_check_balance() {
        let mut ledger = new_ledger();
        ledger.submit("broke", "bob", 1_000, None).unwrap();
        assert_eq!(ledger.pending().len(), 1);
    }

    #[test]
    fn test_overdraft_left_out_of_block() {
        let mut ledger = new_ledger();
        ledger.submit("broke", "bob", 5, None).unwrap();
        ledger.submit("miner", "carol", 4, None).unwrap();

        let block = ledger.mine("miner").unwrap();

        // Reward plus the covered transfer; the overdraft is dropped
        assert_eq!(block.tx_count(), 2);
        assert_eq!(block.transactions()[1].recipient(), "carol");
        assert!(ledger.pending().is_empty());
        assert_eq!(ledger.balance_of("bob"), 0);
        assert_eq!(ledger.balance_of("miner"), 6);
        assert!(ledger.validate(&KeyRegistry::new()));
    }

    #[test]
    fn test_unsigned_transfer_needs_no_registry_entry() {
        let mut ledger = new_ledger();
        ledger.mine("alice").unwrap();
        ledger.submit("alice", "bob", 3, None).unwrap();
        ledger.mine("carol").unwrap();

        assert!(ledger.validate(&KeyRegistry::new()));
        assert_eq!(ledger.balance_of("alice"), 7);
    }

    #[test]
    fn test_tampered_amount_invalidates_chain() {
        let (mut ledger, alice, _) = ledger_with_transfer();
        let registry: KeyRegistry = [&alice].into_iter().collect();

        ledger.blocks[1].transactions[1].amount = 1;
        assert!(!ledger.validate(&registry));

        // Re-mining the tampered block does not help: the signature
        // no longer covers the amount
        ledger.blocks[1].hash = ledger.blocks[1].calculate_hash();
        assert_eq!(
            ledger.verify_chain(&registry),
            Err(ChainViolation::BadSignature {
                index: 1,
                address: alice.address().to_string()
            })
        );
    }

    #[test]
    fn test_tampered_amount_is_hash_mismatch() {
        let (mut ledger, alice, _) = ledger_with_transfer();
        let registry: KeyRegistry = [&alice].into_iter().collect();

        ledger.blocks[1].transactions[1].amount = 100;
        assert_eq!(
            ledger.verify_chain(&registry),
            Err(ChainViolation::HashMismatch { index: 1 })
        );
    }

    #[test]
    fn test_overwritten_hash_invalidates_chain() {
        let mut ledger = new_ledger();
        ledger.mine("miner").unwrap();

        ledger.blocks[1].hash = "invalid_hash".to_string();
        assert!(!ledger.validate(&KeyRegistry::new()));
    }

    #[test]
    fn test_overwritten_previous_hash_invalidates_chain() {
        let mut ledger = new_ledger();
        ledger.mine("miner").unwrap();

        ledger.blocks[1].previous_hash = "invalid_hash".to_string();
        assert!(!ledger.validate(&KeyRegistry::new()));

        // Still rejected once the block hash is recomputed: the link is broken
        ledger.blocks[1].hash = ledger.blocks[1].calculate_hash();
        assert_eq!(
            ledger.verify_chain(&KeyRegistry::new()),
            Err(ChainViolation::BrokenLink { index: 1 })
        );
    }

    #[test]
    fn test_missing_signer_invalidates_chain() {
        let (ledger, alice, _) = ledger_with_transfer();

        assert_eq!(
            ledger.verify_chain(&KeyRegistry::new()),
            Err(ChainViolation::UnknownSigner {
                index: 1,
                address: alice.address().to_string()
            })
        );
    }

    #[test]
    fn test_wrong_registry_key_invalidates_chain() {
        let (ledger, alice, bob) = ledger_with_transfer();

        let mut registry = KeyRegistry::new();
        registry.insert(alice.address(), *bob.public_key());
        assert!(!ledger.validate(&registry));
    }

    #[test]
    fn test_overdraft_in_chain_invalidates_chain() {
        let mut ledger = new_ledger();
        ledger.mine("miner").unwrap();

        let tip = ledger.latest_block().unwrap().hash().to_string();
        let overdraft = Transaction::new("broke", "bob", 5).unwrap();
        let mut block = Block::assemble(2, Utc::now(), vec![overdraft], &tip);
        block.mine(2);
        ledger.blocks.push(block);

        assert_eq!(
            ledger.verify_chain(&KeyRegistry::new()),
            Err(ChainViolation::Overdraft {
                index: 2,
                address: "broke".to_string(),
                have: 0,
                need: 5
            })
        );
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let (mut ledger, alice, _) = ledger_with_transfer();
        ledger.submit(alice.address(), "dave", 1, Some(&alice)).unwrap();
        ledger.blocks[1].hash = "broken".to_string();

        let blocks_before = ledger.blocks().to_vec();
        let pending_before = ledger.pending().to_vec();

        assert!(!ledger.validate(&KeyRegistry::new()));
        assert_eq!(ledger.blocks(), blocks_before.as_slice());
        assert_eq!(ledger.pending(), pending_before.as_slice());
    }

    #[test]
    fn test_failed_persistence_leaves_ledger_unchanged() {
        let mut ledger = Ledger::open(FlakyStore::default(), test_config()).unwrap();
        ledger.submit("a", "b", 1, None).unwrap();
        ledger.store.fail_appends = true;

        assert!(matches!(
            ledger.mine("miner"),
            Err(LedgerError::Persistence(_))
        ));
        assert_eq!(ledger.blocks().len(), 1);
        assert_eq!(ledger.pending().len(), 1);
        assert_eq!(ledger.balance_of("miner"), 0);

        ledger.store.fail_appends = false;
        ledger.mine("miner").unwrap();
        assert_eq!(ledger.blocks().len(), 2);
        assert_eq!(ledger.store().inner.blocks().len(), 2);
    }

    #[test]
    fn test_reopen_from_file_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let alice = KeyPair::generate();

        {
            let store = JsonFileStore::with_data_dir(temp_dir.path()).unwrap();
            let mut ledger = Ledger::open(store, test_config()).unwrap();
            ledger.mine(alice.address()).unwrap();
            ledger
                .submit(alice.address(), "bob", 4, Some(&alice))
                .unwrap();
            ledger.mine("miner").unwrap();
        }

        let store = JsonFileStore::with_data_dir(temp_dir.path()).unwrap();
        let ledger = Ledger::open(store, test_config()).unwrap();
        let registry: KeyRegistry = [&alice].into_iter().collect();

        assert_eq!(ledger.blocks().len(), 3);
        assert!(ledger.pending().is_empty());
        assert!(ledger.validate(&registry));
        assert_eq!(ledger.balance_of(alice.address()), 6);
        assert_eq!(ledger.balance_of("bob"), 4);
    }

    #[test]
    fn test_history_and_stats() {
        let (mut ledger, alice, bob) = ledger_with_transfer();
        ledger.submit("x", "y", 1, None).unwrap();

        assert_eq!(ledger.history(alice.address()).len(), 2);
        assert_eq!(ledger.history(bob.address()).len(), 1);

        let stats = ledger.stats();
        assert_eq!(stats.height, 1);
        assert_eq!(stats.total_blocks, 2);
        assert_eq!(stats.total_transactions, 2);
        assert_eq!(stats.pending_transactions, 1);
        assert_eq!(stats.difficulty, 2);
        assert_eq!(stats.latest_hash, ledger.latest_block().unwrap().hash());
    }
}
