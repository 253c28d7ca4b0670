//! Account balances derived from the chain
//!
//! Nothing is cached between calls: balances are replayed from the
//! blocks in chain order, transaction by transaction. Rewards are
//! credited as soon as their block is on the chain, tip included.

use crate::core::block::Block;
use crate::core::ledger::LedgerError;
use crate::core::transaction::Transaction;
use std::collections::HashMap;

/// Running balances of every address seen during a replay
#[derive(Debug, Clone, Default)]
pub struct BalanceSheet {
    balances: HashMap<String, u64>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay whole blocks, failing on the first overdraft
    pub fn from_blocks<'a, I>(blocks: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = &'a Block>,
    {
        let mut sheet = Self::new();
        for block in blocks {
            for tx in block.transactions() {
                sheet.apply(tx)?;
            }
        }
        Ok(sheet)
    }

    /// Apply one transaction. A transfer the sender cannot cover fails
    /// with `InsufficientBalance` and leaves the sheet untouched.
    pub fn apply(&mut self, tx: &Transaction) -> Result<(), LedgerError> {
        if let Some(sender) = tx.sender() {
            let have = self.balance(sender);
            if have < tx.amount() {
                return Err(LedgerError::InsufficientBalance {
                    address: sender.to_string(),
                    have,
                    need: tx.amount(),
                });
            }
            self.balances.insert(sender.to_string(), have - tx.amount());
        }

        let credit = self.balances.entry(tx.recipient().to_string()).or_default();
        *credit = credit.saturating_add(tx.amount());
        Ok(())
    }

    pub fn balance(&self, address: &str) -> u64 {
        self.balances.get(address).copied().unwrap_or(0)
    }
}

/// Scan the chain for one address: subtract what it sent, add what it
/// received. Arithmetic saturates so a tampered chain cannot wrap.
pub fn scan_balance<'a, I>(blocks: I, address: &str) -> u64
where
    I: IntoIterator<Item = &'a Block>,
{
    let mut balance = 0u64;
    for tx in blocks.into_iter().flat_map(Block::transactions) {
        if tx.sender() == Some(address) {
            balance = balance.saturating_sub(tx.amount());
        }
        if tx.recipient() == address {
            balance = balance.saturating_add(tx.amount());
        }
    }
    balance
}
