//! In-process chain store

use super::persistence::{check_next_index, ChainStore, StorageError};
use crate::core::Block;

/// Chain store that keeps blocks in memory.
/// Useful when embedding the ledger and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blocks: Vec<Block>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted chain
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl ChainStore for MemoryStore {
    fn load_chain(&self) -> Result<Vec<Block>, StorageError> {
        Ok(self.blocks.clone())
    }

    fn append_block(&mut self, block: &Block) -> Result<(), StorageError> {
        check_next_index(self.blocks.len(), block)?;
        self.blocks.push(block.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_load() {
        let mut store = MemoryStore::new();
        assert!(store.load_chain().unwrap().is_empty());

        store.append_block(&Block::genesis()).unwrap();
        assert_eq!(store.load_chain().unwrap(), vec![Block::genesis()]);

        // Genesis again would be index 0 on top of index 0
        assert!(store.append_block(&Block::genesis()).is_err());
        assert_eq!(store.blocks().len(), 1);
    }
}
