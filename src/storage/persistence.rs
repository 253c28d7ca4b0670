//! Chain persistence layer
//!
//! The ledger talks to durable storage through [`ChainStore`]: it loads
//! the whole chain once when it opens and appends one block per mined
//! block. [`JsonFileStore`] keeps the chain as a single JSON document.

use crate::core::Block;
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Durable store the ledger loads from and appends to.
///
/// `append_block` must persist the block and all of its transactions, or
/// nothing: a later `load_chain` never observes a partial write.
pub trait ChainStore {
    /// The stored chain in index order; empty when nothing was stored yet
    fn load_chain(&self) -> Result<Vec<Block>, StorageError>;

    /// Persist one block on top of the stored chain
    fn append_block(&mut self, block: &Block) -> Result<(), StorageError>;
}

/// The appended block must extend the stored chain by exactly one index
pub(crate) fn check_next_index(stored: usize, block: &Block) -> Result<(), StorageError> {
    if block.index() != stored as u64 {
        return Err(StorageError::InvalidData(format!(
            "Expected block {}, got block {}",
            stored,
            block.index()
        )));
    }
    Ok(())
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub chain_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".ledger_data"),
            chain_file: "chain.json".to_string(),
        }
    }
}

/// Chain store backed by one JSON file.
///
/// Every append rewrites the file through a temporary file and an atomic
/// rename, so readers see either the old chain or the new one.
#[derive(Debug)]
pub struct JsonFileStore {
    config: StorageConfig,
}

impl JsonFileStore {
    /// Create a new file store, creating the data directory if needed
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self { config })
    }

    /// Create a store with the default file name under `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Self::new(StorageConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        })
    }

    /// Get the chain file path
    pub fn chain_path(&self) -> PathBuf {
        self.config.data_dir.join(&self.config.chain_file)
    }

    /// Check if a saved chain exists
    pub fn exists(&self) -> bool {
        self.chain_path().exists()
    }

    fn write_chain(&self, blocks: &[Block]) -> Result<(), StorageError> {
        let temp_path = self
            .config
            .data_dir
            .join(format!("{}.tmp", self.config.chain_file));

        let file = fs::File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, blocks)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::rename(&temp_path, self.chain_path())?;
        Ok(())
    }
}

impl ChainStore for JsonFileStore {
    fn load_chain(&self) -> Result<Vec<Block>, StorageError> {
        let path = self.chain_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&path)?;
        let blocks: Vec<Block> = serde_json::from_reader(BufReader::new(file))?;
        Ok(blocks)
    }

    fn append_block(&mut self, block: &Block) -> Result<(), StorageError> {
        let mut blocks = self.load_chain()?;
        check_next_index(blocks.len(), block)?;

        blocks.push(block.clone());
        self.write_chain(&blocks)
    }
}
