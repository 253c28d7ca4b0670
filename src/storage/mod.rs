//! Storage module for chain persistence

pub mod memory;
pub mod persistence;

pub use memory::MemoryStore;
pub use persistence::{ChainStore, JsonFileStore, StorageConfig, StorageError};
