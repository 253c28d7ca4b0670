//! Wallet module for key management and signer lookup

pub mod registry;
pub mod wallet;

pub use registry::KeyRegistry;
pub use wallet::{Wallet, WalletError, WalletInfo, WalletManager};
