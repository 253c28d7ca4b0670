//! Wallet implementation for the ledger
//!
//! A wallet owns one key pair. It starts without key material and must be
//! created (randomly or from a passphrase) before it can sign or report
//! an address.

use super::registry::KeyRegistry;
use crate::core::{Ledger, LedgerError};
use crate::crypto::{KeyError, KeyPair};
use crate::storage::ChainStore;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Wallet-related errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet has no key material yet; create it first")]
    NotInitialized,
    #[error("Wallet key material already exists")]
    AlreadyInitialized,
    #[error("Ledger error: {0}")]
    LedgerError(#[from] LedgerError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Crypto error: {0}")]
    CryptoError(#[from] KeyError),
}

/// Serializable wallet data for persistence
#[derive(Debug, Serialize, Deserialize)]
struct WalletData {
    private_key_hex: String,
    address: String,
    label: Option<String>,
}

/// A ledger wallet holding one signing identity
#[derive(Debug, Default)]
pub struct Wallet {
    /// The key pair for signing transactions, once created
    key_pair: Option<KeyPair>,
    /// Optional label for the wallet
    pub label: Option<String>,
}

impl Wallet {
    /// Create an empty wallet with no key material
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet with a fresh random key pair
    pub fn generate() -> Self {
        Self {
            key_pair: Some(KeyPair::generate()),
            label: None,
        }
    }

    /// Create a wallet with a label
    pub fn with_label(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::generate()
        }
    }

    /// Import a wallet from a private key
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, WalletError> {
        Ok(Self {
            key_pair: Some(KeyPair::from_private_key_hex(private_key_hex)?),
            label: None,
        })
    }

    /// Create the wallet's key material: deterministic from a passphrase
    /// when given, random otherwise. Only allowed once.
    pub fn create(&mut self, passphrase: Option<&str>) -> Result<&KeyPair, WalletError> {
        if self.key_pair.is_some() {
            return Err(WalletError::AlreadyInitialized);
        }

        let key_pair = KeyPair::generate_with(passphrase.map(str::as_bytes))?;
        Ok(&*self.key_pair.insert(key_pair))
    }

    pub fn is_initialized(&self) -> bool {
        self.key_pair.is_some()
    }

    pub fn key_pair(&self) -> Result<&KeyPair, WalletError> {
        self.key_pair.as_ref().ok_or(WalletError::NotInitialized)
    }

    /// Get the wallet's address
    pub fn address(&self) -> Result<&str, WalletError> {
        Ok(self.key_pair()?.address())
    }

    /// Get the wallet's public key (hex)
    pub fn public_key(&self) -> Result<String, WalletError> {
        Ok(self.key_pair()?.public_key_hex())
    }

    /// Get the wallet's private key (hex)
    /// WARNING: Keep this secret!
    pub fn private_key(&self) -> Result<String, WalletError> {
        Ok(self.key_pair()?.private_key_hex())
    }

    /// Get the balance from the ledger
    pub fn balance<S: ChainStore>(&self, ledger: &Ledger<S>) -> Result<u64, WalletError> {
        Ok(ledger.balance_of(self.address()?))
    }

    /// Sign a transfer from this wallet and queue it on the ledger.
    /// Returns the index of the block that will hold it.
    pub fn transfer<S: ChainStore>(
        &self,
        ledger: &mut Ledger<S>,
        recipient: &str,
        amount: u64,
    ) -> Result<u64, WalletError> {
        let key_pair = self.key_pair()?;
        Ok(ledger.submit(key_pair.address(), recipient, amount, Some(key_pair))?)
    }

    /// Save wallet to file
    pub fn save(&self, path: &Path) -> Result<(), WalletError> {
        let key_pair = self.key_pair()?;
        let data = WalletData {
            private_key_hex: key_pair.private_key_hex(),
            address: key_pair.address().to_string(),
            label: self.label.clone(),
        };

        let json = serde_json::to_string_pretty(&data)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load wallet from file
    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let json = fs::read_to_string(path)?;
        let data: WalletData = serde_json::from_str(&json)?;

        let mut wallet = Self::from_private_key(&data.private_key_hex)?;
        wallet.label = data.label;
        Ok(wallet)
    }

    /// Export wallet info (without private key)
    pub fn export_public_info(&self) -> Result<WalletInfo, WalletError> {
        let key_pair = self.key_pair()?;
        Ok(WalletInfo {
            address: key_pair.address().to_string(),
            public_key: key_pair.public_key_hex(),
            label: self.label.clone(),
        })
    }
}

/// Public wallet information (safe to share)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub public_key: String,
    pub label: Option<String>,
}

/// Wallet manager for handling multiple wallets
pub struct WalletManager {
    wallets_dir: PathBuf,
}

impl WalletManager {
    /// Create a new wallet manager
    pub fn new(wallets_dir: &Path) -> Result<Self, WalletError> {
        fs::create_dir_all(wallets_dir)?;
        Ok(Self {
            wallets_dir: wallets_dir.to_path_buf(),
        })
    }

    fn wallet_path(&self, address: &str) -> PathBuf {
        self.wallets_dir.join(format!("{}.json", address))
    }

    /// Create and save a new wallet
    pub fn create_wallet(
        &self,
        label: Option<&str>,
        passphrase: Option<&str>,
    ) -> Result<Wallet, WalletError> {
        let mut wallet = Wallet::new();
        wallet.create(passphrase)?;
        wallet.label = label.map(str::to_string);

        wallet.save(&self.wallet_path(wallet.address()?))?;
        Ok(wallet)
    }

    /// Load every stored wallet. Unreadable files are skipped.
    pub fn wallets(&self) -> Result<Vec<Wallet>, WalletError> {
        let mut wallets = Vec::new();

        for entry in fs::read_dir(&self.wallets_dir)? {
            let path = entry?.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match Wallet::load(&path) {
                    Ok(wallet) => wallets.push(wallet),
                    Err(e) => warn!("Skipping unreadable wallet {:?}: {}", path, e),
                }
            }
        }

        Ok(wallets)
    }

    /// List all wallet addresses
    pub fn list_wallets(&self) -> Result<Vec<String>, WalletError> {
        self.wallets()?
            .iter()
            .map(|wallet| wallet.address().map(str::to_string))
            .collect()
    }

    /// Load a specific wallet by address
    pub fn load_wallet(&self, address: &str) -> Result<Wallet, WalletError> {
        Wallet::load(&self.wallet_path(address))
    }

    /// Registry of every stored wallet's public key
    pub fn registry(&self) -> Result<KeyRegistry, WalletError> {
        let wallets = self.wallets()?;
        let key_pairs = wallets
            .iter()
            .map(Wallet::key_pair)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(key_pairs.into_iter().collect())
    }
}
