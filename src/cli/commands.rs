//! CLI commands for the ledger
//!
//! Thin handlers translating command-line requests into ledger calls.

use crate::core::{Ledger, LedgerConfig};
use crate::storage::JsonFileStore;
use crate::wallet::WalletManager;
use std::path::{Path, PathBuf};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Application state
pub struct AppState {
    pub ledger: Ledger<JsonFileStore>,
    pub wallet_manager: WalletManager,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Open the ledger and wallet directory under `data_dir`
    pub fn new(data_dir: PathBuf, config: LedgerConfig) -> CliResult<Self> {
        let store = JsonFileStore::with_data_dir(&data_dir)?;
        let ledger = Ledger::open(store, config)?;
        let wallet_manager = WalletManager::new(&data_dir.join("wallets"))?;

        Ok(Self {
            ledger,
            wallet_manager,
            data_dir,
        })
    }
}

/// First 16 characters of a hash for display; shorter (tampered)
/// hashes are shown whole
fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}

/// Initialize a new ledger
pub fn cmd_init(data_dir: &Path, config: LedgerConfig) -> CliResult<()> {
    let store = JsonFileStore::with_data_dir(data_dir)?;

    if store.exists() {
        println!("⚠️  Ledger already exists at {:?}", data_dir);
        return Ok(());
    }

    let ledger = Ledger::open(store, config)?;

    println!("✅ Ledger initialized!");
    println!("   📁 Data directory: {:?}", data_dir);
    println!("   🔧 Difficulty: {}", ledger.config().difficulty);
    println!("   🧱 Genesis block hash: {}", ledger.latest_block()?.hash());

    Ok(())
}

/// Mine reward-only blocks
pub fn cmd_mine(state: &mut AppState, address: &str, count: u32) -> CliResult<()> {
    println!("⛏️  Mining {} block(s) for address: {}", count, address);
    println!("   Difficulty: {}", state.ledger.config().difficulty);

    for _ in 0..count {
        let block = state.ledger.mine(address)?;

        println!("\n   Block {} mined!", block.index());
        println!("   ├─ Hash: {}", short_hash(block.hash()));
        println!("   ├─ Transactions: {}", block.tx_count());
        println!("   └─ Nonce: {}", block.nonce());
    }

    let balance = state.ledger.balance_of(address);
    println!("\n💰 New balance for miner: {} coins", balance);

    Ok(())
}

/// Create a new wallet
pub fn cmd_wallet_new(
    state: &mut AppState,
    label: Option<&str>,
    passphrase: Option<&str>,
) -> CliResult<()> {
    let wallet = state.wallet_manager.create_wallet(label, passphrase)?;
    let info = wallet.export_public_info()?;

    println!("🔐 New wallet created!");
    println!("   📍 Address: {}", info.address);
    println!("   🔑 Public Key: {}", info.public_key);
    if let Some(l) = &info.label {
        println!("   🏷️  Label: {}", l);
    }
    println!("\n   ⚠️  IMPORTANT: Your private key is stored in the wallets directory.");

    Ok(())
}

/// List all wallets
pub fn cmd_wallet_list(state: &AppState) -> CliResult<()> {
    let wallets = state.wallet_manager.wallets()?;

    if wallets.is_empty() {
        println!("📭 No wallets found. Create one with: raven wallet new");
        return Ok(());
    }

    println!("📋 Wallets:");
    for wallet in &wallets {
        let address = wallet.address()?;
        let label = wallet.label.as_deref().unwrap_or("-");
        let balance = state.ledger.balance_of(address);
        println!("   {} ({}) - {} coins", address, label, balance);
    }

    Ok(())
}

/// Get an address's balance and history
pub fn cmd_balance(state: &AppState, address: &str) -> CliResult<()> {
    let balance = state.ledger.balance_of(address);
    let history = state.ledger.history(address);

    println!("💰 Balance for {}", address);
    println!("   Total: {} coins", balance);
    println!("   Transactions: {}", history.len());

    for tx in history.iter().rev().take(10) {
        let from = tx.sender().unwrap_or("(reward)");
        println!("   └─ {} → {}: {} coins", from, tx.recipient(), tx.amount());
    }

    Ok(())
}

/// Send coins from a stored wallet and mine the transfer right away.
/// The mempool lives only as long as this process.
pub fn cmd_send(
    state: &mut AppState,
    from: &str,
    to: &str,
    amount: u64,
    miner: Option<&str>,
) -> CliResult<()> {
    let wallet = state.wallet_manager.load_wallet(from)?;
    let block_index = wallet.transfer(&mut state.ledger, to, amount)?;

    println!("📤 Transaction signed:");
    println!("   From: {}", from);
    println!("   To: {}", to);
    println!("   Amount: {} coins", amount);
    println!("   Target block: {}", block_index);

    let miner = miner.unwrap_or(from);
    let block = state.ledger.mine(miner)?;

    // Reward plus our transfer, unless the transfer was left out
    if block.tx_count() > 1 {
        println!("\n✅ Transaction confirmed in block {}", block.index());
    } else {
        println!(
            "\n❌ Transaction dropped: insufficient funds (block {} holds only the reward)",
            block.index()
        );
    }

    println!("   {} balance: {} coins", from, state.ledger.balance_of(from));
    println!("   {} balance: {} coins", to, state.ledger.balance_of(to));

    Ok(())
}

/// List recent blocks
pub fn cmd_chain(state: &AppState, count: u32) -> CliResult<()> {
    let stats = state.ledger.stats();

    println!("⛓️  Ledger Info");
    println!("   ├─ Height: {}", stats.height);
    println!("   ├─ Total blocks: {}", stats.total_blocks);
    println!("   ├─ Total transactions: {}", stats.total_transactions);
    println!("   ├─ Difficulty: {}", stats.difficulty);
    println!("   └─ Latest hash: {}", stats.latest_hash);

    println!("\n🧱 Recent blocks:");
    for block in state.ledger.blocks().iter().rev().take(count as usize) {
        println!(
            "   #{} | {} | {} tx | {}",
            block.index(),
            short_hash(block.hash()),
            block.tx_count(),
            block.timestamp().format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

/// Validate the ledger against every stored wallet's key
pub fn cmd_validate(state: &AppState) -> CliResult<()> {
    println!("🔍 Validating ledger...");

    let registry = state.wallet_manager.registry()?;
    match state.ledger.verify_chain(&registry) {
        Ok(()) => {
            println!("✅ Ledger is valid!");
            println!("   {} blocks verified", state.ledger.blocks().len());
        }
        Err(violation) => {
            println!("❌ Ledger validation FAILED!");
            println!("   {}", violation);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LedgerConfig {
        LedgerConfig {
            difficulty: 1,
            mining_reward: 10,
        }
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0123456789abcdef0123"), "0123456789abcdef");
        assert_eq!(short_hash("forged"), "forged");
    }

    #[test]
    fn test_chain_listing_survives_tampered_hash() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        let mut state = AppState::new(data_dir.clone(), config()).unwrap();
        cmd_mine(&mut state, "miner", 1).unwrap();

        let chain_path = state.ledger.store().chain_path();
        let json = std::fs::read_to_string(&chain_path).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value[1]["hash"] = serde_json::Value::from("forged");
        std::fs::write(&chain_path, value.to_string()).unwrap();

        let state = AppState::new(data_dir, config()).unwrap();
        assert_eq!(state.ledger.blocks()[1].hash(), "forged");
        cmd_chain(&state, 10).unwrap();
        cmd_validate(&state).unwrap();
    }

    #[test]
    fn test_send_flow_persists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        cmd_init(&data_dir, config()).unwrap();

        let mut state = AppState::new(data_dir.clone(), config()).unwrap();
        cmd_wallet_new(&mut state, Some("alice"), None).unwrap();
        let alice = state.wallet_manager.list_wallets().unwrap().remove(0);

        cmd_mine(&mut state, &alice, 1).unwrap();
        cmd_send(&mut state, &alice, "bob", 4, Some("carol")).unwrap();
        cmd_validate(&state).unwrap();

        let reopened = AppState::new(data_dir, config()).unwrap();
        assert_eq!(reopened.ledger.blocks().len(), 3);
        assert_eq!(reopened.ledger.balance_of(&alice), 6);
        assert_eq!(reopened.ledger.balance_of("bob"), 4);
        assert_eq!(reopened.ledger.balance_of("carol"), 10);

        let registry = reopened.wallet_manager.registry().unwrap();
        assert!(reopened.ledger.validate(&registry));
    }
}
