//! Raven Ledger CLI Application
//!
//! A command-line interface for interacting with the ledger.

use clap::{Parser, Subcommand};
use raven_ledger::cli::{self, AppState};
use raven_ledger::core::{LedgerConfig, DEFAULT_DIFFICULTY, MINING_REWARD};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "raven")]
#[command(version)]
#[command(about = "A proof-of-work value-transfer ledger", long_about = None)]
struct Cli {
    /// Data directory for chain and wallet storage
    #[arg(short, long, default_value = ".ledger_data")]
    data_dir: PathBuf,

    /// Mining difficulty (leading zero hex characters)
    #[arg(long, default_value_t = DEFAULT_DIFFICULTY)]
    difficulty: usize,

    /// Reward minted per mined block
    #[arg(long, default_value_t = MINING_REWARD)]
    reward: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new ledger
    Init,

    /// Mine new blocks
    Mine {
        /// Miner's address for receiving rewards
        #[arg(short, long)]
        address: String,

        /// Number of blocks to mine
        #[arg(short, long, default_value = "1")]
        count: u32,
    },

    /// Wallet operations
    Wallet {
        #[command(subcommand)]
        action: WalletCommands,
    },

    /// Show an address's balance
    Balance {
        /// Address to inspect
        #[arg(short, long)]
        address: String,
    },

    /// Send coins to an address and mine the transfer
    Send {
        /// Sender's wallet address
        #[arg(short, long)]
        from: String,

        /// Recipient's address
        #[arg(short, long)]
        to: String,

        /// Amount to send
        #[arg(short, long)]
        amount: u64,

        /// Address receiving the block reward (defaults to the sender)
        #[arg(short, long)]
        miner: Option<String>,
    },

    /// Display chain information
    Chain {
        /// Number of blocks to show
        #[arg(short, long, default_value = "10")]
        count: u32,
    },

    /// Validate the chain against the stored wallets
    Validate,
}

#[derive(Subcommand)]
enum WalletCommands {
    /// Create a new wallet
    New {
        /// Optional label for the wallet
        #[arg(short, long)]
        label: Option<String>,

        /// Derive the keys from a passphrase instead of randomly
        #[arg(short, long)]
        passphrase: Option<String>,
    },

    /// List all wallets
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = LedgerConfig {
        difficulty: cli.difficulty,
        mining_reward: cli.reward,
    };

    let command = match cli.command {
        Commands::Init => return cli::cmd_init(&cli.data_dir, config),
        command => command,
    };

    let mut state = AppState::new(cli.data_dir, config)?;

    match command {
        Commands::Init => {}

        Commands::Mine { address, count } => {
            cli::cmd_mine(&mut state, &address, count)?;
        }

        Commands::Wallet { action } => match action {
            WalletCommands::New { label, passphrase } => {
                cli::cmd_wallet_new(&mut state, label.as_deref(), passphrase.as_deref())?;
            }
            WalletCommands::List => {
                cli::cmd_wallet_list(&state)?;
            }
        },

        Commands::Balance { address } => {
            cli::cmd_balance(&state, &address)?;
        }

        Commands::Send {
            from,
            to,
            amount,
            miner,
        } => {
            cli::cmd_send(&mut state, &from, &to, amount, miner.as_deref())?;
        }

        Commands::Chain { count } => {
            cli::cmd_chain(&state, count)?;
        }

        Commands::Validate => {
            cli::cmd_validate(&state)?;
        }
    }

    Ok(())
}
