//! Command-line handlers

pub mod commands;

pub use commands::{
    cmd_balance, cmd_chain, cmd_init, cmd_mine, cmd_send, cmd_validate, cmd_wallet_list,
    cmd_wallet_new, AppState, CliResult,
};
