//! Minibank CLI - Account operations from command line
//!
//! Usage:
//! ```bash
//! minibank account create A1 "Alice" --opening-balance 100
//! minibank deposit A1 50
//! minibank withdraw A1 30
//! minibank transfer A1 A2 40
//! minibank account balance A1
//! minibank account list
//! ```
//!
//! The ledger snapshot is loaded before each command and saved again after
//! every mutation. Amounts are parsed into `Decimal` by clap, so malformed
//! numeric input is rejected before the core is reached.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod commands;

use commands::{account, funds};

/// Minibank - a persistent single-user account ledger
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ledger snapshot file path
    #[arg(long, default_value = "data/accounts.json", global = true)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Deposit funds into an account
    Deposit {
        /// Account identifier (e.g., A1)
        account_id: String,
        /// Amount to deposit
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account identifier
        account_id: String,
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Transfer funds between two accounts
    Transfer {
        /// Sender account identifier
        sender_id: String,
        /// Receiver account identifier
        receiver_id: String,
        /// Amount to transfer
        amount: Decimal,
    },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create a new account
    Create {
        /// Account identifier, chosen by the caller
        account_id: String,
        /// Holder name
        holder_name: String,
        /// Opening balance (zero or positive)
        #[arg(long, default_value = "0")]
        opening_balance: Decimal,
    },
    /// List all accounts
    List,
    /// Show one account
    Balance {
        /// Account identifier
        account_id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Account { action } => {
            account::handle(&cli.data, action)?;
        }

        Commands::Deposit { account_id, amount } => {
            funds::deposit(&cli.data, &account_id, amount)?;
        }

        Commands::Withdraw { account_id, amount } => {
            funds::withdraw(&cli.data, &account_id, amount)?;
        }

        Commands::Transfer {
            sender_id,
            receiver_id,
            amount,
        } => {
            funds::transfer(&cli.data, &sender_id, &receiver_id, amount)?;
        }
    }

    Ok(())
}
