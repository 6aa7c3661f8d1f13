//! Account management: create, list, balance

use anyhow::Result;
use minibank_core::LedgerError;
use minibank_store::SnapshotStore;
use std::path::Path;

use crate::AccountAction;

pub fn handle(data_path: &Path, action: AccountAction) -> Result<()> {
    let store = SnapshotStore::new(data_path);
    let mut ledger = store.load()?;

    match action {
        AccountAction::Create {
            account_id,
            holder_name,
            opening_balance,
        } => {
            let summary = ledger
                .create(&account_id, &holder_name, opening_balance)?
                .to_string();
            store.save(&ledger)?;

            println!("✅ Account created!");
            println!("   {}", summary);
        }

        AccountAction::List => {
            if ledger.is_empty() {
                println!("No accounts yet.");
            } else {
                for account in ledger.accounts() {
                    println!("{}", account);
                }
            }
        }

        AccountAction::Balance { account_id } => {
            let account = ledger
                .get(&account_id)
                .ok_or_else(|| LedgerError::AccountNotFound(account_id.clone()))?;
            println!("{}", account);
        }
    }

    Ok(())
}
