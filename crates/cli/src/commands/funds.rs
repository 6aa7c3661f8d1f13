//! Fund movements: deposit, withdraw, transfer

use anyhow::Result;
use minibank_core::LedgerError;
use minibank_store::SnapshotStore;
use rust_decimal::Decimal;
use std::path::Path;

/// Deposit funds into an account
pub fn deposit(data_path: &Path, account_id: &str, amount: Decimal) -> Result<()> {
    let store = SnapshotStore::new(data_path);
    let mut ledger = store.load()?;

    let account = ledger
        .get_mut(account_id)
        .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;
    account.deposit(amount)?;
    let balance = account.balance;

    store.save(&ledger)?;

    println!("✅ Deposit successful!");
    println!("   Account: {}", account_id);
    println!("   Amount:  {}", amount);
    println!("   Balance: {}", balance);
    Ok(())
}

/// Withdraw funds from an account
pub fn withdraw(data_path: &Path, account_id: &str, amount: Decimal) -> Result<()> {
    let store = SnapshotStore::new(data_path);
    let mut ledger = store.load()?;

    let account = ledger
        .get_mut(account_id)
        .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;
    account.withdraw(amount)?;
    let balance = account.balance;

    store.save(&ledger)?;

    println!("✅ Withdrawal successful!");
    println!("   Account: {}", account_id);
    println!("   Amount:  {}", amount);
    println!("   Balance: {}", balance);
    Ok(())
}

/// Transfer funds between two accounts
pub fn transfer(
    data_path: &Path,
    sender_id: &str,
    receiver_id: &str,
    amount: Decimal,
) -> Result<()> {
    let store = SnapshotStore::new(data_path);
    let mut ledger = store.load()?;

    ledger.transfer(sender_id, receiver_id, amount)?;

    store.save(&ledger)?;

    println!("✅ Transfer successful!");
    println!("   Amount: {}", amount);
    if let Some(sender) = ledger.get(sender_id) {
        println!("   {}", sender);
    }
    if let Some(receiver) = ledger.get(receiver_id) {
        println!("   {}", receiver);
    }
    Ok(())
}
