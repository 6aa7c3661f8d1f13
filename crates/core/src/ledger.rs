//! # Ledger Module
//!
//! The in-memory collection of accounts, keyed by identifier. The ledger is
//! the sole owner of its accounts; lookups hand out borrows scoped to the
//! call, never copies.

use crate::account::Account;
use crate::error::{LedgerError, LedgerResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from account identifier to [`Account`].
///
/// Serializes transparently as the bare mapping, so a snapshot file contains
/// exactly the id -> account records and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account.
    ///
    /// Fails with `AccountAlreadyExists` if the identifier is taken (the
    /// existing account is untouched) and `NegativeOpeningBalance` if the
    /// opening balance is below zero.
    pub fn create(
        &mut self,
        id: &str,
        holder_name: &str,
        opening_balance: Decimal,
    ) -> LedgerResult<&Account> {
        if self.accounts.contains_key(id) {
            return Err(LedgerError::AccountAlreadyExists(id.to_string()));
        }
        let account = Account::new(id, holder_name, opening_balance)?;
        Ok(self.accounts.entry(id.to_string()).or_insert(account))
    }

    /// Look up an account
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Look up an account for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Transfer `amount` between two accounts of this ledger.
    ///
    /// The two-account variant lives here because it needs two disjoint
    /// mutable borrows of the map. Fails with `SameAccountTransfer` when
    /// sender and receiver are the same, and `AccountNotFound` for either
    /// missing side before any balance moves.
    pub fn transfer(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        amount: Decimal,
    ) -> LedgerResult<()> {
        if sender_id == receiver_id {
            return Err(LedgerError::SameAccountTransfer(sender_id.to_string()));
        }
        let [sender, receiver] = self.accounts.get_disjoint_mut([sender_id, receiver_id]);
        let sender = sender.ok_or_else(|| LedgerError::AccountNotFound(sender_id.to_string()))?;
        let receiver =
            receiver.ok_or_else(|| LedgerError::AccountNotFound(receiver_id.to_string()))?;
        sender.transfer_to(receiver, amount)
    }

    /// Iterate over all accounts, no ordering guarantee
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True if the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_and_get() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.create("A1", "Alice", dec!(100)).unwrap();
        assert_eq!(ledger.len(), 1);

        let account = ledger.get("A1").unwrap();
        assert_eq!(account.holder_name, "Alice");
        assert_eq!(account.balance, dec!(100));

        assert!(ledger.get("A9").is_none());
    }

    #[test]
    fn test_create_duplicate_keeps_original() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();

        let err = ledger.create("A1", "Bob", dec!(50)).unwrap_err();
        assert_eq!(err, LedgerError::AccountAlreadyExists("A1".to_string()));

        let account = ledger.get("A1").unwrap();
        assert_eq!(account.holder_name, "Alice");
        assert_eq!(account.balance, dec!(100));
    }

    #[test]
    fn test_create_rejects_negative_opening_balance() {
        let mut ledger = Ledger::new();

        let err = ledger.create("A1", "Alice", dec!(-10)).unwrap_err();
        assert_eq!(err, LedgerError::NegativeOpeningBalance(dec!(-10)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_deposit_through_get_mut() {
        let mut ledger = Ledger::new();
        ledger.create("A2", "Carl", dec!(0)).unwrap();

        ledger.get_mut("A2").unwrap().deposit(dec!(50)).unwrap();
        assert_eq!(ledger.get("A2").unwrap().balance, dec!(50));
    }

    #[test]
    fn test_withdraw_through_get_mut() {
        let mut ledger = Ledger::new();
        ledger.create("A2", "Carl", dec!(50)).unwrap();

        let err = ledger.get_mut("A2").unwrap().withdraw(dec!(70)).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(ledger.get("A2").unwrap().balance, dec!(50));
    }

    #[test]
    fn test_transfer() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();
        ledger.create("A2", "Bob", dec!(0)).unwrap();

        ledger.transfer("A1", "A2", dec!(40)).unwrap();

        assert_eq!(ledger.get("A1").unwrap().balance, dec!(60));
        assert_eq!(ledger.get("A2").unwrap().balance, dec!(40));
    }

    #[test]
    fn test_transfer_unknown_accounts() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();

        let err = ledger.transfer("A1", "A9", dec!(10)).unwrap_err();
        assert_eq!(err, LedgerError::AccountNotFound("A9".to_string()));
        assert_eq!(ledger.get("A1").unwrap().balance, dec!(100));

        let err = ledger.transfer("A0", "A1", dec!(10)).unwrap_err();
        assert_eq!(err, LedgerError::AccountNotFound("A0".to_string()));
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();

        let err = ledger.transfer("A1", "A1", dec!(10)).unwrap_err();
        assert_eq!(err, LedgerError::SameAccountTransfer("A1".to_string()));
        assert_eq!(ledger.get("A1").unwrap().balance, dec!(100));
    }

    #[test]
    fn test_transfer_conserves_total_funds() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();
        ledger.create("A2", "Bob", dec!(25)).unwrap();

        let total: Decimal = ledger.accounts().map(|a| a.balance).sum();

        ledger.transfer("A1", "A2", dec!(60)).unwrap();
        let sum: Decimal = ledger.accounts().map(|a| a.balance).sum();
        assert_eq!(sum, total);

        let _ = ledger.transfer("A2", "A1", dec!(1000));
        let sum: Decimal = ledger.accounts().map(|a| a.balance).sum();
        assert_eq!(sum, total);
    }

    #[test]
    fn test_accounts_iteration() {
        let mut ledger = Ledger::new();
        ledger.create("A1", "Alice", dec!(100)).unwrap();
        ledger.create("A2", "Bob", dec!(50)).unwrap();

        let mut ids: Vec<&str> = ledger.accounts().map(|a| a.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["A1", "A2"]);
    }
}
