//! # Account Module
//!
//! A single identified balance record supporting deposit, withdrawal, and
//! transfer. The balance never goes negative: every operation validates
//! before mutating.

use crate::error::{LedgerError, LedgerResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account.
///
/// The identifier is assigned by the caller and immutable after creation.
/// The balance only moves through [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw), and [`transfer_to`](Account::transfer_to).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Caller-assigned identifier, unique within a ledger
    pub id: String,
    /// Holder name, set at creation (no rename)
    pub holder_name: String,
    /// Current balance, never negative
    pub balance: Decimal,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an opening balance.
    ///
    /// The opening balance may be zero but not negative.
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        opening_balance: Decimal,
    ) -> LedgerResult<Self> {
        if opening_balance < Decimal::ZERO {
            return Err(LedgerError::NegativeOpeningBalance(opening_balance));
        }
        Ok(Self {
            id: id.into(),
            holder_name: holder_name.into(),
            balance: opening_balance,
            created_at: Utc::now(),
        })
    }

    /// Add `amount` to the balance.
    ///
    /// Fails with `NonPositiveAmount` if `amount <= 0`; the balance is
    /// unchanged on failure.
    pub fn deposit(&mut self, amount: Decimal) -> LedgerResult<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with `NonPositiveAmount` if `amount <= 0`, or with
    /// `InsufficientBalance` if `amount > balance`; the balance is unchanged
    /// on failure.
    pub fn withdraw(&mut self, amount: Decimal) -> LedgerResult<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Move `amount` from this account into `receiver`.
    ///
    /// Either both balances move or neither does: a failed withdrawal leaves
    /// both accounts untouched, and a failed receiver-side deposit rolls the
    /// withdrawal back.
    pub fn transfer_to(&mut self, receiver: &mut Account, amount: Decimal) -> LedgerResult<()> {
        self.withdraw(amount)?;
        if let Err(err) = receiver.deposit(amount) {
            // deposit only rejects non-positive amounts, which withdraw has
            // already ruled out; restore the funds if it ever fails anyway
            self.balance += amount;
            return Err(err);
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (holder: {}, balance: {})",
            self.id, self.holder_name, self.balance
        )
    }
}
