//! # Error Module
//!
//! Domain errors for the minibank ledger, using thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every business-rule violation gets its own variant so callers can render
/// a distinct, actionable message for each failure cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // === Amount errors ===
    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    #[error("Amount must be positive: {0}")]
    NonPositiveAmount(Decimal),

    #[error("Opening balance cannot be negative: {0}")]
    NegativeOpeningBalance(Decimal),

    // === Account errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    #[error("Cannot transfer to the same account: {0}")]
    SameAccountTransfer(String),
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Whether this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, LedgerError::InsufficientBalance { .. })
    }

    /// Whether this is an account lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::AccountNotFound(_))
    }

    /// Whether this is a rejected amount (non-positive or negative opening)
    pub fn is_invalid_amount(&self) -> bool {
        matches!(
            self,
            LedgerError::NonPositiveAmount(_) | LedgerError::NegativeOpeningBalance(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientBalance {
            needed: dec!(70),
            available: dec!(50),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: need 70, available 50"
        );

        let err = LedgerError::AccountNotFound("A1".to_string());
        assert_eq!(err.to_string(), "Account not found: A1");

        let err = LedgerError::AccountAlreadyExists("A1".to_string());
        assert_eq!(err.to_string(), "Account already exists: A1");

        let err = LedgerError::NonPositiveAmount(dec!(-5));
        assert_eq!(err.to_string(), "Amount must be positive: -5");
    }

    #[test]
    fn test_error_checks() {
        let err = LedgerError::InsufficientBalance {
            needed: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_balance());
        assert!(!err.is_not_found());

        let err = LedgerError::AccountNotFound("A9".to_string());
        assert!(err.is_not_found());

        let err = LedgerError::NonPositiveAmount(dec!(0));
        assert!(err.is_invalid_amount());

        let err = LedgerError::NegativeOpeningBalance(dec!(-10));
        assert!(err.is_invalid_amount());
    }
}
