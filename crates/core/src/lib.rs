//! # Minibank Core
//!
//! Core domain types for the minibank ledger: [`Account`], [`Ledger`], and
//! the [`LedgerError`] taxonomy. This crate is purely the in-memory model
//! and its business rules; persistence lives in `minibank-store`.
//!
//! ## Invariants
//!
//! - Every balance is non-negative at all times.
//! - Account identifiers are unique within a ledger and immutable.
//! - A transfer moves both balances consistently or neither; total funds
//!   across sender and receiver are conserved.

pub mod account;
pub mod error;
pub mod ledger;

pub use account::Account;
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
