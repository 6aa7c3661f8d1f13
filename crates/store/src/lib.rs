//! # Minibank Store
//!
//! Persistence layer for the minibank ledger: one JSON snapshot file holding
//! the whole account mapping. [`SnapshotStore::load`] restores it at startup
//! (empty if no snapshot exists yet), [`SnapshotStore::save`] atomically
//! overwrites it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use minibank_store::SnapshotStore;
//!
//! let store = SnapshotStore::new("data/accounts.json");
//! let mut ledger = store.load()?;
//! ledger.create("A1", "Alice", dec!(100))?;
//! store.save(&ledger)?;
//! ```

pub mod error;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use snapshot::SnapshotStore;
