//! JSON snapshot store - complete-overwrite persistence
//!
//! The whole ledger is serialized into one JSON file. Saves write a sibling
//! temp file and rename it over the target, so a load never observes a
//! partial write.

use crate::error::StoreResult;
use minibank_core::Ledger;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to the durable snapshot file.
///
/// The path is supplied by the caller; nothing is implicit, so every test
/// can point its store at its own temporary location.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store handle for `path`. The file does not need to exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from the snapshot.
    ///
    /// A missing file yields an empty ledger; an unreadable or corrupt file
    /// is an error, never an empty ledger.
    pub fn load(&self) -> StoreResult<Ledger> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no snapshot, starting empty");
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let ledger: Ledger = serde_json::from_str(&content)?;

        tracing::debug!(
            path = %self.path.display(),
            accounts = ledger.len(),
            "snapshot loaded"
        );
        Ok(ledger)
    }

    /// Save the whole ledger, replacing any previous snapshot.
    ///
    /// The snapshot is written to a sibling temp file, synced, and renamed
    /// over the target in one step.
    pub fn save(&self, ledger: &Ledger) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(ledger)?;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            accounts = ledger.len(),
            "snapshot saved"
        );
        Ok(())
    }
}
