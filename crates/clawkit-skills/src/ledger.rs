use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use clawkit_core::{InstalledRecord, KitError};

/// Everything the ledger file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LedgerState {
    /// Installed skills, oldest first.
    pub installed: Vec<InstalledRecord>,
    /// Kept verbatim; this tool never writes to it.
    pub search_history: Vec<serde_json::Value>,
}

/// Persistence for installed skills. Records are only ever appended.
pub trait LedgerStore {
    /// Read the whole ledger. A missing store is an empty ledger.
    fn load(&self) -> clawkit_core::Result<LedgerState>;

    /// Append one record and persist immediately.
    fn append(&self, record: InstalledRecord) -> clawkit_core::Result<()>;
}

/// Ledger stored as a pretty-printed JSON document, rewritten wholesale.
///
/// There is no locking: two processes appending at once may lose a record.
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, state: &LedgerState) -> clawkit_core::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl LedgerStore for JsonLedger {
    fn load(&self) -> clawkit_core::Result<LedgerState> {
        if !self.path.exists() {
            debug!(path = ?self.path, "ledger not found, starting empty");
            return Ok(LedgerState::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(LedgerState::default());
        }
        serde_json::from_str(&raw).map_err(|e| {
            KitError::Ledger(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn append(&self, record: InstalledRecord) -> clawkit_core::Result<()> {
        let mut state = self.load()?;
        info!(skill = %record.name, path = ?self.path, "recording install");
        state.installed.push(record);
        self.save(&state)
    }
}
