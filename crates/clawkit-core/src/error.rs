use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the clawkit tools.
#[derive(Error, Debug)]
pub enum KitError {
    // ── Skill directory errors ─────────────────────────────────
    #[error("directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ── Install errors ─────────────────────────────────────────
    #[error("clone failed: {repository}: {reason}")]
    CloneFailure { repository: String, reason: String },

    #[error("ledger error: {0}")]
    Ledger(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl KitError {
    /// Whether this error is a collision with an existing directory.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, KitError::AlreadyExists { .. })
    }
}

pub type Result<T> = std::result::Result<T, KitError>;
