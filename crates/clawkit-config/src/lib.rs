//! # clawkit-config
//!
//! Configuration for the clawkit tools. Reads from `clawkit.toml`, then applies
//! environment variable overrides, then CLI overrides supplied by the caller.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::KitConfig;
pub use schema::{ConfigWarning, LedgerConfig, LoggingConfig, RemoteConfig, SkillsConfig, WarningSeverity};
