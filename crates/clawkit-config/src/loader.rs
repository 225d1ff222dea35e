use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::schema::{ConfigWarning, KitConfig, WarningSeverity};

/// File name of the ledger when `ledger.path` is unset.
pub const DEFAULT_LEDGER_FILE: &str = "skills-db.json";

/// Loads the clawkit configuration.
pub struct ConfigLoader {
    config: KitConfig,
    config_path: PathBuf,
    from_file: bool,
    warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > CLAWKIT_CONFIG env > ~/.clawkit/clawkit.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("CLAWKIT_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clawkit")
            .join("clawkit.toml")
    }

    /// Load the config from disk, falling back to defaults.
    ///
    /// Nothing is logged here: logging is usually configured from the result.
    /// Call [`ConfigLoader::report`] once a subscriber is installed.
    pub fn load(path: Option<&Path>) -> clawkit_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let from_file = config_path.exists();
        let config = if from_file {
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            KitConfig::default()
        };

        let config = Self::apply_overrides(config, |key| std::env::var(key).ok());
        let warnings = config
            .validate()
            .map_err(clawkit_core::KitError::Config)?;

        Ok(Self {
            config,
            config_path,
            from_file,
            warnings,
        })
    }

    /// Log where the config came from and every validation finding.
    pub fn report(&self) {
        let config_path = &self.config_path;
        if self.from_file {
            info!(?config_path, "loaded configuration");
        } else {
            debug!(?config_path, "config file not found, using defaults");
        }
        for w in &self.warnings {
            match w.severity {
                WarningSeverity::Info => info!("{}", w),
                _ => warn!("{}", w),
            }
        }
    }

    /// Non-fatal findings from validation.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    fn parse(raw: &str, config_path: &Path) -> clawkit_core::Result<KitConfig> {
        let mut config = toml::from_str::<KitConfig>(raw).map_err(|e| {
            clawkit_core::KitError::Config(format!(
                "failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;
        config.skills.dir = expand_tilde(&config.skills.dir);
        config.ledger.path = config.ledger.path.as_deref().map(expand_tilde);
        Ok(config)
    }

    /// Get the loaded config.
    pub fn get(&self) -> &KitConfig {
        &self.config
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Where the installed-skills ledger lives.
    pub fn ledger_path(&self) -> PathBuf {
        match self.config.ledger.path {
            Some(ref p) => p.clone(),
            None => self
                .config_path
                .parent()
                .unwrap_or(Path::new("."))
                .join(DEFAULT_LEDGER_FILE),
        }
    }

    /// Override the skills directory (e.g. from `--skills-dir`).
    pub fn set_skills_dir(&mut self, dir: &Path) {
        self.config.skills.dir = expand_tilde(dir);
    }

    /// Apply env var overrides (CLAWKIT_SKILLS_DIR, CLAWKIT_LOG_LEVEL, etc.)
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides(
        mut config: KitConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> KitConfig {
        if let Some(v) = lookup("CLAWKIT_SKILLS_DIR") {
            config.skills.dir = expand_tilde(Path::new(&v));
        }
        if let Some(v) = lookup("CLAWKIT_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = lookup("CLAWKIT_REMOTE_URL") {
            config.remote.api_url = v;
        }
        // Token: config file takes priority, env is the fallback.
        if config.remote.token.is_none() {
            config.remote.token = lookup("GITHUB_TOKEN").filter(|t| !t.is_empty());
        }
        config
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
