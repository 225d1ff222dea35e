use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration, read from `clawkit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub skills: SkillsConfig,
    pub remote: RemoteConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

// ── Skills ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Parent directory holding one subdirectory per skill.
    pub dir: PathBuf,
    /// Documentation file searched when a directory name doesn't match.
    pub doc_file: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".openclaw")
                .join("skills"),
            doc_file: "SKILL.md".into(),
        }
    }
}

// ── Remote search ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Set to false to search the local directory only.
    pub enabled: bool,
    /// Base URL of the GitHub-compatible REST API.
    pub api_url: String,
    /// Term combined with every query so only skill repositories match.
    pub marker: String,
    /// Results requested per search.
    pub page_size: u32,
    pub user_agent: String,
    /// Optional API token (falls back to `GITHUB_TOKEN`).
    pub token: Option<String>,
    /// Request timeout in seconds. 0 = no timeout.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://api.github.com".into(),
            marker: "openclaw".into(),
            page_size: 10,
            user_agent: format!("clawkit/{}", env!("CARGO_PKG_VERSION")),
            token: None,
            timeout_secs: 0,
        }
    }
}

// ── Ledger ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Ledger file. None = `skills-db.json` next to the config file.
    pub path: Option<PathBuf>,
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "note",
        };
        write!(f, "{}: {}: {}", label, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl KitConfig {
    /// Check the config for problems.
    ///
    /// Returns `Err` with every error-level finding joined, otherwise the
    /// (possibly empty) list of warnings.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Remote ───
        let url = &self.remote.api_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            warnings.push(ConfigWarning {
                field: "remote.api_url".into(),
                message: format!("'{url}' is not an http(s) URL"),
                severity: WarningSeverity::Error,
                hint: Some("Use e.g. 'https://api.github.com'".into()),
            });
        }

        if self.remote.page_size == 0 || self.remote.page_size > 100 {
            warnings.push(ConfigWarning {
                field: "remote.page_size".into(),
                message: format!("page size {} is out of range", self.remote.page_size),
                severity: WarningSeverity::Error,
                hint: Some("The search API accepts 1 to 100 results per page".into()),
            });
        }

        if self.remote.marker.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "remote.marker".into(),
                message: "marker is empty, so searches will match any repository".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. 'openclaw'".into()),
            });
        }

        // ── Skills ───
        if self.skills.doc_file.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "skills.doc_file".into(),
                message: "doc_file is empty, so content matching is disabled".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }

        // ── Logging ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| w.to_string())
            .collect();
        if !errors.is_empty() {
            return Err(errors.join("\n"));
        }

        Ok(warnings)
    }
}
