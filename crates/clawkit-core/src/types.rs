use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOrigin {
    Local,
    Remote,
}

impl std::fmt::Display for MatchOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOrigin::Local => write!(f, "local"),
            MatchOrigin::Remote => write!(f, "remote"),
        }
    }
}

/// A single search result, produced per query and never persisted.
///
/// Local matches never carry `source_url` or `popularity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub name: String,
    pub origin: MatchOrigin,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub popularity: Option<u64>,
}

impl SkillMatch {
    /// A match found in the local skills directory.
    pub fn local(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            origin: MatchOrigin::Local,
            description,
            source_url: None,
            popularity: None,
        }
    }

    /// A match returned by the remote repository search.
    pub fn remote(
        name: impl Into<String>,
        description: Option<String>,
        source_url: Option<String>,
        popularity: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            origin: MatchOrigin::Remote,
            description,
            source_url,
            popularity,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.origin == MatchOrigin::Remote
    }
}

/// A skill installed by cloning a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledRecord {
    pub name: String,
    pub source_repository: String,
    pub installed_at: DateTime<Utc>,
}

impl InstalledRecord {
    /// Record an install that completed just now.
    pub fn now(name: impl Into<String>, source_repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_repository: source_repository.into(),
            installed_at: Utc::now(),
        }
    }
}

/// An entry in the built-in catalog of well-known skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownSkill {
    pub name: &'static str,
    /// Empty for skills that ship with the host application.
    pub repository: Option<&'static str>,
    pub description: &'static str,
}
