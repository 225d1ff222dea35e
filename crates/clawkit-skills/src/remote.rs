use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use clawkit_config::RemoteConfig;
use clawkit_core::SkillMatch;

/// Result of a remote lookup.
///
/// `Degraded` means the lookup could not be completed; callers carry on with
/// local results only. It is distinct from a successful search that found
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    Found(Vec<SkillMatch>),
    Degraded { reason: String },
}

impl RemoteOutcome {
    /// Matches found, empty when degraded.
    pub fn into_matches(self) -> Vec<SkillMatch> {
        match self {
            RemoteOutcome::Found(matches) => matches,
            RemoteOutcome::Degraded { .. } => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RemoteOutcome::Degraded { .. })
    }
}

/// A remote repository search. One request per call, never retried.
#[async_trait]
pub trait RemoteSearch: Send + Sync {
    async fn search(&self, query: &str) -> RemoteOutcome;
}

/// Repository search against the GitHub REST API (or a compatible server).
pub struct GithubSearch {
    client: reqwest::Client,
    api_url: String,
    marker: String,
    page_size: u32,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RepoItem>,
}

#[derive(Debug, Deserialize)]
struct RepoItem {
    name: String,
    description: Option<String>,
    html_url: Option<String>,
    clone_url: Option<String>,
    stargazers_count: Option<u64>,
}

impl From<RepoItem> for SkillMatch {
    fn from(item: RepoItem) -> Self {
        let description = item.description.filter(|d| !d.trim().is_empty());
        SkillMatch::remote(
            item.name,
            description,
            item.clone_url.or(item.html_url),
            item.stargazers_count,
        )
    }
}

impl GithubSearch {
    pub fn new(config: &RemoteConfig) -> clawkit_core::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| clawkit_core::KitError::Config(format!("HTTP client error: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            marker: config.marker.trim().to_string(),
            page_size: config.page_size,
            token: config.token.clone(),
        })
    }

    /// The `q` parameter: marker term, user query, restricted to name and description.
    pub fn search_terms(&self, query: &str) -> String {
        let mut terms = String::new();
        if !self.marker.is_empty() {
            terms.push_str(&self.marker);
            terms.push(' ');
        }
        terms.push_str(query.trim());
        terms.push_str(" in:name,description");
        terms
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SkillMatch>, String> {
        let url = format!("{}/search/repositories", self.api_url);
        let per_page = self.page_size.to_string();

        let mut req = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("q", self.search_terms(query).as_str()), ("per_page", per_page.as_str())]);
        if let Some(ref token) = self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| format!("cannot reach {}: {e}", self.api_url))?;

        if !resp.status().is_success() {
            return Err(format!("search returned HTTP {}", resp.status()));
        }

        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| format!("unexpected search response: {e}"))?;

        Ok(body
            .items
            .into_iter()
            .filter(|item| !item.name.is_empty())
            .map(SkillMatch::from)
            .collect())
    }
}

#[async_trait]
impl RemoteSearch for GithubSearch {
    async fn search(&self, query: &str) -> RemoteOutcome {
        match self.fetch(query).await {
            Ok(matches) => {
                debug!(query, count = matches.len(), "remote search finished");
                RemoteOutcome::Found(matches)
            }
            Err(reason) => {
                debug!(query, %reason, "remote search unavailable");
                RemoteOutcome::Degraded { reason }
            }
        }
    }
}
