use std::path::{Path, PathBuf};
use tracing::debug;

use clawkit_core::SkillMatch;

/// Searches the immediate subdirectories of one skills directory.
///
/// A directory matches when its name contains the query. Otherwise its
/// documentation file (usually `SKILL.md`) is read and searched instead.
/// Hidden entries and plain files never match.
pub struct LocalIndex {
    dir: PathBuf,
    doc_file: String,
}

impl LocalIndex {
    pub fn new(dir: &Path, doc_file: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            doc_file: doc_file.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Case-insensitive search. Results keep directory enumeration order.
    /// A missing directory yields no results.
    pub fn scan(&self, query: &str) -> Vec<SkillMatch> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = ?self.dir, error = %e, "skills directory not readable, skipping");
                return Vec::new();
            }
        };

        let needle = query.to_lowercase();
        let mut matches = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') || !path.is_dir() {
                continue;
            }

            let doc = self.read_doc(&path);
            let by_name = name.to_lowercase().contains(&needle);
            let by_content = !by_name
                && doc
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));

            if by_name || by_content {
                debug!(skill = %name, by_name, "local match");
                matches.push(SkillMatch::local(name, doc.as_deref().and_then(summarize)));
            }
        }

        matches
    }

    /// Every visible skill directory.
    pub fn list(&self) -> Vec<SkillMatch> {
        self.scan("")
    }

    fn read_doc(&self, skill_dir: &Path) -> Option<String> {
        if self.doc_file.is_empty() {
            return None;
        }
        std::fs::read_to_string(skill_dir.join(&self.doc_file)).ok()
    }
}

/// One-line description of a skill document.
///
/// Prefers a `description:` frontmatter key, then the first prose line.
pub fn summarize(doc: &str) -> Option<String> {
    let trimmed = doc.trim_start();
    let mut body = trimmed;

    if let Some(after_first) = trimmed.strip_prefix("---") {
        if let Some(end) = after_first.find("\n---") {
            let frontmatter = &after_first[..end];
            for line in frontmatter.lines() {
                if let Some(value) = line.trim().strip_prefix("description:") {
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
            body = &after_first[end + 4..];
        }
    }

    let mut in_fence = false;
    for line in body.lines() {
        let line = line.trim();
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || line.is_empty() || line.starts_with('#') {
            continue;
        }
        return Some(line.to_string());
    }
    None
}
