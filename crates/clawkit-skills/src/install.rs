use anyhow::{Context, bail};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

use clawkit_core::{InstalledRecord, KitError};

use crate::ledger::LedgerStore;
use crate::scaffold::validate_name;

/// Fetches a repository into a directory that does not exist yet.
#[async_trait]
pub trait Cloner: Send + Sync {
    async fn clone_repo(&self, repository: &str, dest: &Path) -> anyhow::Result<()>;
}

/// Shells out to `git clone --depth 1`.
pub struct GitCloner;

#[async_trait]
impl Cloner for GitCloner {
    async fn clone_repo(&self, repository: &str, dest: &Path) -> anyhow::Result<()> {
        let output = Command::new("git")
            .args(["clone", "--depth", "1", repository])
            .arg(dest)
            .output()
            .await
            .context("failed to run git clone")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git clone exited with {}: {}", output.status, stderr.trim());
        }

        debug!(repository, dest = %dest.display(), "cloned repository");
        Ok(())
    }
}

/// Clone `repository` into `skills_dir/name` and record it in the ledger.
///
/// A clone failure leaves the ledger untouched; a half-cloned directory is
/// not removed.
pub async fn install(
    skills_dir: &Path,
    repository: &str,
    name: &str,
    cloner: &dyn Cloner,
    ledger: &dyn LedgerStore,
) -> clawkit_core::Result<InstalledRecord> {
    validate_name(name)?;

    let target = skills_dir.join(name);
    if target.exists() {
        return Err(KitError::AlreadyExists { path: target });
    }
    std::fs::create_dir_all(skills_dir)?;

    info!(skill = name, repository, "installing skill");
    cloner
        .clone_repo(repository, &target)
        .await
        .map_err(|e| KitError::CloneFailure {
            repository: repository.to_string(),
            reason: format!("{e:#}"),
        })?;

    let record = InstalledRecord::now(name, repository);
    ledger.append(record.clone())?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::JsonLedger;

    struct FakeCloner {
        fail: bool,
    }

    #[async_trait]
    impl Cloner for FakeCloner {
        async fn clone_repo(&self, _repository: &str, dest: &Path) -> anyhow::Result<()> {
            if self.fail {
                bail!("repository not found");
            }
            std::fs::create_dir_all(dest)?;
            std::fs::write(dest.join("SKILL.md"), "# Cloned")?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn success_appends_ledger_record() {
        let root = tempfile::tempdir().unwrap();
        let skills = root.path().join("skills");
        let ledger = JsonLedger::new(&root.path().join("skills-db.json"));

        let record = install(
            &skills,
            "https://example.com/weather.git",
            "weather",
            &FakeCloner { fail: false },
            &ledger,
        )
        .await
        .unwrap();

        assert_eq!(record.name, "weather");
        assert!(skills.join("weather").join("SKILL.md").exists());
        let state = ledger.load().unwrap();
        assert_eq!(state.installed, vec![record]);
    }

    #[tokio::test]
    async fn clone_failure_leaves_ledger_unchanged() {
        let root = tempfile::tempdir().unwrap();
        let ledger = JsonLedger::new(&root.path().join("skills-db.json"));
        ledger
            .append(InstalledRecord::now("existing", "https://example.com/e.git"))
            .unwrap();

        let err = install(
            root.path(),
            "https://example.com/missing.git",
            "missing",
            &FakeCloner { fail: true },
            &ledger,
        )
        .await
        .unwrap_err();

        match err {
            KitError::CloneFailure { repository, reason } => {
                assert_eq!(repository, "https://example.com/missing.git");
                assert!(reason.contains("repository not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ledger.load().unwrap().installed.len(), 1);
    }

    #[tokio::test]
    async fn existing_target_is_refused() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("weather")).unwrap();
        let ledger = JsonLedger::new(&root.path().join("skills-db.json"));

        let err = install(
            root.path(),
            "https://example.com/weather.git",
            "weather",
            &FakeCloner { fail: false },
            &ledger,
        )
        .await
        .unwrap_err();

        assert!(err.is_already_exists());
        assert!(ledger.load().unwrap().installed.is_empty());
    }

    #[tokio::test]
    async fn git_cloner_reports_failure() {
        let root = tempfile::tempdir().unwrap();
        let missing_repo = root.path().join("no-such-repo");
        let result = GitCloner
            .clone_repo(&missing_repo.to_string_lossy(), &root.path().join("dest"))
            .await;
        assert!(result.is_err());
    }
}
