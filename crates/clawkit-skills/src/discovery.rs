use console::style;
use std::path::PathBuf;
use tracing::{debug, info};

use clawkit_core::{InstalledRecord, KitError, SkillMatch};

use crate::display;
use crate::install::{Cloner, install};
use crate::ledger::LedgerStore;
use crate::remote::{RemoteOutcome, RemoteSearch};
use crate::scaffold::scaffold;
use crate::scanner::LocalIndex;
use crate::slug::normalize;

/// Source of interactive answers.
pub trait Prompter {
    /// Ask one question and read one line. `None` when input is closed.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// The answer to the results prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the remote matches.
    Install(usize),
    CreateNew,
    Quit,
}

impl Choice {
    /// Interpret a line of input against `remote_count` numbered matches.
    ///
    /// A number in `1..=remote_count` installs, `n`/`new` creates, anything
    /// else (including out-of-range numbers) quits.
    pub fn parse(input: &str, remote_count: usize) -> Self {
        let answer = input.trim().to_lowercase();
        match answer.as_str() {
            "n" | "new" => Choice::CreateNew,
            _ => match answer.parse::<usize>() {
                Ok(n) if (1..=remote_count).contains(&n) => Choice::Install(n - 1),
                _ => Choice::Quit,
            },
        }
    }
}

/// How a discovery run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Results were shown and there was nothing to install.
    Listed,
    Installed(InstalledRecord),
    InstallFailed { reason: String },
    Scaffolded(PathBuf),
    /// No results and the user declined to create a skill.
    Declined,
    Cancelled,
}

/// What a discovery run showed and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub local: Vec<SkillMatch>,
    pub remote: Vec<SkillMatch>,
    pub remote_degraded: bool,
    pub outcome: Outcome,
}

/// Search → decide → install, create or quit.
///
/// Remote search runs first, then the local scan; both finish before anything
/// is shown. The run never loops back to searching.
pub struct Discovery {
    index: LocalIndex,
    remote: Option<Box<dyn RemoteSearch>>,
    ledger: Box<dyn LedgerStore>,
    cloner: Box<dyn Cloner>,
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl Discovery {
    pub fn new(
        index: LocalIndex,
        remote: Option<Box<dyn RemoteSearch>>,
        ledger: Box<dyn LedgerStore>,
        cloner: Box<dyn Cloner>,
    ) -> Self {
        Self {
            index,
            remote,
            ledger,
            cloner,
        }
    }

    pub async fn run(
        &self,
        query: &str,
        prompter: &mut dyn Prompter,
    ) -> clawkit_core::Result<DiscoveryReport> {
        let query = query.trim();
        if query.is_empty() {
            return Err(KitError::InvalidInput("search query is empty".into()));
        }

        println!("{}", style(format!("Searching for \"{query}\"...")).cyan());

        let (remote, remote_degraded) = match self.remote {
            Some(ref search) => match search.search(query).await {
                RemoteOutcome::Found(matches) => (matches, false),
                RemoteOutcome::Degraded { .. } => {
                    display::notice("Remote search unavailable, showing local results only.");
                    (Vec::new(), true)
                }
            },
            None => (Vec::new(), false),
        };
        let local = self.index.scan(query);
        debug!(query, local = local.len(), remote = remote.len(), "search finished");

        let outcome = if local.is_empty() && remote.is_empty() {
            self.offer_create(query, prompter)?
        } else {
            display::print_matches(&local, &remote);
            if remote.is_empty() {
                Outcome::Listed
            } else {
                self.decide(query, &remote, prompter).await?
            }
        };

        Ok(DiscoveryReport {
            local,
            remote,
            remote_degraded,
            outcome,
        })
    }

    fn offer_create(
        &self,
        query: &str,
        prompter: &mut dyn Prompter,
    ) -> clawkit_core::Result<Outcome> {
        println!("\n{}", style("No skills found.").yellow());

        let name = normalize(query);
        if name.is_empty() {
            display::notice("The query has no letters or digits to name a skill after.");
            return Ok(Outcome::Cancelled);
        }

        let answer = prompter
            .ask(&format!("Create a new skill \"{name}\"? (y/N)"))
            .unwrap_or_default();
        if !is_affirmative(&answer) {
            display::notice("Cancelled");
            return Ok(Outcome::Declined);
        }

        self.create(&name)
    }

    async fn decide(
        &self,
        query: &str,
        remote: &[SkillMatch],
        prompter: &mut dyn Prompter,
    ) -> clawkit_core::Result<Outcome> {
        let answer = prompter
            .ask(&format!(
                "Install [1-{}], create (n)ew skill, or (q)uit",
                remote.len()
            ))
            .unwrap_or_default();

        match Choice::parse(&answer, remote.len()) {
            Choice::Install(i) => self.install_match(&remote[i]).await,
            Choice::CreateNew => {
                let name = normalize(query);
                if name.is_empty() {
                    return Err(KitError::InvalidInput(format!(
                        "cannot derive a skill name from \"{query}\""
                    )));
                }
                self.create(&name)
            }
            Choice::Quit => {
                display::notice("Cancelled");
                Ok(Outcome::Cancelled)
            }
        }
    }

    async fn install_match(&self, m: &SkillMatch) -> clawkit_core::Result<Outcome> {
        let Some(ref repository) = m.source_url else {
            let reason = format!("\"{}\" has no source repository", m.name);
            display::failure(&reason);
            return Ok(Outcome::InstallFailed { reason });
        };

        println!("{}", style(format!("Cloning {repository}...")).cyan());
        match install(
            self.index.dir(),
            repository,
            &m.name,
            self.cloner.as_ref(),
            self.ledger.as_ref(),
        )
        .await
        {
            Ok(record) => {
                display::print_installed(&record, &self.index.dir().join(&record.name));
                Ok(Outcome::Installed(record))
            }
            Err(KitError::CloneFailure { reason, .. }) => {
                display::failure(&format!("Install failed: {reason}"));
                Ok(Outcome::InstallFailed { reason })
            }
            Err(e) => Err(e),
        }
    }

    fn create(&self, name: &str) -> clawkit_core::Result<Outcome> {
        let dir = scaffold(self.index.dir(), name)?;
        info!(skill = name, "created skill from search");
        display::print_scaffolded(name, &dir);
        Ok(Outcome::Scaffolded(dir))
    }
}
