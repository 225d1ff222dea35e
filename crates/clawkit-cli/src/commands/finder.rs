use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing::debug;

use clawkit_config::ConfigLoader;
use clawkit_skills::{
    Discovery, GitCloner, GithubSearch, JsonLedger, LedgerStore, LocalIndex, RemoteSearch,
    display, known_skills,
};

use super::{GlobalOpts, missing_name};
use crate::prompt::TerminalPrompter;

/// Search, install and create OpenClaw skills
#[derive(Parser)]
#[command(name = "skill-finder", version, about, long_about = None)]
pub struct FinderCli {
    #[command(flatten)]
    opts: GlobalOpts,

    /// Skills directory to scan and install into (overrides config)
    #[arg(long, global = true)]
    skills_dir: Option<PathBuf>,

    /// Free-text search query
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    #[command(subcommand)]
    command: Option<FinderCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum FinderCommand {
    /// List local skills and installed skills
    #[command(alias = "ls")]
    List,
    /// Show the catalog of known skills
    Known,
    /// Create a new skill in the skills directory
    #[command(alias = "new")]
    Create { name: Option<String> },
}

impl FinderCli {
    pub async fn run(self) -> clawkit_core::Result<()> {
        let query = self.query.join(" ");
        if self.command.is_none() && query.trim().is_empty() {
            Self::command().print_help()?;
            return Ok(());
        }

        let mut loader = self.opts.load_and_init()?;
        if let Some(ref dir) = self.skills_dir {
            loader.set_skills_dir(dir);
        }
        let skills_dir = loader.get().skills.dir.clone();
        let index = LocalIndex::new(&skills_dir, &loader.get().skills.doc_file);
        debug!(dir = ?skills_dir, "using skills directory");

        match self.command {
            Some(FinderCommand::List) => cmd_list(&index, &loader),
            Some(FinderCommand::Known) => {
                display::print_known(known_skills());
                Ok(())
            }
            Some(FinderCommand::Create { name }) => {
                let name = name.ok_or_else(|| missing_name("skill-finder", "create"))?;
                let dir = clawkit_skills::scaffold(&skills_dir, &name)?;
                display::print_scaffolded(&name, &dir);
                Ok(())
            }
            None => cmd_search(&query, index, &loader).await,
        }
    }
}

fn cmd_list(index: &LocalIndex, loader: &ConfigLoader) -> clawkit_core::Result<()> {
    let local = index.list();
    if local.is_empty() {
        println!(
            "\n{}",
            style(format!("No skills found in {}", index.dir().display())).yellow()
        );
        println!("  {}", style("Create one with: skill-finder create <name>").dim());
    } else {
        println!("{}", style(format!("Skills directory: {}", index.dir().display())).dim());
        display::print_matches(&local, &[]);
    }

    let ledger = JsonLedger::new(&loader.ledger_path());
    display::print_ledger(&ledger.load()?.installed);
    Ok(())
}

async fn cmd_search(
    query: &str,
    index: LocalIndex,
    loader: &ConfigLoader,
) -> clawkit_core::Result<()> {
    let config = loader.get();
    let remote: Option<Box<dyn RemoteSearch>> = if config.remote.enabled {
        Some(Box::new(GithubSearch::new(&config.remote)?))
    } else {
        None
    };

    let discovery = Discovery::new(
        index,
        remote,
        Box::new(JsonLedger::new(&loader.ledger_path())),
        Box::new(GitCloner),
    );

    let mut prompter = TerminalPrompter::new();
    let report = discovery.run(query, &mut prompter).await?;
    debug!(outcome = ?report.outcome, "discovery finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<FinderCli, clap::Error> {
        FinderCli::try_parse_from(std::iter::once("skill-finder").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        FinderCli::command().debug_assert();
    }

    #[test]
    fn free_text_becomes_query() {
        let cli = parse(&["weather", "forecast"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query, vec!["weather", "forecast"]);
    }

    #[test]
    fn subcommands_and_aliases() {
        assert_eq!(parse(&["list"]).unwrap().command, Some(FinderCommand::List));
        assert_eq!(parse(&["ls"]).unwrap().command, Some(FinderCommand::List));
        assert_eq!(parse(&["known"]).unwrap().command, Some(FinderCommand::Known));
        assert_eq!(
            parse(&["new", "my-tool"]).unwrap().command,
            Some(FinderCommand::Create {
                name: Some("my-tool".into())
            })
        );
        assert_eq!(
            parse(&["create"]).unwrap().command,
            Some(FinderCommand::Create { name: None })
        );
    }

    #[test]
    fn skills_dir_flag() {
        let cli = parse(&["--skills-dir", "/tmp/skills", "list"]).unwrap();
        assert_eq!(cli.skills_dir, Some(PathBuf::from("/tmp/skills")));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = parse(&["--frobnicate"]).err().unwrap();
        assert!(err.use_stderr());
    }

    #[tokio::test]
    async fn create_scaffolds_under_skills_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = root.path().join("clawkit.toml");
        std::fs::write(&config, "").unwrap();
        let skills = root.path().join("skills");

        let cli = parse(&[
            "--config",
            config.to_str().unwrap(),
            "--skills-dir",
            skills.to_str().unwrap(),
            "create",
            "my-tool",
        ])
        .unwrap();
        cli.run().await.unwrap();
        assert!(skills.join("my-tool").join("main.js").exists());

        let again = parse(&[
            "--config",
            config.to_str().unwrap(),
            "--skills-dir",
            skills.to_str().unwrap(),
            "create",
            "my-tool",
        ])
        .unwrap();
        let err = again.run().await.unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn list_reads_ledger_next_to_config() {
        let root = tempfile::tempdir().unwrap();
        let config = root.path().join("clawkit.toml");
        std::fs::write(&config, "").unwrap();
        std::fs::write(root.path().join("skills-db.json"), "{broken").unwrap();

        let cli = parse(&["--config", config.to_str().unwrap(), "list"]).unwrap();
        let err = cli.run().await.unwrap_err();
        assert!(matches!(err, clawkit_core::KitError::Ledger(_)));
    }
}
