use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use tracing::warn;

use clawkit_skills::display;
use clawkit_skills::templates::{self, DEFAULT_NAME};

use super::{GlobalOpts, missing_name};

/// Generate templates for OpenClaw skills
#[derive(Parser)]
#[command(name = "skill-template", version, about, long_about = None)]
pub struct TemplateCli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Option<TemplateCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum TemplateCommand {
    /// Show project structure
    #[command(alias = "struct")]
    Structure,
    /// Show config template
    Config,
    /// Show .gitignore template
    #[command(alias = "ignore")]
    Gitignore,
    /// Show SKILL.md template
    #[command(name = "skillmd", alias = "skill")]
    SkillMd { name: Option<String> },
    /// Show README.md template
    Readme { name: Option<String> },
    /// Show development guidelines
    #[command(alias = "guide")]
    Guidelines,
    /// Create new skill with templates in the current directory
    New { name: Option<String> },
}

impl TemplateCli {
    pub fn run(self) -> clawkit_core::Result<()> {
        let Some(command) = self.command else {
            Self::command().print_help()?;
            return Ok(());
        };
        // Only `new` requires a usable config.
        if let Err(e) = self.opts.load_and_init() {
            if matches!(command, TemplateCommand::New { .. }) {
                return Err(e);
            }
            self.opts.init_default_logging();
            warn!(error = %e, "ignoring unusable config");
        }

        match command {
            TemplateCommand::Structure => {
                heading("Standard OpenClaw Skill Structure:");
                println!("\n{}\n", templates::structure());
            }
            TemplateCommand::Config => {
                heading("Config Template:");
                println!("\n{}\n", templates::config_json(DEFAULT_NAME));
            }
            TemplateCommand::Gitignore => {
                heading(".gitignore Template:");
                println!("\n{}\n", templates::gitignore());
            }
            TemplateCommand::SkillMd { name } => {
                heading("SKILL.md Template:");
                let name = name.as_deref().unwrap_or(DEFAULT_NAME);
                println!("\n{}\n", templates::skill_md(name));
            }
            TemplateCommand::Readme { name } => {
                heading("README.md Template:");
                let name = name.as_deref().unwrap_or(DEFAULT_NAME);
                println!("\n{}\n", templates::readme(name));
            }
            TemplateCommand::Guidelines => print_guidelines(),
            TemplateCommand::New { name } => {
                let name = name.ok_or_else(|| missing_name("skill-template", "new"))?;
                let cwd = std::env::current_dir()?;
                let dir = clawkit_skills::scaffold(&cwd, &name)?;
                display::print_scaffolded(&name, &dir);
            }
        }
        Ok(())
    }
}

fn heading(text: &str) {
    println!("\n{}", style(text).cyan());
}

fn print_guidelines() {
    println!("\n{}", style("Skill Development Guidelines").cyan().bold());
    println!("{}", style("=".repeat(50)).dim());

    for (title, lines) in templates::guidelines() {
        println!("\n{}", style(format!("{title}:")).yellow().bold());
        for line in *lines {
            println!("{}", style(line).dim());
        }
    }

    println!("\n{}", style("Project Structure:").yellow().bold());
    println!("{}", templates::structure());
}
