//! Terminal rendering shared by the workflow and the CLI commands.

use console::style;
use std::path::Path;

use clawkit_core::{InstalledRecord, KnownSkill, SkillMatch};

/// Print local matches, then numbered remote matches.
pub fn print_matches(local: &[SkillMatch], remote: &[SkillMatch]) {
    if !local.is_empty() {
        println!("\n{}", style(format!("Local skills ({}):", local.len())).cyan().bold());
        for m in local {
            println!("  {}", style(&m.name).green());
            if let Some(ref desc) = m.description {
                println!("    {}", style(desc).dim());
            }
        }
    }

    if !remote.is_empty() {
        println!("\n{}", style(format!("Remote skills ({}):", remote.len())).cyan().bold());
        for (i, m) in remote.iter().enumerate() {
            let stars = m
                .popularity
                .map(|n| format!(" ★ {n}"))
                .unwrap_or_default();
            println!("  {}. {}{}", i + 1, style(&m.name).green(), style(stars).yellow());
            if let Some(ref desc) = m.description {
                println!("     {}", style(desc).dim());
            }
            if let Some(ref url) = m.source_url {
                println!("     {}", style(url).dim());
            }
        }
    }
}

/// Confirmation and next steps after a skill was scaffolded.
pub fn print_scaffolded(name: &str, dir: &Path) {
    println!("\n{}", style(format!("Created skill \"{name}\" at:")).green());
    println!("  {}", style(format!("{}/", dir.display())).dim());
    println!("\n{}", style("Next steps:").cyan());
    println!("  {}", style(format!("cd {}", dir.display())).dim());
    println!("  {}", style("./main.js").dim());
}

pub fn print_installed(record: &InstalledRecord, dir: &Path) {
    println!(
        "\n{} {}",
        style(format!("Installed \"{}\" at", record.name)).green(),
        style(dir.display()).dim()
    );
    println!("  {}", style(format!("from {}", record.source_repository)).dim());
}

pub fn print_ledger(installed: &[InstalledRecord]) {
    println!("\n{}", style(format!("Installed via clawkit ({}):", installed.len())).cyan().bold());
    if installed.is_empty() {
        println!("  {}", style("none yet").dim());
        return;
    }
    for r in installed {
        println!(
            "  {}  {}  {}",
            style(&r.name).green(),
            style(r.installed_at.format("%Y-%m-%d %H:%M")).dim(),
            style(&r.source_repository).dim()
        );
    }
}

pub fn print_known(skills: &[KnownSkill]) {
    println!("\n{}", style("Known OpenClaw skills:").cyan().bold());
    for s in skills {
        println!("  {} {}", style(format!("{:<16}", s.name)).green(), s.description);
        if let Some(repo) = s.repository {
            println!("  {:<16} {}", "", style(repo).dim());
        }
    }
    println!();
}

pub fn notice(msg: &str) {
    println!("{}", style(msg).dim());
}

pub fn failure(msg: &str) {
    println!("{}", style(msg).red());
}
