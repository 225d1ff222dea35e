//! # clawkit-cli
//!
//! Command-line interfaces for the clawkit tools.
//!
//! ## skill-template
//!
//! - `skill-template structure|config|gitignore`: Print a static template
//! - `skill-template skillmd|readme [name]`: Print a documentation template
//! - `skill-template guidelines`: Print the development guidelines
//! - `skill-template new <name>`: Scaffold a skill in the current directory
//!
//! ## skill-finder
//!
//! - `skill-finder <query...>`: Search remote and local skills, then install or create
//! - `skill-finder list`: Local skills and the install ledger
//! - `skill-finder known`: Built-in catalog of known skills
//! - `skill-finder create <name>`: Scaffold a skill in the skills directory

pub mod commands;
pub mod prompt;

pub use commands::{FinderCli, TemplateCli, exit_with_error, parse_args};
