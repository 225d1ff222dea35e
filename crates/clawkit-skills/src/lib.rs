//! # clawkit-skills
//!
//! Everything needed to find, install and scaffold OpenClaw skills. A skill is
//! a directory holding a `SKILL.md`, a `README.md`, a `config.json`, a
//! `.gitignore` and an executable `main.js` entry point.
//!
//! ## Skill directory layout
//!
//! ```text
//! weather/
//! ├── SKILL.md         # OpenClaw skill documentation
//! ├── README.md        # User-facing documentation
//! ├── main.js          # Main executable
//! ├── config.json      # Configuration template
//! └── .gitignore       # Ignore config.json, tokens, secrets
//! ```
//!
//! ## How discovery works
//!
//! 1. The query is sent to the remote repository search (failures degrade to
//!    an empty result, never an error)
//! 2. The local skills directory is scanned by name, then by `SKILL.md` content
//! 3. Local hits are listed first, remote hits are numbered after them
//! 4. The user installs a remote hit (git clone + ledger entry), scaffolds a
//!    new skill named after the query, or quits

pub mod catalog;
pub mod discovery;
pub mod display;
pub mod install;
pub mod ledger;
pub mod remote;
pub mod scaffold;
pub mod scanner;
pub mod slug;
pub mod templates;

pub use catalog::known_skills;
pub use discovery::{Choice, Discovery, DiscoveryReport, Outcome, Prompter};
pub use install::{Cloner, GitCloner, install};
pub use ledger::{JsonLedger, LedgerState, LedgerStore};
pub use remote::{GithubSearch, RemoteOutcome, RemoteSearch};
pub use scaffold::scaffold;
pub use scanner::LocalIndex;
pub use slug::normalize;
pub use templates::TemplateFile;
