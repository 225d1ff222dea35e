use clap::{Args, Parser};
use console::style;
use std::path::PathBuf;

use clawkit_config::{ConfigLoader, KitConfig};

mod finder;
mod template;

pub use finder::FinderCli;
pub use template::TemplateCli;

/// Flags shared by both tools.
#[derive(Args, Debug, Default)]
pub struct GlobalOpts {
    /// Path to clawkit.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl GlobalOpts {
    /// Resolve log level: --verbose > --quiet > --log-level > config
    fn log_level<'a>(&'a self, config: &'a KitConfig) -> &'a str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        }
    }

    /// Load the config, start logging with its settings, then report
    /// whatever the load found.
    fn load_and_init(&self) -> clawkit_core::Result<ConfigLoader> {
        let loader = ConfigLoader::load(self.config.as_deref())?;
        init_logging(self.log_level(loader.get()), &loader.get().logging.format);
        loader.report();
        Ok(loader)
    }

    /// Start logging from flags and built-in defaults only.
    fn init_default_logging(&self) {
        let defaults = KitConfig::default();
        init_logging(self.log_level(&defaults), &defaults.logging.format);
    }
}

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// clean for templates. A second call in the same process is a no-op.
fn init_logging(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
    };
}

/// Parse argv, exiting 0 for help/version and 1 for usage errors.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Report a command failure and exit 1.
pub fn exit_with_error(e: &clawkit_core::KitError) -> ! {
    eprintln!("{} {e}", style("Error:").red().bold());
    std::process::exit(1);
}

fn missing_name(tool: &str, sub: &str) -> clawkit_core::KitError {
    clawkit_core::KitError::InvalidInput(format!(
        "please provide a skill name\nUsage: {tool} {sub} <skill-name>"
    ))
}
