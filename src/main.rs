//! termclean - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

/// Version string; dev builds carry the git commit hash.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter for the given `-v` count.
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "termclean=warn",
        1 => "termclean=debug",
        _ => "termclean=trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => commands::clean::handle(&cli.clean),
        Some(Commands::Clean(args)) => commands::clean::handle(&args),
        Some(Commands::Stats { file, paste, json }) => {
            commands::stats::handle(file.as_deref(), paste, json)
        }
        Some(Commands::Rules) => commands::rules::handle(),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle::<Cli>(shell),
    }
}
