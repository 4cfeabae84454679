//! CLI definitions for termclean
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers and tests can refer to them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termclean")]
#[command(about = "Clean up copy-pasted terminal output into readable plain text")]
#[command(
    long_about = "termclean - Clean up copy-pasted terminal output.

Strips box-drawing frames, ANSI color codes, shell prompts, stray table
pipes and ragged whitespace, and pretty-prints escaped JSON arrays.
Rules run in a fixed order; see 'termclean rules'.

QUICK START:
    pbpaste | termclean            Clean text from a pipe
    termclean clean build.log      Clean a file
    termclean clean --paste --copy Clean the clipboard in place
    termclean stats build.log      Show how much would be removed"
)]
#[command(version = crate::VERSION)]
#[command(styles = build_cli_styles())]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the implicit `clean` command
    #[command(flatten)]
    pub clean: CleanArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean text from a file, stdin or the clipboard
    #[command(long_about = "Clean text from a file, stdin or the clipboard.

Reads FILE (or stdin when FILE is omitted or '-'), applies every cleaning
rule in order and writes the result to stdout.

EXAMPLES:
    termclean clean build.log              Clean a file to stdout
    cat build.log | termclean clean        Clean stdin
    termclean clean --paste --copy         Clean the clipboard in place
    termclean clean build.log -o out.txt   Write to a file
    termclean clean build.log --steps      Show which rules changed the text
    termclean clean build.log --json       Emit cleaned text and stats as JSON")]
    Clean(CleanArgs),

    /// Show statistics for cleaning a text
    #[command(long_about = "Show line count, character count and characters removed.

EXAMPLE:
    termclean stats build.log

OUTPUT:
    Lines: 42
    Characters: 1830
    Removed: 412 (22.5%)")]
    Stats {
        /// Input file ('-' or omitted for stdin)
        #[arg(help = "Input file ('-' or omitted for stdin)")]
        file: Option<String>,
        /// Read input from the clipboard instead
        #[arg(long, help = "Read input from the clipboard")]
        paste: bool,
        /// Print stats as JSON
        #[arg(long, help = "Print stats as JSON")]
        json: bool,
    },

    /// List the cleaning rules in execution order
    Rules,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the termclean configuration file.

Configuration is stored in ~/.config/termclean/config.toml and controls
input limits and output extras. It cannot reorder or disable rules.

EXAMPLES:
    termclean config show    Display current configuration
    termclean config path    Print the config file location
    termclean config init    Write a default config file"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Arguments shared by `termclean clean` and bare `termclean`.
#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Input file ('-' or omitted for stdin)
    #[arg(help = "Input file ('-' or omitted for stdin)")]
    pub file: Option<String>,

    /// Read input from the clipboard
    #[arg(long, help = "Read input from the clipboard")]
    pub paste: bool,

    /// Copy the cleaned text to the clipboard
    #[arg(long, help = "Copy the cleaned text to the clipboard")]
    pub copy: bool,

    /// Print a stats summary to stderr
    #[arg(long, help = "Print a stats summary to stderr")]
    pub stats: bool,

    /// Print cleaned text and stats as JSON
    #[arg(long, help = "Print cleaned text and stats as JSON")]
    pub json: bool,

    /// Print which rules changed the text to stderr
    #[arg(long, help = "Print which rules changed the text to stderr")]
    pub steps: bool,

    /// Write the cleaned text to a file instead of stdout
    #[arg(long, short, help = "Write output to this file instead of stdout")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
