//! Clap derive structures for the `calcdash` CLI.
//!
//! Kept free of crate-internal imports so `build.rs` can include it
//! directly for man-page generation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// calcdash -- command-line client for the numeric demo service
#[derive(Debug, Parser)]
#[command(
    name = "calcdash",
    version,
    about = "Query the demo calculation service from the command line",
    long_about = "A CLI for the numeric demo backend: greeting, fibonacci,\n\
        descriptive statistics, and an overview of its fixed demo endpoints.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service base URL (overrides the config file)
    #[arg(long, short = 's', env = "CALCDASH_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "CALCDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, env = "CALCDASH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the five fixed demo endpoints as one batch
    Overview,

    /// Ask the service for a greeting
    Greet(GreetArgs),

    /// Compute the nth fibonacci number on the service
    Fib(FibArgs),

    /// Compute descriptive statistics over a list of numbers
    Stats(StatsArgs),

    /// Manage the calcdash configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name to greet (leading/trailing whitespace is trimmed)
    pub name: String,
}

#[derive(Debug, Args)]
pub struct FibArgs {
    /// Index to compute: a non-negative integer
    pub n: String,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Numbers, comma separated ("1, 2, 3, 4, 5, 5"); may span
    /// multiple arguments
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file (fails if one exists)
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}
