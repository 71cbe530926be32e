//! Command-line interface definition for the Weft checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Weft - a static checker for ES module import/export graphs
#[derive(Parser, Debug)]
#[command(
    name = "weft",
    version,
    about = "Static checker for ES module import/export graphs",
    long_about = "Weft analyzes the import/export graph of an ECMAScript project and reports\n\
                  references to modules that do not exist, imports of symbols a module never\n\
                  exports, duplicate named exports, and modules or exports nothing consumes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the module graph and report issues
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Glob patterns selecting the files to analyze (prefix with '!' to
    /// exclude); defaults to the patterns in weft.config.json
    pub patterns: Vec<String>,

    /// Path to the configuration file (default: weft.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root the patterns and module paths are relative to
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include the full module records in JSON output
    #[arg(long)]
    pub modules: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable issue lines
    #[default]
    Text,
    /// The full analysis result as JSON
    Json,
}
