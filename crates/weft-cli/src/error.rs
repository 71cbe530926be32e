//! Error types for the Weft CLI.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error, converted to a miette report at the binary edge.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no source files matched the configured patterns")]
    NoInputs,

    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to walk project directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's syntax tree could not be produced; the whole run aborts.
    #[error(transparent)]
    Parse(#[from] weft_graph::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}\n\nHint: check weft.config.json syntax and field types")]
    Invalid(#[from] figment::Error),

    #[error("no source patterns configured\n\nHint: pass patterns on the command line or set \"sources\" in weft.config.json")]
    NoSources,
}

/// Convert a CLI error into a miette report for terminal rendering.
pub fn into_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Parse(parse) => {
            miette::miette!(
                "{}\n\nHint: fix the syntax error; analysis needs a complete parse of every file",
                parse
            )
        }
        other => miette::miette!("{}", other),
    }
}
