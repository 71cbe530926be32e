//! Command implementations.

use std::io::{self, Write as _};

use tracing::{debug, info};

use weft_graph::analyze;

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::WeftConfig;
use crate::error::{CliError, Result};
use crate::{project, render};

/// What a completed `check` run found; the binary turns this into an exit
/// code.
pub struct CheckOutcome {
    pub issue_count: usize,
}

/// Execute `weft check`.
pub fn check_execute(args: CheckArgs, color: bool) -> Result<CheckOutcome> {
    let config = WeftConfig::load(&args)?;

    let cwd = match &config.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir()?,
    };
    debug!(cwd = %cwd.display(), patterns = ?config.sources, "expanding source patterns");

    let files = project::expand_patterns(&cwd, &config.sources)?;
    if files.is_empty() {
        return Err(CliError::NoInputs);
    }
    info!(files = files.len(), "analyzing module graph");

    let resolver = config.resolver();
    let modules = project::read_modules(&cwd, &files, &resolver)?;
    let analysis = analyze(modules, &config.analyze_options());

    let issue_count = analysis.issues.len();
    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => render::render_text(&mut stdout, &analysis, color)?,
        OutputFormat::Json => render::render_json(&mut stdout, &analysis, args.modules)?,
    }
    stdout.flush()?;

    Ok(CheckOutcome { issue_count })
}
