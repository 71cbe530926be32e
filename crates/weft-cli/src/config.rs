//! Configuration loading for the Weft CLI.
//!
//! Sources are merged in priority order: built-in defaults, then
//! `weft.config.json`, then `WEFT_*` environment variables, then
//! command-line arguments.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use weft_graph::{AliasTables, AnalyzeOptions, IgnoreUnused, PathResolver, PredefinedModule};

use crate::cli::CheckArgs;
use crate::error::{ConfigError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "weft.config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeftConfig {
    /// Glob patterns selecting the files to analyze; '!'-prefixed patterns
    /// exclude.
    pub sources: Vec<String>,
    /// Module and path-prefix alias tables applied to bare specifiers.
    pub aliases: AliasTables,
    /// Export shapes for modules resolved outside the analyzed set, keyed by
    /// resolved specifier: `true`, or `{ "default": bool, "named": [...] }`.
    pub predefined: FxHashMap<String, PredefinedModule>,
    /// Unused-reporting exemptions keyed by module path: `true`, or
    /// `{ "default": bool, "named": [...] }`.
    pub ignore_unused: FxHashMap<String, IgnoreUnused>,
    /// Project root; defaults to the process working directory.
    pub cwd: Option<PathBuf>,
}

impl WeftConfig {
    /// Load configuration for a `check` invocation.
    pub fn load(args: &CheckArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match &args.config {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.clone()).into());
                }
                Some(path.clone())
            }
            None => {
                let default_path = match &args.cwd {
                    Some(cwd) => cwd.join(DEFAULT_CONFIG_FILE),
                    None => Path::new(DEFAULT_CONFIG_FILE).to_path_buf(),
                };
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed("WEFT_"));

        let mut config: Self = figment.extract().map_err(ConfigError::Invalid)?;

        // CLI arguments override everything.
        if !args.patterns.is_empty() {
            config.sources = args.patterns.clone();
        }
        if let Some(cwd) = &args.cwd {
            config.cwd = Some(cwd.clone());
        }

        if config.sources.is_empty() {
            return Err(ConfigError::NoSources.into());
        }

        Ok(config)
    }

    /// Policy tables for the issue detector.
    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            predefined: self.predefined.clone(),
            ignore_unused: self.ignore_unused.clone(),
        }
    }

    /// Specifier resolver built from the alias tables.
    ///
    /// The library-level resolution hook has no JSON representation; callers
    /// embedding `weft-graph` attach one with [`PathResolver::with_hook`].
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.aliases.clone())
    }
}
