//! File enumeration and parallel module building.
//!
//! The engine consumes fully-materialized, immutable module records; this
//! module produces them. Files are enumerated from glob-style patterns
//! (`node_modules` always excluded), read and parsed in parallel, and the
//! first parse failure in path order aborts the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use rayon::prelude::*;
use tracing::debug;

use weft_graph::oxc::SourceType;
use weft_graph::{Module, PathResolver, build_module};

use crate::error::{CliError, Result};

/// Expand the configured patterns into a sorted list of files under `cwd`.
///
/// Patterns use gitignore-style globs; a leading `!` excludes. `node_modules`
/// is always excluded.
pub fn expand_patterns(cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(cwd);
    for pattern in patterns {
        overrides
            .add(pattern)
            .map_err(|source| CliError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
    }
    overrides.add("!node_modules/**")?;
    let overrides = overrides.build()?;

    let mut files = Vec::new();
    for entry in WalkBuilder::new(cwd)
        .overrides(overrides)
        .standard_filters(false)
        .build()
    {
        let entry = entry?;
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }

    // Sorted so module order, and with it issue order, is deterministic.
    files.sort();
    Ok(files)
}

/// The canonical module path for a file: project-relative, leading `./`
/// stripped, extension stripped. Must match the resolver's normalization of
/// relative specifiers exactly.
pub fn module_path(cwd: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(cwd).unwrap_or(file);
    let text = relative.to_string_lossy();
    let text = text.strip_prefix("./").unwrap_or(&text);

    let after_slash = text.rfind('/').map_or(0, |idx| idx + 1);
    match text.rfind('.') {
        Some(idx) if idx > after_slash => text[..idx].to_string(),
        _ => text.to_string(),
    }
}

/// Read and parse every file, producing one module record each.
pub fn read_modules(cwd: &Path, files: &[PathBuf], resolver: &PathResolver) -> Result<Vec<Module>> {
    let results: Vec<Result<Module>> = files
        .par_iter()
        .map(|file| {
            let source_text = fs::read_to_string(file).map_err(|source| CliError::ReadFile {
                path: file.clone(),
                source,
            })?;
            let path = module_path(cwd, file);
            let source_type = SourceType::from_path(file).unwrap_or(SourceType::mjs());
            debug!(module = %path, file = %file.display(), "building module record");
            Ok(build_module(&path, &source_text, source_type, resolver)?)
        })
        .collect();

    // Sequential collect keeps the first failure deterministic (path order).
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::module_path;

    #[test]
    fn module_paths_are_relative_and_extension_free() {
        let cwd = Path::new("/project");

        assert_eq!(module_path(cwd, Path::new("/project/index.js")), "index");
        assert_eq!(
            module_path(cwd, Path::new("/project/src/views/home.mjs")),
            "src/views/home",
        );
        // Only the final extension is stripped.
        assert_eq!(
            module_path(cwd, Path::new("/project/lib/util.test.js")),
            "lib/util.test",
        );
    }

    #[test]
    fn dotfiles_keep_their_names() {
        let cwd = Path::new("/project");
        assert_eq!(module_path(cwd, Path::new("/project/.eslintrc")), ".eslintrc");
        assert_eq!(
            module_path(cwd, Path::new("/project/conf/.hidden")),
            "conf/.hidden",
        );
    }
}
