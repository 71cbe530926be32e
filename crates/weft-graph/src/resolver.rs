use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use super::ModuleRef;

/// Alias tables applied to non-relative specifiers.
///
/// `module` maps an exact specifier to a module path; `path` rewrites a
/// specifier prefix. Path aliases are tried in insertion order and the first
/// matching prefix wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasTables {
    pub module: IndexMap<String, String>,
    pub path: IndexMap<String, String>,
}

impl AliasTables {
    pub fn is_empty(&self) -> bool {
        self.module.is_empty() && self.path.is_empty()
    }
}

/// Input to a caller-supplied resolution hook.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Canonical path of the module containing the specifier.
    pub importing_module: &'a str,
    /// The specifier exactly as written.
    pub specifier: &'a str,
}

/// Caller-supplied override: returning `Some` short-circuits relative and
/// alias resolution entirely.
pub type ResolveHook = Box<dyn Fn(&ResolveContext<'_>) -> Option<String> + Send + Sync>;

/// Resolves import/export specifiers to canonical module paths.
///
/// Resolution is pure path algebra over the configured tables; the resolver
/// never touches the filesystem. Priority order:
///
/// 1. the override hook, when configured and returning `Some`;
/// 2. relative specifiers (`./`, `../`), resolved against the importing
///    module's directory;
/// 3. the module alias table (exact match), then the path alias table
///    (prefix match);
/// 4. otherwise the specifier resolves to itself - the key bare imports are
///    looked up under in the predefined-module table.
#[derive(Default)]
pub struct PathResolver {
    aliases: AliasTables,
    hook: Option<ResolveHook>,
}

impl PathResolver {
    pub fn new(aliases: AliasTables) -> Self {
        Self {
            aliases,
            hook: None,
        }
    }

    pub fn with_hook(mut self, hook: ResolveHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Resolve `specifier` as seen from `importing_module`, keeping the raw
    /// text alongside the canonical result.
    pub fn resolve(&self, importing_module: &str, specifier: &str) -> ModuleRef {
        ModuleRef::new(specifier, self.resolve_path(importing_module, specifier))
    }

    fn resolve_path(&self, importing_module: &str, specifier: &str) -> String {
        if let Some(hook) = &self.hook {
            let ctx = ResolveContext {
                importing_module,
                specifier,
            };
            if let Some(resolved) = hook(&ctx) {
                return resolved;
            }
        }

        if specifier.starts_with('.') {
            return resolve_relative(importing_module, specifier);
        }

        self.apply_aliases(specifier)
    }

    fn apply_aliases(&self, specifier: &str) -> String {
        if let Some(target) = self.aliases.module.get(specifier) {
            return target.clone();
        }

        for (prefix, target) in &self.aliases.path {
            if let Some(rest) = specifier.strip_prefix(prefix.as_str()) {
                let joined = Path::new(target).join(rest.trim_start_matches('/'));
                return normalize(&joined.clean());
            }
        }

        specifier.to_string()
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("aliases", &self.aliases)
            .field("hook", &self.hook.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Resolve a `.`/`..` specifier against the directory containing the
/// importing module. Pure path algebra; must match the normalization used for
/// canonical module paths or cross-references will never line up.
fn resolve_relative(importing_module: &str, specifier: &str) -> String {
    let directory = Path::new(importing_module)
        .parent()
        .unwrap_or_else(|| Path::new(""));

    normalize(&directory.join(specifier).clean())
}

fn normalize(path: &Path) -> String {
    let text = path.to_string_lossy();
    text.strip_prefix("./").unwrap_or(&text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_specifiers_resolve_against_importer_directory() {
        let resolver = PathResolver::default();

        assert_eq!(resolver.resolve("index", "./util").resolved, "util");
        assert_eq!(
            resolver.resolve("app/views/home", "./header").resolved,
            "app/views/header"
        );
        assert_eq!(
            resolver.resolve("app/views/home", "../models/user").resolved,
            "app/models/user"
        );
        assert_eq!(
            resolver.resolve("app/main", "./nested/./deep").resolved,
            "app/nested/deep"
        );
    }

    #[test]
    fn raw_text_is_preserved() {
        let resolver = PathResolver::default();
        let reference = resolver.resolve("app/main", "./util");

        assert_eq!(reference.raw, "./util");
        assert_eq!(reference.resolved, "app/util");
    }

    #[test]
    fn bare_specifiers_resolve_to_themselves() {
        let resolver = PathResolver::default();
        assert_eq!(resolver.resolve("index", "react").resolved, "react");
        assert_eq!(
            resolver.resolve("index", "lodash/merge").resolved,
            "lodash/merge"
        );
    }

    #[test]
    fn module_aliases_substitute_exact_specifiers() {
        let mut aliases = AliasTables::default();
        aliases
            .module
            .insert("app-config".into(), "config/default".into());
        let resolver = PathResolver::new(aliases);

        assert_eq!(
            resolver.resolve("index", "app-config").resolved,
            "config/default"
        );
        // Prefixes of a module alias are not rewritten.
        assert_eq!(
            resolver.resolve("index", "app-config/extra").resolved,
            "app-config/extra"
        );
    }

    #[test]
    fn path_aliases_rewrite_the_first_matching_prefix() {
        let mut aliases = AliasTables::default();
        aliases.path.insert("@app".into(), "src/app".into());
        aliases.path.insert("@".into(), "src".into());
        let resolver = PathResolver::new(aliases);

        assert_eq!(
            resolver.resolve("index", "@app/views/home").resolved,
            "src/app/views/home"
        );
        assert_eq!(resolver.resolve("index", "@/util").resolved, "src/util");
    }

    #[test]
    fn hook_overrides_every_other_step() {
        let resolver = PathResolver::default().with_hook(Box::new(|ctx| {
            (ctx.specifier == "some-weird-path").then(|| "util".to_string())
        }));

        assert_eq!(
            resolver.resolve("index", "some-weird-path").resolved,
            "util"
        );
        // A hook returning None falls through to normal resolution.
        assert_eq!(resolver.resolve("index", "./other").resolved, "other");
    }
}
