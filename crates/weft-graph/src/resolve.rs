//! Computes the effective export surface of every module by transitively
//! flattening `export *` chains.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::{Module, ModuleExport, PredefinedModule};

/// The flattened export surface of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedExports {
    /// The module itself declares a default export. Batch re-exports never
    /// forward defaults.
    pub default: bool,
    pub named: FxHashSet<String>,
    /// A batch chain reached an opaque (`true`-valued) predefined module, so
    /// the named set is unbounded and satisfies any named import.
    pub open: bool,
}

impl ResolvedExports {
    pub fn has_named(&self, name: &str) -> bool {
        self.open || self.named.contains(name)
    }
}

/// Resolved export surfaces keyed by module path. Covers every real module;
/// rebuilt from scratch once per analysis run.
pub type ExportTable = FxHashMap<String, ResolvedExports>;

struct DirectExports<'a> {
    default: bool,
    named: Vec<&'a str>,
    batch_sources: Vec<&'a str>,
}

/// Build the [`ExportTable`] for a set of module records.
///
/// Unresolvable batch sources contribute nothing here; reporting them is the
/// issue detector's job. The engine has no failure path.
pub fn resolve_exports(
    modules: &[Module],
    predefined: &FxHashMap<String, PredefinedModule>,
) -> ExportTable {
    let direct: FxHashMap<&str, DirectExports<'_>> = modules
        .iter()
        .map(|module| (module.path.as_str(), partition_exports(module)))
        .collect();

    let mut table = ExportTable::default();
    for module in modules {
        let mut resolved = ResolvedExports {
            default: direct[module.path.as_str()].default,
            ..ResolvedExports::default()
        };
        let mut stack = FxHashSet::default();
        collect_named(
            module.path.as_str(),
            &direct,
            predefined,
            &mut stack,
            &mut resolved,
        );
        table.insert(module.path.clone(), resolved);
    }

    table
}

fn partition_exports(module: &Module) -> DirectExports<'_> {
    let mut partitioned = DirectExports {
        default: false,
        named: Vec::new(),
        batch_sources: Vec::new(),
    };

    for export in &module.exports {
        match export {
            ModuleExport::Default { .. } => partitioned.default = true,
            ModuleExport::Named { export_name, .. } => partitioned.named.push(export_name),
            ModuleExport::Batch { source, .. } => {
                partitioned.batch_sources.push(source.resolved.as_str());
            }
        }
    }

    partitioned
}

/// Union `path`'s named exports into `resolved`, descending through batch
/// sources.
///
/// The visited set is scoped to the current resolution stack, not memoized
/// across roots: a path revisited while already on the stack contributes its
/// direct names without re-descending, which terminates circular re-export
/// chains (under-reporting names reachable only through the cycle).
fn collect_named<'a>(
    path: &'a str,
    direct: &FxHashMap<&'a str, DirectExports<'a>>,
    predefined: &FxHashMap<String, PredefinedModule>,
    stack: &mut FxHashSet<&'a str>,
    resolved: &mut ResolvedExports,
) {
    let Some(entry) = direct.get(path) else {
        // Outside the analyzed set: splice the predefined shape if there is
        // one; unresolvable references flatten to nothing.
        match predefined.get(path) {
            Some(PredefinedModule::Exports { named, .. }) => {
                resolved.named.extend(named.iter().cloned());
            }
            Some(PredefinedModule::Opaque(true)) => resolved.open = true,
            _ => {}
        }
        return;
    };

    resolved
        .named
        .extend(entry.named.iter().map(|name| (*name).to_string()));

    if !stack.insert(path) {
        return;
    }
    for source in &entry.batch_sources {
        collect_named(source, direct, predefined, stack, resolved);
    }
    stack.remove(path);
}
