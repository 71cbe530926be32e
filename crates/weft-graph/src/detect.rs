//! The five issue-detection passes.
//!
//! Each pass is a pure function of the module records, the resolved export
//! table, and the caller's policy tables, returning its own issue list. The
//! final result concatenates the passes in a fixed order; within a pass,
//! issues follow module iteration order, then per-module declaration order.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::{
    AnalyzeOptions, CountingSet, ExportKind, ExportTable, IgnoreUnused, Issue, Module,
    ModuleExport, ModuleImport, resolve_exports,
};

/// The stable result contract of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub modules: Vec<Module>,
    pub issues: Vec<Issue>,
}

/// Run export resolution and all five detection passes over a set of module
/// records.
pub fn analyze(modules: Vec<Module>, options: &AnalyzeOptions) -> Analysis {
    let table = resolve_exports(&modules, &options.predefined);
    let issues = detect_issues(&modules, &table, options);
    Analysis { modules, issues }
}

/// The five passes, concatenated: missing module, bad import, duplicate
/// export, unused module, unused export.
pub fn detect_issues(
    modules: &[Module],
    table: &ExportTable,
    options: &AnalyzeOptions,
) -> Vec<Issue> {
    let mut issues = find_missing_modules(modules, options);
    issues.extend(find_bad_imports(modules, table, options));
    issues.extend(find_duplicate_exports(modules));
    issues.extend(find_unused_modules(modules, options));
    issues.extend(find_unused_exports(modules, options));
    issues
}

fn module_paths(modules: &[Module]) -> FxHashSet<&str> {
    modules.iter().map(|module| module.path.as_str()).collect()
}

/// Imports and batch exports whose resolved reference is neither a real
/// module nor a predefined one. Two emission sites, same rule.
fn find_missing_modules(modules: &[Module], options: &AnalyzeOptions) -> Vec<Issue> {
    let paths = module_paths(modules);
    let is_resolvable =
        |resolved: &str| paths.contains(resolved) || options.is_predefined(resolved);

    let mut issues = Vec::new();
    for module in modules {
        for import in &module.imports {
            let source = import.source();
            if !is_resolvable(&source.resolved) {
                issues.push(Issue::MissingModule {
                    importing_module: module.path.clone(),
                    exporting_module: source.clone(),
                    line: import.line(),
                });
            }
        }
        for export in &module.exports {
            let ModuleExport::Batch { source, line } = export else {
                continue;
            };
            if !is_resolvable(&source.resolved) {
                issues.push(Issue::MissingModule {
                    importing_module: module.path.clone(),
                    exporting_module: source.clone(),
                    line: *line,
                });
            }
        }
    }
    issues
}

/// Default/named imports whose target exists but offers no such export.
///
/// Side-effect and batch imports impose no named-symbol obligation and are
/// never flagged. Imports of missing modules are skipped - the missing-module
/// pass already reported them.
fn find_bad_imports(
    modules: &[Module],
    table: &ExportTable,
    options: &AnalyzeOptions,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for module in modules {
        for import in &module.imports {
            let (export_kind, export_name, source, line) = match import {
                ModuleImport::Default { source, line } => (ExportKind::Default, None, source, *line),
                ModuleImport::Named {
                    export_name,
                    source,
                    line,
                } => (ExportKind::Named, Some(export_name), source, *line),
                ModuleImport::SideEffect { .. } | ModuleImport::Batch { .. } => continue,
            };

            let satisfied = if let Some(resolved) = table.get(&source.resolved) {
                match export_name {
                    None => resolved.default,
                    Some(name) => resolved.has_named(name),
                }
            } else if let Some(predefined) = options.predefined.get(&source.resolved) {
                match export_name {
                    None => predefined.satisfies_default(),
                    Some(name) => predefined.satisfies_named(name),
                }
            } else {
                continue;
            };

            if !satisfied {
                issues.push(Issue::BadImport {
                    importing_module: module.path.clone(),
                    exporting_module: source.clone(),
                    export_kind,
                    export_name: export_name.cloned(),
                    line,
                });
            }
        }
    }

    issues
}

/// Named-export names declared more than once within one module: one issue
/// per duplicated name, reported at the name's first occurrence. Default
/// exports are not checked - the language already forbids duplicating them.
fn find_duplicate_exports(modules: &[Module]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for module in modules {
        let mut names = CountingSet::new();
        let mut first_line: FxHashMap<&str, u32> = FxHashMap::default();

        for export in &module.exports {
            if let ModuleExport::Named { export_name, line } = export {
                names.add(export_name);
                first_line.entry(export_name.as_str()).or_insert(*line);
            }
        }

        for name in names.items() {
            if names.count(name) > 1 {
                issues.push(Issue::DuplicateExport {
                    exporting_module: module.path.clone(),
                    export_kind: ExportKind::Named,
                    export_name: name.to_string(),
                    line: first_line[name],
                });
            }
        }
    }

    issues
}

/// Modules no other module's import or batch export references.
///
/// Only inbound references among real modules count - predefined
/// declarations are not uses. A module with imports of its own is a consumer
/// root (an entry file) and is exempt; so are modules with a whole-module
/// ignore-unused entry.
fn find_unused_modules(modules: &[Module], options: &AnalyzeOptions) -> Vec<Issue> {
    let mut referenced: FxHashSet<&str> = FxHashSet::default();
    for module in modules {
        for import in &module.imports {
            let resolved = import.source().resolved.as_str();
            if resolved != module.path {
                referenced.insert(resolved);
            }
        }
        for source in module.batch_export_sources() {
            if source.resolved != module.path {
                referenced.insert(source.resolved.as_str());
            }
        }
    }

    modules
        .iter()
        .filter(|module| {
            module.imports.is_empty()
                && !referenced.contains(module.path.as_str())
                && !options
                    .ignore_unused
                    .get(&module.path)
                    .is_some_and(IgnoreUnused::ignores_module)
        })
        .map(|module| Issue::UnusedModule {
            module: module.path.clone(),
        })
        .collect()
}

/// Exports no other module imports.
///
/// A single inbound batch (`import * as ns`) import marks the whole module
/// consumed - namespace importers may use anything. Otherwise each default
/// export needs an inbound default import and each named export an inbound
/// named import of that name, modulo ignore-unused exemptions.
fn find_unused_exports(modules: &[Module], options: &AnalyzeOptions) -> Vec<Issue> {
    let mut issues = Vec::new();

    for module in modules {
        let exemption = options.ignore_unused.get(&module.path);
        if exemption.is_some_and(IgnoreUnused::ignores_module) {
            continue;
        }

        let mut default_used = false;
        let mut names_used: FxHashSet<&str> = FxHashSet::default();
        let mut batch_imported = false;

        for importer in modules {
            if importer.path == module.path {
                continue;
            }
            for import in &importer.imports {
                if import.source().resolved != module.path {
                    continue;
                }
                match import {
                    ModuleImport::Batch { .. } => batch_imported = true,
                    ModuleImport::Default { .. } => default_used = true,
                    ModuleImport::Named { export_name, .. } => {
                        names_used.insert(export_name.as_str());
                    }
                    ModuleImport::SideEffect { .. } => {}
                }
            }
        }

        if batch_imported {
            continue;
        }

        for export in &module.exports {
            match export {
                ModuleExport::Default { line } => {
                    if !default_used && !exemption.is_some_and(IgnoreUnused::ignores_default) {
                        issues.push(Issue::UnusedExport {
                            exporting_module: module.path.clone(),
                            export_kind: ExportKind::Default,
                            export_name: None,
                            line: *line,
                        });
                    }
                }
                ModuleExport::Named { export_name, line } => {
                    if !names_used.contains(export_name.as_str())
                        && !exemption.is_some_and(|entry| entry.ignores_named(export_name))
                    {
                        issues.push(Issue::UnusedExport {
                            exporting_module: module.path.clone(),
                            export_kind: ExportKind::Named,
                            export_name: Some(export_name.clone()),
                            line: *line,
                        });
                    }
                }
                ModuleExport::Batch { .. } => {}
            }
        }
    }

    issues
}
