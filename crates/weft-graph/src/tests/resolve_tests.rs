use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Module, ModuleRef, PredefinedModule, resolve_exports};

fn named_set(names: &[&str]) -> FxHashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn exporter(path: &str, default: bool, named: &[&str], batch: &[&str]) -> Module {
    let mut module = Module::new(path);
    if default {
        module.add_default_export(1);
    }
    for (offset, name) in named.iter().enumerate() {
        module.add_named_export(*name, offset as u32 + 2);
    }
    for (offset, source) in batch.iter().enumerate() {
        module.add_batch_export(ModuleRef::verbatim(*source), offset as u32 + 10);
    }
    module
}

#[test]
fn direct_exports_fill_the_table() {
    let modules = vec![exporter("lib", true, &["a", "b"], &[])];
    let table = resolve_exports(&modules, &FxHashMap::default());

    let resolved = &table["lib"];
    assert!(resolved.default);
    assert_eq!(resolved.named, named_set(&["a", "b"]));
    assert!(!resolved.open);
}

#[test]
fn table_covers_every_real_module() {
    let modules = vec![
        exporter("a", false, &[], &[]),
        exporter("b", false, &["x"], &[]),
    ];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert_eq!(table.len(), 2);
    assert!(table.contains_key("a"));
    assert!(table.contains_key("b"));
}

#[test]
fn batch_exports_flatten_transitively() {
    let modules = vec![
        exporter("surface", false, &["own"], &["middle"]),
        exporter("middle", false, &["forwarded"], &["origin"]),
        exporter("origin", false, &["deep"], &[]),
    ];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert_eq!(
        table["surface"].named,
        named_set(&["own", "forwarded", "deep"]),
    );
    assert_eq!(table["middle"].named, named_set(&["forwarded", "deep"]));
}

#[test]
fn defaults_do_not_propagate_through_batch_exports() {
    let modules = vec![
        exporter("surface", false, &[], &["origin"]),
        exporter("origin", true, &["x"], &[]),
    ];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert!(!table["surface"].default);
    assert!(table["surface"].named.contains("x"));
    assert!(table["origin"].default);
}

#[test]
fn circular_chains_terminate_with_direct_names() {
    let modules = vec![
        exporter("a", false, &["from_a"], &["b"]),
        exporter("b", false, &["from_b"], &["a"]),
    ];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert_eq!(table["a"].named, named_set(&["from_a", "from_b"]));
    assert_eq!(table["b"].named, named_set(&["from_a", "from_b"]));
}

#[test]
fn self_referential_batch_export_terminates() {
    let modules = vec![exporter("loop", false, &["x"], &["loop"])];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert_eq!(table["loop"].named, named_set(&["x"]));
}

#[test]
fn predefined_shapes_splice_into_chains() {
    let mut predefined = FxHashMap::default();
    predefined.insert(
        "pallet".to_string(),
        PredefinedModule::Exports {
            default: true,
            named: named_set(&["red", "blue"]),
        },
    );
    let modules = vec![exporter("surface", false, &["own"], &["pallet"])];
    let table = resolve_exports(&modules, &predefined);

    let resolved = &table["surface"];
    assert_eq!(resolved.named, named_set(&["own", "red", "blue"]));
    // The predefined default is the predefined module's, not the surface's.
    assert!(!resolved.default);
    assert!(!resolved.open);
}

#[test]
fn opaque_predefined_modules_open_the_named_set() {
    let mut predefined = FxHashMap::default();
    predefined.insert("react".to_string(), PredefinedModule::Opaque(true));
    let modules = vec![exporter("surface", false, &["own"], &["react"])];
    let table = resolve_exports(&modules, &predefined);

    let resolved = &table["surface"];
    assert!(resolved.open);
    assert!(resolved.has_named("anything"));
    assert!(resolved.has_named("own"));
}

#[test]
fn unresolvable_batch_sources_contribute_nothing() {
    let modules = vec![exporter("surface", false, &["own"], &["nowhere"])];
    let table = resolve_exports(&modules, &FxHashMap::default());

    assert_eq!(table["surface"].named, named_set(&["own"]));
    assert!(!table["surface"].open);
}

#[test]
fn real_modules_shadow_predefined_entries() {
    let mut predefined = FxHashMap::default();
    predefined.insert(
        "lib".to_string(),
        PredefinedModule::Exports {
            default: false,
            named: named_set(&["phantom"]),
        },
    );
    let modules = vec![
        exporter("surface", false, &[], &["lib"]),
        exporter("lib", false, &["real"], &[]),
    ];
    let table = resolve_exports(&modules, &predefined);

    assert_eq!(table["surface"].named, named_set(&["real"]));
}
