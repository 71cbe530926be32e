use serde::{Deserialize, Serialize};

use super::{ModuleExport, ModuleImport, ModuleRef};

/// The canonical record for one source file.
///
/// `path` is the extension-stripped, project-relative path and serves as the
/// primary key across the whole graph; no two modules in one analysis run may
/// share it. The record is built once by the module builder and is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub path: String,
    pub imports: Vec<ModuleImport>,
    pub exports: Vec<ModuleExport>,
}

impl Module {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn add_side_effect_import(&mut self, source: ModuleRef, line: u32) {
        self.imports.push(ModuleImport::SideEffect { source, line });
    }

    pub fn add_default_import(&mut self, source: ModuleRef, line: u32) {
        self.imports.push(ModuleImport::Default { source, line });
    }

    pub fn add_batch_import(&mut self, source: ModuleRef, line: u32) {
        self.imports.push(ModuleImport::Batch { source, line });
    }

    pub fn add_named_import(&mut self, name: impl Into<String>, source: ModuleRef, line: u32) {
        self.imports.push(ModuleImport::Named {
            export_name: name.into(),
            source,
            line,
        });
    }

    pub fn add_batch_export(&mut self, source: ModuleRef, line: u32) {
        self.exports.push(ModuleExport::Batch { source, line });
    }

    pub fn add_named_export(&mut self, name: impl Into<String>, line: u32) {
        self.exports.push(ModuleExport::Named {
            export_name: name.into(),
            line,
        });
    }

    pub fn add_default_export(&mut self, line: u32) {
        self.exports.push(ModuleExport::Default { line });
    }

    /// Record `export { imported as exported } from source`.
    ///
    /// Re-exports are modeled as an import/export pair so export resolution
    /// can attribute the symbol's origin: a named import of `imported`, plus
    /// a named export of `exported` (a default export when `exported` is
    /// literally `default`).
    pub fn add_re_export(
        &mut self,
        exported: &str,
        imported: &str,
        source: ModuleRef,
        line: u32,
    ) {
        self.add_named_import(imported, source, line);

        if exported == "default" {
            self.add_default_export(line);
        } else {
            self.add_named_export(exported, line);
        }
    }

    /// Iterate the resolved targets of batch (`export *`) exports.
    pub fn batch_export_sources(&self) -> impl Iterator<Item = &ModuleRef> {
        self.exports.iter().filter_map(|export| match export {
            ModuleExport::Batch { source, .. } => Some(source),
            _ => None,
        })
    }
}
