use serde::{Deserialize, Serialize};

use super::{ExportKind, ModuleRef};

/// A structural defect found in the module graph.
///
/// The engine emits issues in pass order (missing module, bad import,
/// duplicate export, unused module, unused export); callers needing a
/// canonical ordering sort explicitly with [`sort_issues`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Issue {
    /// An import or batch export references a module that is neither part of
    /// the analyzed set nor predefined.
    MissingModule {
        importing_module: String,
        exporting_module: ModuleRef,
        line: u32,
    },
    /// An import requests a default or named export its target never offers.
    BadImport {
        importing_module: String,
        exporting_module: ModuleRef,
        export_kind: ExportKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        export_name: Option<String>,
        line: u32,
    },
    /// A module declares the same named export more than once.
    DuplicateExport {
        exporting_module: String,
        export_kind: ExportKind,
        export_name: String,
        line: u32,
    },
    /// No other module references this module.
    UnusedModule { module: String },
    /// An export no other module consumes.
    UnusedExport {
        exporting_module: String,
        export_kind: ExportKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        export_name: Option<String>,
        line: u32,
    },
}

impl Issue {
    /// The module the issue is reported against.
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingModule {
                importing_module, ..
            }
            | Self::BadImport {
                importing_module, ..
            } => importing_module,
            Self::DuplicateExport {
                exporting_module, ..
            }
            | Self::UnusedExport {
                exporting_module, ..
            } => exporting_module,
            Self::UnusedModule { module } => module,
        }
    }

    fn sort_key(&self) -> (u8, &str, &str, &str, u32) {
        match self {
            Self::MissingModule {
                importing_module,
                exporting_module,
                line,
            } => (0, importing_module, &exporting_module.resolved, "", *line),
            Self::BadImport {
                importing_module,
                exporting_module,
                export_name,
                line,
                ..
            } => (
                1,
                importing_module,
                &exporting_module.resolved,
                export_name.as_deref().unwrap_or(""),
                *line,
            ),
            Self::DuplicateExport {
                exporting_module,
                export_name,
                line,
                ..
            } => (2, exporting_module, "", export_name, *line),
            Self::UnusedModule { module } => (3, module, "", "", 0),
            Self::UnusedExport {
                exporting_module,
                export_name,
                line,
                ..
            } => (
                4,
                exporting_module,
                "",
                export_name.as_deref().unwrap_or(""),
                *line,
            ),
        }
    }
}

/// Sort issues into the canonical comparison order: issue kind, then
/// reported module, then resolved target, then export name, then line.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
