use serde::{Deserialize, Serialize};

use super::ModuleRef;

/// One export record extracted from a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ModuleExport {
    /// `export default ...`
    Default { line: u32 },
    /// `export const x = ...`, `export { x }`, `export { a as b } from ...`
    Named { export_name: String, line: u32 },
    /// `export * from './module'` - forwards the source's named exports
    Batch { source: ModuleRef, line: u32 },
}

impl ModuleExport {
    /// 1-based source line of the originating syntax node.
    pub fn line(&self) -> u32 {
        match self {
            Self::Default { line }
            | Self::Named { line, .. }
            | Self::Batch { line, .. } => *line,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch { .. })
    }
}

/// Whether an issue concerns a default or a named export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportKind {
    Default,
    Named,
}
