use serde::{Deserialize, Serialize};

use super::ModuleRef;

/// One import record extracted from a module.
///
/// A single `import` declaration can contribute several records, one per
/// specifier; a declaration with no specifiers contributes one `SideEffect`
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ModuleImport {
    /// `import './module'`
    SideEffect { source: ModuleRef, line: u32 },
    /// `import thing from './module'`, including `import { default as x }`
    Default { source: ModuleRef, line: u32 },
    /// `import * as ns from './module'`
    Batch { source: ModuleRef, line: u32 },
    /// `import { name } from './module'` - only the exported name matters,
    /// local aliases are irrelevant to graph analysis
    Named {
        export_name: String,
        source: ModuleRef,
        line: u32,
    },
}

impl ModuleImport {
    /// The module this import pulls from.
    pub fn source(&self) -> &ModuleRef {
        match self {
            Self::SideEffect { source, .. }
            | Self::Default { source, .. }
            | Self::Batch { source, .. }
            | Self::Named { source, .. } => source,
        }
    }

    /// 1-based source line of the originating syntax node.
    pub fn line(&self) -> u32 {
        match self {
            Self::SideEffect { line, .. }
            | Self::Default { line, .. }
            | Self::Batch { line, .. }
            | Self::Named { line, .. } => *line,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch { .. })
    }
}
