use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Caller-declared export shape for a module resolved outside the analyzed
/// file set (an external dependency).
///
/// In JSON configuration this is either the literal `true` (fully trusted,
/// satisfies any default or named import) or a record naming exactly which
/// symbols the module exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredefinedModule {
    Opaque(bool),
    Exports {
        #[serde(default)]
        default: bool,
        #[serde(default)]
        named: FxHashSet<String>,
    },
}

impl PredefinedModule {
    /// `true` in config: the module satisfies any import.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(true))
    }

    pub fn satisfies_default(&self) -> bool {
        match self {
            Self::Opaque(trusted) => *trusted,
            Self::Exports { default, .. } => *default,
        }
    }

    pub fn satisfies_named(&self, name: &str) -> bool {
        match self {
            Self::Opaque(trusted) => *trusted,
            Self::Exports { named, .. } => named.contains(name),
        }
    }
}

/// Caller-supplied exemption from unused-module/unused-export reporting.
///
/// `true` suppresses everything for the module; the record form exempts the
/// default export and/or specific named exports only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnoreUnused {
    All(bool),
    Only {
        #[serde(default)]
        default: bool,
        #[serde(default)]
        named: FxHashSet<String>,
    },
}

impl IgnoreUnused {
    /// Whole-module exemption: suppresses the unused-module check and every
    /// unused-export report for the module.
    pub fn ignores_module(&self) -> bool {
        matches!(self, Self::All(true))
    }

    pub fn ignores_default(&self) -> bool {
        match self {
            Self::All(all) => *all,
            Self::Only { default, .. } => *default,
        }
    }

    pub fn ignores_named(&self, name: &str) -> bool {
        match self {
            Self::All(all) => *all,
            Self::Only { named, .. } => named.contains(name),
        }
    }
}

/// Read-only policy tables for one analysis run, constructed once and
/// threaded by reference through export resolution and issue detection.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Export shapes for modules resolved outside the analyzed set, keyed by
    /// resolved specifier.
    pub predefined: FxHashMap<String, PredefinedModule>,
    /// Unused-reporting exemptions, keyed by module path.
    pub ignore_unused: FxHashMap<String, IgnoreUnused>,
}

impl AnalyzeOptions {
    /// True when `path` names a real module or a predefined one; everything
    /// else is reported as a missing module.
    pub(crate) fn is_predefined(&self, path: &str) -> bool {
        self.predefined.contains_key(path)
    }
}
