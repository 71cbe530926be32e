use serde::{Deserialize, Serialize};

/// A module specifier as it appears in source, together with the canonical
/// path it resolves to.
///
/// Issue reports show the user the `raw` text they wrote; the engine compares
/// on `resolved`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    pub raw: String,
    pub resolved: String,
}

impl ModuleRef {
    pub fn new(raw: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            resolved: resolved.into(),
        }
    }

    /// A reference whose specifier resolved to itself (bare imports, and
    /// specifiers no alias or hook touched).
    pub fn verbatim(specifier: impl Into<String>) -> Self {
        let raw = specifier.into();
        Self {
            resolved: raw.clone(),
            raw,
        }
    }
}
