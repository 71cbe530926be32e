//! # weft-graph
//!
//! Module records and import/export issue detection for ECMAScript module
//! graphs.
//!
//! The crate turns each source file's import/export declarations into one
//! canonical [`Module`] record, resolves specifiers to canonical paths
//! (relative paths, alias tables, an optional caller hook), transitively
//! flattens `export *` chains, and runs five detection passes over the
//! result: missing modules, bad imports, duplicate exports, unused modules,
//! and unused exports.
//!
//! ## Overview
//!
//! ```text
//!   source text ──▶ ModuleBuilder ──▶ Module records
//!                        │                 │
//!                  PathResolver     resolve_exports ──▶ ExportTable
//!                                          │                │
//!                                          └──▶ detect_issues ──▶ issues
//! ```
//!
//! Everything past the parser is pure computation over immutable inputs:
//! no filesystem access, no shared state across runs, no concurrency of its
//! own. Driving file enumeration and parallel reading is the caller's job
//! (see `weft-cli`).
//!
//! ## Quick start
//!
//! ```rust
//! use weft_graph::{analyze, build_module, AnalyzeOptions, PathResolver};
//! use weft_graph::oxc::SourceType;
//!
//! # fn main() -> Result<(), weft_graph::ParseError> {
//! let resolver = PathResolver::default();
//! let modules = vec![
//!     build_module("main", "import { greet } from './lib';", SourceType::mjs(), &resolver)?,
//!     build_module("lib", "export const greet = () => {};", SourceType::mjs(), &resolver)?,
//! ];
//!
//! let analysis = analyze(modules, &AnalyzeOptions::default());
//! assert!(analysis.issues.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod detect;
pub mod export;
pub mod import;
pub mod issues;
pub mod module;
pub mod multiset;
pub mod options;
pub mod reference;
pub mod resolve;
pub mod resolver;

pub use builder::{LineIndex, ParseError, build_module, collect_module};
pub use detect::{Analysis, analyze, detect_issues};
pub use export::{ExportKind, ModuleExport};
pub use import::ModuleImport;
pub use issues::{Issue, sort_issues};
pub use module::Module;
pub use multiset::CountingSet;
pub use options::{AnalyzeOptions, IgnoreUnused, PredefinedModule};
pub use reference::ModuleRef;
pub use resolve::{ExportTable, ResolvedExports, resolve_exports};
pub use resolver::{AliasTables, PathResolver, ResolveContext, ResolveHook};

// Re-export OXC foundation types for consistent version usage downstream.
pub mod oxc {
    //! OXC (Oxidation Compiler) types re-exported so consumers stay on the
    //! same parser version as this crate.

    /// Arena allocator for AST nodes
    pub use oxc_allocator::Allocator;

    /// Span types for source location tracking
    pub use oxc_span::{GetSpan, SourceType, Span};

    /// AST node types
    pub use oxc_ast::ast;

    /// JavaScript/TypeScript parser
    pub use oxc_parser::{Parser, ParserReturn};
}

#[cfg(test)]
mod tests;
