//! Weft CLI - static checker for ES module import/export graphs.
//!
//! This crate is the thin driver around `weft-graph`: it loads configuration,
//! enumerates source files, reads and parses them in parallel, and renders
//! the resulting issue report.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod project;
pub mod render;
