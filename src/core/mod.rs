// Messager - core/mod.rs
//
// Core logic layer: parsing, substitution, export.
// Dependencies: standard library, serde_json (export), tracing.
// Must NOT depend on: app or platform.

pub mod export;
pub mod format;
pub mod model;
pub mod parser;
