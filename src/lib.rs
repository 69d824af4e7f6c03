//! # lunora-base
//!
//! Core library for Lua source indexing: document symbols and go-to-definition.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace seeding from a directory
//!   ↓
//! ide       → IDE features (document symbols, goto-definition)
//!   ↓
//! index     → AST walker, per-file indexes, workspace index, resolver
//!   ↓
//! syntax    → AST node types, Parser contract, ParseError
//!   ↓
//! base      → Primitives (DocumentId, Position, Span)
//! ```
//!
//! Parsing itself lives outside this crate: embedders supply a [`syntax::Parser`]
//! that turns source text into a [`syntax::SyntaxTree`], and the index layers
//! never touch raw text beyond handing it to that collaborator.

// ============================================================================
// MODULES (dependency order: base → syntax → index → ide → project)
// ============================================================================

/// Foundation types: DocumentId, Position, Span
pub mod base;

/// Syntax: AST node types, Parser contract, ParseError
pub mod syntax;

/// Indexing: AST walker, FileIndex, WorkspaceIndex, name resolution
pub mod index;

/// IDE features: document symbols, workspace symbols, goto-definition
pub mod ide;

/// Project management: workspace seeding from disk
pub mod project;

// Re-export foundation types
pub use base::{DocumentId, Position, Span};
