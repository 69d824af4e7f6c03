//! Foundation types for the Lunora toolchain.
//!
//! This module provides fundamental types used throughout the indexer:
//! - [`DocumentId`] - Normalized document identities
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//!
//! This module has NO dependencies on other lunora modules.

mod document_id;
mod position;

pub use document_id::DocumentId;
pub use position::{Position, Span};
