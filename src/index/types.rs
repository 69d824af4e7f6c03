//! The two artifacts the walker produces for a file.

use std::sync::Arc;

use crate::base::{DocumentId, Span};

/// A recorded identifier reference at a specific source range.
///
/// One occurrence exists per leaf identifier the walker visits, stored in
/// traversal order. Occurrences are owned by their [`FileIndex`] and are
/// destroyed and rebuilt wholesale on every re-walk.
///
/// [`FileIndex`]: crate::index::FileIndex
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub name: Arc<str>,
    pub span: Span,
}

/// A named, locatable declaration.
#[derive(Debug, Clone)]
pub struct DeclaredSymbol {
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// The entire declaration's range, not just the name token.
    pub span: Span,
    /// The document containing the declaration.
    pub document: DocumentId,
}

/// The kind of a declared symbol.
///
/// Only named function declarations are indexed today; anonymous functions
/// and non-function bindings produce no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
}
