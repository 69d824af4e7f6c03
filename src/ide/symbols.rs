//! Symbol listing for document and workspace views.

use std::sync::Arc;

use crate::base::{DocumentId, Span};
use crate::index::{DeclaredSymbol, FileIndex, SymbolKind, WorkspaceIndex};

/// A symbol for the document outline or workspace symbol list.
#[derive(Clone, Debug)]
pub struct SymbolInfo {
    /// Symbol name.
    pub name: Arc<str>,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Document containing the symbol.
    pub document: DocumentId,
    /// Range of the whole declaration.
    pub span: Span,
}

impl SymbolInfo {
    /// Create from a declared symbol.
    pub fn from_declared(symbol: &DeclaredSymbol) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            document: symbol.document.clone(),
            span: symbol.span,
        }
    }
}

/// Get all symbols declared in one file, for the document outline.
///
/// Returned in traversal order, exactly as walked — re-declarations of the
/// same name all appear, not just the one the name table kept.
pub fn document_symbols(file: &FileIndex) -> Vec<SymbolInfo> {
    file.symbols().iter().map(SymbolInfo::from_declared).collect()
}

/// Get all symbols in the workspace, optionally filtered by a query.
///
/// # Arguments
/// * `workspace` - The workspace index to search
/// * `query` - Optional search query (case-insensitive substring match)
///
/// # Returns
/// List of matching symbols, sorted by name.
pub fn workspace_symbols(workspace: &WorkspaceIndex, query: Option<&str>) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());

    let mut results: Vec<SymbolInfo> = workspace
        .iter()
        .flat_map(|file| file.symbols())
        .filter(|symbol| match &query_lower {
            Some(q) => symbol.name.to_lowercase().contains(q),
            None => true,
        })
        .map(SymbolInfo::from_declared)
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}
