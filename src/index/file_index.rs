//! Per-file derived state with a dirty/clean lifecycle.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use tracing::debug;

use crate::base::{DocumentId, Position};
use crate::syntax::Parser;

use super::error::IndexError;
use super::types::{DeclaredSymbol, Occurrence};
use super::walk::walk_tree;

/// The rebuildable index state for one source document.
///
/// A `FileIndex` starts dirty and only becomes clean through a successful
/// [`rebuild`](FileIndex::rebuild). Content-change notifications flip it back
/// to dirty; re-notifying a dirty file is a no-op. There is no terminal
/// state — once created, an index lives as long as the workspace unless
/// explicitly evicted.
#[derive(Debug)]
pub struct FileIndex {
    document: DocumentId,
    dirty: bool,
    /// The most recent rebuild failure, cleared by the next success.
    diagnostic: Option<IndexError>,
    /// Identifier references in traversal order (not sorted by position).
    occurrences: Vec<Occurrence>,
    /// Declared symbols in traversal order; duplicates all kept.
    symbols: Vec<DeclaredSymbol>,
    /// Name → index into `symbols`. On duplicate names the later declaration
    /// replaces the earlier one here; the ordered list keeps both.
    symbols_by_name: FxHashMap<Arc<str>, usize>,
}

impl FileIndex {
    /// Create a new, dirty index for `document`.
    pub fn new(document: DocumentId) -> Self {
        Self {
            document,
            dirty: true,
            diagnostic: None,
            occurrences: Vec::new(),
            symbols: Vec::new(),
            symbols_by_name: FxHashMap::default(),
        }
    }

    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flip to dirty. Idempotent.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The most recent rebuild failure, if the index is stale because of one.
    pub fn diagnostic(&self) -> Option<&IndexError> {
        self.diagnostic.as_ref()
    }

    pub(crate) fn set_diagnostic(&mut self, error: IndexError) {
        self.diagnostic = Some(error);
    }

    /// Re-derive all artifacts from `text`.
    ///
    /// Parses first; only on success are the old artifacts replaced and the
    /// index marked clean. On failure the index stays dirty, the previous
    /// artifacts remain visible, and the error is recorded as this file's
    /// diagnostic.
    pub fn rebuild(&mut self, text: &str, parser: &dyn Parser) -> Result<(), IndexError> {
        let tree = match parser.parse(text) {
            Ok(tree) => tree,
            Err(parse_error) => {
                let error = IndexError::Parse(parse_error);
                debug!(document = %self.document, %error, "rebuild failed, serving stale index");
                self.diagnostic = Some(error.clone());
                return Err(error);
            }
        };

        let output = walk_tree(&self.document, &tree);
        self.occurrences = output.occurrences;
        self.symbols = output.symbols;
        self.symbols_by_name.clear();
        for (position, symbol) in self.symbols.iter().enumerate() {
            self.symbols_by_name.insert(symbol.name.clone(), position);
        }
        self.diagnostic = None;
        self.dirty = false;

        debug!(
            document = %self.document,
            symbols = self.symbols.len(),
            occurrences = self.occurrences.len(),
            "rebuilt file index"
        );
        Ok(())
    }

    /// Identifier references in traversal order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Declared symbols in traversal order, duplicates included.
    pub fn symbols(&self) -> &[DeclaredSymbol] {
        &self.symbols
    }

    /// Look up a declared symbol by name. With duplicate declarations this
    /// is the later one in traversal order.
    pub fn symbol(&self, name: &str) -> Option<&DeclaredSymbol> {
        self.symbols_by_name
            .get(name)
            .map(|&position| &self.symbols[position])
    }

    /// The first occurrence (in traversal order) whose range contains
    /// `position`.
    ///
    /// Traversal order is first-discovered order, not leftmost-in-file;
    /// with non-overlapping identifier ranges the distinction is
    /// unobservable, but it keeps lookups deterministic if ranges ever
    /// overlap.
    pub fn find_occurrence(&self, position: Position) -> Option<&Occurrence> {
        self.occurrences
            .iter()
            .find(|occurrence| occurrence.span.contains(position))
    }
}
