//! AnalysisHost — unified state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state: the workspace index, the
//! latest text of every tracked document, and the parser collaborator.
//! Document-lifecycle notifications mark state dirty; queries rebuild
//! lazily through the workspace's `ensure_fresh` choke point, so a clean
//! file is never re-parsed and a dirty one is rebuilt at most once per
//! query.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(my_parser);
//!
//! // Apply document lifecycle events
//! host.open_document("file:///proj/init.lua", text);
//! host.change_document("file:///proj/init.lua", new_text);
//!
//! // Query
//! let symbols = host.list_symbols("file:///proj/init.lua");
//! let definition = host.find_definition("file:///proj/init.lua", position);
//! ```

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::base::{DocumentId, Position};
use crate::index::{IndexError, WorkspaceIndex};
use crate::syntax::Parser;

use super::goto::{GotoResult, goto_definition};
use super::symbols::{SymbolInfo, document_symbols, workspace_symbols};

/// Owns all mutable state for the IDE layer.
///
/// Apply document lifecycle events via `open_document()` /
/// `change_document()` / `save_document()`, then query with
/// `list_symbols()` and `find_definition()`.
pub struct AnalysisHost {
    /// Per-file indexes, keyed by normalized identity.
    workspace: WorkspaceIndex,
    /// Latest known text per document — the in-process content provider.
    texts: FxHashMap<DocumentId, String>,
    /// The external parser collaborator.
    parser: Box<dyn Parser + Send>,
}

impl AnalysisHost {
    /// Create an empty host around a parser collaborator.
    pub fn new(parser: impl Parser + Send + 'static) -> Self {
        Self {
            workspace: WorkspaceIndex::new(),
            texts: FxHashMap::default(),
            parser: Box::new(parser),
        }
    }

    /// A document was opened: start tracking it and record its text.
    ///
    /// Returns the normalized identity the index will key on.
    pub fn open_document(&mut self, uri: &str, text: impl Into<String>) -> DocumentId {
        let document = DocumentId::new(uri);
        self.workspace.get_or_create(document.clone()).mark_dirty();
        self.texts.insert(document.clone(), text.into());
        document
    }

    /// A document was saved. Treated exactly like an open: track, record
    /// text, mark dirty; the next query rebuilds.
    pub fn save_document(&mut self, uri: &str, text: impl Into<String>) -> DocumentId {
        self.open_document(uri, text)
    }

    /// A document's content changed: record the new text and mark its
    /// index dirty. Ignored for documents the workspace has never seen.
    pub fn change_document(&mut self, uri: &str, text: impl Into<String>) {
        let document = DocumentId::new(uri);
        if !self.workspace.contains(&document) {
            return;
        }
        self.texts.insert(document.clone(), text.into());
        self.workspace.mark_dirty(&document);
    }

    /// Seed the workspace from an initial batch of `(uri, text)` pairs —
    /// the directory-scan entry point. Each document is tracked and rebuilt
    /// immediately.
    pub fn seed_documents<U, T>(&mut self, pairs: impl IntoIterator<Item = (U, T)>)
    where
        U: AsRef<str>,
        T: Into<String>,
    {
        for (uri, text) in pairs {
            let document = self.open_document(uri.as_ref(), text);
            self.workspace
                .ensure_fresh(&document, &self.texts, &*self.parser);
        }
    }

    /// Stop tracking a document entirely, dropping its index and text.
    ///
    /// Document-close on its own is deliberately NOT an eviction: closed
    /// files keep answering cross-file queries. This is for callers that
    /// track closes and want the memory back. Returns whether the document
    /// was tracked.
    pub fn evict_document(&mut self, uri: &str) -> bool {
        let document = DocumentId::new(uri);
        self.texts.remove(&document);
        self.workspace.evict(&document)
    }

    /// List the symbols declared in a document, rebuilding first if stale.
    ///
    /// Unknown documents produce an empty list, mirroring "no symbols yet".
    pub fn list_symbols(&mut self, uri: &str) -> Vec<SymbolInfo> {
        let document = DocumentId::new(uri);
        match self
            .workspace
            .ensure_fresh(&document, &self.texts, &*self.parser)
        {
            Some(file) => document_symbols(file),
            None => Vec::new(),
        }
    }

    /// Find the definition(s) of the identifier at `position`.
    ///
    /// Freshens the queried document, locates the occurrence under the
    /// cursor, and resolves its name across the whole workspace. Empty
    /// result for unknown documents and for positions covering nothing.
    pub fn find_definition(&mut self, uri: &str, position: Position) -> GotoResult {
        let document = DocumentId::new(uri);
        if self
            .workspace
            .ensure_fresh(&document, &self.texts, &*self.parser)
            .is_none()
        {
            return GotoResult::empty();
        }
        goto_definition(&self.workspace, &document, position)
    }

    /// Search symbols across the workspace. Freshens every tracked
    /// document first so the listing reflects current content.
    pub fn workspace_symbols(&mut self, query: Option<&str>) -> Vec<SymbolInfo> {
        let documents: Vec<DocumentId> = self.workspace.documents().cloned().collect();
        for document in &documents {
            self.workspace
                .ensure_fresh(document, &self.texts, &*self.parser);
        }
        workspace_symbols(&self.workspace, query)
    }

    /// The last rebuild failure for a document, if it is stale because of
    /// one.
    pub fn diagnostic(&self, uri: &str) -> Option<&IndexError> {
        self.workspace
            .get(&DocumentId::new(uri))
            .and_then(|file| file.diagnostic())
    }

    /// Whether a document is currently tracked.
    pub fn contains_document(&self, uri: &str) -> bool {
        self.workspace.contains(&DocumentId::new(uri))
    }

    /// Number of tracked documents.
    pub fn document_count(&self) -> usize {
        self.workspace.len()
    }

    /// Direct access to the workspace index.
    pub fn workspace(&self) -> &WorkspaceIndex {
        &self.workspace
    }
}

/// A thread-safe wrapper around [`AnalysisHost`].
///
/// The host's rebuild clears and repopulates a file's artifacts, which is
/// not safe to interleave with a concurrent lookup, so every operation —
/// reads included — goes through one lock. That reproduces the
/// single-threaded handle-to-completion model a multi-threaded embedder
/// would otherwise lose.
pub struct SharedAnalysisHost {
    inner: Mutex<AnalysisHost>,
}

impl SharedAnalysisHost {
    pub fn new(parser: impl Parser + Send + 'static) -> Self {
        Self {
            inner: Mutex::new(AnalysisHost::new(parser)),
        }
    }

    pub fn open_document(&self, uri: &str, text: impl Into<String>) -> DocumentId {
        self.inner.lock().open_document(uri, text)
    }

    pub fn save_document(&self, uri: &str, text: impl Into<String>) -> DocumentId {
        self.inner.lock().save_document(uri, text)
    }

    pub fn change_document(&self, uri: &str, text: impl Into<String>) {
        self.inner.lock().change_document(uri, text);
    }

    pub fn evict_document(&self, uri: &str) -> bool {
        self.inner.lock().evict_document(uri)
    }

    pub fn list_symbols(&self, uri: &str) -> Vec<SymbolInfo> {
        self.inner.lock().list_symbols(uri)
    }

    pub fn find_definition(&self, uri: &str, position: Position) -> GotoResult {
        self.inner.lock().find_definition(uri, position)
    }

    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        self.inner.lock().workspace_symbols(query)
    }

    pub fn diagnostic(&self, uri: &str) -> Option<IndexError> {
        self.inner.lock().diagnostic(uri).cloned()
    }
}
