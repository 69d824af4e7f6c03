//! The workspace-wide collection of file indexes.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use tracing::{debug, trace};

use crate::base::DocumentId;
use crate::syntax::Parser;

use super::error::IndexError;
use super::file_index::FileIndex;

/// Supplies the latest text for a tracked document.
///
/// Invoked lazily by [`WorkspaceIndex::ensure_fresh`] — the index never
/// touches the file system or the wire itself. `None` means the provider
/// has nothing for that identity.
pub trait ContentProvider {
    fn text(&self, document: &DocumentId) -> Option<String>;
}

impl<F> ContentProvider for F
where
    F: Fn(&DocumentId) -> Option<String>,
{
    fn text(&self, document: &DocumentId) -> Option<String> {
        self(document)
    }
}

impl ContentProvider for FxHashMap<DocumentId, String> {
    fn text(&self, document: &DocumentId) -> Option<String> {
        self.get(document).cloned()
    }
}

/// Every [`FileIndex`] known to the process, keyed by normalized identity.
///
/// Iteration order is the order documents were first seen (open order or
/// directory-scan order). Entries live for the workspace lifetime unless
/// explicitly [`evict`](WorkspaceIndex::evict)ed — a plain document-close is
/// deliberately not an eviction.
#[derive(Debug, Default)]
pub struct WorkspaceIndex {
    files: IndexMap<DocumentId, FileIndex>,
}

impl WorkspaceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing index for `document`, or insert a new dirty one.
    pub fn get_or_create(&mut self, document: DocumentId) -> &mut FileIndex {
        self.files
            .entry(document.clone())
            .or_insert_with(|| {
                trace!(document = %document, "tracking new document");
                FileIndex::new(document)
            })
    }

    pub fn get(&self, document: &DocumentId) -> Option<&FileIndex> {
        self.files.get(document)
    }

    pub fn contains(&self, document: &DocumentId) -> bool {
        self.files.contains_key(document)
    }

    /// Mark a document's index dirty. A no-op for unknown identities —
    /// change events for untracked files are ignored, not an error.
    pub fn mark_dirty(&mut self, document: &DocumentId) {
        if let Some(file) = self.files.get_mut(document) {
            file.mark_dirty();
        }
    }

    /// The single choke point every query passes through.
    ///
    /// If the index for `document` is dirty, fetch its text and rebuild —
    /// at most once per call, and not at all for clean files. Returns
    /// `None` for identities the workspace has never seen. A failed rebuild
    /// still returns the index: the previous artifacts stay visible and the
    /// failure is readable via [`FileIndex::diagnostic`].
    pub fn ensure_fresh(
        &mut self,
        document: &DocumentId,
        provider: &dyn ContentProvider,
        parser: &dyn Parser,
    ) -> Option<&FileIndex> {
        let file = self.files.get_mut(document)?;
        if file.is_dirty() {
            match provider.text(document) {
                Some(text) => {
                    // Failure is recorded on the file; stale data is served.
                    let _ = file.rebuild(&text, parser);
                }
                None => {
                    file.set_diagnostic(IndexError::MissingContent(document.clone()));
                }
            }
        }
        Some(&*file)
    }

    /// Drop a document's index entirely.
    ///
    /// For callers that track document-close and want the memory back.
    /// Returns whether an entry existed. Insertion order of the remaining
    /// entries is preserved.
    pub fn evict(&mut self, document: &DocumentId) -> bool {
        let existed = self.files.shift_remove(document).is_some();
        if existed {
            debug!(document = %document, "evicted document index");
        }
        existed
    }

    /// All tracked indexes, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FileIndex> {
        self.files.values()
    }

    /// All tracked identities, in first-seen order.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentId> {
        self.files.keys()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
