//! Indexing layer — per-file artifacts and the workspace-wide collection.
//!
//! ## Data flow
//!
//! ```text
//! content change            ← notification marks a FileIndex dirty
//!     │
//!     ▼
//! ensure_fresh(document)    ← query-time choke point: rebuild if dirty
//!     │
//!     ▼
//! walk_tree(ast)            ← extract occurrences + declared symbols
//!     │
//!     ▼
//! find_occurrence / resolve ← position lookup, cross-file name resolution
//! ```
//!
//! Rebuilds are whole-file: any content change invalidates all of a file's
//! derived data, and the next query re-walks a freshly parsed tree. There is
//! no sub-tree reuse and no memoized query graph — a single dirty flag per
//! file is the entire staleness model.
//!
//! ## Key Types
//!
//! - [`Occurrence`] — a recorded identifier reference at a source range
//! - [`DeclaredSymbol`] — a named, locatable declaration (named functions)
//! - [`FileIndex`] — the rebuildable derived state for one document
//! - [`WorkspaceIndex`] — every [`FileIndex`] known to the process
//! - [`IndexError`] — recoverable rebuild failures, kept as diagnostics

mod error;
mod file_index;
mod resolve;
mod types;
mod walk;
mod workspace;

pub use error::IndexError;
pub use file_index::FileIndex;
pub use resolve::resolve;
pub use types::{DeclaredSymbol, Occurrence, SymbolKind};
pub use workspace::{ContentProvider, WorkspaceIndex};
