//! Error types for index rebuilds.

use thiserror::Error;

use crate::base::DocumentId;
use crate::syntax::ParseError;

/// Errors that can occur while rebuilding a file's index.
///
/// These are recovered at the index boundary and kept as per-file
/// diagnostics: the file stays dirty, the previous artifacts stay visible,
/// and queries keep being answered. A malformed file must never take down
/// index availability for the rest of the workspace.
#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// The parser collaborator rejected the file's content.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// The content provider had no text for a tracked document.
    #[error("no content available for {0}")]
    MissingContent(DocumentId),
}
