//! Go-to-definition implementation.

use std::sync::Arc;

use crate::base::{DocumentId, Position, Span};
use crate::index::{DeclaredSymbol, WorkspaceIndex, resolve};

/// Result of a go-to-definition request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug)]
pub struct GotoTarget {
    /// The document containing the target.
    pub document: DocumentId,
    /// Range of the whole declaration.
    pub span: Span,
    /// The symbol name.
    pub name: Arc<str>,
}

impl From<&DeclaredSymbol> for GotoTarget {
    fn from(symbol: &DeclaredSymbol) -> Self {
        Self {
            document: symbol.document.clone(),
            span: symbol.span,
            name: symbol.name.clone(),
        }
    }
}

/// Find the definition of the identifier at the given position.
///
/// Looks up the occurrence covering `position` in `document`, then collects
/// every declaration of that name across the workspace, in file-insertion
/// order. The queried file is expected to be fresh already (queries route
/// through `ensure_fresh` before landing here); other files contribute
/// whatever their current artifacts hold.
///
/// # Returns
/// The location(s) of the definition, or empty if the position covers no
/// identifier or the name is declared nowhere.
pub fn goto_definition(
    workspace: &WorkspaceIndex,
    document: &DocumentId,
    position: Position,
) -> GotoResult {
    let Some(file) = workspace.get(document) else {
        return GotoResult::empty();
    };
    let Some(occurrence) = file.find_occurrence(position) else {
        return GotoResult::empty();
    };

    let targets = resolve(workspace, &occurrence.name)
        .into_iter()
        .map(GotoTarget::from)
        .collect();
    GotoResult { targets }
}
