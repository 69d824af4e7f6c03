//! Name resolution — resolving a referenced name to declared symbols.
//!
//! Deliberately flat and workspace-wide: the symbol table is a per-file map
//! of declared function names, so resolution is a scan over every tracked
//! file with no visibility or scope filtering and no ranking. All matches
//! are returned with equal priority, in the order files were first seen.

use super::types::DeclaredSymbol;
use super::workspace::WorkspaceIndex;

/// Collect every declaration of `name` across the workspace.
///
/// Files are visited in insertion order; within a file the name table's
/// later-declaration-wins entry is the one reported. Returns an empty vec,
/// never a failure, when nothing matches.
pub fn resolve<'a>(workspace: &'a WorkspaceIndex, name: &str) -> Vec<&'a DeclaredSymbol> {
    let mut targets = Vec::new();
    for file in workspace.iter() {
        if let Some(symbol) = file.symbol(name) {
            targets.push(symbol);
        }
    }
    targets
}
