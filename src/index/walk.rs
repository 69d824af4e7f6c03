//! The AST walk that extracts occurrences and declared symbols.
//!
//! Depth-first pre-order over the tagged node union. Two kinds get special
//! treatment — identifiers (captured as occurrences) and named function
//! declarations (registered as symbols) — everything else is structural
//! recursion. [`Unsupported`](crate::syntax::Unsupported) nodes are skipped,
//! with a trace line so the coverage gap stays observable.

use std::sync::Arc;

use tracing::trace;

use crate::base::{DocumentId, Span};
use crate::syntax::{Node, SyntaxTree};

use super::types::{DeclaredSymbol, Occurrence, SymbolKind};

/// Everything one walk produces, in traversal order.
#[derive(Debug, Default)]
pub(crate) struct WalkOutput {
    pub occurrences: Vec<Occurrence>,
    pub symbols: Vec<DeclaredSymbol>,
}

/// Walk a whole tree, collecting artifacts for `document`.
pub(crate) fn walk_tree(document: &DocumentId, tree: &SyntaxTree) -> WalkOutput {
    let mut out = WalkOutput::default();
    // Enclosing function declarations. Threaded through the walk for
    // scope-aware lookup later; no step consults it yet.
    let mut ancestors: Vec<Span> = Vec::new();
    for statement in &tree.body {
        walk_node(&mut out, &mut ancestors, document, statement);
    }
    out
}

fn walk_node(
    out: &mut WalkOutput,
    ancestors: &mut Vec<Span>,
    document: &DocumentId,
    node: &Node,
) {
    match node {
        Node::Identifier(ident) => {
            out.occurrences.push(Occurrence {
                name: Arc::from(ident.name.as_str()),
                span: ident.span,
            });
        }
        Node::Function(func) => {
            if let Some(name) = &func.name {
                out.symbols.push(DeclaredSymbol {
                    name: Arc::from(name.as_str()),
                    kind: SymbolKind::Function,
                    span: func.span,
                    document: document.clone(),
                });
            }
            ancestors.push(func.span);
            for statement in &func.body {
                walk_node(out, ancestors, document, statement);
            }
            ancestors.pop();
        }
        Node::CallStmt(call) => {
            walk_node(out, ancestors, document, &call.expr);
        }
        Node::Call(call) => {
            walk_node(out, ancestors, document, &call.base);
            for arg in &call.args {
                walk_node(out, ancestors, document, arg);
            }
        }
        Node::Block(block) => {
            for statement in &block.body {
                walk_node(out, ancestors, document, statement);
            }
        }
        // Right-hand sides are not indexed; only the target identifier is.
        Node::Assign(assign) => {
            walk_node(out, ancestors, document, &assign.target);
        }
        Node::Unsupported(node) => {
            trace!(kind = node.kind, document = %document, "skipping unsupported node");
        }
    }
}
