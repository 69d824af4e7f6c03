//! AST node types consumed by the index walker.
//!
//! An explicit tagged union rather than shape-based dispatch: every node
//! kind the walker can meet is a named variant, and anything the grammar
//! produces beyond these arrives as [`Unsupported`] so the gap is visible
//! in code review instead of silently skipped.

use crate::base::Span;

/// A parsed source file: the root statement list of a chunk.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    pub body: Vec<Node>,
}

/// A single AST node.
#[derive(Debug, Clone)]
pub enum Node {
    /// A leaf identifier reference.
    Identifier(Identifier),
    /// A function declaration, named or anonymous.
    Function(FunctionDecl),
    /// A call used as a statement; wraps a single expression.
    CallStmt(CallStmt),
    /// A call expression: callee plus arguments.
    Call(CallExpr),
    /// A statement sequence (do-block, loop body, branch body).
    Block(Block),
    /// An assignment. Only the target side is indexed.
    Assign(Assign),
    /// A construct the index has no case for. Skipped by the walker.
    Unsupported(Unsupported),
}

/// A leaf identifier with its source range.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// A function declaration.
///
/// `span` covers the entire declaration, `function` keyword through `end`,
/// not just the name token. Anonymous functions carry `name: None`.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: Option<String>,
    pub body: Vec<Node>,
    pub span: Span,
}

/// A call in statement position.
#[derive(Debug, Clone)]
pub struct CallStmt {
    pub expr: Box<Node>,
    pub span: Span,
}

/// A call expression. Arguments are in source (left-to-right) order.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub base: Box<Node>,
    pub args: Vec<Node>,
    pub span: Span,
}

/// A brace-less statement sequence: do-blocks and control-flow bodies.
#[derive(Debug, Clone)]
pub struct Block {
    pub body: Vec<Node>,
    pub span: Span,
}

/// An assignment statement.
///
/// The walker visits `target` only; right-hand sides are not indexed.
#[derive(Debug, Clone)]
pub struct Assign {
    pub target: Box<Node>,
    pub value: Box<Node>,
    pub span: Span,
}

/// A declared placeholder for node kinds the index does not model.
#[derive(Debug, Clone)]
pub struct Unsupported {
    /// The grammar's name for the construct, for trace logging.
    pub kind: &'static str,
    pub span: Span,
}

impl Node {
    /// The source range this node covers.
    pub fn span(&self) -> Span {
        match self {
            Node::Identifier(node) => node.span,
            Node::Function(node) => node.span,
            Node::CallStmt(node) => node.span,
            Node::Call(node) => node.span,
            Node::Block(node) => node.span,
            Node::Assign(node) => node.span,
            Node::Unsupported(node) => node.span,
        }
    }
}
