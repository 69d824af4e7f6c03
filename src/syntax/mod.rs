//! Syntax layer: AST node types and the parser contract.
//!
//! The AST here is the *input* to the index — a tagged union of the node
//! kinds the walker understands, produced by an external [`Parser`]
//! implementation. This crate deliberately contains no lexer or grammar;
//! embedders bring their own and convert into these shapes.

mod ast;
mod parser;

pub use ast::{
    Assign, Block, CallExpr, CallStmt, FunctionDecl, Identifier, Node, SyntaxTree, Unsupported,
};
pub use parser::{ParseError, Parser};
