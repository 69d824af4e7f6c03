//! The parser-collaborator contract.
//!
//! Parsing is external to this crate: an embedder supplies something that
//! turns source text into a [`SyntaxTree`] or a positioned failure. The
//! index only ever calls through this seam, so any Lua front end (or a
//! hand-built fixture in tests) plugs in without the core knowing.

use crate::syntax::SyntaxTree;

/// Parse error type for syntax-level errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// 1-based, as real parsers report them. Convert with
    /// [`Position::from_one_based`](crate::base::Position::from_one_based).
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn syntax_error(message: &str, line: usize, column: usize) -> Self {
        Self {
            message: message.to_string(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Turns source text into a syntax tree.
///
/// Must tolerate any input, including syntactically invalid text, by
/// returning `Err` rather than panicking: a malformed file must never take
/// down the caller.
pub trait Parser {
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError>;
}

/// Closures work as parsers, which keeps tests and small embedders terse.
impl<F> Parser for F
where
    F: Fn(&str) -> Result<SyntaxTree, ParseError>,
{
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
        self(text)
    }
}
