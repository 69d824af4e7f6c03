/// Position tracking for AST nodes
///
/// Stores the source location (line/column) of AST nodes for editor features
/// like go-to-definition, document outlines, and error reporting.
/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "span start must not follow its end");
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    /// Check if a position falls within this span.
    ///
    /// Both boundaries are inclusive (closed-interval semantics): a position
    /// exactly at the end column of one span and the start column of an
    /// adjacent one matches either, whichever is checked first.
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert from a parser's 1-based line numbering (columns pass through).
    pub fn from_one_based(line: usize, column: usize) -> Self {
        Self {
            line: line.saturating_sub(1),
            column,
        }
    }
}
