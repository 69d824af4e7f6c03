//! Parser collaborators for tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lunora::syntax::{ParseError, Parser, SyntaxTree};

/// A parser that maps exact source text to a pre-built tree.
///
/// Unknown text is a parse failure, which doubles as the malformed-source
/// fixture: register only the good revisions and any other content fails.
#[derive(Default)]
pub struct FixtureParser {
    trees: HashMap<String, SyntaxTree>,
}

impl FixtureParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, tree: SyntaxTree) -> Self {
        self.trees.insert(text.to_string(), tree);
        self
    }
}

impl Parser for FixtureParser {
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
        self.trees
            .get(text)
            .cloned()
            .ok_or_else(|| ParseError::syntax_error("unexpected symbol", 1, 0))
    }
}

/// Wraps a parser and counts how often it runs, for rebuild-count
/// assertions. The counter stays readable after the parser moves into a
/// host.
pub struct CountingParser<P> {
    inner: P,
    parses: Arc<AtomicUsize>,
}

impl<P: Parser> CountingParser<P> {
    pub fn new(inner: P) -> (Self, Arc<AtomicUsize>) {
        let parses = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                parses: parses.clone(),
            },
            parses,
        )
    }
}

impl<P: Parser> Parser for CountingParser<P> {
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        self.inner.parse(text)
    }
}

/// A parser that accepts anything and produces an empty chunk.
pub fn empty_parser() -> impl Parser + Send + 'static {
    |_: &str| Ok::<_, ParseError>(SyntaxTree::default())
}
