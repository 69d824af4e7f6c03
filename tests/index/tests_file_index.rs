//! File index lifecycle tests: the dirty/clean state machine and the
//! artifacts a rebuild derives.

use crate::helpers::ast_fixtures::*;
use crate::helpers::parser_fixtures::FixtureParser;

use lunora::index::{FileIndex, IndexError};
use lunora::{DocumentId, Position};

fn doc() -> DocumentId {
    DocumentId::new("test.lua")
}

#[test]
fn starts_dirty_and_becomes_clean_only_through_successful_rebuild() {
    let parser = FixtureParser::new().with("function foo() end", tree(vec![function_decl("foo", 0)]));
    let mut file = FileIndex::new(doc());
    assert!(file.is_dirty());

    file.rebuild("function foo() end", &parser).unwrap();
    assert!(!file.is_dirty());
    assert!(file.diagnostic().is_none());
}

#[test]
fn content_change_marks_dirty_regardless_of_prior_state() {
    let parser = FixtureParser::new().with("", tree(vec![]));
    let mut file = FileIndex::new(doc());

    // Dirty → Dirty is idempotent
    file.mark_dirty();
    assert!(file.is_dirty());

    file.rebuild("", &parser).unwrap();
    assert!(!file.is_dirty());

    // Clean → Dirty
    file.mark_dirty();
    assert!(file.is_dirty());
}

#[test]
fn failed_rebuild_keeps_stale_artifacts_and_stays_dirty() {
    let parser = FixtureParser::new().with("function foo() end", tree(vec![function_decl("foo", 0)]));
    let mut file = FileIndex::new(doc());
    file.rebuild("function foo() end", &parser).unwrap();

    file.mark_dirty();
    let result = file.rebuild("function foo(", &parser);

    assert!(matches!(result, Err(IndexError::Parse(_))));
    assert!(file.is_dirty());
    assert!(file.diagnostic().is_some());
    // The previous successful parse is still served
    assert_eq!(file.symbols().len(), 1);
    assert_eq!(file.symbols()[0].name.as_ref(), "foo");
}

#[test]
fn next_successful_rebuild_clears_the_diagnostic() {
    let parser = FixtureParser::new()
        .with("function foo() end", tree(vec![function_decl("foo", 0)]))
        .with("function bar() end", tree(vec![function_decl("bar", 0)]));
    let mut file = FileIndex::new(doc());

    assert!(file.rebuild("function foo(", &parser).is_err());
    assert!(file.diagnostic().is_some());

    file.rebuild("function bar() end", &parser).unwrap();
    assert!(file.diagnostic().is_none());
    assert!(!file.is_dirty());
    assert_eq!(file.symbols()[0].name.as_ref(), "bar");
}

#[test]
fn redeclared_name_keeps_both_in_order_but_later_wins_by_name() {
    let source = "function dup() end\nfunction dup() end";
    let parser = FixtureParser::new().with(
        source,
        tree(vec![function_decl("dup", 0), function_decl("dup", 1)]),
    );
    let mut file = FileIndex::new(doc());
    file.rebuild(source, &parser).unwrap();

    assert_eq!(file.symbols().len(), 2);
    assert_eq!(file.symbols()[0].span, decl_span("dup", 0));
    assert_eq!(file.symbols()[1].span, decl_span("dup", 1));

    let by_name = file.symbol("dup").unwrap();
    assert_eq!(by_name.span, decl_span("dup", 1));
}

#[test]
fn find_occurrence_is_inclusive_at_the_end_column() {
    let source = "print(x)";
    let parser = FixtureParser::new().with(
        source,
        tree(vec![call_stmt(ident("print", 0, 0), vec![ident("x", 0, 6)], 0)]),
    );
    let mut file = FileIndex::new(doc());
    file.rebuild(source, &parser).unwrap();

    // "print" spans columns 0..=4; column 4 is inside
    let hit = file.find_occurrence(Position::new(0, 4)).unwrap();
    assert_eq!(hit.name.as_ref(), "print");

    // column 5 is past the end
    let miss = file.find_occurrence(Position::new(0, 5));
    assert!(miss.is_none() || miss.unwrap().name.as_ref() != "print");
}

#[test]
fn find_occurrence_returns_first_in_traversal_order() {
    // Two occurrences with identical spans; the first-walked one wins.
    let source = "twin twin";
    let parser = FixtureParser::new().with(
        source,
        tree(vec![ident("first", 0, 0), ident("second", 0, 0)]),
    );
    let mut file = FileIndex::new(doc());
    file.rebuild(source, &parser).unwrap();

    let hit = file.find_occurrence(Position::new(0, 0)).unwrap();
    assert_eq!(hit.name.as_ref(), "first");
}
