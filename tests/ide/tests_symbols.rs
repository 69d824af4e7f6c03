//! Document and workspace symbol listing through the AnalysisHost.

use crate::helpers::ast_fixtures::*;
use crate::helpers::parser_fixtures::{FixtureParser, empty_parser};

use lunora::Position;
use lunora::ide::AnalysisHost;
use lunora::index::{SymbolKind, resolve};

#[test]
fn empty_file_yields_empty_results_not_failures() {
    let mut host = AnalysisHost::new(empty_parser());
    host.open_document("empty.lua", "");

    assert!(host.list_symbols("empty.lua").is_empty());
    assert!(host.find_definition("empty.lua", Position::new(0, 0)).is_empty());
}

#[test]
fn unknown_document_yields_empty_results_not_failures() {
    let mut host = AnalysisHost::new(empty_parser());

    assert!(host.list_symbols("never-seen.lua").is_empty());
    assert!(host.find_definition("never-seen.lua", Position::new(3, 3)).is_empty());
}

#[test]
fn declared_function_round_trips_through_listing_and_resolution() {
    // `function foo() end` on line 3 (0-based)
    let source = "\n\n\nfunction foo() end";
    let parser = FixtureParser::new().with(source, tree(vec![function_decl("foo", 3)]));
    let mut host = AnalysisHost::new(parser);
    host.open_document("test.lua", source);

    let symbols = host.list_symbols("test.lua");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name.as_ref(), "foo");
    assert_eq!(symbols[0].kind, SymbolKind::Function);
    assert_eq!(symbols[0].span, decl_span("foo", 3));

    let targets = resolve(host.workspace(), "foo");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].span, symbols[0].span);
}

#[test]
fn outline_lists_redeclarations_in_traversal_order() {
    let source = "function dup() end\nfunction dup() end";
    let parser = FixtureParser::new().with(
        source,
        tree(vec![function_decl("dup", 0), function_decl("dup", 1)]),
    );
    let mut host = AnalysisHost::new(parser);
    host.open_document("test.lua", source);

    let symbols = host.list_symbols("test.lua");

    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].span, decl_span("dup", 0));
    assert_eq!(symbols[1].span, decl_span("dup", 1));
}

#[test]
fn workspace_symbols_filters_case_insensitively_and_sorts_by_name() {
    let a = "function setup() end";
    let b = "function teardown() end\nfunction reset() end";
    let parser = FixtureParser::new()
        .with(a, tree(vec![function_decl("setup", 0)]))
        .with(
            b,
            tree(vec![function_decl("teardown", 0), function_decl("reset", 1)]),
        );
    let mut host = AnalysisHost::new(parser);
    host.open_document("a.lua", a);
    host.open_document("b.lua", b);

    let all = host.workspace_symbols(None);
    let names: Vec<&str> = all.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, ["reset", "setup", "teardown"]);

    let filtered = host.workspace_symbols(Some("SET"));
    let names: Vec<&str> = filtered.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, ["reset", "setup"]);
}

#[test]
fn stale_symbols_are_served_while_content_fails_to_parse() {
    let good = "function keep() end";
    let parser = FixtureParser::new().with(good, tree(vec![function_decl("keep", 0)]));
    let mut host = AnalysisHost::new(parser);
    host.open_document("test.lua", good);
    assert_eq!(host.list_symbols("test.lua").len(), 1);

    // Malformed edit: the fixture parser rejects unregistered text
    host.change_document("test.lua", "function keep(");

    let symbols = host.list_symbols("test.lua");
    assert_eq!(symbols.len(), 1, "previous parse still visible");
    assert_eq!(symbols[0].name.as_ref(), "keep");
    assert!(host.diagnostic("test.lua").is_some());

    // A good edit recovers
    host.change_document("test.lua", good);
    host.list_symbols("test.lua");
    assert!(host.diagnostic("test.lua").is_none());
}
