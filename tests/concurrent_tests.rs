//! Order-preserving concurrent assembly

mod common;

use common::{expression_statement, ident, load_fixture, node, program, wide_program};
use jstree::{
    assemble, parse_program, parse_program_concurrently, Config, Node, ParseError, TreeView,
};
use serde_json::{json, Value};
use std::time::Duration;

#[test]
fn test_fixtures_match_sequential_assembly() {
    for fixture in [
        "three_statements.json",
        "import_export.json",
        "for_loop.json",
    ] {
        let document = load_fixture(fixture);
        let view = TreeView::new(&document);

        let sequential = parse_program(view).expect("sequential assembly should succeed");
        let concurrent = parse_program_concurrently(view, &Config::default())
            .expect("concurrent assembly should succeed");

        assert_eq!(sequential, concurrent, "mismatch for {}", fixture);
    }
}

#[test]
fn test_wide_program_keeps_document_order() {
    let document = wide_program(300);
    let view = TreeView::new(&document);

    let concurrent = parse_program_concurrently(view, &Config::default()).unwrap();
    let sequential = parse_program(view).unwrap();
    assert_eq!(concurrent, sequential);

    // Every third statement declares v0, v3, v6, ... in order
    let declared: Vec<String> = concurrent
        .node
        .body
        .iter()
        .filter_map(|statement| match &statement.node {
            Node::VariableDeclaration(decl) => match &decl.declarations.head.node.id.node {
                Node::Identifier(identifier) => Some(identifier.name.clone()),
                _ => None,
            },
            _ => None,
        })
        .collect();
    let expected: Vec<String> = (0..300).step_by(3).map(|i| format!("v{}", i)).collect();
    assert_eq!(declared, expected);
}

#[test]
fn test_repeated_runs_are_stable() {
    let document = wide_program(64);
    let view = TreeView::new(&document);
    let reference = parse_program(view).unwrap();

    for _ in 0..20 {
        assert_eq!(
            parse_program_concurrently(view, &Config::default()).unwrap(),
            reference
        );
    }
}

#[test]
fn test_task_failure_is_returned_not_fatal() {
    let mut body: Vec<_> = (0..32).map(|_| expression_statement(ident("ok"))).collect();
    body[17] = expression_statement(node("YieldExpression", 0, 5, json!({})));
    let document = program(body);

    let result = parse_program_concurrently(TreeView::new(&document), &Config::default());
    assert_eq!(
        result,
        Err(ParseError::UnknownNodeKind("YieldExpression".to_string()))
    );
}

#[test]
fn test_one_of_several_failures_is_reported() {
    let mut body: Vec<_> = (0..16).map(|_| expression_statement(ident("ok"))).collect();
    body[2] = node("ClassDeclaration", 0, 5, json!({}));
    body[11] = node("WhileStatement", 0, 5, json!({}));
    let document = program(body);

    let error = parse_program_concurrently(TreeView::new(&document), &Config::default())
        .expect_err("assembly must fail");
    assert!(
        error == ParseError::UnknownNodeKind("ClassDeclaration".to_string())
            || error == ParseError::UnknownNodeKind("WhileStatement".to_string()),
        "unexpected error: {:?}",
        error
    );
}

#[test]
fn test_root_kind_checked_before_spawning() {
    let document = node("BlockStatement", 0, 2, json!({ "body": [] }));

    assert_eq!(
        parse_program_concurrently(TreeView::new(&document), &Config::default()),
        Err(ParseError::UnexpectedKind {
            expected: "Program".to_string(),
            got: "BlockStatement".to_string(),
        })
    );
}

#[test]
fn test_assemble_dispatches_on_config() {
    let document = load_fixture("three_statements.json");
    let view = TreeView::new(&document);

    let sequential = assemble(view, &Config::default()).unwrap();
    let concurrent = assemble(
        view,
        &Config::default()
            .concurrent()
            .with_deadline(Duration::from_secs(30)),
    )
    .unwrap();

    assert_eq!(sequential, concurrent);
}

#[test]
fn test_absent_statement_rejected_by_both_strategies() {
    // Everything after the hole, including the unsupported WhileStatement, must not vanish
    let document = program(vec![
        expression_statement(ident("a")),
        Value::Null,
        node("WhileStatement", 0, 10, json!({})),
    ]);
    let view = TreeView::new(&document);

    let sequential = parse_program(view);
    let concurrent = parse_program_concurrently(view, &Config::default());

    assert_eq!(
        sequential,
        Err(ParseError::MalformedNode {
            kind: "Program".to_string(),
            field: "body".to_string(),
        })
    );
    assert_eq!(sequential, concurrent);
}

#[test]
fn test_elapsed_deadline_times_out_through_assemble() {
    let document = wide_program(12);
    let config = Config::default()
        .concurrent()
        .with_deadline(Duration::ZERO);

    assert_eq!(
        assemble(TreeView::new(&document), &config),
        Err(ParseError::Timeout)
    );
}
