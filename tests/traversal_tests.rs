//! Pre-order traversal over assembled fixtures

mod common;

use common::load_fixture;
use jstree::{dump, parse_program, NodeExt, NodeRef, TreeView};

fn pre_order(fixture: &str) -> Vec<String> {
    let document = load_fixture(fixture);
    let program = parse_program(TreeView::new(&document)).expect("fixture should assemble");

    let mut visited = Vec::new();
    let _ = program.walk(&mut |node| {
        visited.push(match node.node.identifier_name() {
            Some(name) => format!("Identifier:{}", name),
            None => node.node.kind().to_string(),
        });
        Ok::<(), ()>(())
    });
    visited
}

#[test]
fn test_three_statements_pre_order() {
    assert_eq!(
        pre_order("three_statements.json"),
        vec![
            "Program",
            "VariableDeclaration",
            "VariableDeclarator",
            "Identifier:x",
            "Literal",
            "VariableDeclaration",
            "VariableDeclarator",
            "Identifier:y",
            "Literal",
            "FunctionDeclaration",
            "Identifier:f",
            "BlockStatement",
            "ReturnStatement",
            "BinaryExpression",
            "Identifier:x",
            "Identifier:y",
        ]
    );
}

#[test]
fn test_import_export_visits_narrowed_slots() {
    // Specifier identifiers and the import source are narrowed slots, not `Node`s
    assert_eq!(
        pre_order("import_export.json"),
        vec![
            "Program",
            "ImportDeclaration",
            "ImportDefaultSpecifier",
            "Identifier:d",
            "ImportSpecifier",
            "Identifier:a",
            "Identifier:b",
            "Literal",
            "ExportNamedDeclaration",
            "ExportSpecifier",
            "Identifier:b",
            "Identifier:c",
            "ExportDefaultDeclaration",
            "Identifier:d",
        ]
    );
}

#[test]
fn test_node_count_matches_dump_lines() {
    // Every node of this fixture prints exactly one line
    let document = load_fixture("three_statements.json");
    let program = parse_program(TreeView::new(&document)).unwrap();

    assert_eq!(program.count_nodes(), dump(&program).lines().count());
}

#[test]
fn test_find_nodes_keeps_positions() {
    let document = load_fixture("for_loop.json");
    let program = parse_program(TreeView::new(&document)).unwrap();

    let loops = program.find_nodes(|node| matches!(node.node, NodeRef::ForStatement(_)));
    assert_eq!(loops.len(), 1);
    assert!(loops[0].position.start < loops[0].position.end);
    assert!(loops[0].position.end <= program.position.end);
}
