//! Structural printer output

mod common;

use common::load_fixture;
use common::snapshot_utils::assert_dump_snapshot;
use jstree::{dump, parse_program, print, Dump, Printer, TreeView};
use std::fmt;

fn rendered_fixture(name: &str) -> String {
    let document = load_fixture(name);
    let program = parse_program(TreeView::new(&document)).expect("fixture should assemble");
    dump(&program)
}

fn depth(line: &str) -> usize {
    let spaces = line.len() - line.trim_start().len();
    assert_eq!(spaces % 2, 0, "odd indentation in {:?}", line);
    spaces / 2
}

#[test]
fn test_three_statements_snapshot() {
    assert_dump_snapshot(
        "three_statements",
        &rendered_fixture("three_statements.json"),
    );
}

#[test]
fn test_import_export_snapshot() {
    assert_dump_snapshot("import_export", &rendered_fixture("import_export.json"));
}

#[test]
fn test_for_loop_snapshot() {
    assert_dump_snapshot("for_loop", &rendered_fixture("for_loop.json"));
}

#[test]
fn test_indentation_grows_from_root_to_leaves() {
    let output = rendered_fixture("three_statements.json");
    let depths: Vec<usize> = output.lines().map(depth).collect();

    assert_eq!(depths[0], 0);
    assert!(depths[1..].iter().all(|&d| d > 0));
    // A child is exactly one level below the line that introduced it
    for pair in depths.windows(2) {
        assert!(pair[1] <= pair[0] + 1, "skipped a level: {:?}", pair);
    }
    // Program > FunctionDeclaration > BlockStatement > ReturnStatement > BinaryExpression > Identifier
    assert_eq!(depths.iter().copied().max(), Some(5));
}

struct Unrecognised;

impl Dump for Unrecognised {}

struct Wrapper {
    inner: Unrecognised,
}

impl Dump for Wrapper {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("Wrapper"));
        printer.child(&self.inner, indent + 1);
    }
}

#[test]
fn test_unrecognised_node_prints_fallback_line() {
    let mut output = String::new();
    print(
        &Wrapper {
            inner: Unrecognised,
        },
        1,
        &mut output,
    );

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "  Wrapper");
    assert!(lines[1].starts_with("    Unknown node: "));
    assert!(lines[1].ends_with("Unrecognised"));
}

#[test]
fn test_print_into_custom_sink() {
    struct LineCounter(usize);

    impl fmt::Write for LineCounter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 += s.matches('\n').count();
            Ok(())
        }
    }

    let document = load_fixture("import_export.json");
    let program = parse_program(TreeView::new(&document)).unwrap();
    let mut counter = LineCounter(0);
    print(&program, 0, &mut counter);

    assert_eq!(counter.0, 9);
}

#[test]
fn test_json_output_uses_estree_tags() {
    let document = load_fixture("three_statements.json");
    let program = parse_program(TreeView::new(&document)).unwrap();
    let value = serde_json::to_value(&program).unwrap();

    assert_eq!(value["node"]["body"][0]["node"]["type"], "VariableDeclaration");
    assert_eq!(value["node"]["body"][0]["node"]["kind"], "var");
    assert_eq!(value["node"]["body"][2]["node"]["type"], "FunctionDeclaration");
    assert_eq!(value["position"]["end"], 54);
}
