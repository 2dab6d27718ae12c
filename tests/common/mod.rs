#![allow(dead_code)]

pub mod snapshot_utils;

use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

/// Load an acorn JSON fixture from tests/fixtures
pub fn load_fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Invalid fixture {}: {}", name, e))
}

/// Build an ESTree node object with the given tag, offsets and extra fields
pub fn node(kind: &str, start: usize, end: usize, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), json!(kind));
    object.insert("start".to_string(), json!(start));
    object.insert("end".to_string(), json!(end));
    if let Value::Object(extra) = fields {
        object.extend(extra);
    }
    Value::Object(object)
}

pub fn program(body: Vec<Value>) -> Value {
    node("Program", 0, 100, json!({ "body": body }))
}

pub fn ident(name: &str) -> Value {
    node("Identifier", 0, name.len(), json!({ "name": name }))
}

pub fn number(value: i64) -> Value {
    let raw = value.to_string();
    node("Literal", 0, raw.len(), json!({ "value": value, "raw": raw }))
}

pub fn declaration(kind: &str, names: &[&str]) -> Value {
    let declarations: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            node(
                "VariableDeclarator",
                0,
                10,
                json!({ "id": ident(name), "init": number(i as i64) }),
            )
        })
        .collect();
    node(
        "VariableDeclaration",
        0,
        20,
        json!({ "kind": kind, "declarations": declarations }),
    )
}

pub fn expression_statement(expression: Value) -> Value {
    node("ExpressionStatement", 0, 10, json!({ "expression": expression }))
}

/// A program with `width` top-level statements of mixed kinds
pub fn wide_program(width: usize) -> Value {
    let body = (0..width)
        .map(|i| match i % 3 {
            0 => declaration("let", &[&format!("v{}", i)]),
            1 => expression_statement(node(
                "BinaryExpression",
                0,
                5,
                json!({ "left": ident(&format!("v{}", i - 1)), "operator": "*", "right": number(i as i64) }),
            )),
            _ => expression_statement(node(
                "UpdateExpression",
                0,
                3,
                json!({ "operator": "--", "prefix": true, "argument": ident(&format!("v{}", i - 2)) }),
            )),
        })
        .collect();
    program(body)
}
