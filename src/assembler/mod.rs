//! Assembly of typed trees from decoded acorn documents.
//!
//! [`parse_node`] is the single recursive entry point: it reads the `type` tag of a
//! [`TreeView`] and builds the matching [`Node`] variant, recursing depth-first into
//! children in document order. [`parse_program`] is the sequential top-level entry point,
//! and [`concurrent::parse_program_concurrently`] assembles top-level statements on
//! worker threads.

pub mod concurrent;
mod error;
mod nodes;

pub use concurrent::parse_program_concurrently;
pub use error::ParseError;

use crate::ast::*;
use crate::config::Config;
use crate::tree::TreeView;
use serde_json::Value;

/// Assemble a `Program` on the calling thread
pub fn parse_program(view: TreeView<'_>) -> Result<Located<Program>, ParseError> {
    check_program_kind(view)?;
    let position = position(view, "Program")?;
    let body = node_list(view, "Program", "body")?;

    crate::debug_println!(
        "assembled Program {}..{} with {} top-level statements",
        position.start,
        position.end,
        body.len()
    );

    Ok(Located::new(Program { body }, position))
}

/// Assemble a `Program` with the strategy selected by `config`
pub fn assemble(view: TreeView<'_>, config: &Config) -> Result<Located<Program>, ParseError> {
    if config.concurrent {
        parse_program_concurrently(view, config)
    } else {
        parse_program(view)
    }
}

/// Build whichever node the view's `type` tag names
pub fn parse_node(view: TreeView<'_>) -> Result<LocatedNode, ParseError> {
    let tag = view
        .tag()
        .ok_or_else(|| ParseError::malformed("<unknown>", "type"))?;

    let node = match tag {
        "Program" => Node::Program(Program {
            body: node_list(view, tag, "body")?,
        }),
        "Identifier" => Node::Identifier(nodes::identifier(view)?),
        "Literal" => Node::Literal(nodes::literal(view)?),
        "BinaryExpression" => Node::BinaryExpression(nodes::binary_expression(view)?),
        "UpdateExpression" => Node::UpdateExpression(nodes::update_expression(view)?),
        "ExpressionStatement" => Node::ExpressionStatement(nodes::expression_statement(view)?),
        "BlockStatement" => Node::BlockStatement(nodes::block_statement(view)?),
        "ReturnStatement" => Node::ReturnStatement(nodes::return_statement(view)?),
        "ForStatement" => Node::ForStatement(nodes::for_statement(view)?),
        "VariableDeclarator" => Node::VariableDeclarator(nodes::variable_declarator(view)?),
        "VariableDeclaration" => Node::VariableDeclaration(nodes::variable_declaration(view)?),
        "FunctionDeclaration" => Node::FunctionDeclaration(nodes::function_declaration(view)?),
        "ImportSpecifier" => Node::ImportSpecifier(nodes::import_specifier(view)?),
        "ImportDefaultSpecifier" => {
            Node::ImportDefaultSpecifier(nodes::import_default_specifier(view)?)
        }
        "ImportDeclaration" => Node::ImportDeclaration(nodes::import_declaration(view)?),
        "ExportSpecifier" => Node::ExportSpecifier(nodes::export_specifier(view)?),
        "ExportNamedDeclaration" => {
            Node::ExportNamedDeclaration(nodes::export_named_declaration(view)?)
        }
        "ExportDefaultDeclaration" => {
            Node::ExportDefaultDeclaration(nodes::export_default_declaration(view)?)
        }
        other => {
            crate::debug_println!("unknown node kind '{}'", other);
            return Err(ParseError::UnknownNodeKind(other.to_string()));
        }
    };

    Ok(Located::new(node, position(view, tag)?))
}

pub(crate) fn check_program_kind(view: TreeView<'_>) -> Result<(), ParseError> {
    match view.tag() {
        Some("Program") => Ok(()),
        Some(other) => Err(ParseError::unexpected("Program", other)),
        None => Err(ParseError::malformed("Program", "type")),
    }
}

pub(crate) fn position(view: TreeView<'_>, kind: &str) -> Result<Position, ParseError> {
    let start = offset(view, kind, "start")?;
    let end = offset(view, kind, "end")?;
    if end < start {
        return Err(ParseError::malformed(kind, "end"));
    }
    Ok(Position::new(start, end))
}

fn offset(view: TreeView<'_>, kind: &str, field: &str) -> Result<usize, ParseError> {
    view.field(field)
        .and_then(|v| v.as_offset())
        .ok_or_else(|| ParseError::malformed(kind, field))
}

fn required<'a>(view: TreeView<'a>, kind: &str, field: &str) -> Result<TreeView<'a>, ParseError> {
    view.field(field)
        .ok_or_else(|| ParseError::malformed(kind, field))
}

fn string_field(view: TreeView<'_>, kind: &str, field: &str) -> Result<String, ParseError> {
    required(view, kind, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParseError::malformed(kind, field))
}

fn bool_field(view: TreeView<'_>, kind: &str, field: &str) -> Result<bool, ParseError> {
    required(view, kind, field)?
        .as_bool()
        .ok_or_else(|| ParseError::malformed(kind, field))
}

fn child(view: TreeView<'_>, kind: &str, field: &str) -> Result<Box<LocatedNode>, ParseError> {
    parse_node(required(view, kind, field)?).map(Box::new)
}

fn optional_child(view: TreeView<'_>, field: &str) -> Result<Option<Box<LocatedNode>>, ParseError> {
    view.field(field)
        .map(|child| parse_node(child).map(Box::new))
        .transpose()
}

/// The elements of an array field. An absent entry (`null`) anywhere in the array makes
/// the whole field malformed, so iteration up to the first absent index sees every element.
pub(crate) fn dense_elements<'a>(
    view: TreeView<'a>,
    kind: &str,
    field: &str,
) -> Result<&'a [Value], ParseError> {
    let list = required(view, kind, field)?;
    let elements = list
        .elements()
        .ok_or_else(|| ParseError::malformed(kind, field))?;
    if list.children().count() < elements.len() {
        crate::debug_println!("{}.{} has an absent element", kind, field);
        return Err(ParseError::malformed(kind, field));
    }
    Ok(elements)
}

/// Parse every element of an array field, in order, stopping at the first absent index
fn node_list(view: TreeView<'_>, kind: &str, field: &str) -> Result<Vec<LocatedNode>, ParseError> {
    dense_elements(view, kind, field)?;
    required(view, kind, field)?
        .children()
        .map(parse_node)
        .collect()
}

/// Narrow a parsed node to the one variant its slot accepts
fn narrow<T>(
    located: LocatedNode,
    expected: &str,
    pick: impl FnOnce(Node) -> Result<T, Node>,
) -> Result<Located<T>, ParseError> {
    let Located { node, position } = located;
    match pick(node) {
        Ok(inner) => Ok(Located::new(inner, position)),
        Err(other) => Err(ParseError::unexpected(expected, other.kind())),
    }
}
