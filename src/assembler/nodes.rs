//! Per-kind builders used by `parse_node`

use super::{
    bool_field, child, narrow, node_list, optional_child, parse_node, required, string_field,
    ParseError,
};
use crate::ast::*;
use crate::tree::TreeView;
use nonempty::NonEmpty;

pub(super) fn identifier(view: TreeView<'_>) -> Result<Identifier, ParseError> {
    Ok(Identifier {
        name: string_field(view, "Identifier", "name")?,
    })
}

/// Strings are kept as-is and numbers/booleans use their canonical text.
/// Anything else (`null`, regex objects) falls back to the `raw` source slice.
pub(super) fn literal(view: TreeView<'_>) -> Result<Literal, ParseError> {
    let value = view
        .field("value")
        .and_then(|v| v.to_text())
        .or_else(|| view.field("raw").and_then(|v| v.as_str()).map(str::to_string))
        .ok_or_else(|| ParseError::malformed("Literal", "value"))?;

    Ok(Literal { value })
}

pub(super) fn binary_expression(view: TreeView<'_>) -> Result<BinaryExpression, ParseError> {
    const KIND: &str = "BinaryExpression";
    Ok(BinaryExpression {
        left: child(view, KIND, "left")?,
        operator: string_field(view, KIND, "operator")?,
        right: child(view, KIND, "right")?,
    })
}

pub(super) fn update_expression(view: TreeView<'_>) -> Result<UpdateExpression, ParseError> {
    const KIND: &str = "UpdateExpression";
    Ok(UpdateExpression {
        operator: string_field(view, KIND, "operator")?,
        prefix: bool_field(view, KIND, "prefix")?,
        argument: child(view, KIND, "argument")?,
    })
}

pub(super) fn expression_statement(view: TreeView<'_>) -> Result<ExpressionStatement, ParseError> {
    Ok(ExpressionStatement {
        expression: child(view, "ExpressionStatement", "expression")?,
    })
}

pub(super) fn block_statement(view: TreeView<'_>) -> Result<BlockStatement, ParseError> {
    Ok(BlockStatement {
        body: node_list(view, "BlockStatement", "body")?,
    })
}

pub(super) fn return_statement(view: TreeView<'_>) -> Result<ReturnStatement, ParseError> {
    Ok(ReturnStatement {
        argument: optional_child(view, "argument")?,
    })
}

pub(super) fn for_statement(view: TreeView<'_>) -> Result<ForStatement, ParseError> {
    Ok(ForStatement {
        init: optional_child(view, "init")?,
        test: optional_child(view, "test")?,
        update: optional_child(view, "update")?,
        body: optional_child(view, "body")?,
    })
}

pub(super) fn variable_declarator(view: TreeView<'_>) -> Result<VariableDeclarator, ParseError> {
    Ok(VariableDeclarator {
        id: child(view, "VariableDeclarator", "id")?,
        init: optional_child(view, "init")?,
    })
}

pub(super) fn variable_declaration(view: TreeView<'_>) -> Result<VariableDeclaration, ParseError> {
    const KIND: &str = "VariableDeclaration";

    let keyword = string_field(view, KIND, "kind")?;
    let kind =
        VariableKind::from_keyword(&keyword).ok_or_else(|| ParseError::malformed(KIND, "kind"))?;

    let declarations = node_list(view, KIND, "declarations")?
        .into_iter()
        .map(|node| {
            narrow(node, "VariableDeclarator", |node| match node {
                Node::VariableDeclarator(declarator) => Ok(declarator),
                other => Err(other),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let declarations = NonEmpty::from_vec(declarations)
        .ok_or_else(|| ParseError::malformed(KIND, "declarations"))?;

    Ok(VariableDeclaration { kind, declarations })
}

pub(super) fn function_declaration(view: TreeView<'_>) -> Result<FunctionDeclaration, ParseError> {
    const KIND: &str = "FunctionDeclaration";

    let id = view.field("id").map(identifier_slot).transpose()?;
    let params = match view.field("params") {
        Some(_) => node_list(view, KIND, "params")?,
        None => Vec::new(),
    };
    let body = narrow(parse_node(required(view, KIND, "body")?)?, "BlockStatement", |node| {
        match node {
            Node::BlockStatement(block) => Ok(block),
            other => Err(other),
        }
    })?;

    Ok(FunctionDeclaration {
        id,
        generator: bool_field(view, KIND, "generator")?,
        expression: bool_field(view, KIND, "expression")?,
        params,
        body,
    })
}

pub(super) fn import_specifier(view: TreeView<'_>) -> Result<ImportSpecifier, ParseError> {
    const KIND: &str = "ImportSpecifier";
    Ok(ImportSpecifier {
        imported: identifier_slot(required(view, KIND, "imported")?)?,
        local: identifier_slot(required(view, KIND, "local")?)?,
    })
}

pub(super) fn import_default_specifier(
    view: TreeView<'_>,
) -> Result<ImportDefaultSpecifier, ParseError> {
    Ok(ImportDefaultSpecifier {
        local: identifier_slot(required(view, "ImportDefaultSpecifier", "local")?)?,
    })
}

pub(super) fn import_declaration(view: TreeView<'_>) -> Result<ImportDeclaration, ParseError> {
    const KIND: &str = "ImportDeclaration";

    let source = narrow(parse_node(required(view, KIND, "source")?)?, "Literal", |node| {
        match node {
            Node::Literal(literal) => Ok(literal),
            other => Err(other),
        }
    })?;

    let specifiers = node_list(view, KIND, "specifiers")?
        .into_iter()
        .map(|node| {
            narrow(node, "ImportSpecifier or ImportDefaultSpecifier", |node| match node {
                Node::ImportSpecifier(specifier) => Ok(ImportClause::ImportSpecifier(specifier)),
                Node::ImportDefaultSpecifier(specifier) => {
                    Ok(ImportClause::ImportDefaultSpecifier(specifier))
                }
                other => Err(other),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ImportDeclaration { specifiers, source })
}

pub(super) fn export_specifier(view: TreeView<'_>) -> Result<ExportSpecifier, ParseError> {
    const KIND: &str = "ExportSpecifier";
    Ok(ExportSpecifier {
        exported: identifier_slot(required(view, KIND, "exported")?)?,
        local: identifier_slot(required(view, KIND, "local")?)?,
    })
}

pub(super) fn export_named_declaration(
    view: TreeView<'_>,
) -> Result<ExportNamedDeclaration, ParseError> {
    let specifiers = node_list(view, "ExportNamedDeclaration", "specifiers")?
        .into_iter()
        .map(|node| {
            narrow(node, "ExportSpecifier", |node| match node {
                Node::ExportSpecifier(specifier) => Ok(specifier),
                other => Err(other),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExportNamedDeclaration { specifiers })
}

pub(super) fn export_default_declaration(
    view: TreeView<'_>,
) -> Result<ExportDefaultDeclaration, ParseError> {
    Ok(ExportDefaultDeclaration {
        declaration: child(view, "ExportDefaultDeclaration", "declaration")?,
    })
}

fn identifier_slot(view: TreeView<'_>) -> Result<Located<Identifier>, ParseError> {
    narrow(parse_node(view)?, "Identifier", |node| match node {
        Node::Identifier(identifier) => Ok(identifier),
        other => Err(other),
    })
}

