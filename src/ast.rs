//! Typed ESTree AST definitions
//!
//! This module contains the closed set of node variants produced by the assemblers,
//! together with the [`Located`] wrapper that attaches a source [`Position`] to every node.
//! Children are owned exclusively through `Box` and `Vec`; a built tree is never mutated.

mod expr;
mod modules;
mod program;
mod stmt;
mod traversal;

pub use expr::*;
pub use modules::*;
pub use program::*;
pub use stmt::*;
pub use traversal::*;

use serde::Serialize;

/// Offset range of a node in the JavaScript source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A wrapper for AST nodes that includes source position information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Located<T> {
    pub node: T,
    pub position: Position,
}

impl<T> Located<T> {
    pub fn new(node: T, position: Position) -> Self {
        Self { node, position }
    }

    /// Replace the payload, keeping the position
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            node: f(self.node),
            position: self.position,
        }
    }
}

/// Type alias for located nodes
pub type LocatedNode = Located<Node>;

/// Every node kind the assemblers understand.
///
/// Serialized with an ESTree-style `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    Identifier(Identifier),
    Literal(Literal),
    BinaryExpression(BinaryExpression),
    UpdateExpression(UpdateExpression),
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    ReturnStatement(ReturnStatement),
    ForStatement(ForStatement),
    VariableDeclarator(VariableDeclarator),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ImportSpecifier(ImportSpecifier),
    ImportDefaultSpecifier(ImportDefaultSpecifier),
    ImportDeclaration(ImportDeclaration),
    ExportSpecifier(ExportSpecifier),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
}

impl Node {
    /// The ESTree `type` tag of this node
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::UpdateExpression(_) => "UpdateExpression",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::BlockStatement(_) => "BlockStatement",
            Node::ReturnStatement(_) => "ReturnStatement",
            Node::ForStatement(_) => "ForStatement",
            Node::VariableDeclarator(_) => "VariableDeclarator",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::ImportSpecifier(_) => "ImportSpecifier",
            Node::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
            Node::ImportDeclaration(_) => "ImportDeclaration",
            Node::ExportSpecifier(_) => "ExportSpecifier",
            Node::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Node::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
        }
    }
}
