//! Expression node definitions
//!
//! Identifiers, literals and the operator expressions.

use super::LocatedNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
}

/// A literal keeps its value as text (`1`, `m`, `true`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub left: Box<LocatedNode>,
    pub operator: String,
    pub right: Box<LocatedNode>,
}

/// `++i` / `i--`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Box<LocatedNode>,
}
