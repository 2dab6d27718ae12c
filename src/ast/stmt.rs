//! Statement and declaration node definitions

use super::{Identifier, Located, LocatedNode};
use nonempty::NonEmpty;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Box<LocatedNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement {
    pub body: Vec<LocatedNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub argument: Option<Box<LocatedNode>>,
}

/// `for (init; test; update) body`; any clause may be missing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStatement {
    pub init: Option<Box<LocatedNode>>,
    pub test: Option<Box<LocatedNode>>,
    pub update: Option<Box<LocatedNode>>,
    pub body: Option<Box<LocatedNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarator {
    pub id: Box<LocatedNode>,
    pub init: Option<Box<LocatedNode>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(VariableKind::Var),
            "let" => Some(VariableKind::Let),
            "const" => Some(VariableKind::Const),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `var`/`let`/`const` declaration always has at least one declarator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: NonEmpty<Located<VariableDeclarator>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    /// Missing for anonymous `export default function () {}`
    pub id: Option<Located<Identifier>>,
    pub generator: bool,
    pub expression: bool,
    pub params: Vec<LocatedNode>,
    pub body: Located<BlockStatement>,
}
