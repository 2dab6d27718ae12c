//! Import and export node definitions

use super::{Identifier, Literal, Located, LocatedNode};
use serde::Serialize;

/// `imported as local`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSpecifier {
    pub imported: Located<Identifier>,
    pub local: Located<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDefaultSpecifier {
    pub local: Located<Identifier>,
}

/// The specifier forms accepted inside an import declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ImportClause {
    ImportSpecifier(ImportSpecifier),
    ImportDefaultSpecifier(ImportDefaultSpecifier),
}

impl ImportClause {
    pub fn local(&self) -> &Located<Identifier> {
        match self {
            ImportClause::ImportSpecifier(specifier) => &specifier.local,
            ImportClause::ImportDefaultSpecifier(specifier) => &specifier.local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDeclaration {
    pub specifiers: Vec<Located<ImportClause>>,
    pub source: Located<Literal>,
}

/// `local as exported`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSpecifier {
    pub exported: Located<Identifier>,
    pub local: Located<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportNamedDeclaration {
    pub specifiers: Vec<Located<ExportSpecifier>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDefaultDeclaration {
    pub declaration: Box<LocatedNode>,
}
