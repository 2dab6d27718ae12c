//! Conversions from module-level failures into JsTreeError

use super::{ErrorKind, JsTreeError};
use crate::assembler::ParseError;

const SUPPORTED_KINDS: &str = "Program, Identifier, Literal, BinaryExpression, \
UpdateExpression, ExpressionStatement, BlockStatement, ReturnStatement, ForStatement, \
VariableDeclarator, VariableDeclaration, FunctionDeclaration, ImportSpecifier, \
ImportDefaultSpecifier, ImportDeclaration, ExportSpecifier, ExportNamedDeclaration, \
ExportDefaultDeclaration";

/// Convert ParseError to JsTreeError
impl From<ParseError> for JsTreeError {
    fn from(err: ParseError) -> Self {
        let message = err.to_string();
        match err {
            ParseError::UnknownNodeKind(_) => JsTreeError::new(ErrorKind::UnknownNodeKind, message)
                .with_note(format!("supported kinds are {}", SUPPORTED_KINDS)),
            ParseError::UnexpectedKind { .. } => {
                JsTreeError::new(ErrorKind::UnexpectedKind, message)
            }
            ParseError::MalformedNode { .. } => JsTreeError::new(ErrorKind::MalformedNode, message)
                .with_help("the input should be the JSON output of `acorn --ecma6 --module`"),
            ParseError::Timeout => JsTreeError::new(ErrorKind::Timeout, message)
                .with_help("raise the deadline or assemble sequentially"),
        }
    }
}

impl From<serde_json::Error> for JsTreeError {
    fn from(err: serde_json::Error) -> Self {
        JsTreeError::new(ErrorKind::InvalidJson, err.to_string())
    }
}

impl From<std::io::Error> for JsTreeError {
    fn from(err: std::io::Error) -> Self {
        JsTreeError::new(ErrorKind::IoError, err.to_string())
    }
}
