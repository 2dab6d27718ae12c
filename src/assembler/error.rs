//! Errors produced while assembling a typed tree

use std::fmt;

/// Errors that can occur while assembling a typed tree from a decoded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The `type` tag is not one of the supported node kinds
    UnknownNodeKind(String),
    /// A slot that only accepts one kind of node received another
    UnexpectedKind { expected: String, got: String },
    /// A required field is missing or has the wrong shape
    MalformedNode { kind: String, field: String },
    /// A concurrent assembly did not finish before its deadline
    Timeout,
}

impl ParseError {
    pub(crate) fn unexpected(expected: impl Into<String>, got: impl Into<String>) -> Self {
        ParseError::UnexpectedKind {
            expected: expected.into(),
            got: got.into(),
        }
    }

    pub(crate) fn malformed(kind: impl Into<String>, field: impl Into<String>) -> Self {
        ParseError::MalformedNode {
            kind: kind.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownNodeKind(tag) => write!(f, "Can't parse node of type '{}'", tag),
            ParseError::UnexpectedKind { expected, got } => {
                write!(f, "Expected {}, got {}", expected, got)
            }
            ParseError::MalformedNode { kind, field } => {
                write!(f, "{} has a missing or malformed '{}' field", kind, field)
            }
            ParseError::Timeout => {
                write!(f, "Concurrent assembly did not finish before its deadline")
            }
        }
    }
}

impl std::error::Error for ParseError {}
