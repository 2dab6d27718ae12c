//! Crate-wide error type for jstree
//!
//! Assembly failures ([`ParseError`](crate::assembler::ParseError)), JSON decoding
//! failures and I/O failures all convert into [`JsTreeError`], which carries a kind,
//! a message and optional context for user-facing reporting.

mod conversions;

use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            note: None,
            help: None,
        }
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Main error type for jstree
#[derive(Debug, Clone)]
pub struct JsTreeError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl JsTreeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Assembly errors
    UnknownNodeKind,
    UnexpectedKind,
    MalformedNode,
    Timeout,

    // Input errors
    InvalidJson,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownNodeKind => "unknown node kind",
            ErrorKind::UnexpectedKind => "unexpected node kind",
            ErrorKind::MalformedNode => "malformed node",
            ErrorKind::Timeout => "timeout",
            ErrorKind::InvalidJson => "invalid JSON",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JsTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for JsTreeError {}

/// Terminal rendering of an error, optionally colored and prefixed with the input name
pub struct ErrorFormatter<'a> {
    error: &'a JsTreeError,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a JsTreeError) -> Self {
        Self {
            error,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(filename) = self.filename {
            output.push_str(&self.paint(filename.to_string(), |s| s.bold()));
            output.push_str(": ");
        }

        let error_label = self.paint(self.error.kind.to_string(), |s| s.red().bold());
        output.push_str(&format!("{}: {}", error_label, self.error.message));

        if let Some(note) = &self.error.context.note {
            let note_label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn paint(&self, text: String, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_color {
            style(&text).to_string()
        } else {
            text
        }
    }
}

/// Result type for jstree operations
pub type Result<T> = std::result::Result<T, JsTreeError>;
