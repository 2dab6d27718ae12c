pub mod assembler;
pub mod ast;
pub mod config;
pub mod debug;
pub mod error;
pub mod printer;
pub mod tree;

pub use assembler::{assemble, parse_node, parse_program, parse_program_concurrently, ParseError};
pub use ast::*;
pub use config::*;
pub use error::{ErrorFormatter, ErrorKind, JsTreeError};
pub use printer::{dump, print, Dump, Printer};
pub use tree::TreeView;
