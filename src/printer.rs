//! Indented structural dump of typed trees.
//!
//! Each node prints one line (two spaces per indent level, a label, and any leaf values
//! inline) and then its children one level deeper. Printing never fails: sink errors are
//! swallowed, and a type that opts into [`Dump`] without rendering itself prints a
//! fallback line instead.

use crate::ast::*;
use std::fmt;

/// Line-oriented writer over an injectable text sink
pub struct Printer<'w> {
    sink: &'w mut dyn fmt::Write,
}

impl<'w> Printer<'w> {
    pub fn new(sink: &'w mut dyn fmt::Write) -> Self {
        Self { sink }
    }

    /// Write one line at the given depth
    pub fn line(&mut self, indent: usize, text: fmt::Arguments<'_>) {
        let _ = writeln!(self.sink, "{:width$}{}", "", text, width = indent * 2);
    }

    pub fn child<T: Dump + ?Sized>(&mut self, node: &T, indent: usize) {
        node.dump(self, indent);
    }

    pub fn children<'n, T: Dump + 'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n T>,
        indent: usize,
    ) {
        for node in nodes {
            node.dump(self, indent);
        }
    }
}

/// Anything the structural printer can render
pub trait Dump {
    /// Print this node at `indent` and its children below it.
    ///
    /// The default prints a diagnostic line naming the type.
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(
            indent,
            format_args!("Unknown node: {}", std::any::type_name::<Self>()),
        );
    }
}

/// Print `node` into `sink`, starting at `indent`
pub fn print(node: &dyn Dump, indent: usize, sink: &mut dyn fmt::Write) {
    let mut printer = Printer::new(sink);
    node.dump(&mut printer, indent);
}

/// Render `node` from indent level 0 into a fresh string
pub fn dump(node: &dyn Dump) -> String {
    let mut output = String::new();
    print(node, 0, &mut output);
    output
}

impl<T: Dump> Dump for Located<T> {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        self.node.dump(printer, indent);
    }
}

impl<T: Dump + ?Sized> Dump for Box<T> {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        (**self).dump(printer, indent);
    }
}

impl Dump for Node {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        match self {
            Node::Program(node) => node.dump(printer, indent),
            Node::Identifier(node) => node.dump(printer, indent),
            Node::Literal(node) => node.dump(printer, indent),
            Node::BinaryExpression(node) => node.dump(printer, indent),
            Node::UpdateExpression(node) => node.dump(printer, indent),
            Node::ExpressionStatement(node) => node.dump(printer, indent),
            Node::BlockStatement(node) => node.dump(printer, indent),
            Node::ReturnStatement(node) => node.dump(printer, indent),
            Node::ForStatement(node) => node.dump(printer, indent),
            Node::VariableDeclarator(node) => node.dump(printer, indent),
            Node::VariableDeclaration(node) => node.dump(printer, indent),
            Node::FunctionDeclaration(node) => node.dump(printer, indent),
            Node::ImportSpecifier(node) => node.dump(printer, indent),
            Node::ImportDefaultSpecifier(node) => node.dump(printer, indent),
            Node::ImportDeclaration(node) => node.dump(printer, indent),
            Node::ExportSpecifier(node) => node.dump(printer, indent),
            Node::ExportNamedDeclaration(node) => node.dump(printer, indent),
            Node::ExportDefaultDeclaration(node) => node.dump(printer, indent),
        }
    }
}

impl Dump for Program {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("Program"));
        printer.children(&self.body, indent + 1);
    }
}

impl Dump for Identifier {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("Identifier '{}'", self.name));
    }
}

impl Dump for Literal {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("Literal '{}'", self.value));
    }
}

impl Dump for BinaryExpression {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("BinaryExpression '{}'", self.operator));
        printer.child(&self.left, indent + 1);
        printer.child(&self.right, indent + 1);
    }
}

impl Dump for UpdateExpression {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        let fixity = if self.prefix { "prefix" } else { "postfix" };
        printer.line(
            indent,
            format_args!("UpdateExpression '{}' {}", self.operator, fixity),
        );
        printer.child(&self.argument, indent + 1);
    }
}

impl Dump for ExpressionStatement {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ExpressionStatement"));
        printer.child(&self.expression, indent + 1);
    }
}

impl Dump for BlockStatement {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("BlockStatement"));
        printer.children(&self.body, indent + 1);
    }
}

impl Dump for ReturnStatement {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ReturnStatement"));
        printer.children(&self.argument, indent + 1);
    }
}

impl Dump for ForStatement {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ForStatement"));
        let clauses = [&self.init, &self.test, &self.update, &self.body];
        for clause in clauses.into_iter().flatten() {
            printer.child(clause, indent + 1);
        }
    }
}

impl Dump for VariableDeclarator {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("VariableDeclarator"));
        printer.child(&self.id, indent + 1);
        printer.children(&self.init, indent + 1);
    }
}

impl Dump for VariableDeclaration {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("VariableDeclaration {}", self.kind));
        printer.children(self.declarations.iter(), indent + 1);
    }
}

impl Dump for FunctionDeclaration {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        let mut label = String::from("FunctionDeclaration");
        if self.generator {
            label.push_str(" generator");
        }
        if self.expression {
            label.push_str(" expression");
        }
        printer.line(indent, format_args!("{}", label));
        printer.children(&self.id, indent + 1);
        printer.children(&self.params, indent + 1);
        printer.child(&self.body, indent + 1);
    }
}

impl Dump for ImportSpecifier {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(
            indent,
            format_args!(
                "ImportSpecifier local:{} imported:{}",
                self.local.node.name, self.imported.node.name
            ),
        );
    }
}

impl Dump for ImportDefaultSpecifier {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ImportDefaultSpecifier"));
        printer.child(&self.local, indent + 1);
    }
}

impl Dump for ImportClause {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        match self {
            ImportClause::ImportSpecifier(specifier) => specifier.dump(printer, indent),
            ImportClause::ImportDefaultSpecifier(specifier) => specifier.dump(printer, indent),
        }
    }
}

impl Dump for ImportDeclaration {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(
            indent,
            format_args!("ImportDeclaration '{}'", self.source.node.value),
        );
        printer.children(&self.specifiers, indent + 1);
    }
}

impl Dump for ExportSpecifier {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(
            indent,
            format_args!(
                "ExportSpecifier local:{} exported:{}",
                self.local.node.name, self.exported.node.name
            ),
        );
    }
}

impl Dump for ExportNamedDeclaration {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ExportNamedDeclaration"));
        printer.children(&self.specifiers, indent + 1);
    }
}

impl Dump for ExportDefaultDeclaration {
    fn dump(&self, printer: &mut Printer<'_>, indent: usize) {
        printer.line(indent, format_args!("ExportDefaultDeclaration"));
        printer.child(&self.declaration, indent + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Located<Identifier> {
        Located::new(
            Identifier {
                name: name.to_string(),
            },
            Position::new(0, name.len()),
        )
    }

    #[test]
    fn test_indent_is_two_spaces_per_level() {
        let mut output = String::new();
        print(&ident("x"), 3, &mut output);

        assert_eq!(output, "      Identifier 'x'\n");
    }

    #[test]
    fn test_absent_for_clauses_print_nothing() {
        let update = Located::new(
            Node::UpdateExpression(UpdateExpression {
                operator: "++".to_string(),
                prefix: false,
                argument: Box::new(ident("i").map(Node::Identifier)),
            }),
            Position::new(0, 3),
        );
        let statement = ForStatement {
            init: None,
            test: None,
            update: Some(Box::new(update)),
            body: None,
        };

        assert_eq!(
            dump(&statement),
            "ForStatement\n  UpdateExpression '++' postfix\n    Identifier 'i'\n"
        );
    }

    struct Opaque;
    impl Dump for Opaque {}

    #[test]
    fn test_unrendered_type_prints_fallback() {
        let output = dump(&Opaque);

        assert!(output.starts_with("Unknown node: "));
        assert!(output.trim_end().ends_with("Opaque"));
    }

    struct FailingSink;
    impl fmt::Write for FailingSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_sink_errors_are_ignored() {
        let program = Program {
            body: vec![ident("a").map(Node::Identifier)],
        };
        print(&program, 0, &mut FailingSink);
    }
}
