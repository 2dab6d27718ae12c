//! Read-only traversal over assembled trees.
//!
//! Slots that were narrowed during assembly hold concrete structs (`Located<Identifier>`,
//! `Located<BlockStatement>`, ...) rather than [`Node`], so walkers see every node through
//! the borrowed [`NodeRef`] view. Children are always visited in document order.

use super::*;
use std::convert::Infallible;

/// Borrowed view of any node in a tree, whatever slot it sits in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
    BinaryExpression(&'a BinaryExpression),
    UpdateExpression(&'a UpdateExpression),
    ExpressionStatement(&'a ExpressionStatement),
    BlockStatement(&'a BlockStatement),
    ReturnStatement(&'a ReturnStatement),
    ForStatement(&'a ForStatement),
    VariableDeclarator(&'a VariableDeclarator),
    VariableDeclaration(&'a VariableDeclaration),
    FunctionDeclaration(&'a FunctionDeclaration),
    ImportSpecifier(&'a ImportSpecifier),
    ImportDefaultSpecifier(&'a ImportDefaultSpecifier),
    ImportDeclaration(&'a ImportDeclaration),
    ExportSpecifier(&'a ExportSpecifier),
    ExportNamedDeclaration(&'a ExportNamedDeclaration),
    ExportDefaultDeclaration(&'a ExportDefaultDeclaration),
}

impl<'a> NodeRef<'a> {
    /// The ESTree `type` tag of the viewed node
    pub fn kind(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "Program",
            NodeRef::Identifier(_) => "Identifier",
            NodeRef::Literal(_) => "Literal",
            NodeRef::BinaryExpression(_) => "BinaryExpression",
            NodeRef::UpdateExpression(_) => "UpdateExpression",
            NodeRef::ExpressionStatement(_) => "ExpressionStatement",
            NodeRef::BlockStatement(_) => "BlockStatement",
            NodeRef::ReturnStatement(_) => "ReturnStatement",
            NodeRef::ForStatement(_) => "ForStatement",
            NodeRef::VariableDeclarator(_) => "VariableDeclarator",
            NodeRef::VariableDeclaration(_) => "VariableDeclaration",
            NodeRef::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeRef::ImportSpecifier(_) => "ImportSpecifier",
            NodeRef::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
            NodeRef::ImportDeclaration(_) => "ImportDeclaration",
            NodeRef::ExportSpecifier(_) => "ExportSpecifier",
            NodeRef::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            NodeRef::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
        }
    }

    /// Name of the viewed node when it is an `Identifier`
    pub fn identifier_name(&self) -> Option<&'a str> {
        match self {
            NodeRef::Identifier(identifier) => Some(&identifier.name),
            _ => None,
        }
    }

    /// Apply `step` to each direct child, in document order
    fn each_child<E>(
        self,
        step: &mut dyn FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            NodeRef::Program(program) => visit_all(&program.body, step),
            NodeRef::Identifier(_) | NodeRef::Literal(_) => Ok(()),
            NodeRef::BinaryExpression(binary) => {
                step(binary.left.view())?;
                step(binary.right.view())
            }
            NodeRef::UpdateExpression(update) => step(update.argument.view()),
            NodeRef::ExpressionStatement(statement) => step(statement.expression.view()),
            NodeRef::BlockStatement(block) => visit_all(&block.body, step),
            NodeRef::ReturnStatement(statement) => match &statement.argument {
                Some(argument) => step(argument.view()),
                None => Ok(()),
            },
            NodeRef::ForStatement(statement) => {
                let clauses = [
                    &statement.init,
                    &statement.test,
                    &statement.update,
                    &statement.body,
                ];
                for clause in clauses.into_iter().flatten() {
                    step(clause.view())?;
                }
                Ok(())
            }
            NodeRef::VariableDeclarator(declarator) => {
                step(declarator.id.view())?;
                match &declarator.init {
                    Some(init) => step(init.view()),
                    None => Ok(()),
                }
            }
            NodeRef::VariableDeclaration(declaration) => {
                for declarator in declaration.declarations.iter() {
                    step(declarator.view())?;
                }
                Ok(())
            }
            NodeRef::FunctionDeclaration(function) => {
                if let Some(id) = &function.id {
                    step(id.view())?;
                }
                visit_all(&function.params, step)?;
                step(function.body.view())
            }
            NodeRef::ImportSpecifier(specifier) => {
                step(specifier.imported.view())?;
                step(specifier.local.view())
            }
            NodeRef::ImportDefaultSpecifier(specifier) => step(specifier.local.view()),
            NodeRef::ImportDeclaration(declaration) => {
                visit_all(&declaration.specifiers, step)?;
                step(declaration.source.view())
            }
            NodeRef::ExportSpecifier(specifier) => {
                step(specifier.local.view())?;
                step(specifier.exported.view())
            }
            NodeRef::ExportNamedDeclaration(declaration) => {
                visit_all(&declaration.specifiers, step)
            }
            NodeRef::ExportDefaultDeclaration(declaration) => step(declaration.declaration.view()),
        }
    }
}

fn visit_all<'a, T: AsNodeRef + 'a, E>(
    nodes: &'a [Located<T>],
    step: &mut dyn FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
) -> Result<(), E> {
    for node in nodes {
        step(node.view())?;
    }
    Ok(())
}

/// Types that can be seen as one of the node kinds
pub trait AsNodeRef {
    fn as_node_ref(&self) -> NodeRef<'_>;
}

macro_rules! impl_as_node_ref {
    ($($kind:ident),* $(,)?) => {
        $(
            impl AsNodeRef for $kind {
                fn as_node_ref(&self) -> NodeRef<'_> {
                    NodeRef::$kind(self)
                }
            }
        )*
    };
}

impl_as_node_ref!(
    Program,
    Identifier,
    Literal,
    BinaryExpression,
    UpdateExpression,
    ExpressionStatement,
    BlockStatement,
    ReturnStatement,
    ForStatement,
    VariableDeclarator,
    VariableDeclaration,
    FunctionDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportDeclaration,
    ExportSpecifier,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
);

impl AsNodeRef for Node {
    fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Program(node) => node.as_node_ref(),
            Node::Identifier(node) => node.as_node_ref(),
            Node::Literal(node) => node.as_node_ref(),
            Node::BinaryExpression(node) => node.as_node_ref(),
            Node::UpdateExpression(node) => node.as_node_ref(),
            Node::ExpressionStatement(node) => node.as_node_ref(),
            Node::BlockStatement(node) => node.as_node_ref(),
            Node::ReturnStatement(node) => node.as_node_ref(),
            Node::ForStatement(node) => node.as_node_ref(),
            Node::VariableDeclarator(node) => node.as_node_ref(),
            Node::VariableDeclaration(node) => node.as_node_ref(),
            Node::FunctionDeclaration(node) => node.as_node_ref(),
            Node::ImportSpecifier(node) => node.as_node_ref(),
            Node::ImportDefaultSpecifier(node) => node.as_node_ref(),
            Node::ImportDeclaration(node) => node.as_node_ref(),
            Node::ExportSpecifier(node) => node.as_node_ref(),
            Node::ExportNamedDeclaration(node) => node.as_node_ref(),
            Node::ExportDefaultDeclaration(node) => node.as_node_ref(),
        }
    }
}

impl AsNodeRef for ImportClause {
    fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            ImportClause::ImportSpecifier(specifier) => specifier.as_node_ref(),
            ImportClause::ImportDefaultSpecifier(specifier) => specifier.as_node_ref(),
        }
    }
}

impl<T: AsNodeRef> Located<T> {
    /// Borrow this node as a located [`NodeRef`]
    pub fn view(&self) -> Located<NodeRef<'_>> {
        Located::new(self.node.as_node_ref(), self.position)
    }
}

pub trait NodeExt {
    /// Walk the tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Located<NodeRef<'a>>) -> Result<(), E>;

    /// Walk the tree in post-order
    fn walk_post<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Located<NodeRef<'a>>) -> Result<(), E>;

    /// Every node matching `predicate`, in pre-order
    fn find_nodes<'a, P>(&'a self, predicate: P) -> Vec<Located<NodeRef<'a>>>
    where
        P: Fn(&Located<NodeRef<'a>>) -> bool,
    {
        let mut found = Vec::new();
        let _ = self.walk(&mut |node| {
            if predicate(&node) {
                found.push(node);
            }
            Ok::<(), Infallible>(())
        });
        found
    }

    /// Whether any node matches `predicate`. Stops at the first match.
    fn any_node<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Located<NodeRef<'_>>) -> bool,
    {
        self.walk(&mut |node| if predicate(&node) { Err(()) } else { Ok(()) })
            .is_err()
    }

    /// Number of nodes in the tree, this one included
    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let _ = self.walk(&mut |_| {
            count += 1;
            Ok::<(), Infallible>(())
        });
        count
    }
}

impl<T: AsNodeRef> NodeExt for Located<T> {
    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
    {
        walk_pre(self.view(), visitor)
    }

    fn walk_post<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
    {
        walk_post(self.view(), visitor)
    }
}

fn walk_pre<'a, E>(
    located: Located<NodeRef<'a>>,
    visitor: &mut dyn FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
) -> Result<(), E> {
    let node = located.node;
    visitor(located)?;
    node.each_child(&mut |child| walk_pre(child, &mut *visitor))
}

fn walk_post<'a, E>(
    located: Located<NodeRef<'a>>,
    visitor: &mut dyn FnMut(Located<NodeRef<'a>>) -> Result<(), E>,
) -> Result<(), E> {
    located
        .node
        .each_child(&mut |child| walk_post(child, &mut *visitor))?;
    visitor(located)
}
