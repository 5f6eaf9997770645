//! Statement and declaration node kinds.

use super::{Attr, Declaration, Expr, Identifier, Node, NodeKind, Statement};

/// Any node that may occupy a statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
}

impl Stmt {
    /// The concrete statement as a trait object.
    pub fn as_node(&self) -> &dyn Node {
        match self {
            Stmt::Expression(stmt) => stmt,
            Stmt::VariableDeclaration(decl) => decl,
        }
    }

    pub fn attr(&self) -> &Attr {
        self.as_node().attr()
    }

    pub fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
}

/// An expression evaluated for its effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub attr: Attr,
    pub expression: Expr,
}

/// `var`, `let` or `const` with one or more declarators.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub attr: Attr,
    pub declarations: Vec<VariableDeclarator>,
    /// Binding keyword as written in the source; kept opaque.
    pub kind: String,
}

impl VariableDeclaration {
    pub fn is_const(&self) -> bool {
        self.kind == "const"
    }

    /// Identifiers bound by this declaration, in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = &Identifier> {
        self.declarations.iter().map(|d| &d.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub attr: Attr,
    pub id: Identifier,
    pub init: Option<Expr>,
}

// ----------------------------------------------------------------------------
// Capability declarations
// ----------------------------------------------------------------------------

impl Node for ExpressionStatement {
    fn attr(&self) -> &Attr {
        &self.attr
    }

    fn kind(&self) -> NodeKind {
        NodeKind::ExpressionStatement
    }
}

impl Statement for ExpressionStatement {}

impl Node for VariableDeclaration {
    fn attr(&self) -> &Attr {
        &self.attr
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VariableDeclaration
    }
}

impl Statement for VariableDeclaration {}
impl Declaration for VariableDeclaration {}

impl Node for VariableDeclarator {
    fn attr(&self) -> &Attr {
        &self.attr
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VariableDeclarator
    }
}

// ----------------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------------

impl From<ExpressionStatement> for Stmt {
    fn from(stmt: ExpressionStatement) -> Self {
        Stmt::Expression(stmt)
    }
}

impl From<VariableDeclaration> for Stmt {
    fn from(decl: VariableDeclaration) -> Self {
        Stmt::VariableDeclaration(decl)
    }
}
