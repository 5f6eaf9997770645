//! # AST Builder Module
//!
//! ## Purpose
//! Builds typed trees directly, without a JSON document. Every node gets a
//! synthetic [`Attr`] carrying its kind's tag and an empty span.
//!
//! ## Invariants
//! - Never shares nodes: every child is moved into its parent
//! - Tags always match the constructed kind
//!
//! # Examples
//!
//! ```rust
//! use jsgo::ast::builder::*;
//! let file = file(vec![expr_stmt(call(
//!     member(ident("console"), ident("log")),
//!     vec![string("hi")],
//! ))]);
//! assert_eq!(file.to_string(), r#"console.log("hi")"#);
//! ```

use super::{
    Attr, BooleanLiteral, CallExpression, Expr, Extra, ExpressionStatement, File, Identifier,
    MemberExpression, NodeKind, NullLiteral, NumericLiteral, Program, Stmt, StringLiteral,
    VariableDeclaration, VariableDeclarator,
};

pub fn file(body: Vec<Stmt>) -> File {
    File {
        attr: Attr::synthetic(NodeKind::File),
        program: program(body),
    }
}

pub fn program(body: Vec<Stmt>) -> Program {
    Program {
        attr: Attr::synthetic(NodeKind::Program),
        source_type: "module".to_string(),
        body,
    }
}

pub fn expr_stmt(expression: impl Into<Expr>) -> Stmt {
    Stmt::Expression(ExpressionStatement {
        attr: Attr::synthetic(NodeKind::ExpressionStatement),
        expression: expression.into(),
    })
}

pub fn var_decl(kind: &str, declarations: Vec<VariableDeclarator>) -> Stmt {
    Stmt::VariableDeclaration(VariableDeclaration {
        attr: Attr::synthetic(NodeKind::VariableDeclaration),
        declarations,
        kind: kind.to_string(),
    })
}

pub fn declarator(name: &str, init: Option<Expr>) -> VariableDeclarator {
    VariableDeclarator {
        attr: Attr::synthetic(NodeKind::VariableDeclarator),
        id: identifier(name),
        init,
    }
}

pub fn identifier(name: &str) -> Identifier {
    Identifier {
        attr: Attr::synthetic(NodeKind::Identifier),
        name: name.to_string(),
    }
}

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(identifier(name))
}

pub fn call(callee: impl Into<Expr>, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpression {
        attr: Attr::synthetic(NodeKind::CallExpression),
        callee: Box::new(callee.into()),
        arguments,
    })
}

pub fn member(object: impl Into<Expr>, property: impl Into<Expr>) -> Expr {
    member_with(object.into(), property.into(), false)
}

/// `object[property]`
pub fn index(object: impl Into<Expr>, property: impl Into<Expr>) -> Expr {
    member_with(object.into(), property.into(), true)
}

fn member_with(object: Expr, property: Expr, computed: bool) -> Expr {
    Expr::Member(MemberExpression {
        attr: Attr::synthetic(NodeKind::MemberExpression),
        object: Box::new(object),
        property: Box::new(property),
        computed,
    })
}

pub fn string(value: &str) -> Expr {
    Expr::String(StringLiteral {
        attr: Attr::synthetic(NodeKind::StringLiteral),
        value: value.to_string(),
        extra: Some(Extra {
            raw_value: value.to_string(),
            raw: format!("\"{}\"", value),
        }),
    })
}

pub fn number(value: f64) -> Expr {
    Expr::Numeric(NumericLiteral {
        attr: Attr::synthetic(NodeKind::NumericLiteral),
        value,
        extra: None,
    })
}

pub fn boolean(value: bool) -> Expr {
    Expr::Boolean(BooleanLiteral {
        attr: Attr::synthetic(NodeKind::BooleanLiteral),
        value,
    })
}

pub fn null() -> Expr {
    Expr::Null(NullLiteral {
        attr: Attr::synthetic(NodeKind::NullLiteral),
    })
}
