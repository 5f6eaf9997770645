//! AST module for jsgo
//!
//! This module provides the typed tree for Babel/ESTree program documents:
//! node metadata ([`Attr`], [`Span`], [`SourceLocation`]), the closed set of
//! node kinds ([`Stmt`], [`Expr`] and their concrete structs) and the
//! capability traits every kind declares explicitly.
//!
//! Nodes are plain owned data. Once the decoder has built a [`File`], the
//! stringifier (`Display`) and the emitter ([`Compile`]) only ever borrow it.

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emit::Compile;

pub mod builder;
pub mod expression;
pub mod statement;

pub use expression::*;
pub use statement::*;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Byte-offset range in the original source text.
///
/// # Examples
///
/// ```rust
/// use jsgo::ast::Span;
/// let span = Span { start: 0, end: 5 };
/// assert_eq!(span.len(), 5);
/// assert!(!span.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A line/column pair. Lines are 1-based, columns 0-based, as Babel emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// Metadata shared by every node: discriminator tag, span and location.
///
/// Decoded from the node's own mapping before any of its children, so a
/// node's identity is always known when one of its children fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attr {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
}

impl Attr {
    /// Creates an attribute block for `kind` with an empty span and no location.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self {
            tag: kind.as_tag().to_string(),
            start: 0,
            end: 0,
            loc: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.start = span.start;
        self.end = span.end;
        self
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Original literal text next to its normalized value.
///
/// For `"hi"` Babel reports `raw: "\"hi\""` and `rawValue: "hi"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra<T> {
    #[serde(rename = "rawValue")]
    pub raw_value: T,
    pub raw: String,
}

/// Root container. Owns exactly one [`Program`].
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub attr: Attr,
    pub program: Program,
}

/// An ordered sequence of statements; order is emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub attr: Attr,
    pub source_type: String,
    pub body: Vec<Stmt>,
}

// ============================================================================
// NODE KIND REGISTRY
// ============================================================================

/// Every node kind the decoder accepts, keyed by its discriminator tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Program,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    CallExpression,
    MemberExpression,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
}

impl NodeKind {
    pub const ALL: [NodeKind; 12] = [
        NodeKind::File,
        NodeKind::Program,
        NodeKind::ExpressionStatement,
        NodeKind::VariableDeclaration,
        NodeKind::VariableDeclarator,
        NodeKind::Identifier,
        NodeKind::CallExpression,
        NodeKind::MemberExpression,
        NodeKind::StringLiteral,
        NodeKind::NumericLiteral,
        NodeKind::BooleanLiteral,
        NodeKind::NullLiteral,
    ];

    /// The discriminator tag used in documents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsgo::ast::NodeKind;
    /// assert_eq!(NodeKind::CallExpression.as_tag(), "CallExpression");
    /// assert_eq!(NodeKind::from_tag("CallExpression"), Some(NodeKind::CallExpression));
    /// assert_eq!(NodeKind::from_tag("ArrowFunctionExpression"), None);
    /// ```
    pub fn as_tag(self) -> &'static str {
        match self {
            NodeKind::File => "File",
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::Identifier => "Identifier",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_tag() == tag)
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::ExpressionStatement | NodeKind::VariableDeclaration
        )
    }

    pub fn is_declaration(self) -> bool {
        matches!(self, NodeKind::VariableDeclaration)
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Identifier
                | NodeKind::CallExpression
                | NodeKind::MemberExpression
                | NodeKind::StringLiteral
                | NodeKind::NumericLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::StringLiteral
                | NodeKind::NumericLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
        )
    }

    /// Human-readable capability category, used in decode errors.
    pub fn category(self) -> &'static str {
        if self.is_declaration() {
            "declaration"
        } else if self.is_statement() {
            "statement"
        } else if self.is_literal() {
            "literal"
        } else if self.is_expression() {
            "expression"
        } else {
            "structural node"
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ============================================================================
// CAPABILITY CATEGORIES
// ============================================================================

/// Base capability: every node has metadata, a string form and a Go form.
pub trait Node: fmt::Display + Compile {
    fn attr(&self) -> &Attr;

    fn kind(&self) -> NodeKind;

    fn span(&self) -> Span {
        self.attr().span()
    }
}

/// Usable as a top-level or block-level instruction.
pub trait Statement: Node {}

/// A statement that introduces bindings.
pub trait Declaration: Statement {}

pub trait Expression: Node {}

/// An expression with a fixed value and a raw textual form.
pub trait Literal: Expression {}

impl Node for File {
    fn attr(&self) -> &Attr {
        &self.attr
    }

    fn kind(&self) -> NodeKind {
        NodeKind::File
    }
}

impl Node for Program {
    fn attr(&self) -> &Attr {
        &self.attr
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_through_its_tag() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.as_tag()), Some(kind));
        }
    }

    #[test]
    fn test_categories_refine() {
        for kind in NodeKind::ALL {
            if kind.is_declaration() {
                assert!(kind.is_statement(), "{kind} declares but is no statement");
            }
            if kind.is_literal() {
                assert!(kind.is_expression(), "{kind} is a literal but no expression");
            }
            assert!(!(kind.is_statement() && kind.is_expression()));
        }
        assert_eq!(NodeKind::Program.category(), "structural node");
        assert_eq!(NodeKind::NullLiteral.category(), "literal");
    }

    #[test]
    fn test_attr_reads_babel_header() {
        let json = r#"{
            "type": "Identifier",
            "start": 8,
            "end": 11,
            "loc": {
                "start": { "line": 1, "column": 8 },
                "end": { "line": 1, "column": 11 },
                "identifierName": "log"
            },
            "name": "log"
        }"#;
        let attr: Attr = serde_json::from_str(json).unwrap();
        assert_eq!(attr.tag, "Identifier");
        assert_eq!(attr.span(), Span::new(8, 11));
        assert_eq!(attr.loc.unwrap().end, Position { line: 1, column: 11 });
    }

    #[test]
    fn test_attr_defaults_missing_span_and_loc() {
        let attr: Attr = serde_json::from_str(r#"{"type":"Program"}"#).unwrap();
        assert_eq!(attr.span(), Span::default());
        assert!(attr.loc.is_none());
    }
}
