//! Expression and literal node kinds.

use super::{Attr, Expression, Extra, Literal, Node, NodeKind};

/// Any node that may occupy an expression position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Call(CallExpression),
    Member(MemberExpression),
    String(StringLiteral),
    Numeric(NumericLiteral),
    Boolean(BooleanLiteral),
    Null(NullLiteral),
}

impl Expr {
    /// The concrete expression as a trait object.
    pub fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Identifier(e) => e,
            Expr::Call(e) => e,
            Expr::Member(e) => e,
            Expr::String(e) => e,
            Expr::Numeric(e) => e,
            Expr::Boolean(e) => e,
            Expr::Null(e) => e,
        }
    }

    pub fn attr(&self) -> &Attr {
        self.as_node().attr()
    }

    pub fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expr::Identifier(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind().is_literal()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub attr: Attr,
    pub name: String,
}

/// `callee(arguments...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub attr: Attr,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// `object.property`, or `object[property]` when `computed`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub attr: Attr,
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub attr: Attr,
    pub value: String,
    pub extra: Option<Extra<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub attr: Attr,
    pub value: f64,
    pub extra: Option<Extra<f64>>,
}

impl NumericLiteral {
    /// Source text of the number: the raw form when the document kept it.
    ///
    /// Otherwise magnitudes JavaScript prints in exponent form (`>= 1e21`,
    /// `< 1e-6`) use exponent notation, and the rest plain decimals.
    pub fn text(&self) -> String {
        match &self.extra {
            Some(extra) if !extra.raw.is_empty() => extra.raw.clone(),
            _ => {
                let magnitude = self.value.abs();
                if self.value.is_finite()
                    && (magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6))
                {
                    format!("{:e}", self.value)
                } else {
                    self.value.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub attr: Attr,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullLiteral {
    pub attr: Attr,
}

// ----------------------------------------------------------------------------
// Capability declarations
// ----------------------------------------------------------------------------

macro_rules! expression_kind {
    ($ty:ty, $kind:ident) => {
        impl Node for $ty {
            fn attr(&self) -> &Attr {
                &self.attr
            }

            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }
        }

        impl Expression for $ty {}
    };
}

expression_kind!(Identifier, Identifier);
expression_kind!(CallExpression, CallExpression);
expression_kind!(MemberExpression, MemberExpression);
expression_kind!(StringLiteral, StringLiteral);
expression_kind!(NumericLiteral, NumericLiteral);
expression_kind!(BooleanLiteral, BooleanLiteral);
expression_kind!(NullLiteral, NullLiteral);

impl Literal for StringLiteral {}
impl Literal for NumericLiteral {}
impl Literal for BooleanLiteral {}
impl Literal for NullLiteral {}

// ----------------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------------

impl From<Identifier> for Expr {
    fn from(e: Identifier) -> Self {
        Expr::Identifier(e)
    }
}

impl From<CallExpression> for Expr {
    fn from(e: CallExpression) -> Self {
        Expr::Call(e)
    }
}

impl From<MemberExpression> for Expr {
    fn from(e: MemberExpression) -> Self {
        Expr::Member(e)
    }
}

impl From<StringLiteral> for Expr {
    fn from(e: StringLiteral) -> Self {
        Expr::String(e)
    }
}

impl From<NumericLiteral> for Expr {
    fn from(e: NumericLiteral) -> Self {
        Expr::Numeric(e)
    }
}

impl From<BooleanLiteral> for Expr {
    fn from(e: BooleanLiteral) -> Self {
        Expr::Boolean(e)
    }
}

impl From<NullLiteral> for Expr {
    fn from(e: NullLiteral) -> Self {
        Expr::Null(e)
    }
}
