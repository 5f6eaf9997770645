//! Textual reconstruction of a typed tree.
//!
//! Every node renders through `Display`. The output keeps the source's tokens
//! and nesting with canonical separators; it is not byte-identical to the
//! original. Two reconstruction gaps are kept as-is: declarations print the
//! keyword and declarators with no separator, and declarators print no `=`.

use std::fmt;

use crate::ast::{
    BooleanLiteral, CallExpression, Expr, ExpressionStatement, File, Identifier, MemberExpression,
    NullLiteral, NumericLiteral, Program, Stmt, StringLiteral, VariableDeclaration,
    VariableDeclarator,
};

/// Reconstructs the source text of a whole file.
///
/// # Examples
///
/// ```rust
/// use jsgo::ast::builder::*;
/// use jsgo::stringify::stringify;
/// assert_eq!(stringify(&file(vec![])), "");
/// ```
pub fn stringify(file: &File) -> String {
    file.to_string()
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::VariableDeclaration(decl) => write!(f, "{}", decl),
        }
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        for decl in &self.declarations {
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}

impl fmt::Display for VariableDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        match &self.init {
            Some(init) => write!(f, "{}", init),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(e) => write!(f, "{}", e),
            Expr::Call(e) => write!(f, "{}", e),
            Expr::Member(e) => write!(f, "{}", e),
            Expr::String(e) => write!(f, "{}", e),
            Expr::Numeric(e) => write!(f, "{}", e),
            Expr::Boolean(e) => write!(f, "{}", e),
            Expr::Null(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.callee, args)
    }
}

impl fmt::Display for MemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.computed {
            write!(f, "{}[{}]", self.object, self.property)
        } else {
            write!(f, "{}.{}", self.object, self.property)
        }
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Embedded quotes are not escaped.
        write!(f, "\"{}\"", self.value)
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for NullLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::builder::*;
    use crate::ast::{Attr, Expr, Extra, NodeKind, NumericLiteral};

    #[test]
    fn test_call_with_no_arguments() {
        assert_eq!(call(ident("f"), vec![]).to_string(), "f()");
    }

    #[test]
    fn test_call_arguments_are_comma_space_joined() {
        let expr = call(ident("f"), vec![ident("a"), string("b"), number(3.0)]);
        assert_eq!(expr.to_string(), r#"f(a, "b", 3)"#);
    }

    #[test]
    fn test_nested_members() {
        let expr = member(member(ident("a"), ident("b")), ident("c"));
        assert_eq!(expr.to_string(), "a.b.c");
    }

    #[test]
    fn test_computed_member_uses_brackets() {
        let expr = index(ident("xs"), number(0.0));
        assert_eq!(expr.to_string(), "xs[0]");
        let expr = index(ident("obj"), string("key"));
        assert_eq!(expr.to_string(), r#"obj["key"]"#);
    }

    #[test]
    fn test_string_literal_does_not_escape_quotes() {
        assert_eq!(string(r#"say "hi""#).to_string(), r#""say "hi"""#);
    }

    #[test]
    fn test_declaration_keeps_separator_gaps() {
        let stmt = var_decl("let", vec![declarator("x", Some(number(1.0)))]);
        assert_eq!(stmt.to_string(), "letx1");

        let stmt = var_decl("var", vec![declarator("a", None), declarator("b", None)]);
        assert_eq!(stmt.to_string(), "varab");
    }

    #[test]
    fn test_program_concatenates_statements() {
        let file = file(vec![
            expr_stmt(call(ident("a"), vec![])),
            expr_stmt(call(ident("b"), vec![])),
        ]);
        assert_eq!(file.to_string(), "a()b()");
    }

    #[test]
    fn test_numeric_literal_prefers_raw_text() {
        let hex = Expr::Numeric(NumericLiteral {
            attr: Attr::synthetic(NodeKind::NumericLiteral),
            value: 255.0,
            extra: Some(Extra {
                raw_value: 255.0,
                raw: "0xff".to_string(),
            }),
        });
        assert_eq!(hex.to_string(), "0xff");
        assert_eq!(number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_numeric_literal_without_raw_keeps_exponent_form() {
        assert_eq!(number(1e21).to_string(), "1e21");
        assert_eq!(number(1e-7).to_string(), "1e-7");
        assert_eq!(number(123456.0).to_string(), "123456");
        assert_eq!(number(0.0).to_string(), "0");
    }

    #[test]
    fn test_keyword_literals() {
        assert_eq!(boolean(false).to_string(), "false");
        assert_eq!(null().to_string(), "null");
    }
}
