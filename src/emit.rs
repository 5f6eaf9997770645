//! Go emission.
//!
//! [`Compile`] writes a node's Go form into an [`OutputSink`], in the same
//! traversal order the stringifier uses. Identifiers are exported (first
//! character upper-cased); calls end their line; everything else emits only
//! its own tokens.

// ============================================================================
// IMPORTS
// ============================================================================

use std::io::{self, Write};

use tracing::trace;

use crate::ast::{
    BooleanLiteral, CallExpression, Expr, ExpressionStatement, File, Identifier, MemberExpression,
    Node, NullLiteral, NumericLiteral, Program, Span, Stmt, StringLiteral, VariableDeclaration,
    VariableDeclarator,
};
use crate::diagnostics::NodeRef;
use crate::{err_msg, Result};

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Append-only destination for emitted text.
///
/// `span` is the source span of the node that produced `text`.
pub trait OutputSink {
    fn emit(&mut self, text: &str, span: Option<&Span>);
}

// A null output sink for checking emission without keeping output.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _text: &str, _span: Option<&Span>) {}
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str, _span: Option<&Span>) {
        self.buffer.push_str(text);
    }
}

/// WriteSink: forwards output to an `io::Write`.
///
/// `emit` cannot fail, so the first write error is kept and every later
/// write is skipped; [`WriteSink::finish`] reports it.
pub struct WriteSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

/// Writes straight to stdout.
pub type StdoutSink = WriteSink<io::Stdout>;

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the writer and returns it, or the first write error.
    pub fn finish(self) -> io::Result<W> {
        let WriteSink { mut out, error } = self;
        if let Some(e) = error {
            return Err(e);
        }
        out.flush()?;
        Ok(out)
    }
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn emit(&mut self, text: &str, _span: Option<&Span>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

// ============================================================================
// COMPILE CAPABILITY
// ============================================================================

/// Writes the Go form of a node into `sink`.
///
/// An error aborts the traversal; whatever was already written stays in the
/// sink, so callers that must not publish partial output compile into an
/// [`OutputBuffer`] first (see [`crate::engine::compile`]).
pub trait Compile {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()>;
}

/// Go export convention: upper-case exactly the first character.
///
/// # Examples
///
/// ```rust
/// use jsgo::emit::export_name;
/// assert_eq!(export_name("console"), "Console");
/// assert_eq!(export_name("fooBar"), "FooBar");
/// assert_eq!(export_name(""), "");
/// ```
pub fn export_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Compile for File {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        self.program.compile(sink)
    }
}

impl Compile for Program {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        for stmt in &self.body {
            trace!(kind = %stmt.kind(), start = stmt.attr().start, "compiling statement");
            stmt.compile(sink)?;
        }
        Ok(())
    }
}

impl Compile for Stmt {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        match self {
            Stmt::Expression(stmt) => stmt.compile(sink),
            Stmt::VariableDeclaration(decl) => decl.compile(sink),
        }
    }
}

impl Compile for ExpressionStatement {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        self.expression.compile(sink)
    }
}

impl Compile for VariableDeclaration {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        for (i, decl) in self.declarations.iter().enumerate() {
            compile_binding(self.is_const(), decl, sink).map_err(|e| {
                e.with_node(node_ref(decl, format!("{}.declarations[{}]", self.kind(), i)))
            })?;
        }
        Ok(())
    }
}

impl Compile for VariableDeclarator {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        compile_binding(false, self, sink)
            .map_err(|e| e.with_node(node_ref(self, self.kind().to_string())))
    }
}

/// One declarator per line: `var Name = init`, or `const Name = init` when
/// a `const` binds a Go constant expression.
fn compile_binding(
    is_const: bool,
    decl: &VariableDeclarator,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let span = decl.span();
    match &decl.init {
        Some(init) => {
            let keyword = if is_const && is_go_constant(init) {
                "const "
            } else {
                "var "
            };
            sink.emit(keyword, Some(&span));
            decl.id.compile(sink)?;
            sink.emit(" = ", Some(&span));
            init.compile(sink)?;
            // Calls end their own line.
            if !matches!(init, Expr::Call(_)) {
                sink.emit("\n", Some(&span));
            }
        }
        None if is_const => {
            return Err(err_msg!(
                Unsupported,
                "`const {}` has no initializer; Go constants need a value",
                decl.id.name
            )
            .with_help("give the declaration an initializer or declare it with `let`"));
        }
        None => {
            sink.emit("var ", Some(&span));
            decl.id.compile(sink)?;
            sink.emit(" any\n", Some(&span));
        }
    }
    Ok(())
}

/// String, number and boolean literals; `nil` is not a Go constant.
fn is_go_constant(expr: &Expr) -> bool {
    matches!(expr, Expr::String(_) | Expr::Numeric(_) | Expr::Boolean(_))
}

fn node_ref(node: &dyn Node, path: String) -> NodeRef {
    NodeRef {
        tag: Some(node.attr().tag.clone()),
        path,
        span: Some(node.span()),
        loc: node.attr().loc,
    }
}

impl Compile for Expr {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        match self {
            Expr::Identifier(e) => e.compile(sink),
            Expr::Call(e) => e.compile(sink),
            Expr::Member(e) => e.compile(sink),
            Expr::String(e) => e.compile(sink),
            Expr::Numeric(e) => e.compile(sink),
            Expr::Boolean(e) => e.compile(sink),
            Expr::Null(e) => e.compile(sink),
        }
    }
}

impl Compile for Identifier {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit(&export_name(&self.name), Some(&self.span()));
        Ok(())
    }
}

impl Compile for CallExpression {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        let span = self.span();
        self.callee.compile(sink)?;
        sink.emit("(", Some(&span));
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                sink.emit(", ", Some(&span));
            }
            arg.compile(sink)?;
        }
        sink.emit(")\n", Some(&span));
        Ok(())
    }
}

impl Compile for MemberExpression {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        let span = self.span();
        self.object.compile(sink)?;
        if self.computed {
            sink.emit("[", Some(&span));
            self.property.compile(sink)?;
            sink.emit("]", Some(&span));
        } else {
            sink.emit(".", Some(&span));
            self.property.compile(sink)?;
        }
        Ok(())
    }
}

impl Compile for StringLiteral {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit(&format!("\"{}\"", self.value), Some(&self.span()));
        Ok(())
    }
}

impl Compile for NumericLiteral {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit(&self.text(), Some(&self.span()));
        Ok(())
    }
}

impl Compile for BooleanLiteral {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        let text = if self.value { "true" } else { "false" };
        sink.emit(text, Some(&self.span()));
        Ok(())
    }
}

impl Compile for NullLiteral {
    fn compile(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit("nil", Some(&self.span()));
        Ok(())
    }
}
