//! Tagged deserializer: Babel/ESTree JSON to typed tree.
//!
//! Each node is decoded in two phases. First its [`Attr`] header (`type`,
//! `start`, `end`, `loc`) is read from the node's raw JSON fragment; then the
//! tag selects a kind-specific field struct whose child nodes are still raw
//! fragments, and each child is decoded by the same rule. Nothing passes
//! through an untyped `serde_json::Value`.
//!
//! Any failure aborts the whole document. The error names the node path
//! (`program.body[0].expression.callee`), the tag when it was readable, the
//! node's source location, and labels the offending part of the JSON text.
//!
//! Adding a node kind means one [`NodeKind`] variant, one field struct and one
//! arm in [`Decoder::statement`] or [`Decoder::expression`].

// ============================================================================
// IMPORTS
// ============================================================================

use serde::Deserialize;
use serde_json::value::RawValue;
use tracing::{debug, instrument, trace};

use crate::ast::{
    Attr, BooleanLiteral, CallExpression, Expr, ExpressionStatement, Extra, File, Identifier,
    MemberExpression, NodeKind, NullLiteral, NumericLiteral, Program, Span, Stmt, StringLiteral,
    VariableDeclaration, VariableDeclarator,
};
use crate::diagnostics::{to_error_source, NodeRef, SourceArc};
use crate::{err_ctx, JsgoError, Result};

/// Document name used in diagnostics when the caller gives none.
pub const DEFAULT_DOCUMENT_NAME: &str = "<document>";

/// Deepest node path the decoder follows before rejecting the document.
///
/// Decoding, stringifying and compiling all recurse once per level, so the
/// limit keeps every traversal inside the default thread stack.
pub const MAX_NESTING_DEPTH: usize = 128;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Decodes a whole `File` document.
///
/// # Examples
///
/// ```rust
/// let json = r#"{"type":"File","program":{"type":"Program","body":[]}}"#;
/// let file = jsgo::decode::decode_file(json).unwrap();
/// assert!(file.program.body.is_empty());
/// ```
pub fn decode_file(json: &str) -> Result<File> {
    decode_file_named(DEFAULT_DOCUMENT_NAME, json)
}

/// Decodes a whole `File` document, naming it `name` in diagnostics.
#[instrument(level = "debug", skip(json), fields(bytes = json.len()))]
pub fn decode_file_named(name: &str, json: &str) -> Result<File> {
    let mut decoder = Decoder::new(name, json);
    let file = decoder.file()?;
    debug!(statements = file.program.body.len(), "decoded document");
    Ok(file)
}

/// Decodes a single statement node.
pub fn decode_statement(json: &str) -> Result<Stmt> {
    let mut decoder = Decoder::new(DEFAULT_DOCUMENT_NAME, json);
    let raw = decoder.root()?;
    decoder.statement(raw)
}

/// Decodes a single expression node.
pub fn decode_expression(json: &str) -> Result<Expr> {
    let mut decoder = Decoder::new(DEFAULT_DOCUMENT_NAME, json);
    let raw = decoder.root()?;
    decoder.expression(raw)
}

// ============================================================================
// FIELD STRUCTS
// ============================================================================
//
// Kind-specific payloads. Child nodes stay borrowed raw fragments until the
// decoder has read their own header. Absent optional fields take their zero
// value; node-typed fields without a zero value are mandatory.

#[derive(Deserialize)]
struct FileFields<'a> {
    #[serde(borrow)]
    program: &'a RawValue,
}

#[derive(Deserialize)]
struct ProgramFields<'a> {
    #[serde(rename = "sourceType", default)]
    source_type: String,
    #[serde(borrow, default)]
    body: Vec<&'a RawValue>,
}

#[derive(Deserialize)]
struct ExpressionStatementFields<'a> {
    #[serde(borrow)]
    expression: &'a RawValue,
}

#[derive(Deserialize)]
struct VariableDeclarationFields<'a> {
    #[serde(borrow, default)]
    declarations: Vec<&'a RawValue>,
    #[serde(default)]
    kind: String,
}

#[derive(Deserialize)]
struct VariableDeclaratorFields<'a> {
    #[serde(borrow)]
    id: &'a RawValue,
    #[serde(borrow, default)]
    init: Option<&'a RawValue>,
}

#[derive(Deserialize)]
struct IdentifierFields {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct CallExpressionFields<'a> {
    #[serde(borrow)]
    callee: &'a RawValue,
    #[serde(borrow, default)]
    arguments: Vec<&'a RawValue>,
}

#[derive(Deserialize)]
struct MemberExpressionFields<'a> {
    #[serde(borrow)]
    object: &'a RawValue,
    #[serde(borrow)]
    property: &'a RawValue,
    #[serde(default)]
    computed: bool,
}

#[derive(Deserialize)]
struct StringLiteralFields {
    #[serde(default)]
    value: String,
    #[serde(default)]
    extra: Option<Extra<String>>,
}

#[derive(Deserialize)]
struct NumericLiteralFields {
    #[serde(default)]
    value: f64,
    #[serde(default)]
    extra: Option<Extra<f64>>,
}

#[derive(Deserialize)]
struct BooleanLiteralFields {
    #[serde(default)]
    value: bool,
}

// ============================================================================
// DECODER
// ============================================================================

/// Recursive-descent decoder over one JSON document.
///
/// Tracks the path from the root so errors can say where they happened.
pub struct Decoder<'src> {
    text: &'src str,
    source: SourceArc,
    path: Vec<String>,
}

impl<'src> Decoder<'src> {
    pub fn new(name: &str, text: &'src str) -> Self {
        Self {
            text,
            source: to_error_source(name, text),
            path: Vec::new(),
        }
    }

    /// The whole document as a raw fragment.
    pub fn root(&self) -> Result<&'src RawValue> {
        serde_json::from_str::<&'src RawValue>(self.text).map_err(|e| {
            let span = Span::new(0, self.text.len());
            let at = self.error_point(self.text, span, &e);
            err_ctx!(
                Decode,
                format!("invalid JSON document: {}", strip_location(&e)),
                &self.source,
                at
            )
        })
    }

    pub fn file(&mut self) -> Result<File> {
        let raw = self.root()?;
        let attr = self.attr(raw)?;
        self.expect_kind(raw, &attr, NodeKind::File)?;
        let fields: FileFields<'src> = self.fields(raw, &attr)?;
        let program = self.child("program", |d| d.program(fields.program))?;
        Ok(File { attr, program })
    }

    fn program(&mut self, raw: &'src RawValue) -> Result<Program> {
        let attr = self.attr(raw)?;
        self.expect_kind(raw, &attr, NodeKind::Program)?;
        let fields: ProgramFields<'src> = self.fields(raw, &attr)?;
        let body = fields
            .body
            .into_iter()
            .enumerate()
            .map(|(i, stmt)| self.child(format!("body[{}]", i), |d| d.statement(stmt)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Program {
            attr,
            source_type: fields.source_type,
            body,
        })
    }

    // ------------------------------------------------------------------------
    // Capability dispatch
    // ------------------------------------------------------------------------

    pub fn statement(&mut self, raw: &'src RawValue) -> Result<Stmt> {
        let attr = self.attr(raw)?;
        match self.kind(raw, &attr)? {
            NodeKind::ExpressionStatement => {
                let fields: ExpressionStatementFields<'src> = self.fields(raw, &attr)?;
                let expression = self.child("expression", |d| d.expression(fields.expression))?;
                Ok(Stmt::Expression(ExpressionStatement { attr, expression }))
            }
            NodeKind::VariableDeclaration => {
                let fields: VariableDeclarationFields<'src> = self.fields(raw, &attr)?;
                let declarations = fields
                    .declarations
                    .into_iter()
                    .enumerate()
                    .map(|(i, decl)| {
                        self.child(format!("declarations[{}]", i), |d| d.declarator(decl))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Stmt::VariableDeclaration(VariableDeclaration {
                    attr,
                    declarations,
                    kind: fields.kind,
                }))
            }
            other => Err(self.misplaced(raw, &attr, other, "statement")),
        }
    }

    pub fn expression(&mut self, raw: &'src RawValue) -> Result<Expr> {
        let attr = self.attr(raw)?;
        match self.kind(raw, &attr)? {
            NodeKind::Identifier => self.identifier_body(raw, attr).map(Expr::Identifier),
            NodeKind::CallExpression => {
                let fields: CallExpressionFields<'src> = self.fields(raw, &attr)?;
                let callee = self.child("callee", |d| d.expression(fields.callee))?;
                let arguments = fields
                    .arguments
                    .into_iter()
                    .enumerate()
                    .map(|(i, arg)| self.child(format!("arguments[{}]", i), |d| d.expression(arg)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Expr::Call(CallExpression {
                    attr,
                    callee: Box::new(callee),
                    arguments,
                }))
            }
            NodeKind::MemberExpression => {
                let fields: MemberExpressionFields<'src> = self.fields(raw, &attr)?;
                let object = self.child("object", |d| d.expression(fields.object))?;
                let property = self.child("property", |d| d.expression(fields.property))?;
                Ok(Expr::Member(MemberExpression {
                    attr,
                    object: Box::new(object),
                    property: Box::new(property),
                    computed: fields.computed,
                }))
            }
            NodeKind::StringLiteral => {
                let fields: StringLiteralFields = self.fields(raw, &attr)?;
                Ok(Expr::String(StringLiteral {
                    attr,
                    value: fields.value,
                    extra: fields.extra,
                }))
            }
            NodeKind::NumericLiteral => {
                let fields: NumericLiteralFields = self.fields(raw, &attr)?;
                Ok(Expr::Numeric(NumericLiteral {
                    attr,
                    value: fields.value,
                    extra: fields.extra,
                }))
            }
            NodeKind::BooleanLiteral => {
                let fields: BooleanLiteralFields = self.fields(raw, &attr)?;
                Ok(Expr::Boolean(BooleanLiteral {
                    attr,
                    value: fields.value,
                }))
            }
            NodeKind::NullLiteral => Ok(Expr::Null(NullLiteral { attr })),
            other => Err(self.misplaced(raw, &attr, other, "expression")),
        }
    }

    fn declarator(&mut self, raw: &'src RawValue) -> Result<VariableDeclarator> {
        let attr = self.attr(raw)?;
        self.expect_kind(raw, &attr, NodeKind::VariableDeclarator)?;
        let fields: VariableDeclaratorFields<'src> = self.fields(raw, &attr)?;
        let id = self.child("id", |d| d.identifier(fields.id))?;
        let init = match fields.init {
            Some(init) => Some(self.child("init", |d| d.expression(init))?),
            None => None,
        };
        Ok(VariableDeclarator { attr, id, init })
    }

    fn identifier(&mut self, raw: &'src RawValue) -> Result<Identifier> {
        let attr = self.attr(raw)?;
        self.expect_kind(raw, &attr, NodeKind::Identifier)?;
        self.identifier_body(raw, attr)
    }

    fn identifier_body(&mut self, raw: &'src RawValue, attr: Attr) -> Result<Identifier> {
        let fields: IdentifierFields = self.fields(raw, &attr)?;
        Ok(Identifier {
            attr,
            name: fields.name,
        })
    }

    // ------------------------------------------------------------------------
    // Phases
    // ------------------------------------------------------------------------

    /// Phase one: the node header.
    fn attr(&self, raw: &'src RawValue) -> Result<Attr> {
        let attr = self.header(raw)?;
        if self.path.len() > MAX_NESTING_DEPTH {
            let node = self.node_ref(Some(&attr));
            return Err(err_ctx!(
                Decode,
                format!(
                    "document nests deeper than {} levels at {}",
                    MAX_NESTING_DEPTH, node
                ),
                &self.source,
                self.span_of(raw.get()),
                "split long call or member chains into separate statements"
            )
            .with_node(node));
        }
        Ok(attr)
    }

    fn header(&self, raw: &'src RawValue) -> Result<Attr> {
        serde_json::from_str::<Attr>(raw.get()).map_err(|e| {
            let span = self.span_of(raw.get());
            let node = self.node_ref(None);
            let help = if raw.get().trim_start().starts_with('{') {
                "every node needs a string `type` discriminator"
            } else {
                "expected a node object here"
            };
            err_ctx!(
                Decode,
                format!("malformed {}: {}", node, strip_location(&e)),
                &self.source,
                self.error_point(raw.get(), span, &e),
                help
            )
            .with_node(node)
        })
    }

    /// Phase two: the kind-specific payload.
    fn fields<T>(&self, raw: &'src RawValue, attr: &Attr) -> Result<T>
    where
        T: Deserialize<'src>,
    {
        serde_json::from_str::<T>(raw.get()).map_err(|e| {
            let span = self.span_of(raw.get());
            let node = self.node_ref(Some(attr));
            err_ctx!(
                Decode,
                format!("malformed {}: {}", node, strip_location(&e)),
                &self.source,
                self.error_point(raw.get(), span, &e)
            )
            .with_node(node)
        })
    }

    fn kind(&self, raw: &'src RawValue, attr: &Attr) -> Result<NodeKind> {
        trace!(tag = %attr.tag, path = %self.path_string(), "decoding node");
        NodeKind::from_tag(&attr.tag).ok_or_else(|| {
            let node = self.node_ref(Some(attr));
            err_ctx!(
                Decode,
                format!("unknown node type {}", node),
                &self.source,
                self.span_of(raw.get()),
                "this node kind is not supported by the decoder"
            )
            .with_node(node)
        })
    }

    fn expect_kind(&self, raw: &'src RawValue, attr: &Attr, expected: NodeKind) -> Result<()> {
        match self.kind(raw, attr)? {
            kind if kind == expected => Ok(()),
            other => Err(self.misplaced(raw, attr, other, expected.as_tag())),
        }
    }

    fn misplaced(
        &self,
        raw: &'src RawValue,
        attr: &Attr,
        found: NodeKind,
        expected: &str,
    ) -> JsgoError {
        let node = self.node_ref(Some(attr));
        err_ctx!(
            Decode,
            format!("expected {}, found {} {}", expected, found.category(), node),
            &self.source,
            self.span_of(raw.get())
        )
        .with_node(node)
    }

    // ------------------------------------------------------------------------
    // Path and location bookkeeping
    // ------------------------------------------------------------------------

    fn child<T>(
        &mut self,
        segment: impl Into<String>,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    fn path_string(&self) -> String {
        if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.path.join(".")
        }
    }

    fn node_ref(&self, attr: Option<&Attr>) -> NodeRef {
        NodeRef {
            tag: attr.map(|a| a.tag.clone()),
            path: self.path_string(),
            span: attr.map(Attr::span),
            loc: attr.and_then(|a| a.loc),
        }
    }

    /// Byte span of `fragment` within the document.
    ///
    /// Fragments are always borrowed from `self.text`.
    fn span_of(&self, fragment: &str) -> Span {
        let start = (fragment.as_ptr() as usize).saturating_sub(self.text.as_ptr() as usize);
        Span::new(start, start + fragment.len())
    }

    /// Narrows `span` to the position serde reported inside `fragment`.
    fn error_point(&self, fragment: &str, span: Span, e: &serde_json::Error) -> Span {
        if e.line() == 0 {
            return span;
        }
        let offset = byte_offset(fragment, e.line(), e.column());
        let start = (span.start + offset).min(span.end.saturating_sub(1).max(span.start));
        Span::new(start, (start + 1).min(span.end))
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

/// serde_json messages end with a position relative to the fragment being
/// read; that position is reported through the label instead.
fn strip_location(e: &serde_json::Error) -> String {
    let text = e.to_string();
    match text.rfind(" at line ") {
        Some(i) => text[..i].to_string(),
        None => text,
    }
}

/// Byte offset of a 1-based line and column inside `text`.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

    const CONSOLE_LOG: &str = r#"{
        "type": "File", "start": 0, "end": 17,
        "program": {
            "type": "Program", "start": 0, "end": 17, "sourceType": "module",
            "body": [{
                "type": "ExpressionStatement", "start": 0, "end": 17,
                "expression": {
                    "type": "CallExpression", "start": 0, "end": 17,
                    "callee": {
                        "type": "MemberExpression", "start": 0, "end": 11, "computed": false,
                        "object": { "type": "Identifier", "start": 0, "end": 7, "name": "console" },
                        "property": { "type": "Identifier", "start": 8, "end": 11, "name": "log" }
                    },
                    "arguments": [{
                        "type": "StringLiteral", "start": 12, "end": 16,
                        "extra": { "rawValue": "hi", "raw": "\"hi\"" },
                        "value": "hi"
                    }]
                }
            }]
        }
    }"#;

    #[test]
    fn test_decodes_nested_call() {
        let file = decode_file(CONSOLE_LOG).unwrap();
        assert_eq!(file.program.source_type, "module");
        let Stmt::Expression(stmt) = &file.program.body[0] else {
            panic!("expected an expression statement");
        };
        let Expr::Call(call) = &stmt.expression else {
            panic!("expected a call");
        };
        assert_eq!(call.attr.span(), Span::new(0, 17));
        assert!(matches!(&*call.callee, Expr::Member(m) if !m.computed));
        let Expr::String(arg) = &call.arguments[0] else {
            panic!("expected a string argument");
        };
        assert_eq!(arg.value, "hi");
        assert_eq!(arg.extra.as_ref().unwrap().raw, "\"hi\"");
    }

    #[test]
    fn test_unknown_nested_tag_reports_tag_and_path() {
        let json = CONSOLE_LOG.replace("\"StringLiteral\"", "\"TemplateLiteral\"");
        let err = decode_file(&json).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
        let node = err.node().unwrap();
        assert_eq!(node.tag.as_deref(), Some("TemplateLiteral"));
        assert_eq!(node.path, "program.body[0].expression.arguments[0]");
        assert_eq!(node.span, Some(Span::new(12, 16)));
        assert!(err.to_string().contains("TemplateLiteral"));

        // The label covers the offending object in the JSON text.
        let span = err.span().unwrap();
        assert!(json[span.start..span.end].starts_with('{'));
        assert!(json[span.start..span.end].contains("TemplateLiteral"));
    }

    #[test]
    fn test_unknown_root_tag() {
        let err = decode_file(r#"{"type":"Script","program":{}}"#).unwrap_err();
        assert_eq!(err.node().unwrap().path, "<root>");
        assert!(err.message().contains("unknown node type `Script`"));
    }

    #[test]
    fn test_missing_program_fails() {
        let err = decode_file(r#"{"type":"File","start":0,"end":0}"#).unwrap_err();
        assert!(err.message().contains("missing field `program`"));
        assert_eq!(err.node().unwrap().tag.as_deref(), Some("File"));
    }

    #[test]
    fn test_missing_type_fails() {
        let json = r#"{"type":"File","program":{"type":"Program","body":[{"start":0}]}}"#;
        let err = decode_file(json).unwrap_err();
        assert!(err.message().contains("missing field `type`"));
        let node = err.node().unwrap();
        assert_eq!(node.tag, None);
        assert_eq!(node.path, "program.body[0]");
    }

    #[test]
    fn test_non_object_node_fails() {
        let json = r#"{"type":"File","program":{"type":"Program","body":[42]}}"#;
        let err = decode_file(json).unwrap_err();
        assert_eq!(err.node().unwrap().path, "program.body[0]");
        let span = err.span().unwrap();
        let number_at = json.find("[42]").unwrap() + 1;
        assert!(span.start >= number_at && span.end <= number_at + 2);
    }

    #[test]
    fn test_wrong_field_type_names_the_node() {
        let json = r#"{"type":"File","program":{"type":"Program","body":[
            {"type":"ExpressionStatement","expression":{"type":"Identifier","name":7}}
        ]}}"#;
        let err = decode_file(json).unwrap_err();
        let node = err.node().unwrap();
        assert_eq!(node.tag.as_deref(), Some("Identifier"));
        assert_eq!(node.path, "program.body[0].expression");
        assert!(err.message().contains("invalid type"));
    }

    #[test]
    fn test_expression_in_statement_position() {
        let json = r#"{"type":"File","program":{"type":"Program","body":[
            {"type":"Identifier","name":"x"}
        ]}}"#;
        let err = decode_file(json).unwrap_err();
        assert!(err
            .message()
            .contains("expected statement, found expression `Identifier`"));
    }

    #[test]
    fn test_invalid_json() {
        let err = decode_file("{\"type\": \"File\",").unwrap_err();
        assert!(err.message().starts_with("invalid JSON document"));
        assert!(err.node().is_none());
    }

    #[test]
    fn test_absent_fields_take_zero_values() {
        let json = r#"{"type":"File","program":{"type":"Program"}}"#;
        let file = decode_file(json).unwrap();
        assert_eq!(file.program.source_type, "");
        assert!(file.program.body.is_empty());
        assert_eq!(file.attr.span(), Span::default());

        let expr = decode_expression(
            r#"{"type":"CallExpression","callee":{"type":"Identifier","name":"f"}}"#,
        )
        .unwrap();
        let Expr::Call(call) = expr else {
            panic!("expected a call");
        };
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_declarator_without_init() {
        let stmt = decode_statement(
            r#"{"type":"VariableDeclaration","kind":"let","declarations":[
                {"type":"VariableDeclarator","id":{"type":"Identifier","name":"x"},"init":null},
                {"type":"VariableDeclarator","id":{"type":"Identifier","name":"y"}}
            ]}"#,
        )
        .unwrap();
        let Stmt::VariableDeclaration(decl) = stmt else {
            panic!("expected a declaration");
        };
        assert_eq!(decl.declarations.len(), 2);
        assert!(decl.declarations.iter().all(|d| d.init.is_none()));
    }

    #[test]
    fn test_declarator_id_must_be_identifier() {
        let err = decode_statement(
            r#"{"type":"VariableDeclaration","kind":"let","declarations":[
                {"type":"VariableDeclarator","id":{"type":"StringLiteral","value":"x"}}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(err.node().unwrap().path, "declarations[0].id");
        assert!(err.message().contains("expected Identifier"));
    }

    /// `a.b.b...b()` as a whole document, with `members` member expressions.
    fn member_chain(members: usize) -> String {
        let expr = format!(
            "{}{}{}",
            r#"{"type":"MemberExpression","object":"#.repeat(members),
            r#"{"type":"Identifier","name":"a"}"#,
            r#","property":{"type":"Identifier","name":"b"}}"#.repeat(members)
        );
        format!(
            r#"{{"type":"File","program":{{"type":"Program","body":[{{"type":"ExpressionStatement","expression":{{"type":"CallExpression","callee":{},"arguments":[]}}}}]}}}}"#,
            expr
        )
    }

    // The innermost identifier sits at `program.body[0].expression.callee`
    // followed by one `object` segment per member.
    const CHAIN_OVERHEAD: usize = 4;

    #[test]
    fn test_chain_at_nesting_limit_decodes() {
        let file = decode_file(&member_chain(MAX_NESTING_DEPTH - CHAIN_OVERHEAD)).unwrap();
        let text = crate::stringify::stringify(&file);
        assert!(text.starts_with("a.b.b"));
        assert!(text.ends_with(".b()"));
    }

    #[test]
    fn test_chain_past_nesting_limit_is_rejected() {
        let err = decode_file(&member_chain(MAX_NESTING_DEPTH - CHAIN_OVERHEAD + 1)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
        assert!(err.message().contains("nests deeper than 128 levels"));
        let node = err.node().unwrap();
        assert_eq!(node.tag.as_deref(), Some("Identifier"));
        assert!(node.path.ends_with(".object.object"));
    }

    #[test]
    fn test_very_deep_chain_is_an_error_not_a_crash() {
        let err = decode_file(&member_chain(5000)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Decode);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("abc\ndef", 1, 1), 0);
        assert_eq!(byte_offset("abc\ndef", 2, 2), 5);
        assert_eq!(byte_offset("abc", 9, 9), 3);
    }
}
