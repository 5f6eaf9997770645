// End-to-end tests over fixture documents: decode, stringify and compile
// through the public API.

mod common;

use jsgo::ast::{Expr, Node, NodeKind, Stmt};
use jsgo::config::Config;
use jsgo::decode::{decode_file, decode_file_named};
use jsgo::engine::{compile_to_string, Transpiler};
use jsgo::stringify::stringify;
use jsgo::ErrorType;

use common::fixture;

#[test]
fn console_log_round_trip() {
    let file = decode_file(&fixture("console_log.json")).unwrap();
    assert_eq!(stringify(&file), "console.log(\"hello\")");
    assert_eq!(compile_to_string(&file).unwrap(), "Console.Log(\"hello\")\n");
}

#[test]
fn console_log_keeps_positions_and_raw_text() {
    let file = decode_file(&fixture("console_log.json")).unwrap();
    assert_eq!(file.program.source_type, "module");
    assert_eq!(file.span().end, 20);

    let Stmt::Expression(stmt) = &file.program.body[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Call(call) = &stmt.expression else {
        panic!("expected a call");
    };
    let Expr::String(literal) = &call.arguments[0] else {
        panic!("expected a string literal");
    };
    assert_eq!(literal.value, "hello");
    assert_eq!(literal.extra.as_ref().map(|e| e.raw.as_str()), Some("\"hello\""));
    assert_eq!(literal.kind(), NodeKind::StringLiteral);
    assert_eq!((literal.attr.start, literal.attr.end), (12, 19));
}

#[test]
fn empty_program_renders_nothing() {
    let file = decode_file(&fixture("empty.json")).unwrap();
    assert!(file.program.body.is_empty());
    assert_eq!(stringify(&file), "");
    assert_eq!(compile_to_string(&file).unwrap(), "");
}

#[test]
fn member_chain_exports_every_segment() {
    let file = decode_file(&fixture("member_chain.json")).unwrap();
    assert_eq!(stringify(&file), "a.b.c()");
    assert_eq!(compile_to_string(&file).unwrap(), "A.B.C()\n");
}

#[test]
fn let_declaration_keeps_reconstruction_gaps() {
    let file = decode_file(&fixture("let_declaration.json")).unwrap();
    assert_eq!(stringify(&file), "letx1");
    assert_eq!(compile_to_string(&file).unwrap(), "var X = 1\n");
}

#[test]
fn unknown_node_reports_its_path() {
    let err = decode_file(&fixture("unknown_node.json")).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Decode);
    let node = err.node().unwrap();
    assert_eq!(node.tag.as_deref(), Some("TemplateLiteral"));
    assert_eq!(node.path, "program.body[0].expression.arguments[0]");
    assert!(err.message().contains("unknown node type `TemplateLiteral`"));
}

#[test]
fn const_without_initializer_fails_compile_only() {
    let file = decode_file(&fixture("const_without_init.json")).unwrap();
    assert_eq!(stringify(&file), "constx");
    let err = compile_to_string(&file).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Unsupported);
}

#[test]
fn every_fixture_renders_the_same_twice() {
    for name in [
        "console_log.json",
        "empty.json",
        "member_chain.json",
        "let_declaration.json",
    ] {
        let file = decode_file(&fixture(name)).unwrap();
        assert_eq!(stringify(&file), stringify(&file), "{name}");
        assert_eq!(
            compile_to_string(&file).unwrap(),
            compile_to_string(&file).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn transpiler_applies_configured_package() {
    let config = Config::from_yaml_str("package: main\n").unwrap();
    let transpiler = Transpiler::new(config);
    let file = transpiler
        .decode("console_log.json", &fixture("console_log.json"))
        .unwrap();
    assert_eq!(
        transpiler.compile(&file).unwrap(),
        "package main\n\nConsole.Log(\"hello\")\n"
    );
}

#[test]
fn check_counts_top_level_statements() {
    let transpiler = Transpiler::default();
    assert_eq!(
        transpiler
            .check("member_chain.json", &fixture("member_chain.json"))
            .unwrap(),
        1
    );
    assert_eq!(transpiler.check("empty.json", &fixture("empty.json")).unwrap(), 0);
}

#[test]
fn decode_errors_name_the_document() {
    use miette::{Diagnostic, SourceSpan, SpanContents};

    let err = decode_file_named("broken.json", "{\"type\": \"File\"").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Decode);
    let source = err.source_code().unwrap();
    let contents = source.read_span(&SourceSpan::new(0.into(), 0), 0, 0).unwrap();
    assert_eq!(contents.name(), Some("broken.json"));
}
