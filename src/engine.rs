//! Pipeline orchestration: decode, then stringify and/or compile.
//!
//! The tree is never mutated after decoding, so one [`File`] can be
//! stringified and compiled any number of times, in any order.

use tracing::{debug, info_span};

use crate::ast::{File, Span};
use crate::config::Config;
use crate::decode;
use crate::emit::{Compile, OutputBuffer, OutputSink};
use crate::stringify;
use crate::Result;

// ============================================================================
// FREE-STANDING ENTRY POINTS
// ============================================================================

/// Compiles `file` into `sink`, all or nothing.
///
/// Output is staged first and only replayed into `sink` once the whole tree
/// compiled, so a failing statement never leaves partial Go text behind.
pub fn compile(file: &File, sink: &mut dyn OutputSink) -> Result<()> {
    let mut staged = StagedOutput::default();
    file.compile(&mut staged)?;
    staged.replay(sink);
    Ok(())
}

/// Compiles `file` to a Go string.
pub fn compile_to_string(file: &File) -> Result<String> {
    let mut out = OutputBuffer::new();
    compile(file, &mut out)?;
    Ok(out.into_string())
}

/// Writes recorded with their spans, replayed in order.
#[derive(Default)]
struct StagedOutput {
    pieces: Vec<(String, Option<Span>)>,
}

impl OutputSink for StagedOutput {
    fn emit(&mut self, text: &str, span: Option<&Span>) {
        self.pieces.push((text.to_string(), span.copied()));
    }
}

impl StagedOutput {
    fn replay(self, sink: &mut dyn OutputSink) {
        for (text, span) in self.pieces {
            sink.emit(&text, span.as_ref());
        }
    }
}

// ============================================================================
// CONFIGURED PIPELINE
// ============================================================================

/// The decode → render pipeline under one [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    config: Config,
}

impl Transpiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes the document `json`, naming it `name` in diagnostics.
    pub fn decode(&self, name: &str, json: &str) -> Result<File> {
        let _span = info_span!("decode", document = name).entered();
        decode::decode_file_named(name, json)
    }

    pub fn stringify(&self, file: &File) -> String {
        stringify::stringify(file)
    }

    /// Compiles into `sink`, preceded by the configured package clause.
    pub fn compile_into(&self, file: &File, sink: &mut dyn OutputSink) -> Result<()> {
        let _span = info_span!("compile", statements = file.program.body.len()).entered();
        let mut staged = StagedOutput::default();
        compile(file, &mut staged)?;
        if let Some(package) = &self.config.package {
            sink.emit(&format!("package {}\n\n", package), None);
        }
        staged.replay(sink);
        debug!("compiled document");
        Ok(())
    }

    pub fn compile(&self, file: &File) -> Result<String> {
        let mut out = OutputBuffer::new();
        self.compile_into(file, &mut out)?;
        Ok(out.into_string())
    }

    /// Decodes and compiles `json` without keeping the Go text.
    ///
    /// Returns the number of top-level statements.
    pub fn check(&self, name: &str, json: &str) -> Result<usize> {
        let file = self.decode(name, json)?;
        compile(&file, &mut crate::emit::NullSink)?;
        Ok(file.program.body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builder::*;

    #[test]
    fn test_failed_compile_leaves_sink_untouched() {
        let file = file(vec![
            expr_stmt(call(ident("first"), vec![])),
            var_decl("const", vec![declarator("x", None)]),
        ]);
        let mut out = OutputBuffer::new();
        assert!(compile(&file, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_package_clause_precedes_program() {
        let config = Config::default().with_package("main").unwrap();
        let transpiler = Transpiler::new(config);
        let file = file(vec![expr_stmt(call(ident("run"), vec![]))]);
        assert_eq!(transpiler.compile(&file).unwrap(), "package main\n\nRun()\n");
    }

    #[test]
    fn test_no_package_clause_by_default() {
        let file = file(vec![]);
        assert_eq!(Transpiler::default().compile(&file).unwrap(), "");
    }

    #[test]
    fn test_traversals_are_repeatable() {
        let file = file(vec![expr_stmt(call(
            member(ident("console"), ident("log")),
            vec![string("hi")],
        ))]);
        let transpiler = Transpiler::default();
        assert_eq!(transpiler.stringify(&file), transpiler.stringify(&file));
        assert_eq!(
            transpiler.compile(&file).unwrap(),
            transpiler.compile(&file).unwrap()
        );
    }
}
