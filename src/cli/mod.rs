//! The jsgo Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::path::Path;
use std::{fs, process};

use clap::Parser;
use tracing::{debug, warn};

use crate::cli::args::{Command, JsgoArgs};
use crate::config::Config;
use crate::discovery::discover_documents;
use crate::emit::{OutputSink, StdoutSink};
use crate::engine::Transpiler;
use crate::{err_msg, Result};

pub mod args;
pub mod output;

/// Path argument that reads the document from stdin.
const STDIN_PATH: &str = "-";

/// The main entry point for the CLI.
pub fn run() {
    let args = JsgoArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(e);
            process::exit(1);
        }
    };
    if let Err(e) = crate::telemetry::init(&config.log) {
        output::print_error(e);
        process::exit(1);
    }

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Stringify { file } => handle_stringify(config, &file),
        Command::Compile { file, package } => handle_compile(config, &file, package),
        Command::Check { path } => handle_check(config, &path),
        Command::Ast { file } => handle_ast(config, &file),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            output::print_error(e);
            process::exit(1);
        }
    }
}

fn load_config(args: &JsgoArgs) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.json_logs {
        return Ok(config.with_json_logs(true));
    }
    Ok(config)
}

// ============================================================================
// SUBCOMMAND HANDLERS
// ============================================================================
//
// Each handler returns `Ok(false)` when it already reported its failures.

fn handle_stringify(config: Config, path: &Path) -> Result<bool> {
    let transpiler = Transpiler::new(config);
    let (name, json) = read_document(path)?;
    let file = transpiler.decode(&name, &json)?;
    let mut sink = StdoutSink::stdout();
    sink.emit(&transpiler.stringify(&file), None);
    sink.emit("\n", None);
    finish_stdout(sink)?;
    Ok(true)
}

fn handle_compile(config: Config, path: &Path, package: Option<String>) -> Result<bool> {
    let config = match package {
        Some(package) => config.with_package(package)?,
        None => config,
    };
    let transpiler = Transpiler::new(config);
    let (name, json) = read_document(path)?;
    let file = transpiler.decode(&name, &json)?;
    let mut sink = StdoutSink::stdout();
    transpiler.compile_into(&file, &mut sink)?;
    finish_stdout(sink)?;
    Ok(true)
}

fn handle_check(config: Config, root: &Path) -> Result<bool> {
    let transpiler = Transpiler::new(config);
    let documents = if root == Path::new(STDIN_PATH) {
        vec![root.to_path_buf()]
    } else {
        discover_documents(root)?
    };
    if documents.is_empty() {
        warn!(root = %root.display(), "no documents found");
    }

    let mut passed = 0;
    let mut failed = 0;
    for path in &documents {
        let outcome = read_document(path).and_then(|(name, json)| transpiler.check(&name, &json));
        match outcome {
            Ok(statements) => {
                passed += 1;
                output::print_check_line(path, Some(statements));
            }
            Err(e) => {
                failed += 1;
                output::print_check_line(path, None);
                output::print_error(e);
            }
        }
    }

    output::print_check_summary(passed, failed);
    Ok(failed == 0)
}

fn handle_ast(config: Config, path: &Path) -> Result<bool> {
    let transpiler = Transpiler::new(config);
    let (name, json) = read_document(path)?;
    let file = transpiler.decode(&name, &json)?;
    output::print_ast(&file);
    Ok(true)
}

// ============================================================================
// INPUT AND OUTPUT
// ============================================================================

fn finish_stdout(sink: StdoutSink) -> Result<()> {
    sink.finish()
        .map(|_| ())
        .map_err(|e| err_msg!(Io, "failed to write to stdout").caused_by(e))
}

/// Reads a document, returning its display name and text.
fn read_document(path: &Path) -> Result<(String, String)> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| err_msg!(Io, "failed to read stdin").caused_by(e))?;
        debug!(bytes = text.len(), "read document from stdin");
        return Ok(("<stdin>".to_string(), text));
    }

    let text = fs::read_to_string(path)
        .map_err(|e| err_msg!(Io, "failed to read '{}'", path.display()).caused_by(e))?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok((path.display().to_string(), text))
}
