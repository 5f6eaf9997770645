//! Defines the command-line arguments and subcommands for the jsgo CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "jsgo",
    version,
    about = "Reconstructs and compiles Babel AST documents to Go."
)]
pub struct JsgoArgs {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
///
/// Every `file` argument accepts `-` for stdin.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the reconstructed JavaScript source.
    Stringify {
        /// The AST document to reconstruct.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the emitted Go text.
    Compile {
        /// The AST document to compile.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit a `package` clause first (overrides the configuration file).
        #[arg(long)]
        package: Option<String>,
    },
    /// Decode and compile every document under a path, reporting failures.
    Check {
        /// A document, or a directory scanned for `.json` documents.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Show the typed tree for a document.
    Ast {
        /// The AST document to decode.
        #[arg(required = true)]
        file: PathBuf,
    },
}
