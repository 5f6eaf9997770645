//! # jsgo
//!
//! Typed Babel/ESTree AST documents: decoded from JSON, reconstructed as
//! JavaScript source, or compiled to Go text.
//!
//! ```
//! let json = r#"{"type":"File","program":{"type":"Program","body":[
//!     {"type":"ExpressionStatement","expression":{"type":"CallExpression",
//!      "callee":{"type":"Identifier","name":"run"},"arguments":[]}}]}}"#;
//! let file = jsgo::decode::decode_file(json).unwrap();
//! assert_eq!(jsgo::stringify::stringify(&file), "run()");
//! assert_eq!(jsgo::engine::compile_to_string(&file).unwrap(), "Run()\n");
//! ```

pub use crate::diagnostics::{to_error_source, ErrorContext, ErrorType, JsgoError, Result};

pub mod ast;
pub mod cli;
pub mod config;
pub mod decode;
pub mod diagnostics;
pub mod discovery;
pub mod emit;
pub mod engine;
pub mod stringify;
pub mod telemetry;
