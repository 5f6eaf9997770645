//!
//! ****************************************************************************************
//! ** ERROR CONSTRUCTION RULES FOR jsgo Error Macros (`err_msg!`, `err_ctx!`)             **
//! ****************************************************************************************
//!
//! # Overview
//!
//! This module defines the unified, `miette`-based diagnostic system for jsgo. Every failure
//! produced while decoding a document, emitting Go text, loading configuration or reading
//! input is a [`JsgoError`]. Construction goes through the `err_msg!` and `err_ctx!` macros.
//!
//! # Error Construction Macros
//!
//! - **Use `err_msg!` for message-only errors.**
//!   - `err_msg!(Unsupported, "cannot emit {}", tag)`
//!
//! - **Use `err_ctx!` for errors pointing into a source document.**
//!   - `err_ctx!(Decode, "unknown node type", src, span)`
//!   - `err_ctx!(Decode, "unknown node type", src, span, help)`
//!
//! # Rules
//!
//! - **Pass `src` as a `&SourceArc` and `span` as a [`Span`].** The macro clones the source.
//! - **Attach node identity with [`JsgoError::with_node`]** rather than formatting it twice.
//! - **Never pass a `usize` as a span.** Build a `Span { start, end }`.
//!
//! ****************************************************************************************

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::ast::{SourceLocation, Span};

// Type aliases for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Convenient `Result` alias for fallible jsgo operations.
pub type Result<T> = std::result::Result<T, JsgoError>;

/// Type-safe error classification enum that corresponds to `JsgoError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Malformed documents, missing mandatory fields, unknown node tags
    Decode,
    /// Constructs that have no Go form
    Unsupported,
    /// Unreadable or invalid configuration
    Config,
    /// File system and stdin failures
    Io,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Decode => "Decode",
            ErrorType::Unsupported => "Unsupported",
            ErrorType::Config => "Config",
            ErrorType::Io => "Io",
        }
    }

    /// Diagnostic code reported through `miette`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::Decode => "jsgo::decode",
            ErrorType::Unsupported => "jsgo::unsupported",
            ErrorType::Config => "jsgo::config",
            ErrorType::Io => "jsgo::io",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of the AST node an error is about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRef {
    /// Discriminator tag, when it could be read.
    pub tag: Option<String>,
    /// Dotted path from the document root, e.g. `program.body[0].expression`.
    pub path: String,
    /// Byte span of the node in the original JavaScript source.
    pub span: Option<Span>,
    pub loc: Option<SourceLocation>,
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "`{}` at `{}`", tag, self.path)?,
            None => write!(f, "node at `{}`", self.path)?,
        }
        if let Some(loc) = &self.loc {
            write!(f, " (line {}, column {})", loc.start.line, loc.start.column)?;
        } else if let Some(span) = &self.span {
            write!(f, " (offset {}..{})", span.start, span.end)?;
        }
        Ok(())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The document the span points into (if any).
    pub source: Option<SourceArc>,
    /// Byte span inside `source`.
    pub span: Option<Span>,
    pub help: Option<String>,
    /// The node the error is about (if any).
    pub node: Option<NodeRef>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            ..Self::default()
        }
    }
}

/// Unified error type for every jsgo failure mode.
#[derive(Debug, Error)]
pub enum JsgoError {
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Unsupported: {message}")]
    Unsupported {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("IO error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl JsgoError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            JsgoError::Decode { ctx, .. } => ctx,
            JsgoError::Unsupported { ctx, .. } => ctx,
            JsgoError::Config { ctx, .. } => ctx,
            JsgoError::Io { ctx, .. } => ctx,
        }
    }

    fn get_ctx_mut(&mut self) -> &mut ErrorContext {
        match self {
            JsgoError::Decode { ctx, .. } => ctx,
            JsgoError::Unsupported { ctx, .. } => ctx,
            JsgoError::Config { ctx, .. } => ctx,
            JsgoError::Io { ctx, .. } => ctx,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            JsgoError::Decode { .. } => ErrorType::Decode,
            JsgoError::Unsupported { .. } => ErrorType::Unsupported,
            JsgoError::Config { .. } => ErrorType::Config,
            JsgoError::Io { .. } => ErrorType::Io,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            JsgoError::Decode { message, .. } => message,
            JsgoError::Unsupported { message, .. } => message,
            JsgoError::Config { message, .. } => message,
            JsgoError::Io { message, .. } => message,
        }
    }

    /// The node this error is about, if one was attached.
    pub fn node(&self) -> Option<&NodeRef> {
        self.get_ctx().node.as_ref()
    }

    /// The byte span in the labeled document, if one was attached.
    pub fn span(&self) -> Option<Span> {
        self.get_ctx().span
    }

    pub fn with_node(mut self, node: NodeRef) -> Self {
        self.get_ctx_mut().node = Some(node);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.get_ctx_mut().help = Some(help.into());
        self
    }

    /// Attaches the underlying cause.
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match &mut self {
            JsgoError::Decode { source, .. }
            | JsgoError::Unsupported { source, .. }
            | JsgoError::Config { source, .. }
            | JsgoError::Io { source, .. } => *source = Some(Box::new(cause)),
        }
        self
    }
}

impl Diagnostic for JsgoError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.error_type().code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.get_ctx();
        // A span without a document has nothing to point at.
        ctx.source.as_ref()?;
        let span = ctx.span?;
        let text = match &ctx.node {
            Some(node) => node
                .tag
                .clone()
                .unwrap_or_else(|| "this node".to_string()),
            None => self.message().to_string(),
        };
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(text),
            span.start,
            len,
        ))))
    }
}

/// Converts a document into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(name: &str, source: S) -> SourceArc {
    Arc::new(NamedSource::new(name, source.as_ref().to_string()))
}

/// Constructs a `JsgoError` variant with a formatted message and no context.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $($arg:tt)+) => {
        $crate::JsgoError::$variant {
            message: format!($($arg)+),
            ctx: $crate::ErrorContext::none(),
            source: None,
        }
    };
}

/// Constructs a `JsgoError` variant pointing at `span` inside the document `src`.
#[macro_export]
macro_rules! err_ctx {
    // Message, src, span, help
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::JsgoError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext {
                source: Some($crate::diagnostics::SourceArc::clone($src)),
                span: Some($span),
                help: Some(format!("{}", $help)),
                node: None,
            },
            source: None,
        }
    };
    // Message, src, span
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::JsgoError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_source_and_span(
                $crate::diagnostics::SourceArc::clone($src),
                $span,
            ),
            source: None,
        }
    };
}
