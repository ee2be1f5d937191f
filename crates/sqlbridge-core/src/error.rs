//! Error types for parsing and conversion.
//!
//! # Error Handling Strategy
//!
//! - [`ParseError`]: the SQL front end could not parse its input.
//! - [`RegistryError`]: the converter set is inconsistent. Raised once, when a
//!   [`crate::DocumentConverter`] is built.
//! - [`ConversionError`]: a conversion pass cannot continue. Any such error
//!   aborts the whole pass and the partially built target tree is dropped.
//! - [`crate::Diagnostic`]: non-fatal findings collected in the
//!   [`crate::ConversionContext`] and returned next to the converted tree.
//!
//! A converter declining to handle a node (and delegating instead) is not an
//! error at all.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::trace;

/// Fatal error raised while converting a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A node matched a converter's shape check but lacks a part its grammar guarantees.
    #[error("{node_kind} node is missing expected {expected}")]
    MissingSubstructure {
        node_kind: String,
        expected: &'static str,
    },

    #[error("conversion exceeded maximum nesting depth of {max_depth} at {node_kind} node")]
    DepthLimitExceeded { node_kind: String, max_depth: usize },
}

impl ConversionError {
    pub fn missing(node_kind: impl Into<String>, expected: &'static str) -> Self {
        Self::MissingSubstructure {
            node_kind: node_kind.into(),
            expected,
        }
    }
}

/// Error raised while assembling the converter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("converters '{existing}' and '{duplicate}' are both registered for node kind '{kind}'")]
    DuplicateConverter {
        kind: &'static str,
        existing: &'static str,
        duplicate: &'static str,
    },
}

/// Any error of the SQL-to-SQL pipeline.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Error encountered during SQL parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Human-readable error message.
    pub message: String,
    /// Location of the error, if the parser reported one.
    pub position: Option<Position>,
    pub kind: ParseErrorKind,
}

/// Position information for a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

/// Category of parse error for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorKind {
    /// Unexpected token or character in input.
    #[default]
    SyntaxError,
    /// Invalid or unexpected end of input.
    UnexpectedEof,
    /// Lexer/tokenization error.
    LexerError,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            kind: ParseErrorKind::SyntaxError,
        }
    }

    /// Parses the position out of sqlparser's "... at Line: X, Column: Y" suffix.
    fn parse_position_from_message(message: &str) -> Option<Position> {
        static POSITION_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = POSITION_REGEX.get_or_init(|| {
            Regex::new(r"Line:\s*(\d+)\s*,\s*Column:\s*(\d+)").expect("Invalid regex pattern")
        });

        let result = re.captures(message).and_then(|caps| {
            let line: usize = caps.get(1)?.as_str().parse().ok()?;
            let column: usize = caps.get(2)?.as_str().parse().ok()?;
            Some(Position { line, column })
        });

        #[cfg(feature = "tracing")]
        if result.is_none() && message.contains("Line") {
            trace!("No position found in parser message: {}", message);
        }

        result
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error")?;

        if let Some(pos) = self.position {
            write!(f, " at line {}, column {}", pos.line, pos.column)?;
        }

        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<sqlparser::parser::ParserError> for ParseError {
    fn from(err: sqlparser::parser::ParserError) -> Self {
        let kind = match &err {
            sqlparser::parser::ParserError::TokenizerError(_) => ParseErrorKind::LexerError,
            _ if err.to_string().to_lowercase().contains("eof") => ParseErrorKind::UnexpectedEof,
            _ => ParseErrorKind::SyntaxError,
        };
        let message = err.to_string();
        let position = Self::parse_position_from_message(&message);

        Self {
            message,
            position,
            kind,
        }
    }
}
