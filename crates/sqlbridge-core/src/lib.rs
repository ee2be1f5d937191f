//! Cross-dialect SQL syntax tree conversion.
//!
//! SQL text is parsed and lowered into a source-dialect [`SyntaxNode`] tree,
//! converted node by node into a target-dialect tree by a
//! [`DocumentConverter`], and rendered back to SQL with [`render_sql`].
//!
//! ```
//! use sqlbridge_core::{convert_sql, render_sql, ConverterConfig, DocumentConverter};
//!
//! let converter = DocumentConverter::new(ConverterConfig::default()).unwrap();
//! let converted = convert_sql("SELECT first_value(a) OVER (PARTITION BY b) FROM t", &converter).unwrap();
//! assert_eq!(
//!     render_sql(&converted.root),
//!     "SELECT FIRST_VALUE(a) OVER (PARTITION BY b) FROM t"
//! );
//! ```

pub mod config;
pub mod converter;
pub mod converters;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod lower;
pub mod naming;
pub mod parser;
pub mod render;
pub mod tree;

pub use config::ConverterConfig;
pub use converter::{
    ConversionContext, ConversionResult, ConvertedDocument, ConverterRegistry, DocumentConverter,
    NodeConverter,
};
pub use diagnostics::{codes, Diagnostic, Severity};
pub use error::{ConversionError, ParseError, PipelineError, RegistryError};
pub use lower::{lower_expr, lower_statements};
pub use naming::{qualified_name, Identifier, QualifiedName};
pub use parser::{parse_expression, parse_sql};
pub use render::render_sql;
pub use tree::SyntaxNode;

/// Parses, lowers and converts a SQL script.
pub fn convert_sql(sql: &str, converter: &DocumentConverter) -> Result<ConvertedDocument, PipelineError> {
    let statements = parse_sql(sql)?;
    let source = lower_statements(&statements);
    Ok(converter.convert_document(&source)?)
}
