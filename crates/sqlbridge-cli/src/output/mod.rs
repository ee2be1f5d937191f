//! Output formatting modules.

pub mod diagnostics;
pub mod json;
pub mod text;

pub use diagnostics::format_diagnostics;
pub use json::format_json;
pub use text::{format_sql, format_tree};

use serde::Serialize;
use sqlbridge_core::ConvertedDocument;

/// A converted input document, labelled with the input it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedFile {
    pub name: String,
    #[serde(flatten)]
    pub document: ConvertedDocument,
}
