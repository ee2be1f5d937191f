//! Non-fatal findings collected during a conversion pass.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Machine-readable diagnostic codes.
pub mod codes {
    /// A source node kind has no counterpart in the target vocabulary.
    pub const UNMAPPED_NODE_KIND: &str = "UNMAPPED_NODE_KIND";
    /// A source statement was carried over as opaque text.
    pub const RAW_STATEMENT: &str = "RAW_STATEMENT";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,

    /// Machine-readable code from [`codes`]
    pub code: String,

    pub message: String,

    /// Source node kind the diagnostic refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_kind: Option<String>,
}

impl Diagnostic {
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            node_kind: None,
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.into(),
            message: message.into(),
            node_kind: None,
        }
    }

    pub fn with_node_kind(mut self, kind: impl Into<String>) -> Self {
        self.node_kind = Some(kind.into());
        self
    }
}
