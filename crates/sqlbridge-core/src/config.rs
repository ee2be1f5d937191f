//! Configuration for the document converter.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default nesting limit for a conversion pass.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration for a [`crate::DocumentConverter`].
///
/// Controls which specialized converters are registered. By default all are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Names of specialized converters to leave out (e.g., ["aggregate-over-expression"]).
    /// Node kinds they handled fall back to the generic converter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_converters: Vec<String>,

    /// Maximum nesting depth of a conversion pass (default: 100).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            disabled_converters: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl ConverterConfig {
    /// Returns true unless the named converter is disabled.
    pub fn is_converter_enabled(&self, name: &str) -> bool {
        !self.disabled_converters.iter().any(|c| c == name)
    }
}
