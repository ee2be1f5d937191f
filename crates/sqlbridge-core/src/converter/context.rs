//! Mutable state threaded through a conversion pass.

use crate::diagnostics::Diagnostic;
use crate::error::ConversionError;

/// Per-pass state passed by `&mut` through every conversion call.
///
/// Specialized converters treat the context as opaque and forward it
/// unchanged; the dispatcher maintains the depth guard and the generic
/// converter reports diagnostics.
#[derive(Debug, Default)]
pub struct ConversionContext {
    diagnostics: Vec<Diagnostic>,
    depth: usize,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Current nesting depth of the dispatcher.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter(&mut self, node_kind: &str, max_depth: usize) -> Result<(), ConversionError> {
        if self.depth >= max_depth {
            return Err(ConversionError::DepthLimitExceeded {
                node_kind: node_kind.to_string(),
                max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
