//! Node converter contract and the generic dispatcher.
//!
//! A conversion pass walks the source tree top-down. For every source node the
//! [`DocumentConverter`] picks the converter registered for the node's kind, or
//! the generic structural converter when none is registered, and hands it the
//! node together with the target node to attach results under.

pub mod context;
pub mod registry;

use crate::config::ConverterConfig;
use crate::converters::{self, GenericNodeConverter};
use crate::diagnostics::Diagnostic;
use crate::error::{ConversionError, RegistryError};
use crate::grammar::sqlserver;
use crate::tree::SyntaxNode;
use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::trace;

pub use context::ConversionContext;
pub use registry::ConverterRegistry;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Converts one source node kind into its target-dialect equivalent.
///
/// Implementations must not attach anything under `target_parent` other than
/// the subtree rooted at the returned node, and the returned node must be open
/// for further attachment by the caller. Nested parts are converted by calling
/// back into `doc`.
pub trait NodeConverter: Send + Sync {
    /// Stable name used to enable or disable the converter in configuration.
    fn name(&self) -> &'static str;

    /// Source node kind this converter is registered for.
    fn node_kind(&self) -> &'static str;

    fn convert_node<'t>(
        &self,
        doc: &DocumentConverter,
        source: &SyntaxNode,
        target_parent: &'t mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<&'t mut SyntaxNode>;
}

/// Result of converting a whole source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedDocument {
    /// Synthetic `document` node holding the converted tree.
    pub root: SyntaxNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// The generic dispatcher driving a conversion pass.
#[derive(Debug)]
pub struct DocumentConverter {
    registry: ConverterRegistry,
    generic: GenericNodeConverter,
    config: ConverterConfig,
}

impl DocumentConverter {
    /// Builds a dispatcher with every converter the configuration enables.
    pub fn new(config: ConverterConfig) -> Result<Self, RegistryError> {
        let registry = ConverterRegistry::from_converters(
            converters::all_converters()
                .into_iter()
                .filter(|converter| config.is_converter_enabled(converter.name())),
        )?;
        Ok(Self::with_registry(config, registry))
    }

    pub fn with_registry(config: ConverterConfig, registry: ConverterRegistry) -> Self {
        Self {
            registry,
            generic: GenericNodeConverter,
            config,
        }
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts `source` into a fresh target tree.
    ///
    /// Any [`ConversionError`] aborts the pass; no partial tree is returned.
    pub fn convert_document(&self, source: &SyntaxNode) -> ConversionResult<ConvertedDocument> {
        let mut ctx = ConversionContext::new();
        let mut root = SyntaxNode::new(sqlserver::kinds::DOCUMENT);
        self.convert_node(source, &mut root, &mut ctx)?;
        Ok(ConvertedDocument {
            root,
            diagnostics: ctx.into_diagnostics(),
        })
    }

    /// Dispatches `source` to the converter responsible for its kind.
    pub fn convert_node<'t>(
        &self,
        source: &SyntaxNode,
        target_parent: &'t mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<&'t mut SyntaxNode> {
        ctx.enter(source.kind(), self.config.max_depth)?;

        let result = match self.registry.get(source.kind()) {
            Some(converter) => {
                #[cfg(feature = "tracing")]
                trace!(kind = source.kind(), converter = converter.name(), "dispatch");
                converter.convert_node(self, source, target_parent, ctx)
            }
            None => self.generic.convert_node(self, source, target_parent, ctx),
        };

        ctx.leave();
        result
    }

    /// Converts every child of `source`, in order, under `target_parent`.
    pub fn convert_children(
        &self,
        source: &SyntaxNode,
        target_parent: &mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<()> {
        for child in source.children() {
            self.convert_node(child, target_parent, ctx)?;
        }
        Ok(())
    }
}
