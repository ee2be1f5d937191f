//! Structural converter used for every kind without a specialized converter.

use crate::converter::{ConversionContext, ConversionResult, DocumentConverter};
use crate::diagnostics::{codes, Diagnostic};
use crate::grammar::{map_kind, oracle};
use crate::tree::SyntaxNode;

/// Copies a node into the target tree under its mapped kind.
///
/// Attributes are copied verbatim and children are dispatched in order. Kinds
/// outside the source vocabulary keep their label and produce an
/// [`codes::UNMAPPED_NODE_KIND`] warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericNodeConverter;

impl GenericNodeConverter {
    pub fn convert_node<'t>(
        &self,
        doc: &DocumentConverter,
        source: &SyntaxNode,
        target_parent: &'t mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<&'t mut SyntaxNode> {
        let target_kind = match map_kind(source.kind()) {
            Some(kind) => kind.to_string(),
            None => {
                ctx.report(
                    Diagnostic::warning(
                        codes::UNMAPPED_NODE_KIND,
                        format!("no target equivalent for '{}' nodes", source.kind()),
                    )
                    .with_node_kind(source.kind()),
                );
                source.kind().to_string()
            }
        };

        if source.is(oracle::kinds::RAW_STATEMENT) {
            ctx.report(
                Diagnostic::info(
                    codes::RAW_STATEMENT,
                    "statement copied as text without conversion",
                )
                .with_node_kind(source.kind()),
            );
        }

        let target = target_parent.add_child(target_kind);
        for (name, value) in source.attributes() {
            target.set_attribute(name, value);
        }
        doc.convert_children(source, target, ctx)?;
        Ok(target)
    }
}
