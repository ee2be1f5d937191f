//! Default converter for over-expression nodes.

use crate::converter::{ConversionContext, ConversionResult, DocumentConverter, NodeConverter};
use crate::grammar::{oracle, sqlserver};
use crate::tree::SyntaxNode;

/// Converts `FUNC(...) OVER (...)` without any function-specific handling.
///
/// For the usual two-child shape the function identifier is dispatched as is
/// and every child of the OVER parameters lands in a target
/// `over-expression-params` container. Any other shape has its children
/// dispatched directly under the target over-expression.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultOverExpressionConverter;

impl DefaultOverExpressionConverter {
    pub const NAME: &'static str = "over-expression";

    pub fn new() -> Self {
        Self
    }
}

impl NodeConverter for DefaultOverExpressionConverter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn node_kind(&self) -> &'static str {
        oracle::kinds::OVER_EXPRESSION
    }

    fn convert_node<'t>(
        &self,
        doc: &DocumentConverter,
        source: &SyntaxNode,
        target_parent: &'t mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<&'t mut SyntaxNode> {
        let over_expression = target_parent.add_child(sqlserver::kinds::OVER_EXPRESSION);

        match source.children() {
            [function, params] if params.is(oracle::kinds::OVER_EXPRESSION_PARAMS) => {
                doc.convert_node(function, over_expression, ctx)?;
                let target_params =
                    over_expression.add_child(sqlserver::kinds::OVER_EXPRESSION_PARAMS);
                doc.convert_children(params, target_params, ctx)?;
            }
            children => {
                for child in children {
                    doc.convert_node(child, over_expression, ctx)?;
                }
            }
        }

        Ok(over_expression)
    }
}
