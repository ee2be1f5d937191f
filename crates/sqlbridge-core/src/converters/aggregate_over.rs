//! Over-expression rewrite for whitelisted aggregate functions.
//!
//! `FIRST_VALUE(expr) OVER (...)` in the source grammar becomes a target
//! over-expression whose function is a simple identifier carrying its own
//! argument container:
//!
//! ```text
//! over-expression
//!   simple-identifier text=FIRST_VALUE value=FIRST_VALUE
//!     simple-identifier-params
//!       <converted argument list>
//!   over-expression-params
//!     <converted first OVER parameter>
//! ```
//!
//! Every node that does not match is handed, untouched, to
//! [`DefaultOverExpressionConverter`].

use super::DefaultOverExpressionConverter;
use crate::converter::{ConversionContext, ConversionResult, DocumentConverter, NodeConverter};
use crate::error::ConversionError;
use crate::grammar::{oracle, sqlserver};
use crate::naming::qualified_name;
use crate::tree::SyntaxNode;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Aggregate functions rewritten by this converter, by canonical spelling.
pub const SUPPORTED_AGGREGATE_FUNCTIONS: &[&str] = &["FIRST_VALUE"];

/// Case-insensitive membership test on a canonical function name.
pub fn is_supported_aggregate(canonical: &str) -> bool {
    SUPPORTED_AGGREGATE_FUNCTIONS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(canonical))
}

/// Outcome of matching a source over-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverMatch<'s> {
    Rewrite(MatchedOver<'s>),
    Delegate(DelegateReason),
}

/// The parts of a source over-expression that the rewrite reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedOver<'s> {
    /// Canonical spelling of the function name.
    pub function_name: String,
    pub function_identifier: &'s SyntaxNode,
    pub over_params: &'s SyntaxNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateReason {
    /// The node does not have exactly two children.
    Shape,
    /// The function identifier yields no name.
    Unnamed,
    /// The function name is qualified.
    MultiPartName,
    /// The function is not in [`SUPPORTED_AGGREGATE_FUNCTIONS`].
    Unsupported,
}

/// Decides whether `source` is rewritten or delegated.
pub fn match_over_expression(source: &SyntaxNode) -> OverMatch<'_> {
    let [function_identifier, over_params] = source.children() else {
        return OverMatch::Delegate(DelegateReason::Shape);
    };

    let Some(name) = qualified_name(function_identifier) else {
        return OverMatch::Delegate(DelegateReason::Unnamed);
    };
    let Some(part) = name.single() else {
        return OverMatch::Delegate(DelegateReason::MultiPartName);
    };
    if !is_supported_aggregate(&part.canonical) {
        return OverMatch::Delegate(DelegateReason::Unsupported);
    }

    OverMatch::Rewrite(MatchedOver {
        function_name: part.canonical.clone(),
        function_identifier,
        over_params,
    })
}

/// Rewrites over-expressions of whitelisted aggregates, delegating the rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregateOverExpressionConverter {
    fallback: DefaultOverExpressionConverter,
}

impl AggregateOverExpressionConverter {
    pub const NAME: &'static str = "aggregate-over-expression";

    pub fn new() -> Self {
        Self {
            fallback: DefaultOverExpressionConverter::new(),
        }
    }

    fn rewrite<'t>(
        &self,
        doc: &DocumentConverter,
        source: &SyntaxNode,
        matched: &MatchedOver<'_>,
        target_parent: &'t mut SyntaxNode,
        ctx: &mut ConversionContext,
    ) -> ConversionResult<&'t mut SyntaxNode> {
        let arguments = matched
            .function_identifier
            .find_descendant(oracle::kinds::EXPRESSION_LIST)
            .ok_or_else(|| {
                ConversionError::missing(source.kind(), "expression-list under the function identifier")
            })?;
        let first_param = matched.over_params.first_child().ok_or_else(|| {
            ConversionError::missing(source.kind(), "child under the OVER parameters")
        })?;

        let over_expression = target_parent.add_child(sqlserver::kinds::OVER_EXPRESSION);

        let identifier = over_expression.add_child(sqlserver::kinds::SIMPLE_IDENTIFIER);
        identifier.set_attribute(sqlserver::attributes::TEXT, matched.function_name.as_str());
        identifier.set_attribute(sqlserver::attributes::VALUE, matched.function_name.as_str());
        let identifier_params = identifier.add_child(sqlserver::kinds::SIMPLE_IDENTIFIER_PARAMS);
        doc.convert_node(arguments, identifier_params, ctx)?;

        // Only the first OVER parameter is carried over; the source grammar
        // wraps the whole window in a single analytic clause.
        let target_params = over_expression.add_child(sqlserver::kinds::OVER_EXPRESSION_PARAMS);
        doc.convert_node(first_param, target_params, ctx)?;

        Ok(over_expression)
    }
}

impl NodeConverter for AggregateOverExpressionConverter {
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
        match match_over_expression(source) {
            OverMatch::Rewrite(matched) => self.rewrite(doc, source, &matched, target_parent, ctx),
            OverMatch::Delegate(_reason) => {
                #[cfg(feature = "tracing")]
                debug!(reason = ?_reason, "delegating over-expression to default converter");
                self.fallback.convert_node(doc, source, target_parent, ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use crate::grammar::oracle::{attributes, kinds};
    use rstest::rstest;

    fn raw(text: &str) -> SyntaxNode {
        SyntaxNode::new(kinds::RAW_EXPRESSION).with_attribute(attributes::TEXT, text)
    }

    fn function(parts: &[&str], args: &[&str]) -> SyntaxNode {
        let mut list = SyntaxNode::new(kinds::EXPRESSION_LIST);
        for arg in args {
            list.push_child(raw(arg));
        }
        let mut identifier = SyntaxNode::new(kinds::IDENTIFIER);
        for part in parts {
            identifier.push_child(
                SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, *part),
            );
        }
        identifier.with_child(SyntaxNode::new(kinds::FUNCTION_ARGUMENTS).with_child(list))
    }

    fn over(function: SyntaxNode, params: &[&str]) -> SyntaxNode {
        let mut over_params = SyntaxNode::new(kinds::OVER_EXPRESSION_PARAMS);
        for param in params {
            over_params.push_child(raw(param));
        }
        SyntaxNode::new(kinds::OVER_EXPRESSION)
            .with_child(function)
            .with_child(over_params)
    }

    fn run(converter: &dyn NodeConverter, source: &SyntaxNode) -> ConversionResult<SyntaxNode> {
        let doc = DocumentConverter::new(ConverterConfig::default()).unwrap();
        let mut parent = SyntaxNode::new(sqlserver::kinds::DOCUMENT);
        let mut ctx = ConversionContext::new();
        converter.convert_node(&doc, source, &mut parent, &mut ctx)?;
        Ok(parent)
    }

    #[test]
    fn rewrites_first_value() {
        let source = over(function(&["first_value"], &["col1"]), &["PARTITION BY x"]);
        let parent = run(&AggregateOverExpressionConverter::new(), &source).unwrap();

        insta::assert_snapshot!(parent.outline(), @r"
        document
          over-expression
            simple-identifier text=FIRST_VALUE value=FIRST_VALUE
              simple-identifier-params
                expression-list
                  raw-expression text=col1
            over-expression-params
              raw-expression text=PARTITION BY x
        ");
    }

    #[test]
    fn converts_only_the_first_over_parameter() {
        let source = over(
            function(&["FIRST_VALUE"], &["col1"]),
            &["PARTITION BY x", "ORDER BY y"],
        );
        let parent = run(&AggregateOverExpressionConverter::new(), &source).unwrap();

        let over_params = &parent.children()[0].children()[1];
        assert!(over_params.is(sqlserver::kinds::OVER_EXPRESSION_PARAMS));
        assert_eq!(over_params.children().len(), 1);
        assert_eq!(
            over_params.children()[0].attribute("text"),
            Some("PARTITION BY x")
        );
    }

    #[rstest]
    #[case::unsupported_function(over(function(&["LAST_VALUE"], &["col1"]), &["PARTITION BY x"]))]
    #[case::qualified_name(over(function(&["PKG", "FIRST_VALUE"], &["col1"]), &["PARTITION BY x"]))]
    #[case::single_child(SyntaxNode::new(kinds::OVER_EXPRESSION).with_child(function(&["FIRST_VALUE"], &["c"])))]
    #[case::three_children(
        over(function(&["FIRST_VALUE"], &["c"]), &["PARTITION BY x"]).with_child(raw("extra"))
    )]
    #[case::unnamed_identifier(over(SyntaxNode::new(kinds::IDENTIFIER), &["PARTITION BY x"]))]
    #[case::part_without_text(over(
        SyntaxNode::new(kinds::IDENTIFIER)
            .with_child(SyntaxNode::new(kinds::NAME_PART))
            .with_child(SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, "first_value"))
            .with_child(SyntaxNode::new(kinds::FUNCTION_ARGUMENTS).with_child(SyntaxNode::new(kinds::EXPRESSION_LIST))),
        &["PARTITION BY x"]
    ))]
    fn delegates_to_default_converter(#[case] source: SyntaxNode) {
        let rewritten = run(&AggregateOverExpressionConverter::new(), &source).unwrap();
        let fallback = run(&DefaultOverExpressionConverter::new(), &source).unwrap();
        assert_eq!(rewritten, fallback);
    }

    #[rstest]
    #[case(&["LAST_VALUE"], DelegateReason::Unsupported)]
    #[case(&["PKG", "FIRST_VALUE"], DelegateReason::MultiPartName)]
    fn reports_delegate_reason(#[case] parts: &[&str], #[case] reason: DelegateReason) {
        let source = over(function(parts, &["c"]), &["PARTITION BY x"]);
        assert_eq!(match_over_expression(&source), OverMatch::Delegate(reason));
    }

    #[test]
    fn part_without_text_is_unnamed() {
        let identifier = SyntaxNode::new(kinds::IDENTIFIER)
            .with_child(SyntaxNode::new(kinds::NAME_PART))
            .with_child(SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, "first_value"));
        let source = over(identifier, &["PARTITION BY x"]);
        assert_eq!(
            match_over_expression(&source),
            OverMatch::Delegate(DelegateReason::Unnamed)
        );
    }

    #[test]
    fn shape_mismatch_is_reported_before_name_lookup() {
        let source = SyntaxNode::new(kinds::OVER_EXPRESSION);
        assert_eq!(
            match_over_expression(&source),
            OverMatch::Delegate(DelegateReason::Shape)
        );
    }

    #[test]
    fn missing_argument_list_aborts() {
        let identifier = SyntaxNode::new(kinds::IDENTIFIER)
            .with_child(SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, "first_value"));
        let source = over(identifier, &["PARTITION BY x"]);

        let err = run(&AggregateOverExpressionConverter::new(), &source).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MissingSubstructure { ref node_kind, .. } if node_kind == kinds::OVER_EXPRESSION
        ));
    }

    #[test]
    fn empty_over_parameters_abort() {
        let source = over(function(&["FIRST_VALUE"], &["c"]), &[]);
        let err = run(&AggregateOverExpressionConverter::new(), &source).unwrap_err();
        assert_eq!(
            err,
            ConversionError::missing(kinds::OVER_EXPRESSION, "child under the OVER parameters")
        );
    }

    #[test]
    fn supported_set_is_case_insensitive() {
        assert!(is_supported_aggregate("FIRST_VALUE"));
        assert!(is_supported_aggregate("first_value"));
        assert!(!is_supported_aggregate("LAST_VALUE"));
    }
}
