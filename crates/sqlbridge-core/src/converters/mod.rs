//! Converter implementations and the default converter set.

pub mod aggregate_over;
pub mod generic;
pub mod over_expression;

pub use aggregate_over::AggregateOverExpressionConverter;
pub use generic::GenericNodeConverter;
pub use over_expression::DefaultOverExpressionConverter;

use crate::converter::NodeConverter;

/// Returns all specialized converters, before configuration filtering.
pub fn all_converters() -> Vec<Box<dyn NodeConverter>> {
    vec![Box::new(AggregateOverExpressionConverter::new())]
}
