#![allow(dead_code)]

use sqlbridge_core::grammar::oracle::{attributes, kinds};
use sqlbridge_core::SyntaxNode;

/// Source `raw-expression` carrying `text`.
pub fn raw(text: &str) -> SyntaxNode {
    SyntaxNode::new(kinds::RAW_EXPRESSION).with_attribute(attributes::TEXT, text)
}

/// Source function identifier `parts[0]. ... (args)`.
pub fn function(parts: &[&str], args: &[SyntaxNode]) -> SyntaxNode {
    let mut identifier = SyntaxNode::new(kinds::IDENTIFIER);
    for part in parts {
        identifier.push_child(SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, *part));
    }
    let mut list = SyntaxNode::new(kinds::EXPRESSION_LIST);
    for arg in args {
        list.push_child(arg.clone());
    }
    identifier.with_child(SyntaxNode::new(kinds::FUNCTION_ARGUMENTS).with_child(list))
}

/// Source over-expression with the given OVER parameter children.
pub fn over(function: SyntaxNode, params: Vec<SyntaxNode>) -> SyntaxNode {
    let mut over_params = SyntaxNode::new(kinds::OVER_EXPRESSION_PARAMS);
    for param in params {
        over_params.push_child(param);
    }
    SyntaxNode::new(kinds::OVER_EXPRESSION)
        .with_child(function)
        .with_child(over_params)
}

pub fn column(name: &str) -> SyntaxNode {
    SyntaxNode::new(kinds::IDENTIFIER)
        .with_child(SyntaxNode::new(kinds::NAME_PART).with_attribute(attributes::TEXT, name))
}

pub fn partition_by(column_name: &str) -> SyntaxNode {
    SyntaxNode::new(kinds::QUERY_PARTITION_CLAUSE).with_child(column(column_name))
}

pub fn order_by(text: &str) -> SyntaxNode {
    SyntaxNode::new(kinds::ORDER_BY_CLAUSE)
        .with_child(SyntaxNode::new(kinds::ORDER_BY_ELEMENT).with_attribute(attributes::TEXT, text))
}
