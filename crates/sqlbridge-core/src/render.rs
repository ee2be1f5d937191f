//! Rendering of target-dialect trees as SQL text.

use crate::grammar::sqlserver::{attributes, kinds};
use crate::tree::SyntaxNode;

/// Renders a target tree (or any subtree of one) as T-SQL.
///
/// Statements are separated by `;` and a newline. Kinds the renderer does not
/// know print their `text` attribute, or their children separated by spaces.
pub fn render_sql(node: &SyntaxNode) -> String {
    match node.kind() {
        kinds::DOCUMENT | kinds::SCRIPT => node
            .children()
            .iter()
            .map(render_sql)
            .filter(|statement| !statement.is_empty())
            .collect::<Vec<_>>()
            .join(";\n"),
        kinds::SELECT_STATEMENT => join(node.children(), " "),
        kinds::SELECT_LIST => format!("SELECT {}", join(node.children(), ", ")),
        kinds::SELECT_ELEMENT => {
            let expr = join(node.children(), " ");
            match node.attribute(attributes::ALIAS) {
                Some(alias) => format!("{expr} AS {alias}"),
                None => expr,
            }
        }
        kinds::FROM_CLAUSE => format!("FROM {}", text(node)),
        kinds::WHERE_CLAUSE => format!("WHERE {}", join(node.children(), " ")),
        kinds::MULTIPART_IDENTIFIER => {
            let (parts, rest): (Vec<&SyntaxNode>, Vec<&SyntaxNode>) = node
                .children()
                .iter()
                .partition(|child| child.is(kinds::SIMPLE_IDENTIFIER));
            let name = parts
                .into_iter()
                .map(render_sql)
                .collect::<Vec<_>>()
                .join(".");
            let suffix: String = rest.into_iter().map(render_sql).collect();
            format!("{name}{suffix}")
        }
        kinds::SIMPLE_IDENTIFIER => {
            let name = text(node);
            let name = if node.attribute(attributes::QUOTED) == Some("true") {
                format!("[{}]", name.replace(']', "]]"))
            } else {
                name.to_string()
            };
            let params: String = node.children().iter().map(render_sql).collect();
            format!("{name}{params}")
        }
        kinds::SIMPLE_IDENTIFIER_PARAMS | kinds::FUNCTION_CALL_PARAMS => {
            format!("({})", join(node.children(), ", "))
        }
        kinds::EXPRESSION_LIST => join(node.children(), ", "),
        kinds::OVER_EXPRESSION => match node.children() {
            [function, params @ ..] => {
                format!("{} OVER ({})", render_sql(function), join(params, " "))
            }
            [] => String::new(),
        },
        kinds::OVER_EXPRESSION_PARAMS | kinds::WINDOW_SPECIFICATION => join(node.children(), " "),
        kinds::PARTITION_BY_CLAUSE => format!("PARTITION BY {}", join(node.children(), ", ")),
        kinds::ORDER_BY_CLAUSE => format!("ORDER BY {}", join(node.children(), ", ")),
        kinds::BINARY_EXPRESSION => match node.children() {
            [left, right] => format!(
                "{} {} {}",
                render_sql(left),
                node.attribute(attributes::OPERATOR).unwrap_or_default(),
                render_sql(right)
            ),
            children => join(children, " "),
        },
        kinds::PARENTHESIZED_EXPRESSION => format!("({})", join(node.children(), " ")),
        _ => match node.attribute(attributes::TEXT) {
            Some(text) => text.to_string(),
            None => join(node.children(), " "),
        },
    }
}

fn join(nodes: &[SyntaxNode], separator: &str) -> String {
    nodes
        .iter()
        .map(render_sql)
        .collect::<Vec<_>>()
        .join(separator)
}

fn text(node: &SyntaxNode) -> &str {
    node.attribute(attributes::TEXT).unwrap_or_default()
}
