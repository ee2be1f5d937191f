//! Lowering of parsed SQL into the source-dialect syntax tree.
//!
//! Only the constructs the converters care about are lowered structurally:
//! simple SELECT queries, identifiers, literals, binary operators, function
//! calls and their OVER clauses. Anything else is kept as a `raw-*` node
//! carrying the original text so no input is silently dropped.

use crate::grammar::oracle::{attributes, kinds};
use crate::tree::SyntaxNode;
use sqlparser::ast::{
    Expr, Function, FunctionArg, FunctionArgExpr, FunctionArguments, GroupByExpr, Ident, Query,
    Select, SelectItem, SetExpr, Statement, WindowFrame, WindowSpec, WindowType,
};

/// Lowers parsed statements into a `sql-script` tree.
pub fn lower_statements(statements: &[Statement]) -> SyntaxNode {
    let mut script = SyntaxNode::new(kinds::SQL_SCRIPT);
    for statement in statements {
        script.push_child(lower_statement(statement));
    }
    script
}

pub fn lower_statement(statement: &Statement) -> SyntaxNode {
    if let Statement::Query(query) = statement {
        if let Some(select) = plain_select(query) {
            return lower_select(select);
        }
    }
    SyntaxNode::new(kinds::RAW_STATEMENT).with_attribute(attributes::TEXT, statement.to_string())
}

/// Returns the SELECT of a query that has no clauses outside it.
fn plain_select(query: &Query) -> Option<&Select> {
    // WITH, ORDER BY, LIMIT and friends all print around the body.
    if query.to_string() != query.body.to_string() {
        return None;
    }
    let SetExpr::Select(select) = query.body.as_ref() else {
        return None;
    };
    let no_grouping = matches!(&select.group_by, GroupByExpr::Expressions(exprs, modifiers) if exprs.is_empty() && modifiers.is_empty());
    let lowerable = no_grouping
        && select.distinct.is_none()
        && select.top.is_none()
        && select.into.is_none()
        && select.having.is_none()
        && select.qualify.is_none()
        && select.named_window.is_empty()
        && select.prewhere.is_none()
        && select.connect_by.is_none()
        && select.lateral_views.is_empty()
        && select.cluster_by.is_empty()
        && select.distribute_by.is_empty()
        && select.sort_by.is_empty();
    lowerable.then_some(select.as_ref())
}

fn lower_select(select: &Select) -> SyntaxNode {
    let mut statement = SyntaxNode::new(kinds::SELECT_STATEMENT);

    let list = statement.add_child(kinds::SELECT_LIST);
    for item in &select.projection {
        let node = match item {
            SelectItem::UnnamedExpr(expr) => {
                SyntaxNode::new(kinds::SELECT_ITEM).with_child(lower_expr(expr))
            }
            SelectItem::ExprWithAlias { expr, alias } => SyntaxNode::new(kinds::SELECT_ITEM)
                .with_attribute(attributes::ALIAS, alias.to_string())
                .with_child(lower_expr(expr)),
            other => SyntaxNode::new(kinds::SELECT_ITEM).with_child(raw_expression(other)),
        };
        list.push_child(node);
    }

    if !select.from.is_empty() {
        let from = select
            .from
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        statement
            .add_child(kinds::FROM_CLAUSE)
            .set_attribute(attributes::TEXT, from);
    }

    if let Some(selection) = &select.selection {
        statement
            .add_child(kinds::WHERE_CLAUSE)
            .push_child(lower_expr(selection));
    }

    statement
}

/// Lowers one expression.
pub fn lower_expr(expr: &Expr) -> SyntaxNode {
    match expr {
        Expr::Identifier(ident) => identifier(std::slice::from_ref(ident)),
        Expr::CompoundIdentifier(idents) => identifier(idents),
        Expr::Value(value) => {
            SyntaxNode::new(kinds::LITERAL).with_attribute(attributes::TEXT, value.to_string())
        }
        Expr::BinaryOp { left, op, right } => SyntaxNode::new(kinds::BINARY_EXPRESSION)
            .with_attribute(attributes::OPERATOR, op.to_string())
            .with_child(lower_expr(left))
            .with_child(lower_expr(right)),
        Expr::Nested(inner) => {
            SyntaxNode::new(kinds::PARENTHESIZED_EXPRESSION).with_child(lower_expr(inner))
        }
        Expr::Function(function) => lower_function(function).unwrap_or_else(|| raw_expression(expr)),
        _ => raw_expression(expr),
    }
}

/// Lowers a call, wrapping it in an over-expression when it has an OVER clause.
///
/// Returns `None` for call forms the source grammar has no structure for
/// (FILTER, WITHIN GROUP, DISTINCT arguments, non-identifier name parts, ...).
fn lower_function(function: &Function) -> Option<SyntaxNode> {
    if function.filter.is_some()
        || function.null_treatment.is_some()
        || !function.within_group.is_empty()
        || !matches!(function.parameters, FunctionArguments::None)
    {
        return None;
    }

    let FunctionArguments::List(list) = &function.args else {
        return None;
    };
    if list.duplicate_treatment.is_some() || !list.clauses.is_empty() {
        return None;
    }

    let parts = function
        .name
        .0
        .iter()
        .map(|part| part.as_ident().cloned())
        .collect::<Option<Vec<Ident>>>()?;

    let mut arguments = SyntaxNode::new(kinds::EXPRESSION_LIST);
    for arg in &list.args {
        arguments.push_child(match arg {
            FunctionArg::Unnamed(FunctionArgExpr::Expr(expr)) => lower_expr(expr),
            other => raw_expression(other),
        });
    }

    let call = identifier(&parts)
        .with_child(SyntaxNode::new(kinds::FUNCTION_ARGUMENTS).with_child(arguments));

    let Some(window) = &function.over else {
        return Some(call);
    };

    let params = SyntaxNode::new(kinds::OVER_EXPRESSION_PARAMS).with_child(match window {
        WindowType::WindowSpec(spec) => analytic_clause(spec),
        WindowType::NamedWindow(name) => window_name(name),
    });

    Some(
        SyntaxNode::new(kinds::OVER_EXPRESSION)
            .with_child(call)
            .with_child(params),
    )
}

fn analytic_clause(spec: &WindowSpec) -> SyntaxNode {
    let mut clause = SyntaxNode::new(kinds::ANALYTIC_CLAUSE);

    if let Some(name) = &spec.window_name {
        clause.push_child(window_name(name));
    }

    if !spec.partition_by.is_empty() {
        let partition = clause.add_child(kinds::QUERY_PARTITION_CLAUSE);
        for expr in &spec.partition_by {
            partition.push_child(lower_expr(expr));
        }
    }

    if !spec.order_by.is_empty() {
        let order_by = clause.add_child(kinds::ORDER_BY_CLAUSE);
        for item in &spec.order_by {
            order_by
                .add_child(kinds::ORDER_BY_ELEMENT)
                .set_attribute(attributes::TEXT, item.to_string());
        }
    }

    if let Some(frame) = &spec.window_frame {
        clause
            .add_child(kinds::WINDOWING_CLAUSE)
            .set_attribute(attributes::TEXT, window_frame_text(frame));
    }

    clause
}

/// Frame text as `WindowSpec` prints it; `WindowFrame` has no `Display`.
fn window_frame_text(frame: &WindowFrame) -> String {
    match &frame.end_bound {
        Some(end) => format!("{} BETWEEN {} AND {}", frame.units, frame.start_bound, end),
        None => format!("{} {}", frame.units, frame.start_bound),
    }
}

fn identifier(idents: &[Ident]) -> SyntaxNode {
    let mut node = SyntaxNode::new(kinds::IDENTIFIER);
    for ident in idents {
        let part = node.add_child(kinds::NAME_PART);
        part.set_attribute(attributes::TEXT, ident.value.as_str());
        if ident.quote_style.is_some() {
            part.set_attribute(attributes::QUOTED, "true");
        }
    }
    node
}

fn window_name(name: &Ident) -> SyntaxNode {
    SyntaxNode::new(kinds::WINDOW_NAME).with_attribute(attributes::TEXT, name.to_string())
}

fn raw_expression(node: &impl ToString) -> SyntaxNode {
    SyntaxNode::new(kinds::RAW_EXPRESSION).with_attribute(attributes::TEXT, node.to_string())
}
