//! Source dialect (Oracle-style) vocabulary.

/// Node kinds produced by the SQL front end.
pub mod kinds {
    pub const SQL_SCRIPT: &str = "sql-script";
    pub const SELECT_STATEMENT: &str = "select-statement";
    pub const SELECT_LIST: &str = "select-list";
    pub const SELECT_ITEM: &str = "select-item";
    pub const FROM_CLAUSE: &str = "from-clause";
    pub const WHERE_CLAUSE: &str = "where-clause";
    pub const RAW_STATEMENT: &str = "raw-statement";

    /// Possibly qualified identifier; children are [`NAME_PART`]s, optionally
    /// followed by [`FUNCTION_ARGUMENTS`] when the identifier names a call.
    pub const IDENTIFIER: &str = "identifier";
    pub const NAME_PART: &str = "name-part";
    pub const FUNCTION_ARGUMENTS: &str = "function-arguments";
    pub const EXPRESSION_LIST: &str = "expression-list";

    /// Aggregate or analytic function call with an OVER clause.
    ///
    /// Children: the function [`IDENTIFIER`], then [`OVER_EXPRESSION_PARAMS`].
    pub const OVER_EXPRESSION: &str = "over-expression";
    pub const OVER_EXPRESSION_PARAMS: &str = "over-expression-params";
    pub const ANALYTIC_CLAUSE: &str = "analytic-clause";
    pub const QUERY_PARTITION_CLAUSE: &str = "query-partition-clause";
    pub const ORDER_BY_CLAUSE: &str = "order-by-clause";
    pub const ORDER_BY_ELEMENT: &str = "order-by-element";
    pub const WINDOWING_CLAUSE: &str = "windowing-clause";
    pub const WINDOW_NAME: &str = "window-name";

    pub const LITERAL: &str = "literal";
    pub const BINARY_EXPRESSION: &str = "binary-expression";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized-expression";
    pub const RAW_EXPRESSION: &str = "raw-expression";
}

/// Attribute names.
pub mod attributes {
    /// Spelling as written in the source text.
    pub const TEXT: &str = "text";
    /// `"true"` when the name part was written with quotes.
    pub const QUOTED: &str = "quoted";
    pub const ALIAS: &str = "alias";
    pub const OPERATOR: &str = "operator";
}
