//! Target dialect (SQL Server-style) vocabulary.

pub mod kinds {
    /// Synthetic root that holds the converted script.
    pub const DOCUMENT: &str = "document";
    pub const SCRIPT: &str = "script";
    pub const SELECT_STATEMENT: &str = "select-statement";
    pub const SELECT_LIST: &str = "select-list";
    pub const SELECT_ELEMENT: &str = "select-element";
    pub const FROM_CLAUSE: &str = "from-clause";
    pub const WHERE_CLAUSE: &str = "where-clause";
    pub const RAW_STATEMENT: &str = "raw-statement";

    pub const MULTIPART_IDENTIFIER: &str = "multipart-identifier";
    pub const SIMPLE_IDENTIFIER: &str = "simple-identifier";
    /// Argument container nested under a [`SIMPLE_IDENTIFIER`] that names a call.
    pub const SIMPLE_IDENTIFIER_PARAMS: &str = "simple-identifier-params";
    pub const FUNCTION_CALL_PARAMS: &str = "function-call-params";
    pub const EXPRESSION_LIST: &str = "expression-list";

    pub const OVER_EXPRESSION: &str = "over-expression";
    pub const OVER_EXPRESSION_PARAMS: &str = "over-expression-params";
    pub const WINDOW_SPECIFICATION: &str = "window-specification";
    pub const PARTITION_BY_CLAUSE: &str = "partition-by-clause";
    pub const ORDER_BY_CLAUSE: &str = "order-by-clause";
    pub const ORDER_BY_ELEMENT: &str = "order-by-element";
    pub const WINDOW_FRAME_CLAUSE: &str = "window-frame-clause";
    pub const WINDOW_NAME: &str = "window-name";

    pub const LITERAL: &str = "literal";
    pub const BINARY_EXPRESSION: &str = "binary-expression";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized-expression";
    pub const RAW_EXPRESSION: &str = "raw-expression";
}

pub mod attributes {
    /// Display text of an identifier or literal.
    pub const TEXT: &str = "text";
    /// Normalized identifier value.
    pub const VALUE: &str = "value";
    pub const QUOTED: &str = "quoted";
    pub const ALIAS: &str = "alias";
    pub const OPERATOR: &str = "operator";
}
