//! Node-kind and attribute vocabularies of the two dialect grammars.
//!
//! Both vocabularies are closed: converters reference kinds only through the
//! constants in [`oracle`] and [`sqlserver`].

pub mod oracle;
pub mod sqlserver;

/// Maps a source-dialect node kind to the target kind the generic converter emits.
///
/// Returns `None` for kinds outside the source vocabulary.
pub fn map_kind(source_kind: &str) -> Option<&'static str> {
    use oracle::kinds as src;
    use sqlserver::kinds as dst;

    let mapped = match source_kind {
        src::SQL_SCRIPT => dst::SCRIPT,
        src::SELECT_STATEMENT => dst::SELECT_STATEMENT,
        src::SELECT_LIST => dst::SELECT_LIST,
        src::SELECT_ITEM => dst::SELECT_ELEMENT,
        src::FROM_CLAUSE => dst::FROM_CLAUSE,
        src::WHERE_CLAUSE => dst::WHERE_CLAUSE,
        src::RAW_STATEMENT => dst::RAW_STATEMENT,
        src::IDENTIFIER => dst::MULTIPART_IDENTIFIER,
        src::NAME_PART => dst::SIMPLE_IDENTIFIER,
        src::FUNCTION_ARGUMENTS => dst::FUNCTION_CALL_PARAMS,
        src::EXPRESSION_LIST => dst::EXPRESSION_LIST,
        src::OVER_EXPRESSION => dst::OVER_EXPRESSION,
        src::OVER_EXPRESSION_PARAMS => dst::OVER_EXPRESSION_PARAMS,
        src::ANALYTIC_CLAUSE => dst::WINDOW_SPECIFICATION,
        src::QUERY_PARTITION_CLAUSE => dst::PARTITION_BY_CLAUSE,
        src::ORDER_BY_CLAUSE => dst::ORDER_BY_CLAUSE,
        src::ORDER_BY_ELEMENT => dst::ORDER_BY_ELEMENT,
        src::WINDOWING_CLAUSE => dst::WINDOW_FRAME_CLAUSE,
        src::WINDOW_NAME => dst::WINDOW_NAME,
        src::LITERAL => dst::LITERAL,
        src::BINARY_EXPRESSION => dst::BINARY_EXPRESSION,
        src::PARENTHESIZED_EXPRESSION => dst::PARENTHESIZED_EXPRESSION,
        src::RAW_EXPRESSION => dst::RAW_EXPRESSION,
        _ => return None,
    };
    Some(mapped)
}
