use crate::error::ParseError;
use sqlparser::ast::{Expr, Statement};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

/// Parse SQL statements.
pub fn parse_sql(sql: &str) -> Result<Vec<Statement>, ParseError> {
    Ok(Parser::parse_sql(&GenericDialect {}, sql)?)
}

/// Parse a single standalone expression, rejecting trailing input.
pub fn parse_expression(sql: &str) -> Result<Expr, ParseError> {
    let dialect = GenericDialect {};
    let mut parser = Parser::new(&dialect).try_with_sql(sql)?;
    let expr = parser.parse_expr()?;
    parser.expect_token(&Token::EOF)?;
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_select() {
        let statements = parse_sql("SELECT FIRST_VALUE(a) OVER (PARTITION BY b) FROM t").unwrap();
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_parse_invalid_sql() {
        assert!(parse_sql("SELECT * FROM").is_err());
    }

    #[test]
    fn test_parse_multiple_statements() {
        let statements = parse_sql("SELECT 1 FROM dual; SELECT 2 FROM dual;").unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_parse_expression() {
        let expr = parse_expression("first_value(col1) OVER (PARTITION BY x)").unwrap();
        assert!(matches!(expr, Expr::Function(_)));
    }

    #[test]
    fn test_parse_expression_rejects_trailing_tokens() {
        let err = parse_expression("a b c").unwrap_err();
        assert!(err.position.is_some(), "expected a position in {err}");
    }
}
