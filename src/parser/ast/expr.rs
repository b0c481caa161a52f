use crate::parser::{ast::{ComparatorOp, Connective, Literal, Operand}, ExprParser, ParseError};

/// Parsed boolean filter expression. Comparisons always carry the column on
/// the `column` side regardless of which side it appeared on in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Comparison {
        column: String,
        operator: ComparatorOp,
        value: Literal,
    },
    Logical {
        connective: Connective,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Parse a complete WHERE-style boolean expression. `AND` binds tighter
    /// than `OR`; both associate to the left.
    pub fn parse(text: &str) -> Result<Expr, ParseError> {
        let mut parser = ExprParser::new(text);

        let expr = Expr::parse_or(&mut parser)?;

        parser.next_non_whitespace();
        if !parser.eof() {
            return ParseError::new("Unexpected trailing input", parser.position, &parser).err();
        }

        Ok(expr)
    }

    fn parse_or(parser: &mut ExprParser) -> Result<Expr, ParseError> {
        let mut expr = Expr::parse_and(parser)?;

        loop {
            parser.next_non_whitespace();

            if parser.comparers.or.compare(parser) {
                parser.jump(parser.comparers.or.length);
                let right = Expr::parse_and(parser)?;
                expr = Expr::Logical {
                    connective: Connective::Or,
                    left: Box::new(expr),
                    right: Box::new(right),
                };
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_and(parser: &mut ExprParser) -> Result<Expr, ParseError> {
        let mut expr = Expr::parse_primary(parser)?;

        loop {
            parser.next_non_whitespace();

            if parser.comparers.and.compare(parser) {
                parser.jump(parser.comparers.and.length);
                let right = Expr::parse_primary(parser)?;
                expr = Expr::Logical {
                    connective: Connective::And,
                    left: Box::new(expr),
                    right: Box::new(right),
                };
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary(parser: &mut ExprParser) -> Result<Expr, ParseError> {
        parser.next_non_whitespace();

        if parser.current() == '(' {
            parser.next();
            let expr = Expr::parse_or(parser)?;

            parser.next_non_whitespace();
            if parser.current() != ')' {
                return ParseError::new("Expected closing parenthesis", parser.position, parser).err();
            }
            parser.next();

            return Ok(expr);
        }

        Expr::parse_comparison(parser)
    }

    fn parse_comparison(parser: &mut ExprParser) -> Result<Expr, ParseError> {
        let pivot = parser.position;

        let left = Operand::parse(parser)?;

        parser.next_non_whitespace();
        let op_pivot = parser.position;
        let Some(operator) = ComparatorOp::check(parser) else {
            return ParseError::new("Expected a comparison operator", op_pivot, parser).err();
        };

        let right = Operand::parse(parser)?;

        match (left, right) {
            (Operand::Column(column), Operand::Literal(value)) => {
                Ok(Expr::Comparison { column, operator, value })
            }
            (Operand::Literal(value), Operand::Column(column)) => {
                Ok(Expr::Comparison { column, operator, value })
            }
            (Operand::Column(_), Operand::Column(_)) => {
                ParseError::new("Predicate must compare a column to a literal value", pivot, parser).err()
            }
            (Operand::Literal(_), Operand::Literal(_)) => {
                ParseError::new("Predicate must reference a metric or dimension column", pivot, parser).err()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{ComparatorOp, Connective, Expr, Literal};

    #[test]
    pub fn test_expr_single_comparison() {
        let result = Expr::parse("views > 100").expect("Failed to parse expression");

        match result {
            Expr::Comparison { column, operator, value } => {
                assert_eq!(column, "views");
                assert_eq!(operator, ComparatorOp::Gt);
                assert_eq!(value, Literal::Int(100));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_comparison_without_spaces() {
        let result = Expr::parse("country='US'").expect("Failed to parse expression");

        match result {
            Expr::Comparison { column, operator, value } => {
                assert_eq!(column, "country");
                assert_eq!(operator, ComparatorOp::Eq);
                assert_eq!(value, Literal::String("US".to_string()));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_value_on_left_side() {
        let result = Expr::parse("'United States' = country").expect("Failed to parse expression");

        match result {
            Expr::Comparison { column, operator, value } => {
                assert_eq!(column, "country");
                assert_eq!(operator, ComparatorOp::Eq);
                assert_eq!(value, Literal::String("United States".to_string()));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_and() {
        let result = Expr::parse("country = 'Canada' AND views > 100").expect("Failed to parse expression");

        match result {
            Expr::Logical { connective, left, right } => {
                assert_eq!(connective, Connective::And);
                assert!(matches!(*left, Expr::Comparison { .. }));
                assert!(matches!(*right, Expr::Comparison { .. }));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_and_lowercase_keyword() {
        let result = Expr::parse("country = 'Canada' ANd views > 100").expect("Failed to parse expression");

        match result {
            Expr::Logical { connective, .. } => assert_eq!(connective, Connective::And),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_and_binds_tighter_than_or() {
        let result = Expr::parse("a = 1 OR b = 2 AND c = 3").expect("Failed to parse expression");

        match result {
            Expr::Logical { connective, left, right } => {
                assert_eq!(connective, Connective::Or);
                assert!(matches!(*left, Expr::Comparison { .. }));
                match *right {
                    Expr::Logical { connective, .. } => assert_eq!(connective, Connective::And),
                    _ => panic!(),
                }
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_left_associative() {
        let result = Expr::parse("a = 1 AND b = 2 AND c = 3").expect("Failed to parse expression");

        match result {
            Expr::Logical { connective, left, right } => {
                assert_eq!(connective, Connective::And);
                assert!(matches!(*left, Expr::Logical { .. }));
                assert!(matches!(*right, Expr::Comparison { .. }));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_parenthesized_group() {
        let result = Expr::parse("(country='Canada' OR country='US') AND views>100")
            .expect("Failed to parse expression");

        match result {
            Expr::Logical { connective, left, right } => {
                assert_eq!(connective, Connective::And);
                match *left {
                    Expr::Logical { connective, .. } => assert_eq!(connective, Connective::Or),
                    _ => panic!(),
                }
                assert!(matches!(*right, Expr::Comparison { .. }));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expr_missing_closing_parenthesis() {
        let result = Expr::parse("(country='Canada' OR country='US' AND views>100");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Expected closing parenthesis"),
        }
    }

    #[test]
    pub fn test_expr_trailing_input() {
        let result = Expr::parse("views > 100 country");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Unexpected trailing input"),
        }
    }

    #[test]
    pub fn test_expr_column_to_column() {
        let result = Expr::parse("views > sessions");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Predicate must compare a column to a literal value"),
        }
    }

    #[test]
    pub fn test_expr_literal_to_literal() {
        let result = Expr::parse("2 = 2");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Predicate must reference a metric or dimension column"),
        }
    }

    #[test]
    pub fn test_expr_missing_value() {
        let result = Expr::parse("views > ");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid operand"),
        }
    }

    #[test]
    pub fn test_expr_missing_operator() {
        let result = Expr::parse("views 100");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Expected a comparison operator"),
        }
    }
}
