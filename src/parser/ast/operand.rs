use crate::parser::{ast::{Literal, NumberParser, StringParser}, ExprParser, ParseError};

/// One side of a comparison before it is normalized into a `Comparison`
/// node: either a column reference or a literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(String),
    Literal(Literal),
}

impl Operand {
    pub fn parse(parser: &mut ExprParser) -> Result<Operand, ParseError> {
        parser.next_non_whitespace();

        if parser.eof() {
            return ParseError::new("Invalid operand", parser.position, parser).err();
        }

        if NumberParser::is_number(parser) {
            return NumberParser::parse(parser).map(Operand::Literal);
        }
        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser).map(Operand::Literal);
        }

        Operand::parse_column(parser)
    }

    fn parse_column(parser: &mut ExprParser) -> Result<Operand, ParseError> {
        let pivot = parser.position;
        let current = parser.current();

        if !current.is_ascii_alphabetic() && current != '_' {
            return ParseError::new("Invalid column name", pivot, parser).err();
        }

        while !parser.eof() && (parser.current().is_ascii_alphanumeric() || parser.current() == '_') {
            parser.next();
        }

        Ok(Operand::Column(parser.text_from_pivot(pivot)))
    }
}
