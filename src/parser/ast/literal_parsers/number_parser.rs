use ordered_float::NotNan;

use crate::parser::{ast::Literal, ExprParser, ParseError};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &ExprParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() || current == '+' || current == '-'
    }

    fn is_boundary(ch: char) -> bool {
        ch.is_whitespace() || ch == ')' || ch == '=' || ch == '<' || ch == '>' || ch == '!'
    }

    pub fn parse(parser: &mut ExprParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;
        let mut is_float = false;

        if !NumberParser::is_number(parser) {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        if parser.current() == '+' || parser.current() == '-' {
            parser.next();
        }

        while !parser.eof() && (parser.current().is_ascii_digit() || parser.current() == '.') {
            if parser.current() == '.' {
                is_float = true;
            }
            parser.next();
        }

        if !parser.eof() && !NumberParser::is_boundary(parser.current()) {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        let number = parser.text_from_pivot(pivot);
        let number = match is_float {
            true => {
                let value = number
                    .parse::<f64>()
                    .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                let value = NotNan::new(value)
                    .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                Literal::Float(value)
            }
            false => Literal::Int(
                number
                    .parse::<i64>()
                    .map_err(|_| ParseError::new("Invalid number", pivot, parser))?,
            ),
        };

        Ok(number)
    }
}
