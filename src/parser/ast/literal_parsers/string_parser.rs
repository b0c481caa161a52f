use crate::parser::{ast::Literal, ExprParser, ParseError, WordComparer};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &ExprParser) -> bool {
        parser.current() == '\'' || parser.current() == '"'
    }

    pub fn parse(parser: &mut ExprParser) -> Result<Literal, ParseError> {
        let mut pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return ParseError::new("Invalid string value", pivot, parser).err();
        }
        let quote = parser.current();
        parser.next();
        pivot = parser.position;

        while !parser.eof() && parser.current() != quote {
            if WordComparer::is_break_line(parser.current()) {
                return ParseError::new("Invalid string", pivot, parser).err();
            }

            parser.next();
        }
        if parser.eof() {
            return ParseError::new("Unterminated string", pivot, parser).err();
        }

        let text = parser.text_from_pivot(pivot);
        parser.next();

        Ok(Literal::String(text))
    }
}
