use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser that matches one specific character
#[derive(Debug)]
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'src> Parser<'src> for IsCharParser {
    type Output = char;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, char> {
        let current = match input.current() {
            Ok(current) => current,
            Err(error) => return ParseResult::failure(error, input),
        };

        if current != self.expected {
            let error = ParseError::new(ErrorKind::BadSymbol {
                position: input.position(),
                found: current,
                expected: Some(format!("'{}'", self.expected).into()),
            });
            return ParseResult::failure(error, input);
        }

        match input.advance() {
            Ok(remainder) => ParseResult::success(current, remainder),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Parser that consumes the next character when one exists
///
/// At end-of-input it succeeds with `None` instead of failing: input
/// exhaustion is treated as a valid "no more characters" answer here, unlike
/// in the other primitives.
pub struct AnyCharParser;

impl AnyCharParser {
    pub fn new() -> Self {
        AnyCharParser
    }
}

impl<'src> Parser<'src> for AnyCharParser {
    type Output = Option<char>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Option<char>> {
        if input.is_eof() {
            return ParseResult::success(None, input);
        }

        let current = match input.current() {
            Ok(current) => current,
            Err(error) => return ParseResult::failure(error, input),
        };
        match input.advance() {
            Ok(remainder) => ParseResult::success(Some(current), remainder),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Convenience function to create an IsCharParser
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser::new()
}
