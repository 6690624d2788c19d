use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser that asserts the cursor sits at end-of-input
///
/// Succeeds with no value and never advances; trailing input fails with
/// `ExpectedEndOfInput`.
pub struct EofParser;

impl EofParser {
    pub fn new() -> Self {
        EofParser
    }
}

impl<'src> Parser<'src> for EofParser {
    type Output = ();

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, ()> {
        if input.is_eof() {
            return ParseResult::success((), input);
        }

        match input.current() {
            Ok(found) => ParseResult::failure(
                ParseError::new(ErrorKind::ExpectedEndOfInput {
                    position: input.position(),
                    found,
                }),
                input,
            ),
            Err(error) => ParseResult::failure(error, input),
        }
    }
}

/// Convenience function to create an EofParser
pub fn eof() -> EofParser {
    EofParser::new()
}
