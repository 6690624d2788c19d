use crate::parser::Parser;
use crate::result::ParseResult;
use crate::satisfy::Satisfy;
use crate::source::Source;

/// Parser that matches a single whitespace character, Unicode semantics
pub struct WhitespaceParser;

impl WhitespaceParser {
    pub fn new() -> Self {
        WhitespaceParser
    }
}

impl<'src> Parser<'src> for WhitespaceParser {
    type Output = char;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, char> {
        Satisfy::expecting(char::is_whitespace, "whitespace").parse(input)
    }
}

/// Convenience function to create a WhitespaceParser
pub fn whitespace() -> WhitespaceParser {
    WhitespaceParser::new()
}
