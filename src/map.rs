use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, U> {
        match self.parser.parse(input) {
            ParseResult::Success { value, remainder } => {
                ParseResult::success((self.mapper)(value), remainder)
            }
            ParseResult::Failure { error, remainder } => ParseResult::failure(error, remainder),
        }
    }
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}
