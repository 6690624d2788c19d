use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that replaces a successful value with a fixed constant
///
/// Useful for tagging recognized tokens. Failures pass through unchanged.
pub struct To<P, T> {
    parser: P,
    value: T,
}

impl<P, T> To<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        To { parser, value }
    }
}

impl<'src, P, T> Parser<'src> for To<P, T>
where
    P: Parser<'src>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, T> {
        match self.parser.parse(input) {
            ParseResult::Success { remainder, .. } => {
                ParseResult::success(self.value.clone(), remainder)
            }
            ParseResult::Failure { error, remainder } => ParseResult::failure(error, remainder),
        }
    }
}

/// Extension trait to add .to() method support for parsers
pub trait ToExt<'src>: Parser<'src> + Sized {
    fn to<T>(self, value: T) -> To<Self, T>
    where
        T: Clone,
    {
        To::new(self, value)
    }
}

/// Implement ToExt for all parsers
impl<'src, P> ToExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a To parser
pub fn to<'src, P, T>(parser: P, value: T) -> To<P, T>
where
    P: Parser<'src>,
    T: Clone,
{
    To::new(parser, value)
}
