use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser restarts from the original input, so partial consumption
/// by the losing first branch never leaks. Left-biased: when the first branch
/// succeeds its result is returned untouched. When the second branch runs,
/// its result is returned unconditionally and the first branch's error is
/// discarded.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2, T> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = T>,
    P2: Parser<'src, Output = T>,
{
    type Output = T;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, T> {
        match self.first.parse(input) {
            result @ ParseResult::Success { .. } => result,
            ParseResult::Failure { .. } => self.second.parse(input),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, T>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = T>,
    P2: Parser<'src, Output = T>,
{
    Or::new(first, second)
}
