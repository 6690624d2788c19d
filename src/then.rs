use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that sequences two parsers, keeping only the second value
///
/// Failure short-circuits at whichever step fails.
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        match self.first.parse(input) {
            ParseResult::Success { remainder, .. } => self.second.parse(remainder),
            ParseResult::Failure { error, remainder } => ParseResult::failure(error, remainder),
        }
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'src>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Then parser
pub fn then<'src, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    Then::new(first, second)
}
