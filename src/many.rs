use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails: matching stops at the first failure, which is swallowed, and
/// everything collected so far is returned with the remainder at the last
/// successful point.
#[derive(Debug)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = input;

        loop {
            match self.parser.parse(cursor) {
                ParseResult::Success { value, remainder } => {
                    if remainder.position() == cursor.position() {
                        // a parser that consumes nothing would match forever
                        break;
                    }
                    results.push(value);
                    cursor = remainder;
                }
                ParseResult::Failure { .. } => break,
            }
        }

        ParseResult::success(results, cursor)
    }
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'src>: Parser<'src> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'src, P> ManyExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
