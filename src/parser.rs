use crate::result::ParseResult;
use crate::source::Source;

/// Core trait for parser combinators
///
/// A parser is a pure description: building one performs no parsing, and
/// running the same parser on the same `Source` twice yields structurally
/// identical results. All composition happens by wrapping values that
/// implement this trait.
pub trait Parser<'src> {
    type Output;

    /// Run the parser from the given cursor.
    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output>;
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(input)
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(input)
    }
}

/// Type-erased parser.
///
/// Grammar functions that call themselves (directly or through other
/// functions) cannot name their concrete combinator type; boxing breaks the
/// cycle.
pub type BoxedParser<'src, T> = Box<dyn Parser<'src, Output = T> + 'src>;

/// Extension trait to add .boxed() method support for parsers
pub trait ParserExt<'src>: Parser<'src> + Sized {
    fn boxed(self) -> BoxedParser<'src, Self::Output>
    where
        Self: 'src,
    {
        Box::new(self)
    }
}

/// Implement ParserExt for all parsers
impl<'src, P> ParserExt<'src> for P where P: Parser<'src> {}
