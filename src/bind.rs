use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that feeds a parser's value into a function producing the next parser
///
/// This is the monadic composition primitive: the second parser may depend on
/// the first one's value, and it runs against the first one's remainder. All
/// sequencing in this crate ultimately reduces to it.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'src, P, F, P2> Parser<'src> for Bind<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(input) {
            ParseResult::Success { value, remainder } => (self.binder)(value).parse(remainder),
            ParseResult::Failure { error, remainder } => ParseResult::failure(error, remainder),
        }
    }
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'src>: Parser<'src> + Sized {
    fn bind<F, P2>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'src>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'src, P> BindExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Bind parser
pub fn bind<'src, P, F, P2>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    Bind::new(parser, binder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::satisfy::satisfy;

    #[test]
    fn test_bind_dependent_parse() {
        // The second character must equal the first one.
        let parser = satisfy(|_| true).bind(is_char);

        let text: Vec<char> = "aa".chars().collect();
        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&'a'));
        assert_eq!(result.remainder().position(), 2);

        let text: Vec<char> = "ab".chars().collect();
        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
    }

    #[test]
    fn test_bind_first_failure_passes_through() {
        let text: Vec<char> = "xy".chars().collect();
        let source = Source::new(&text);
        let parser = is_char('a').bind(is_char);

        let bound = parser.parse(source);
        let plain = is_char('a').parse(source);
        assert_eq!(bound.error(), plain.error());
        assert_eq!(bound.remainder(), plain.remainder());
    }

    #[test]
    fn test_bind_second_runs_on_remainder() {
        let text: Vec<char> = "ab".chars().collect();
        let parser = bind(is_char('a'), |_| is_char('b'));

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&'b'));
        assert!(result.remainder().is_eof());
    }

    #[test]
    fn test_bind_second_failure_keeps_its_remainder() {
        // The first parser consumed one character; the failure reported by
        // the second starts where it was attempted.
        let text: Vec<char> = "ax".chars().collect();
        let parser = is_char('a').bind(|_| is_char('b'));

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        assert_eq!(result.remainder().position(), 1);
    }
}
