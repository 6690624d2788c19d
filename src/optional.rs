use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that turns failure into a successful `None`
///
/// On success the value is wrapped in `Some`; on failure the result is
/// `None` at the original input, so partial consumption by the failed
/// attempt never leaks.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(input) {
            ParseResult::Success { value, remainder } => {
                ParseResult::success(Some(value), remainder)
            }
            ParseResult::Failure { .. } => ParseResult::success(None, input),
        }
    }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an Optional parser
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}
