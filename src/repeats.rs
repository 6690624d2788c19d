use crate::at_least::AtLeast;
use crate::error::{ErrorKind, ParseError};
use crate::many::Many;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;
use std::ops::{Bound, RangeBounds};

/// Quantified repetition selected from a range
///
/// `0..` (and `..`) behaves like `many`; `n..` with a positive lower bound
/// behaves like `at_least(n)`.
#[derive(Debug)]
pub enum Repeats<P> {
    Any(Many<P>),
    AtLeast(AtLeast<P>),
}

impl<'src, P> Parser<'src> for Repeats<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        match self {
            Repeats::Any(parser) => parser.parse(input),
            Repeats::AtLeast(parser) => parser.parse(input),
        }
    }
}

/// Build a repetition from a range-style quantifier.
///
/// Only open-ended ranges are supported. A bounded-above range is a
/// configuration error reported when the parser is built, not when it runs.
pub fn repeats<'src, P, R>(parser: P, quantifier: R) -> Result<Repeats<P>, ParseError>
where
    P: Parser<'src>,
    R: RangeBounds<usize>,
{
    if !matches!(quantifier.end_bound(), Bound::Unbounded) {
        return Err(ParseError::new(ErrorKind::UnsupportedQuantifier));
    }

    let minimum = match quantifier.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
    };

    Ok(if minimum == 0 {
        Repeats::Any(Many::new(parser))
    } else {
        Repeats::AtLeast(AtLeast::new(parser, minimum))
    })
}

/// Extension trait to add .repeats() method support for parsers
pub trait RepeatsExt<'src>: Parser<'src> + Sized {
    fn repeats<R>(self, quantifier: R) -> Result<Repeats<Self>, ParseError>
    where
        R: RangeBounds<usize>,
    {
        repeats(self, quantifier)
    }
}

/// Implement RepeatsExt for all parsers
impl<'src, P> RepeatsExt<'src> for P where P: Parser<'src> {}
