use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// A failure escaping a `chain` script.
///
/// Created by [`Steps::run`] when a sub-parser fails and propagated out of
/// the script with `?`; it carries the sub-parser's error and remainder
/// unchanged.
#[derive(Debug)]
pub struct Halt<'src> {
    error: ParseError,
    remainder: Source<'src>,
}

/// The cursor state threaded through a `chain` script.
///
/// Each `run` call parses from the current cursor and, on success, leaves
/// the cursor at the sub-parser's remainder, so consecutive calls read the
/// input linearly without the script juggling intermediate cursors.
pub struct Steps<'src> {
    cursor: Source<'src>,
}

impl<'src> Steps<'src> {
    /// Run one sub-parser at the current cursor, yielding its value.
    ///
    /// On failure the script is abandoned immediately: no later steps run,
    /// and no backtracking happens beyond what the failing sub-parser itself
    /// performed.
    pub fn run<P>(&mut self, parser: &P) -> Result<P::Output, Halt<'src>>
    where
        P: Parser<'src>,
    {
        match parser.parse(self.cursor) {
            ParseResult::Success { value, remainder } => {
                self.cursor = remainder;
                Ok(value)
            }
            ParseResult::Failure { error, remainder } => Err(Halt { error, remainder }),
        }
    }

    /// The cursor the script has advanced to so far.
    pub fn cursor(&self) -> Source<'src> {
        self.cursor
    }
}

/// Parser written as a linear script of dependent steps
///
/// The script closure receives a [`Steps`] handle, runs sub-parsers through
/// it, and finishes by returning a plain value, which becomes the parser's
/// successful result at whatever cursor the script advanced to. Scripts may
/// call grammar functions recursively; a recursive grammar only needs its
/// functions to return boxed parsers.
pub struct Chain<F> {
    script: F,
}

impl<F> Chain<F> {
    pub fn new(script: F) -> Self {
        Chain { script }
    }
}

impl<'src, F, T> Parser<'src> for Chain<F>
where
    F: Fn(&mut Steps<'src>) -> Result<T, Halt<'src>>,
{
    type Output = T;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, T> {
        let mut steps = Steps { cursor: input };
        match (self.script)(&mut steps) {
            Ok(value) => ParseResult::success(value, steps.cursor),
            Err(Halt { error, remainder }) => ParseResult::failure(error, remainder),
        }
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'src, F, T>(script: F) -> Chain<F>
where
    F: Fn(&mut Steps<'src>) -> Result<T, Halt<'src>>,
{
    Chain::new(script)
}
