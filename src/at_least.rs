use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that matches at least `minimum` occurrences of the given parser
///
/// The first `minimum` repetitions are required; if any of them fails, the
/// whole operation fails with the remainder rewound to the input before any
/// of the attempts. Once the minimum is met, matching continues greedily and
/// the terminating failure is swallowed. A minimum of zero behaves exactly
/// like `many`.
#[derive(Debug)]
pub struct AtLeast<P> {
    parser: P,
    minimum: usize,
}

impl<P> AtLeast<P> {
    pub fn new(parser: P, minimum: usize) -> Self {
        AtLeast { parser, minimum }
    }
}

impl<'src, P> Parser<'src> for AtLeast<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = input;

        for _ in 0..self.minimum {
            match self.parser.parse(cursor) {
                ParseResult::Success { value, remainder } => {
                    results.push(value);
                    cursor = remainder;
                }
                ParseResult::Failure { error, .. } => {
                    return ParseResult::failure(error, input);
                }
            }
        }

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

/// Extension trait to add .at_least() method support for parsers
pub trait AtLeastExt<'src>: Parser<'src> + Sized {
    fn at_least(self, minimum: usize) -> AtLeast<Self> {
        AtLeast::new(self, minimum)
    }
}

/// Implement AtLeastExt for all parsers
impl<'src, P> AtLeastExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an AtLeast parser
pub fn at_least<'src, P>(parser: P, minimum: usize) -> AtLeast<P>
where
    P: Parser<'src>,
{
    AtLeast::new(parser, minimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::many::ManyExt;
    use crate::or::OrExt;

    #[test]
    fn test_at_least_collects_beyond_minimum() {
        // Only 3 matches exist before '1'; the greedy tail takes them all.
        let text: Vec<char> = "(()1".chars().collect();
        let parser = is_char('(').or(is_char(')')).at_least(2);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&vec!['(', '(', ')']));
        assert_eq!(result.remainder().position(), 3);
    }

    #[test]
    fn test_at_least_exact_minimum() {
        let text: Vec<char> = "ab".chars().collect();
        let parser = is_char('a').at_least(1);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&vec!['a']));
        assert_eq!(result.remainder().position(), 1);
    }

    #[test]
    fn test_at_least_too_few_fails_and_rewinds() {
        let text: Vec<char> = "aab".chars().collect();
        let parser = is_char('a').at_least(3);

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        // Full backtrack: the remainder is the original input.
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_at_least_zero_equals_many() {
        let text: Vec<char> = "xyz".chars().collect();
        let source = Source::new(&text);
        let relaxed = is_char('a').at_least(0).parse(source);
        let many = is_char('a').many().parse(source);

        assert_eq!(relaxed, many);
        assert_eq!(relaxed.value(), Some(&vec![]));
    }

    #[test]
    fn test_at_least_on_empty_input() {
        let text: Vec<char> = "".chars().collect();
        let parser = at_least(is_char('a'), 1);

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_at_least_consumes_everything_available() {
        let text: Vec<char> = "aaaa".chars().collect();
        let parser = is_char('a').at_least(2);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value().map(Vec::len), Some(4));
        assert!(result.remainder().is_eof());
    }
}
