use crate::parser::Parser;
use crate::result::ParseResult;
use crate::source::Source;

/// Parser combinator that matches exactly `count` consecutive occurrences of the given parser
///
/// If any repetition fails the whole operation fails, and the reported
/// remainder is the input before the first repetition: a failed exact
/// repetition rewinds fully, the same discipline `at_least` applies.
pub struct Times<P> {
    parser: P,
    count: usize,
}

impl<P> Times<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Times { parser, count }
    }
}

impl<'src, P> Parser<'src> for Times<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Source<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = input;

        for _ in 0..self.count {
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

        ParseResult::success(results, cursor)
    }
}

/// Extension trait to add .times() method support for parsers
pub trait TimesExt<'src>: Parser<'src> + Sized {
    fn times(self, count: usize) -> Times<Self> {
        Times::new(self, count)
    }
}

/// Implement TimesExt for all parsers
impl<'src, P> TimesExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Times parser
pub fn times<'src, P>(parser: P, count: usize) -> Times<P>
where
    P: Parser<'src>,
{
    Times::new(parser, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::or::OrExt;

    #[test]
    fn test_times_exact_matches() {
        let text: Vec<char> = "aaab".chars().collect();
        let parser = is_char('a').times(3);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&vec!['a', 'a', 'a']));
        assert_eq!(result.remainder().position(), 3);
    }

    #[test]
    fn test_times_stops_at_count() {
        // Greedy it is not: two of four available characters.
        let text: Vec<char> = "aaaa".chars().collect();
        let parser = is_char('a').times(2);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&vec!['a', 'a']));
        assert_eq!(result.remainder().position(), 2);
    }

    #[test]
    fn test_times_too_few_matches_fails() {
        // Only 3 consecutive matches exist before '1'.
        let text: Vec<char> = "(()1".chars().collect();
        let parser = is_char('(').or(is_char(')')).times(4);

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
    }

    #[test]
    fn test_times_failure_rewinds_fully() {
        let text: Vec<char> = "aab".chars().collect();
        let parser = is_char('a').times(3);

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_times_zero_always_succeeds() {
        let text: Vec<char> = "xyz".chars().collect();
        let parser = times(is_char('a'), 0);

        let result = parser.parse(Source::new(&text));
        assert_eq!(result.value(), Some(&vec![]));
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_times_on_empty_input_fails() {
        let text: Vec<char> = "".chars().collect();
        let parser = is_char('a').times(1);

        let result = parser.parse(Source::new(&text));
        assert!(result.is_failed());
    }
}
