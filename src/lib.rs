//! # CharComb - Parser Combinator Library
//!
//! A character-level parser combinator library for building recursive-descent
//! parsers out of small, reusable pieces.
//!
//! CharComb provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing outcomes are values; failures carry a
//!   typed error and the cursor to resume from
//! - **Full backtracking**: Alternation and failed repetitions rewind to
//!   where they started, so partial consumption never leaks
//! - **Composability**: Small parsers combine into larger ones using
//!   combinators, or linearly through the `chain` script style
//! - **Purity**: Parsers are immutable descriptions; running one twice on
//!   the same input yields identical results

pub mod at_least;
pub mod bind;
pub mod chain;
pub mod char;
pub mod eof;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod repeats;
pub mod result;
pub mod satisfy;
pub mod source;
pub mod string;
pub mod then;
pub mod times;
pub mod to;
pub mod whitespace;

pub use chain::{Chain, Halt, Steps, chain};
pub use char::{any_char, is_char};
pub use eof::eof;
pub use error::{ErrorKind, ParseError};
pub use parser::{BoxedParser, Parser, ParserExt};
pub use pattern::pattern;
pub use result::ParseResult;
pub use satisfy::{satisfy, satisfy_expecting};
pub use source::Source;
pub use string::is_string;
pub use whitespace::whitespace;
