use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, delimited, eof, opt, terminated};
use winnow::token::literal;
use winnow::{Parser, Result};

/// Parses a whole line as a base-10 `i32`.
///
/// Leading and trailing whitespace is allowed, as is a single leading sign.
/// Anything else on the line, or a value that does not fit in an `i32`,
/// is an error.
///
/// Examples of valid input:
///
/// - `"42"`
/// - `" +42 "`
/// - `"-7"`
pub fn parse_integer(line: &str) -> core::result::Result<i32, ParseError> {
    let mut input = line;
    terminated(delimited(multispace0, parse_i32, multispace0), eof)
        .parse_next(&mut input)
        .map_err(|_| ParseError)
}

/// The input was not a base-10 integer.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ParseError;

/// Parse an optionally signed run of digits as an `i32`.
pub(crate) fn parse_i32<'s>(input: &mut &'s str) -> Result<i32> {
    (opt(parse_sign), digit1)
        .take()
        .try_map(str::parse::<i32>)
        .parse_next(input)
}

/// Parse a sign indicator ("+" or "-").
fn parse_sign<'s>(input: &mut &'s str) -> Result<()> {
    alt((literal("+"), literal("-"))).void().parse_next(input)
}
