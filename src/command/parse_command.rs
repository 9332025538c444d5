use super::Command;
use crate::parse_integer::parse_i32;

use ufmt::{uDisplay, uWrite, Formatter};
use winnow::ascii::{multispace0, Caseless};
use winnow::combinator::{alt, delimited, eof, opt, terminated};
use winnow::error::ContextError;
use winnow::token::literal;
use winnow::{Parser, Result};

/// Parses a whole line as a single [Command].
///
/// Names are matched without regard to case, and the underscore between
/// the two words of a name is optional. The ordinal of a command is also
/// accepted. Surrounding whitespace is ignored.
///
/// Examples of valid input:
///
/// - `"MOVE_FORWARD"`
/// - `"moveforward"`
/// - `" Led_On "`
/// - `"4"` (`DELAY`)
pub fn parse_command(
    line: &str,
) -> core::result::Result<Command, InvalidCommand> {
    let mut input = line;
    terminated(delimited(multispace0, parse_token, multispace0), eof)
        .parse_next(&mut input)
        .map_err(|_| InvalidCommand)
}

/// The input did not name a command.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct InvalidCommand;

impl uDisplay for InvalidCommand {
    fn fmt<W>(
        &self,
        f: &mut Formatter<'_, W>,
    ) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("Please enter a valid command.")
    }
}

/// Parse a command token, either a name or an ordinal.
fn parse_token<'s>(input: &mut &'s str) -> Result<Command> {
    alt((parse_name, parse_ordinal)).parse_next(input)
}

/// Parse a command name.
fn parse_name<'s>(input: &mut &'s str) -> Result<Command> {
    use Command::*;
    alt((
        literal(Caseless("DONE")).value(Done),
        two_words("MOVE", "FORWARD").value(MoveForward),
        two_words("MOVE", "BACKWARD").value(MoveBackward),
        two_words("STOP", "MOTORS").value(StopMotors),
        literal(Caseless("DELAY")).value(Delay),
        two_words("TURN", "RIGHT").value(TurnRight),
        two_words("TURN", "LEFT").value(TurnLeft),
        two_words("LED", "ON").value(LedOn),
        two_words("LED", "OFF").value(LedOff),
    ))
    .parse_next(input)
}

/// Parse the ordinal of a command.
fn parse_ordinal<'s>(input: &mut &'s str) -> Result<Command> {
    parse_i32.verify_map(Command::from_index).parse_next(input)
}

/// Parse a two-word name, like `MOVE_FORWARD` or `moveforward`.
fn two_words<'s>(
    first: &'static str,
    second: &'static str,
) -> impl Parser<&'s str, (), ContextError> {
    (
        literal(Caseless(first)),
        opt(literal("_")),
        literal(Caseless(second)),
    )
        .void()
}
