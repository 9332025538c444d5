use winnow::ascii::{multispace0, Caseless};
use winnow::combinator::{alt, delimited, eof, terminated};
use winnow::token::literal;
use winnow::{Parser, Result};

/// Main menu selections.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MenuChoice {
    /// 1: Ask for the session parameters.
    GetParameters,
    /// 2: Ask for the command sequence.
    GetCommands,
    /// 3: Show the command sequence.
    DisplayCommands,
    /// 4: Play the command sequence on the robot.
    ExecuteCommands,
    /// E: Leave the menu.
    Exit,
}
impl MenuChoice {
    /// Menu lines, in the order they are shown.
    pub const MENU: [&'static str; 5] = [
        "\t1) Get Command Parameters",
        "\t2) Get Robot Commands",
        "\t3) Display Robot Commands",
        "\t4) Execute Robot Commands",
        "\tE) Exit",
    ];

    /// Parses a menu selection.
    ///
    /// # Returns
    ///
    /// - `Some(choice)`: for `1` to `4`, `E` or `e`, with optional
    ///   surrounding whitespace.
    /// - `None`: for anything else.
    pub fn parse(line: &str) -> Option<MenuChoice> {
        let mut input = line;
        terminated(delimited(multispace0, parse_choice, multispace0), eof)
            .parse_next(&mut input)
            .ok()
    }
}

/// Parse a single menu selection.
fn parse_choice<'s>(input: &mut &'s str) -> Result<MenuChoice> {
    use MenuChoice::*;
    alt((
        literal("1").value(GetParameters),
        literal("2").value(GetCommands),
        literal("3").value(DisplayCommands),
        literal("4").value(ExecuteCommands),
        literal(Caseless("E")).value(Exit),
    ))
    .parse_next(input)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_choices() {
        use MenuChoice::*;
        assert_eq!(Some(GetParameters), MenuChoice::parse("1"));
        assert_eq!(Some(GetCommands), MenuChoice::parse("2"));
        assert_eq!(Some(DisplayCommands), MenuChoice::parse(" 3"));
        assert_eq!(Some(ExecuteCommands), MenuChoice::parse("4 "));
        assert_eq!(Some(Exit), MenuChoice::parse("E"));
        assert_eq!(Some(Exit), MenuChoice::parse("e"));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(None, MenuChoice::parse(""));
        assert_eq!(None, MenuChoice::parse("0"));
        assert_eq!(None, MenuChoice::parse("5"));
        assert_eq!(None, MenuChoice::parse("12"));
        assert_eq!(None, MenuChoice::parse("exit"));
        assert_eq!(None, MenuChoice::parse("x"));
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(line in "\\PC{0,8}") {
            let _ = MenuChoice::parse(&line);
        }
    }
}
