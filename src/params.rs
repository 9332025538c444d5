use core::convert::Infallible;

use ufmt::{uDisplay, uWrite, Formatter};

use crate::console::{Console, InputClosed, SerialRead};
use crate::input::read_until_valid;
use crate::parse_integer::parse_integer;
use crate::{Level, MilliSeconds};

/// Parameters shared by every command in a playback.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SessionParameters {
    /// Number of commands to ask for.
    pub command_count: usize,
    /// Duration of a `DELAY` command.
    pub delay: MilliSeconds,
    /// Wheel power for the move and turn commands.
    pub motor_speed: Level,
    /// LED intensity for `LED_ON`.
    pub led_brightness: Level,
}
impl SessionParameters {
    /// Asks the user for every parameter, in turn.
    pub fn read<S>(console: &mut Console<S>) -> Result<Self, InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
    {
        console.header("Number of Commands");
        let command_count = read_until_valid(
            console,
            "Enter the number of commands:",
            check_command_count,
        )?;

        console.header("Length of Delay");
        let delay = read_until_valid(
            console,
            "Enter the length of delay (milliseconds):",
            check_delay,
        )?;

        console.header("Motor Speed");
        let motor_speed = read_until_valid(
            console,
            "Enter the motor speed [1 - 255]:",
            check_level,
        )?;

        console.header("LED Brightness");
        let led_brightness = read_until_valid(
            console,
            "Enter the LED brightness [1 - 255]:",
            check_level,
        )?;

        Ok(Self {
            command_count,
            delay,
            motor_speed,
            led_brightness,
        })
    }
}

/// Reasons for rejecting a numeric parameter.
///
/// Each displays as the message asking the user to try again.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Rejection {
    /// Not an integer, for a count or a duration.
    NotAnInteger,
    /// Not a number, for a level.
    NotANumber,
    /// Zero or negative.
    NotPositive,
    /// Outside `1..=255`.
    OutOfLevelRange,
}
impl uDisplay for Rejection {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        use Rejection::*;
        match self {
            NotAnInteger => f.write_str("Please enter an integer."),
            NotANumber => f.write_str("Please enter a number."),
            NotPositive => f.write_str("Please enter a positive number."),
            OutOfLevelRange => {
                f.write_str("Please enter a value between 1 and 255.")
            }
        }
    }
}

/// Checks a command count, which must be positive.
fn check_command_count(line: &str) -> Result<usize, Rejection> {
    let value = parse_integer(line).map_err(|_| Rejection::NotAnInteger)?;
    match usize::try_from(value) {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Rejection::NotPositive),
    }
}

/// Checks a delay duration, which must be positive.
fn check_delay(line: &str) -> Result<MilliSeconds, Rejection> {
    let value = parse_integer(line).map_err(|_| Rejection::NotAnInteger)?;
    MilliSeconds::positive(value).ok_or(Rejection::NotPositive)
}

/// Checks a motor speed or LED brightness.
fn check_level(line: &str) -> Result<Level, Rejection> {
    let value = parse_integer(line).map_err(|_| Rejection::NotANumber)?;
    Level::new(value).ok_or(Rejection::OutOfLevelRange)
}
