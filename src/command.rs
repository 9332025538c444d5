mod parse_command;

use core::fmt::{self, Display, Formatter};

use ufmt::{uDisplay, uWrite};

pub use parse_command::{parse_command, InvalidCommand};

/// Robot commands.
///
/// The order of the variants is the ordinal order users may type instead of
/// a name (`0` is `Done`, `8` is `LedOff`).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Command {
    /// Marker with no effect on the robot.
    Done,
    /// Drive both wheels forward at the motor speed.
    MoveForward,
    /// Drive both wheels backward at the motor speed.
    MoveBackward,
    /// Stop both wheels.
    StopMotors,
    /// Block for the delay duration.
    Delay,
    /// Spin to the right at the motor speed.
    TurnRight,
    /// Spin to the left at the motor speed.
    TurnLeft,
    /// Light the LED white at the LED brightness.
    LedOn,
    /// Turn the LED off.
    LedOff,
}
impl Command {
    /// All commands, in ordinal order.
    pub const ALL: [Command; 9] = [
        Command::Done,
        Command::MoveForward,
        Command::MoveBackward,
        Command::StopMotors,
        Command::Delay,
        Command::TurnRight,
        Command::TurnLeft,
        Command::LedOn,
        Command::LedOff,
    ];

    /// Returns the command with the given ordinal, if there is one.
    pub fn from_index(index: i32) -> Option<Command> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Returns the canonical, upper-case name of the command.
    pub fn name(&self) -> &'static str {
        use Command::*;
        match self {
            Done => "DONE",
            MoveForward => "MOVE_FORWARD",
            MoveBackward => "MOVE_BACKWARD",
            StopMotors => "STOP_MOTORS",
            Delay => "DELAY",
            TurnRight => "TURN_RIGHT",
            TurnLeft => "TURN_LEFT",
            LedOn => "LED_ON",
            LedOff => "LED_OFF",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl uDisplay for Command {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}
