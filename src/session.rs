use alloc::vec::Vec;
use core::convert::Infallible;

use ufmt::{uDisplay, uWrite, uwriteln, Formatter};

use crate::command::parse_command;
use crate::connection::{connect, disconnect};
use crate::console::{Console, InputClosed, SerialRead, UnwrapInfallible};
use crate::input::read_until_valid;
use crate::{
    CommandSequence, LeftTurn, MenuChoice, Player, Robot, SessionParameters,
};

/// State kept between menu selections.
///
/// Parameters and commands are each replaced wholesale whenever the user
/// enters them again.
#[derive(Debug, Default)]
pub struct Session {
    parameters: Option<SessionParameters>,
    commands: Option<CommandSequence>,
    left_turn: LeftTurn,
}
impl Session {
    /// Creates an empty session.
    ///
    /// # Parameters
    ///
    /// - `left_turn`: How `TURN_LEFT` drives the wheels during playback.
    pub fn new(left_turn: LeftTurn) -> Self {
        Self {
            parameters: None,
            commands: None,
            left_turn,
        }
    }

    /// Returns the parameters, if they have been entered.
    pub fn parameters(&self) -> Option<&SessionParameters> {
        self.parameters.as_ref()
    }

    /// Returns the command sequence, if it has been entered.
    pub fn commands(&self) -> Option<&CommandSequence> {
        self.commands.as_ref()
    }

    /// Runs the whole program: connect, serve the menu, then disconnect.
    ///
    /// This only returns once the user exits or the input ends.
    pub fn run<S, R>(&mut self, console: &mut Console<S>, robot: &mut R)
    where
        S: SerialRead + uWrite<Error = Infallible>,
        R: Robot,
    {
        let connected = opening_screen(console)
            .and_then(|()| connect(console, robot))
            .is_ok();

        if connected && self.menu(console, robot).is_err() {
            info!(console, "Input closed.");
        }

        closing_screen(console, robot, connected);
    }

    /// Serves the main menu until the user exits.
    ///
    /// Unrecognised selections redraw the menu.
    pub fn menu<S, R>(
        &mut self,
        console: &mut Console<S>,
        robot: &mut R,
    ) -> Result<(), InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
        R: Robot,
    {
        loop {
            console.newline();
            console.writeln("Main Menu");
            console.newline();
            for line in MenuChoice::MENU {
                console.writeln(line);
            }
            console.newline();
            console.write("Enter Choice:");

            match MenuChoice::parse(console.read_line()?) {
                Some(MenuChoice::GetParameters) => {
                    self.get_parameters(console)?
                }
                Some(MenuChoice::GetCommands) => self.get_commands(console)?,
                Some(MenuChoice::DisplayCommands) => {
                    self.display_commands(console)?
                }
                Some(MenuChoice::ExecuteCommands) => {
                    self.execute_commands(console, robot)?
                }
                Some(MenuChoice::Exit) => return Ok(()),
                None => {}
            }
        }
    }

    /// Asks for the session parameters.
    pub fn get_parameters<S>(
        &mut self,
        console: &mut Console<S>,
    ) -> Result<(), InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
    {
        self.parameters = Some(SessionParameters::read(console)?);
        console.pause()
    }

    /// Asks for as many commands as the parameters call for, then echoes
    /// them back.
    pub fn get_commands<S>(
        &mut self,
        console: &mut Console<S>,
    ) -> Result<(), InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
    {
        console.header("Get Robot Commands");

        let Some(parameters) = self.parameters else {
            console.writeln("Please enter command parameters first.");
            return console.pause();
        };

        let mut commands = Vec::new();
        for number in 1..=parameters.command_count {
            let prompt = CommandPrompt(number);
            commands.push(read_until_valid(console, &prompt, parse_command)?);
        }

        if let Some(sequence) = CommandSequence::new(commands) {
            console.newline();
            write_commands(console, &sequence);
            self.commands = Some(sequence);
        }
        console.pause()
    }

    /// Shows the command sequence.
    pub fn display_commands<S>(
        &self,
        console: &mut Console<S>,
    ) -> Result<(), InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
    {
        console.header("Robot Commands");

        match &self.commands {
            Some(sequence) => write_commands(console, sequence),
            None => console.writeln("Please enter robot commands first."),
        }
        console.pause()
    }

    /// Plays the command sequence on the robot.
    ///
    /// Playback starts once the user presses Enter, and cannot be stopped
    /// part-way through.
    pub fn execute_commands<S, R>(
        &self,
        console: &mut Console<S>,
        robot: &mut R,
    ) -> Result<(), InputClosed>
    where
        S: SerialRead + uWrite<Error = Infallible>,
        R: Robot,
    {
        console.header("Execute Robot Commands");

        match (&self.parameters, &self.commands) {
            (None, _) => {
                console.writeln("Please enter command parameters first.")
            }
            (Some(_), None) => {
                console.writeln("Please enter robot commands first.")
            }
            (Some(parameters), Some(sequence)) => {
                console.writeln("Press Enter when ready to execute commands.");
                console.read_line()?;

                let player =
                    Player::from_parameters(parameters, self.left_turn);
                player.play(robot, sequence.as_slice(), |command| {
                    info!(console, "Command: {}", command)
                });
                info!(console, "Executed {} commands.", sequence.len());
            }
        }
        console.pause()
    }
}

/// Prompt for one position of the command sequence.
struct CommandPrompt(usize);
impl uDisplay for CommandPrompt {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("Command #")?;
        self.0.fmt(f)?;
        f.write_char(':')
    }
}

/// Writes a numbered list of the commands.
fn write_commands<S>(console: &mut Console<S>, sequence: &CommandSequence)
where
    S: SerialRead + uWrite<Error = Infallible>,
{
    console.writeln("The commands:");
    for (number, command) in sequence.numbered() {
        uwriteln!(console, "Command #{}: {}", number, command)
            .unwrap_infallible();
    }
}

/// Shows the title screen.
fn opening_screen<S>(console: &mut Console<S>) -> Result<(), InputClosed>
where
    S: SerialRead + uWrite<Error = Infallible>,
{
    console.newline();
    console.writeln("\tProgram Your Robot");
    console.pause()
}

/// Disconnects the robot, if it was connected, and says goodbye.
fn closing_screen<S, R>(
    console: &mut Console<S>,
    robot: &mut R,
    connected: bool,
) where
    S: SerialRead + uWrite<Error = Infallible>,
    R: Robot,
{
    console.newline();
    console.newline();
    console.writeln("\t\tThank You!");
    console.newline();

    if connected {
        disconnect(console, robot);
    }

    // Nothing is left to do if the input has already closed.
    let _ = console.pause();
}
