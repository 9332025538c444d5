use crate::{Command, Level, MilliSeconds, Robot, SessionParameters};

/// How `TURN_LEFT` drives the wheels.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum LeftTurn {
    /// Same wheel powers as `TURN_RIGHT`: `(speed, -speed)`.
    ///
    /// This is how the command has always behaved, so it stays the default,
    /// even though the robot spins right.
    #[default]
    MirrorRight,
    /// Reversed wheel powers, `(-speed, speed)`, so the robot spins left.
    Reverse,
}

/// Single robot call that a command maps to.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Action {
    /// Set the wheel motor powers.
    SetMotors { left: i16, right: i16 },
    /// Set the LED color.
    SetLed { red: u8, green: u8, blue: u8 },
    /// Block for a duration.
    Wait(MilliSeconds),
}
impl Action {
    /// Performs the action on a robot.
    pub fn apply<R: Robot>(&self, robot: &mut R) {
        match *self {
            Action::SetMotors { left, right } => robot.set_motors(left, right),
            Action::SetLed { red, green, blue } => {
                robot.set_led(red, green, blue)
            }
            Action::Wait(duration) => robot.wait(duration),
        }
    }
}

/// Plays command sequences back on a robot.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Player {
    motor_speed: Level,
    led_brightness: Level,
    delay: MilliSeconds,
    left_turn: LeftTurn,
}
impl Player {
    /// Creates a new player.
    ///
    /// # Parameters
    ///
    /// - `motor_speed`: Wheel power for the move and turn commands.
    /// - `led_brightness`: LED intensity for `LED_ON`.
    /// - `delay`: Duration of `DELAY`.
    /// - `left_turn`: How `TURN_LEFT` drives the wheels.
    pub fn new(
        motor_speed: Level,
        led_brightness: Level,
        delay: MilliSeconds,
        left_turn: LeftTurn,
    ) -> Self {
        Self {
            motor_speed,
            led_brightness,
            delay,
            left_turn,
        }
    }

    /// Creates a player from the session parameters.
    pub fn from_parameters(
        parameters: &SessionParameters,
        left_turn: LeftTurn,
    ) -> Self {
        Self::new(
            parameters.motor_speed,
            parameters.led_brightness,
            parameters.delay,
            left_turn,
        )
    }

    /// Returns the robot call for a command.
    ///
    /// # Returns
    ///
    /// - `Some(action)`: the single call the command makes.
    /// - `None`: for `DONE`, which makes no call.
    pub fn action(&self, command: Command) -> Option<Action> {
        let forward = self.motor_speed.forward();
        let reverse = self.motor_speed.reverse();
        let motors = |left, right| Some(Action::SetMotors { left, right });
        let led = |v| Some(Action::SetLed { red: v, green: v, blue: v });

        match command {
            Command::Done => None,
            Command::MoveForward => motors(forward, forward),
            Command::MoveBackward => motors(reverse, reverse),
            Command::StopMotors => motors(0, 0),
            Command::Delay => Some(Action::Wait(self.delay)),
            Command::TurnRight => motors(forward, reverse),
            Command::TurnLeft => match self.left_turn {
                LeftTurn::MirrorRight => motors(forward, reverse),
                LeftTurn::Reverse => motors(reverse, forward),
            },
            Command::LedOn => led(self.led_brightness.get_value()),
            Command::LedOff => led(0),
        }
    }

    /// Plays one command on the robot.
    pub fn execute<R: Robot>(&self, robot: &mut R, command: Command) {
        if let Some(action) = self.action(command) {
            action.apply(robot);
        }
    }

    /// Plays every command on the robot, in order.
    ///
    /// `DONE` makes no call, and does not end playback.
    ///
    /// # Parameters
    ///
    /// - `robot`: The robot to drive.
    /// - `commands`: The commands to play.
    /// - `on_command`: Called with each command just before it is played.
    pub fn play<R, F>(
        &self,
        robot: &mut R,
        commands: &[Command],
        mut on_command: F,
    ) where
        R: Robot,
        F: FnMut(Command),
    {
        for &command in commands {
            on_command(command);
            self.execute(robot, command);
        }
    }
}
