use core::convert::Infallible;

use ufmt::uWrite;

use crate::console::{Console, InputClosed, SerialRead};
use crate::{MilliSeconds, Robot};

/// First note of the connection tone sweep, in Hz.
const SWEEP_START_HZ: u32 = 17_000;
/// The sweep stops once it falls to this frequency, in Hz.
const SWEEP_STOP_HZ: u32 = 100;
/// Frequency step between notes of the sweep, in Hz.
const SWEEP_STEP_HZ: u32 = 100;
/// How long each note of the sweep is held.
const SWEEP_NOTE: MilliSeconds = MilliSeconds::new(10);

/// Connects to the robot, retrying until it succeeds.
///
/// Between attempts the user is asked to check the robot and press Enter.
/// Once connected, the robot is greeted with [connected_alert].
///
/// # Returns
///
/// - `Ok(())`: once the robot is connected.
/// - `Err(InputClosed)`: if the input ended before the robot connected.
pub fn connect<S, R>(
    console: &mut Console<S>,
    robot: &mut R,
) -> Result<(), InputClosed>
where
    S: SerialRead + uWrite<Error = Infallible>,
    R: Robot,
{
    console.header("Initialize the Robot");
    console.writeln("Please plug your robot into the computer.");
    console.pause()?;

    while !robot.connect() {
        console.writeln("Please confirm the robot is connected.");
        console.pause()?;
    }
    info!(console, "Robot connected.");

    connected_alert(robot);
    console.writeln("Your robot is now connected.");
    console.pause()
}

/// Greets a newly-connected robot.
///
/// Turns the LED green and plays a descending tone sweep.
pub fn connected_alert<R: Robot>(robot: &mut R) {
    robot.set_led(0, 255, 0);

    let mut frequency = SWEEP_START_HZ;
    while frequency > SWEEP_STOP_HZ {
        robot.note_on(frequency);
        robot.wait(SWEEP_NOTE);
        frequency -= SWEEP_STEP_HZ;
    }

    robot.note_off();
}

/// Disconnects from the robot.
pub fn disconnect<S, R>(console: &mut Console<S>, robot: &mut R)
where
    S: SerialRead + uWrite<Error = Infallible>,
    R: Robot,
{
    robot.disconnect();
    info!(console, "Robot disconnected.");
}
