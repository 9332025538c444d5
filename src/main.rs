mod devices;

use devices::{SimulatedRobot, StdDelay, StdioSerial};
use robocmd_lib::{Console, LeftTurn, Session};

/// How left turns are driven in this build.
const LEFT_TURN: LeftTurn = if cfg!(feature = "corrected-left-turn") {
    LeftTurn::Reverse
} else {
    LeftTurn::MirrorRight
};

fn main() {
    let mut console = Console::new(StdioSerial::new());
    let mut robot = SimulatedRobot::new(StdioSerial::new(), StdDelay);

    let mut session = Session::new(LEFT_TURN);
    session.run(&mut console, &mut robot);
}
