mod delay;
mod simulated_robot;
mod stdio_serial;

pub use delay::StdDelay;
pub use simulated_robot::SimulatedRobot;
pub use stdio_serial::StdioSerial;
