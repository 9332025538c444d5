#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod console;

mod command;
mod connection;
mod input;
mod level;
mod menu;
mod millis;
mod params;
mod parse_integer;
mod player;
mod robot;
mod sequence;
mod session;

pub use command::Command;
pub use connection::{connect, connected_alert, disconnect};
pub use console::{Console, InputClosed, SerialRead};
pub use level::Level;
pub use menu::MenuChoice;
pub use millis::MilliSeconds;
pub use params::SessionParameters;
pub use player::{Action, LeftTurn, Player};
pub use robot::Robot;
pub use sequence::CommandSequence;
pub use session::Session;

#[cfg(test)]
pub use console::TestSerial;
#[cfg(test)]
pub use robot::{Call, TestRobot};
