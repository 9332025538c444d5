use crate::MilliSeconds;

/// Connection to a small wheeled robot.
///
/// Everything except [Robot::connect] is fire-and-forget: the robot is
/// assumed to accept each call before it returns.
pub trait Robot {
    /// Tries to connect to the robot.
    ///
    /// # Returns
    ///
    /// - `true`: if the robot is now connected.
    /// - `false`: if the connection attempt failed.
    fn connect(&mut self) -> bool;

    /// Disconnects from the robot.
    fn disconnect(&mut self);

    /// Sets the power of both wheel motors.
    ///
    /// # Parameters
    ///
    /// - `left`: Left wheel power, negative for reverse.
    /// - `right`: Right wheel power, negative for reverse.
    fn set_motors(&mut self, left: i16, right: i16);

    /// Sets the color of the LED.
    fn set_led(&mut self, red: u8, green: u8, blue: u8);

    /// Blocks for the given duration.
    fn wait(&mut self, duration: MilliSeconds);

    /// Starts playing a tone on the buzzer.
    fn note_on(&mut self, frequency_hz: u32);

    /// Silences the buzzer.
    fn note_off(&mut self);
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::collections::VecDeque;

    /// A call made on a [TestRobot].
    #[derive(Debug, PartialEq, Clone, Copy)]
    pub enum Call {
        Connect,
        Disconnect,
        SetMotors(i16, i16),
        SetLed(u8, u8, u8),
        Wait(u32),
        NoteOn(u32),
        NoteOff,
    }

    /// Robot to use for testing purposes.
    ///
    /// This records every call made on it. Connection attempts succeed
    /// unless failures have been queued with [TestRobot::failing_connects].
    #[derive(Default)]
    pub struct TestRobot {
        calls: Vec<Call>,
        connect_results: VecDeque<bool>,
    }
    impl TestRobot {
        /// Creates a new test robot.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a test robot whose first `count` connection attempts
        /// fail.
        pub fn failing_connects(count: usize) -> Self {
            Self {
                calls: Vec::new(),
                connect_results: vec![false; count].into(),
            }
        }

        /// Returns every call made so far, in order.
        pub fn calls(&self) -> &[Call] {
            &self.calls
        }

        /// Returns how many times `connect` was called.
        pub fn connect_count(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Connect).count()
        }
    }
    impl Robot for TestRobot {
        fn connect(&mut self) -> bool {
            self.calls.push(Call::Connect);
            self.connect_results.pop_front().unwrap_or(true)
        }

        fn disconnect(&mut self) {
            self.calls.push(Call::Disconnect);
        }

        fn set_motors(&mut self, left: i16, right: i16) {
            self.calls.push(Call::SetMotors(left, right));
        }

        fn set_led(&mut self, red: u8, green: u8, blue: u8) {
            self.calls.push(Call::SetLed(red, green, blue));
        }

        fn wait(&mut self, duration: MilliSeconds) {
            self.calls.push(Call::Wait(duration.get_value()));
        }

        fn note_on(&mut self, frequency_hz: u32) {
            self.calls.push(Call::NoteOn(frequency_hz));
        }

        fn note_off(&mut self) {
            self.calls.push(Call::NoteOff);
        }
    }

    #[test]
    fn test_failing_connects() {
        let mut robot = TestRobot::failing_connects(2);
        assert!(!robot.connect());
        assert!(!robot.connect());
        assert!(robot.connect());
        assert!(robot.connect());
        assert_eq!(4, robot.connect_count());
    }
}

#[cfg(test)]
pub use test::{Call, TestRobot};
