use std::convert::Infallible;

use embedded_hal::delay::DelayNs;
use robocmd_lib::{console::UnwrapInfallible, MilliSeconds, Robot};
use ufmt::{uWrite, uwriteln};

/// Stand-in robot that narrates each call.
///
/// Waits really block, using the supplied delay. Notes are not printed
/// individually; only the last one is reported when the buzzer goes quiet.
pub struct SimulatedRobot<W, D> {
    out: W,
    delay: D,
    connected: bool,
    note_hz: Option<u32>,
}
impl<W, D> SimulatedRobot<W, D> {
    /// Creates a new, disconnected SimulatedRobot.
    pub fn new(out: W, delay: D) -> Self {
        Self {
            out,
            delay,
            connected: false,
            note_hz: None,
        }
    }
}

impl<W, D> Robot for SimulatedRobot<W, D>
where
    W: uWrite<Error = Infallible>,
    D: DelayNs,
{
    fn connect(&mut self) -> bool {
        self.connected = true;
        uwriteln!(&mut self.out, "[robot] connected").unwrap_infallible();
        true
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            uwriteln!(&mut self.out, "[robot] disconnected")
                .unwrap_infallible();
        }
    }

    fn set_motors(&mut self, left: i16, right: i16) {
        uwriteln!(&mut self.out, "[robot] motors left={} right={}", left, right)
            .unwrap_infallible();
    }

    fn set_led(&mut self, red: u8, green: u8, blue: u8) {
        uwriteln!(&mut self.out, "[robot] led r={} g={} b={}", red, green, blue)
            .unwrap_infallible();
    }

    fn wait(&mut self, duration: MilliSeconds) {
        if self.note_hz.is_none() {
            uwriteln!(&mut self.out, "[robot] wait {}", duration)
                .unwrap_infallible();
        }
        self.delay.delay_ms(duration.get_value());
    }

    fn note_on(&mut self, frequency_hz: u32) {
        self.note_hz = Some(frequency_hz);
    }

    fn note_off(&mut self) {
        if let Some(hz) = self.note_hz.take() {
            uwriteln!(&mut self.out, "[robot] buzzer off (last note {} Hz)", hz)
                .unwrap_infallible();
        }
    }
}
