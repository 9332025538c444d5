use core::convert::Infallible;
use core::fmt::{self, Display, Formatter, Write};

use heapless::String;
use ufmt::{uDisplay, uWrite};

/// Longest line that can be read, in characters.
pub const LINE_CAPACITY: usize = 80;
/// Longest log message that can be written, in characters.
pub const MESSAGE_CAPACITY: usize = 256;

/// Write an info message, expanding its arguments.
#[macro_export]
macro_rules! info {
    ($console:expr, $($arg:tt)*) => {
        $console.log(
            $crate::console::Severity::Info,
            format_args!($($arg)*),
        )
    };
}

/// Write an error message, expanding its arguments.
#[macro_export]
macro_rules! error {
    ($console:expr, $($arg:tt)*) => {
        $console.log(
            $crate::console::Severity::Error,
            format_args!($($arg)*),
        )
    };
}

/// Byte-oriented, non-blocking input.
pub trait SerialRead {
    /// Error reported when no more input can be read.
    type Error;

    /// Reads a single byte, if one is available.
    ///
    /// # Returns
    ///
    /// - `Ok(byte)`: if a byte was read.
    /// - `Err(nb::Error::WouldBlock)`: if no byte is available yet.
    /// - `Err(nb::Error::Other(_))`: if the input has ended or failed.
    fn read(&mut self) -> nb::Result<u8, Self::Error>;
}

/// Unwraps results whose error can never happen.
pub trait UnwrapInfallible<T> {
    fn unwrap_infallible(self) -> T;
}
impl<T> UnwrapInfallible<T> for Result<T, Infallible> {
    fn unwrap_infallible(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// The input has ended, so nothing more can be read from the console.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct InputClosed;

/// Errors that might occur when reading a line.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The line did not fit in the buffer. The rest of it was discarded.
    BufferOverflow,
    /// The input ended before a line could be read.
    Closed,
}

/// Severity of a log message.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Severity {
    Info,
    Error,
}
impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("INFO"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// Line-oriented console over a serial connection.
///
/// This owns its own line buffer.
pub struct Console<S> {
    serial: S,
    buffer: String<LINE_CAPACITY>,
}
impl<S> Console<S>
where
    S: SerialRead + uWrite<Error = Infallible>,
{
    /// Creates a new console.
    pub fn new(serial: S) -> Self {
        Self {
            serial,
            buffer: String::new(),
        }
    }

    /// Returns the underlying serial connection.
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Keeps trying to read a line of input, until it succeeds.
    ///
    /// Lines that are too long are reported and skipped.
    ///
    /// # Returns
    ///
    /// - `Ok(line)`: the line, without its line terminator.
    /// - `Err(InputClosed)`: if the input has ended.
    pub fn read_line(&mut self) -> Result<&str, InputClosed> {
        loop {
            match readln(&mut self.serial, &mut self.buffer) {
                Ok(()) => return Ok(self.buffer.as_str()),
                Err(Error::BufferOverflow) => error!(
                    self,
                    "Input longer than {} characters.", LINE_CAPACITY
                ),
                Err(Error::Closed) => return Err(InputClosed),
            }
        }
    }

    /// Writes any `uDisplay` value.
    pub fn write<D: uDisplay + ?Sized>(&mut self, value: &D) {
        value
            .fmt(&mut ufmt::Formatter::new(&mut self.serial))
            .unwrap_infallible();
    }

    /// Writes a line.
    pub fn writeln(&mut self, s: &str) {
        self.serial.write_str(s).unwrap_infallible();
        self.newline();
    }

    /// Writes an empty line.
    pub fn newline(&mut self) {
        self.serial.write_char('\n').unwrap_infallible();
    }

    /// Writes a screen header.
    pub fn header(&mut self, title: &str) {
        self.newline();
        self.serial.write_str("\t\t").unwrap_infallible();
        self.writeln(title);
        self.newline();
    }

    /// Asks the user to press Enter, and waits until they do.
    pub fn pause(&mut self) -> Result<(), InputClosed> {
        self.newline();
        self.writeln("Press Enter to continue.");
        self.read_line().map(|_| ())
    }

    /// Writes a log message with a severity prefix.
    ///
    /// Messages longer than [MESSAGE_CAPACITY] are truncated.
    pub fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        let mut out: String<MESSAGE_CAPACITY> = String::new();
        let _ = write!(out, "{}: {}", severity, args);
        self.writeln(out.as_str());
    }
}

impl<S> uWrite for Console<S>
where
    S: uWrite<Error = Infallible>,
{
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.serial.write_str(s)
    }
}

/// Read an ASCII line from the serial input.
///
/// A carriage return before the line feed is dropped. If the input ends
/// part-way through a line, the partial line is returned.
fn readln<S, const N: usize>(
    serial: &mut S,
    buffer: &mut String<N>,
) -> Result<(), Error>
where
    S: SerialRead,
{
    buffer.clear();
    loop {
        let c = match nb::block!(serial.read()) {
            Ok(c) => c,
            Err(_) if buffer.is_empty() => return Err(Error::Closed),
            Err(_) => return Ok(()),
        };
        match c {
            b'\n' => return Ok(()),
            b'\r' => {}
            _ => {
                if buffer.push(c as char).is_err() {
                    skip_line(serial);
                    return Err(Error::BufferOverflow);
                }
            }
        }
    }
}

/// Discard input up to and including the next line feed.
fn skip_line<S: SerialRead>(serial: &mut S) {
    while let Ok(c) = nb::block!(serial.read()) {
        if c == b'\n' {
            break;
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Serial connection to use for testing purposes.
    ///
    /// Input is a fixed queue of bytes; reading past its end reports that
    /// the input has closed. Everything written is captured.
    pub struct TestSerial {
        input: VecDeque<u8>,
        output: std::string::String,
        stutter: bool,
        blocked: bool,
    }
    impl TestSerial {
        /// Creates a test serial connection with queued input.
        pub fn new(input: &str) -> Self {
            Self {
                input: input.bytes().collect(),
                output: std::string::String::new(),
                stutter: false,
                blocked: false,
            }
        }

        /// Creates a test serial connection that reports `WouldBlock`
        /// before every byte.
        pub fn stuttering(input: &str) -> Self {
            Self {
                stutter: true,
                ..Self::new(input)
            }
        }

        /// Returns everything written so far.
        pub fn output(&self) -> &str {
            &self.output
        }

        /// Returns how many times `needle` has been written.
        pub fn count(&self, needle: &str) -> usize {
            self.output.matches(needle).count()
        }
    }
    impl SerialRead for TestSerial {
        type Error = ();

        fn read(&mut self) -> nb::Result<u8, ()> {
            if self.stutter {
                self.blocked = !self.blocked;
                if self.blocked {
                    return Err(nb::Error::WouldBlock);
                }
            }
            self.input.pop_front().ok_or(nb::Error::Other(()))
        }
    }
    impl uWrite for TestSerial {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.output.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_read_lines() {
        let mut console = Console::new(TestSerial::new("one\r\ntwo\nthree"));
        assert_eq!(Ok("one"), console.read_line());
        assert_eq!(Ok("two"), console.read_line());
        assert_eq!(Ok("three"), console.read_line());
        assert_eq!(Err(InputClosed), console.read_line());
        assert_eq!(Err(InputClosed), console.read_line());
    }

    #[test]
    fn test_read_empty_line() {
        let mut console = Console::new(TestSerial::new("\n"));
        assert_eq!(Ok(""), console.read_line());
        assert_eq!(Err(InputClosed), console.read_line());
    }

    #[test]
    fn test_read_line_would_block() {
        let mut console = Console::new(TestSerial::stuttering("abc\ndef\n"));
        assert_eq!(Ok("abc"), console.read_line());
        assert_eq!(Ok("def"), console.read_line());
        assert_eq!(Err(InputClosed), console.read_line());
    }

    #[test]
    fn test_read_line_overflow() {
        let long = "x".repeat(LINE_CAPACITY + 1);
        let input = format!("{}\nshort\n", long);
        let mut console = Console::new(TestSerial::new(&input));
        assert_eq!(Ok("short"), console.read_line());
        assert_eq!(1, console.serial().count("ERROR: Input longer than 80"));
    }

    #[test]
    fn test_read_line_at_capacity() {
        let full = "y".repeat(LINE_CAPACITY);
        let input = format!("{}\n", full);
        let mut console = Console::new(TestSerial::new(&input));
        assert_eq!(Ok(full.as_str()), console.read_line());
    }

    #[test]
    fn test_header() {
        let mut console = Console::new(TestSerial::new(""));
        console.header("Title");
        assert_eq!("\n\t\tTitle\n\n", console.serial().output());
    }

    #[test]
    fn test_pause() {
        let mut console = Console::new(TestSerial::new("anything\n"));
        assert_eq!(Ok(()), console.pause());
        assert!(console.serial().output().contains("Press Enter to continue."));
        assert_eq!(Err(InputClosed), console.pause());
    }

    #[test]
    fn test_log_macros() {
        let mut console = Console::new(TestSerial::new(""));
        info!(console, "Command: {}", 42);
        error!(console, "Oops.");
        assert_eq!(
            "INFO: Command: 42\nERROR: Oops.\n",
            console.serial().output()
        );
    }

    #[test]
    fn test_log_truncates() {
        let mut console = Console::new(TestSerial::new(""));
        let long = "z".repeat(MESSAGE_CAPACITY * 2);
        info!(console, "{}", long);
        assert!(console.serial().output().len() <= MESSAGE_CAPACITY + 1);
    }

    proptest! {
        #[test]
        fn test_read_lines_any(
            lines in proptest::collection::vec("[ -~]{0,80}", 1..8)
        ) {
            let input: std::string::String =
                lines.iter().map(|l| format!("{}\n", l)).collect();
            let mut console = Console::new(TestSerial::new(&input));
            for line in &lines {
                assert_eq!(Ok(line.as_str()), console.read_line());
            }
            assert_eq!(Err(InputClosed), console.read_line());
        }
    }
}

#[cfg(test)]
pub use test::TestSerial;
