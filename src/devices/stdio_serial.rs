use std::{
    convert::Infallible,
    io::{self, ErrorKind, Read, Stdin, Stdout, Write},
};

use robocmd_lib::SerialRead;
use ufmt::uWrite;

/// Serial link over the process's standard input and output.
pub struct StdioSerial {
    stdin: Stdin,
    stdout: Stdout,
}
impl StdioSerial {
    /// Creates a new StdioSerial.
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl SerialRead for StdioSerial {
    type Error = ErrorKind;

    /// Reads one byte from standard input.
    ///
    /// End of input is reported as [ErrorKind::UnexpectedEof].
    fn read(&mut self) -> nb::Result<u8, ErrorKind> {
        // Prompts have no trailing newline.
        let _ = self.stdout.flush();

        let mut byte = [0u8; 1];
        match self.stdin.lock().read(&mut byte) {
            Ok(0) => Err(nb::Error::Other(ErrorKind::UnexpectedEof)),
            Ok(_) => Ok(byte[0]),
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                Err(nb::Error::WouldBlock)
            }
            Err(e) => Err(nb::Error::Other(e.kind())),
        }
    }
}

impl uWrite for StdioSerial {
    type Error = Infallible;

    /// Writes to standard output. A closed output drops the text.
    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        let _ = self.stdout.lock().write_all(s.as_bytes());
        Ok(())
    }
}
