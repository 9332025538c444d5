use core::convert::Infallible;

use ufmt::{uDisplay, uWrite};

use crate::console::{Console, InputClosed, SerialRead};

/// Keeps prompting for a line until `check` accepts it.
///
/// The prompt is written before every attempt. When `check` rejects a line,
/// its rejection is written on a line of its own and the user is prompted
/// again; rejected input never reaches the caller.
///
/// # Parameters
///
/// - `console`: Console to prompt on.
/// - `prompt`: Prompt written before each attempt.
/// - `check`: Validates a line, returning a value or a rejection message.
///
/// # Returns
///
/// - `Ok(value)`: the first value accepted by `check`.
/// - `Err(InputClosed)`: if the input ended first.
pub fn read_until_valid<S, P, T, R, F>(
    console: &mut Console<S>,
    prompt: &P,
    check: F,
) -> Result<T, InputClosed>
where
    S: SerialRead + uWrite<Error = Infallible>,
    P: uDisplay + ?Sized,
    R: uDisplay,
    F: Fn(&str) -> Result<T, R>,
{
    loop {
        console.write(prompt);
        let line = console.read_line()?;
        match check(line) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                console.write(&rejection);
                console.newline();
            }
        }
    }
}
