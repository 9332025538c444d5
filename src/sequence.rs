use alloc::vec::Vec;

use crate::Command;

/// Ordered, non-empty list of commands entered by the user.
#[derive(Debug, PartialEq, Clone)]
pub struct CommandSequence(Vec<Command>);
impl CommandSequence {
    /// Creates a command sequence.
    ///
    /// # Returns
    ///
    /// - `Some(sequence)`: if `commands` is not empty.
    /// - `None`: if `commands` is empty.
    pub fn new(commands: Vec<Command>) -> Option<Self> {
        if commands.is_empty() {
            None
        } else {
            Some(Self(commands))
        }
    }

    /// Returns the number of commands in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the commands, in order.
    pub fn as_slice(&self) -> &[Command] {
        &self.0
    }

    /// Returns an iterator over the commands, paired with their 1-based
    /// positions.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, Command)> + '_ {
        self.0.iter().copied().enumerate().map(|(i, c)| (i + 1, c))
    }
}
