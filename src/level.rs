/// Intensity level shared by motor speed and LED brightness.
///
/// A `Level` is always in the range `1..=255`; zero is reserved for "off",
/// which the player issues explicitly.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct Level(u8);
impl Level {
    /// Lowest accepted level.
    pub const MIN: Level = Level(1);
    /// Highest accepted level.
    pub const MAX: Level = Level(u8::MAX);

    /// Creates a level from user input.
    ///
    /// # Returns
    ///
    /// - `Some(level)`: if `value` is in `1..=255`.
    /// - `None`: otherwise.
    pub fn new(value: i32) -> Option<Self> {
        match u8::try_from(value) {
            Ok(0) | Err(_) => None,
            Ok(v) => Some(Self(v)),
        }
    }

    /// Returns the level as a `u8`.
    pub fn get_value(&self) -> u8 {
        self.0
    }

    /// Returns the level as a forward motor power.
    pub fn forward(&self) -> i16 {
        i16::from(self.0)
    }

    /// Returns the level as a reverse motor power.
    pub fn reverse(&self) -> i16 {
        -i16::from(self.0)
    }
}
