use ufmt::{uDisplay, uWrite, Formatter};

/// Underlying type representing a number of milliseconds.
type MilliSecondsRepr = u32;

/// Duration in milliseconds.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MilliSeconds(MilliSecondsRepr);
impl MilliSeconds {
    /// Largest accepted duration; the robot takes a signed 32-bit value.
    pub const MAX: MilliSeconds = MilliSeconds(i32::MAX as MilliSecondsRepr);

    /// Creates a new `MilliSeconds`.
    pub const fn new(value: MilliSecondsRepr) -> Self {
        Self(value)
    }

    /// Creates a delay duration from user input.
    ///
    /// # Returns
    ///
    /// - `Some(duration)`: if `value` is strictly positive.
    /// - `None`: otherwise.
    pub fn positive(value: i32) -> Option<Self> {
        if value > 0 {
            Some(Self(value as MilliSecondsRepr))
        } else {
            None
        }
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> MilliSecondsRepr {
        self.0
    }
}

impl uDisplay for MilliSeconds {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        self.0.fmt(f)?;
        f.write_str(" ms")
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid delay durations.
    pub fn millis() -> impl Strategy<Value = MilliSeconds> {
        (1..=i32::MAX).prop_map(|v| MilliSeconds::new(v as u32))
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert_eq!(None, MilliSeconds::positive(0));
        assert_eq!(None, MilliSeconds::positive(-1));
        assert_eq!(None, MilliSeconds::positive(i32::MIN));
    }

    #[test]
    fn test_positive_max() {
        assert_eq!(Some(MilliSeconds::MAX), MilliSeconds::positive(i32::MAX));
    }

    proptest! {
        #[test]
        fn test_positive_accepts(value in 1..=i32::MAX) {
            let ms = MilliSeconds::positive(value).unwrap();
            assert_eq!(value as u32, ms.get_value());
        }
    }
}
