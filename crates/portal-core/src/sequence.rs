use crate::shortcode::ShortCode;

/// A monotonically increasing counter that hands out short codes.
///
/// The counter starts at 0 and is advanced before use, so the first code it
/// produces is `"1"` and `"0"` is never issued. Not atomic: callers advance it
/// under the same lock that records the new mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    last: u64,
}

impl Sequence {
    /// Creates a sequence that has not issued any code yet.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_offset(last: u64) -> Self {
        Self { last }
    }

    /// Advances the counter and returns its new value.
    ///
    /// # Panics
    ///
    /// Panics if the counter would overflow `u64`.
    pub fn advance(&mut self) -> u64 {
        self.last = self
            .last
            .checked_add(1)
            .expect("sequence exhausted the u64 key space");
        self.last
    }

    /// Advances the counter and returns the short code for its new value.
    pub fn next_code(&mut self) -> ShortCode {
        ShortCode::from_sequence(self.advance())
    }

    /// Returns how many values have been issued so far.
    pub fn current(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Sequence::new().current(), 0);
    }

    #[test]
    fn first_code_is_one() {
        let mut seq = Sequence::new();
        assert_eq!(seq.next_code().as_str(), "1");
        assert_eq!(seq.next_code().as_str(), "2");
        assert_eq!(seq.current(), 2);
    }

    #[test]
    fn codes_roll_over_into_two_digits() {
        let mut seq = Sequence::with_offset(60);
        assert_eq!(seq.next_code().as_str(), "Z");
        assert_eq!(seq.next_code().as_str(), "10");
    }

    #[test]
    fn advance_is_strictly_increasing() {
        let mut seq = Sequence::new();
        let mut previous = seq.current();
        for _ in 0..1_000 {
            let next = seq.advance();
            assert_eq!(next, previous + 1);
            previous = next;
        }
    }

    #[test]
    #[should_panic(expected = "sequence exhausted")]
    fn advance_panics_on_overflow() {
        let mut seq = Sequence::with_offset(u64::MAX);
        seq.advance();
    }
}
