use std::{backtrace::Backtrace, fmt::Display};

use snafu::Snafu;
use strum_macros::{EnumIter, FromRepr};

/// A numeral base accepted by the parse operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, FromRepr, EnumIter)]
#[repr(u32)]
pub enum Radix {
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

#[derive(Debug, Snafu)]
#[snafu(display("radix {radix} is not supported, must be one of 8, 10 or 16:\n{backtrace}"))]
pub struct InvalidRadixError {
    pub radix: u32,
    backtrace: Backtrace,
}

impl Radix {
    /// Validates a runtime radix value. Anything other than 8, 10 or 16 is a caller bug, so failures are logged before
    /// they are returned.
    pub fn from_base(base: u32) -> Result<Self, InvalidRadixError> {
        match Self::from_repr(base) {
            Some(radix) => Ok(radix),
            None => {
                let error = InvalidRadixSnafu { radix: base }.build();
                log::error!("{error}");
                Err(error)
            }
        }
    }

    pub fn base(self) -> u32 {
        self as u32
    }

    /// Maps a character to its digit value, or `None` if it is not a digit in this radix. Hex digits are recognized in
    /// both cases.
    pub fn digit_value(self, ch: char) -> Option<u32> {
        let value = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='f' => ch as u32 - 'a' as u32 + 10,
            'A'..='F' => ch as u32 - 'A' as u32 + 10,
            _ => return None,
        };
        (value < self.base()).then_some(value)
    }

    pub fn is_digit(self, ch: char) -> bool {
        self.digit_value(ch).is_some()
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Radix::Octal => write!(f, "base 8"),
            Radix::Decimal => write!(f, "base 10"),
            Radix::Hex => write!(f, "base 16"),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_base() {
        assert_eq!(Radix::from_base(8).unwrap(), Radix::Octal);
        assert_eq!(Radix::from_base(10).unwrap(), Radix::Decimal);
        assert_eq!(Radix::from_base(16).unwrap(), Radix::Hex);
        for base in [0, 1, 2, 7, 9, 11, 15, 17, 64, 999] {
            assert!(Radix::from_base(base).is_err(), "base {base} should be rejected");
        }
    }

    #[test]
    fn test_base_round_trips_through_from_base() {
        for radix in Radix::iter() {
            assert_eq!(Radix::from_base(radix.base()).unwrap(), radix);
        }
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(Radix::Octal.digit_value('0'), Some(0));
        assert_eq!(Radix::Octal.digit_value('7'), Some(7));
        assert_eq!(Radix::Octal.digit_value('8'), None);
        assert_eq!(Radix::Decimal.digit_value('9'), Some(9));
        assert_eq!(Radix::Decimal.digit_value('a'), None);
        assert_eq!(Radix::Hex.digit_value('a'), Some(10));
        assert_eq!(Radix::Hex.digit_value('F'), Some(15));
        assert_eq!(Radix::Hex.digit_value('g'), None);
        assert_eq!(Radix::Hex.digit_value('-'), None);
        assert_eq!(Radix::Hex.digit_value(' '), None);
    }

    #[test]
    fn test_digit_alphabets_are_nested() {
        for radix in Radix::iter() {
            for ch in "01234567".chars() {
                assert!(radix.is_digit(ch), "'{ch}' should be a digit in {radix}");
            }
        }
        assert!(!Radix::Octal.is_digit('8'));
        assert!(!Radix::Decimal.is_digit('f'));
        assert!(Radix::Hex.is_digit('f'));
    }
}
