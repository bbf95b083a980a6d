use snafu::ensure;

use crate::{
    error::{InvalidCharacterSnafu, NegativeNotAllowedSnafu, NullInputSnafu, OverflowSnafu, RadixParseError},
    radix::Radix,
};

pub mod positive;
pub mod prefixed;
pub mod signed;

#[derive(Clone, Copy)]
pub(crate) enum ParseMode {
    /// Rejects negative values. In base 10 this also rejects zero, so every accepted value is at least 1.
    Positive,
    /// Accepts the full `i32` range. Only base 10 has a sign character; base 8 and 16 accept the same non-negative
    /// values as [`ParseMode::Positive`].
    Signed,
}

// The absolute value of i32::MIN. Past this limit accumulation stops and only character validation continues.
const MAGNITUDE_LIMIT: i64 = 1 << 31;

/// Shared conversion behind every parse operation. `text` is `None` only when an `*_opt` entry point was given no
/// input.
pub(crate) fn convert(text: Option<&str>, radix: Radix, mode: ParseMode) -> Result<i32, RadixParseError> {
    let Some(text) = text else {
        return NullInputSnafu.fail();
    };

    let (negative, digits) = match radix {
        Radix::Decimal => match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        },
        Radix::Octal | Radix::Hex => (false, text),
    };
    ensure!(!digits.is_empty(), InvalidCharacterSnafu { text, radix });

    let mut magnitude = 0i64;
    let mut overflowed = false;
    for ch in digits.chars() {
        let Some(digit) = radix.digit_value(ch) else {
            return InvalidCharacterSnafu { text, radix }.fail();
        };
        if !overflowed {
            magnitude = magnitude * radix.base() as i64 + digit as i64;
            overflowed = magnitude > MAGNITUDE_LIMIT;
        }
    }
    ensure!(!overflowed, OverflowSnafu { text, radix });

    if negative {
        let value = -magnitude;
        match mode {
            ParseMode::Signed => Ok(value as i32),
            ParseMode::Positive => NegativeNotAllowedSnafu { value }.fail(),
        }
    } else {
        ensure!(magnitude <= i32::MAX as i64, OverflowSnafu { text, radix });
        match (mode, radix) {
            (ParseMode::Positive, Radix::Decimal) if magnitude < 1 => {
                NegativeNotAllowedSnafu { value: magnitude }.fail()
            }
            _ => Ok(magnitude as i32),
        }
    }
}
