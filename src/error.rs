use std::backtrace::Backtrace;

use snafu::Snafu;

use crate::radix::{InvalidRadixError, Radix};

/// Any failure of a parse operation. `InvalidRadix` and `NullInput` indicate caller bugs, the other variants describe
/// the input text.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RadixParseError {
    #[snafu(display("no input text was given:\n{backtrace}"))]
    NullInput { backtrace: Backtrace },
    #[snafu(transparent)]
    InvalidRadix { source: InvalidRadixError },
    #[snafu(display("'{text}' is not a valid {radix} numeral"))]
    InvalidCharacter { text: String, radix: Radix },
    #[snafu(display("value {value} is not a positive number"))]
    NegativeNotAllowed { value: i64 },
    #[snafu(display("'{text}' is out of range for a 32-bit integer in {radix}"))]
    Overflow { text: String, radix: Radix },
}
