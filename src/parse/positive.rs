use crate::{
    error::RadixParseError,
    radix::{InvalidRadixError, Radix},
};

use super::{ParseMode, convert};

/// Parses an unsigned octal numeral into a non-negative `i32`.
pub fn parse_positive_octal(text: &str) -> Result<i32, RadixParseError> {
    convert(Some(text), Radix::Octal, ParseMode::Positive)
}

/// Parses a decimal numeral into a strictly positive `i32`. A `-` sign and the value zero are both rejected as
/// [`RadixParseError::NegativeNotAllowed`].
pub fn parse_positive_decimal(text: &str) -> Result<i32, RadixParseError> {
    convert(Some(text), Radix::Decimal, ParseMode::Positive)
}

/// Parses an unsigned hex numeral into a non-negative `i32`. Digits are accepted in either case.
pub fn parse_positive_hex(text: &str) -> Result<i32, RadixParseError> {
    convert(Some(text), Radix::Hex, ParseMode::Positive)
}

/// Positive parse with the radix chosen at runtime. `radix` must be 8, 10 or 16, anything else fails with
/// [`RadixParseError::InvalidRadix`] before the text is looked at.
pub fn parse_positive_by_radix(text: &str, radix: u32) -> Result<i32, RadixParseError> {
    let radix = Radix::from_base(radix)?;
    convert(Some(text), radix, ParseMode::Positive)
}

/// Like [`parse_positive_by_radix`], for call sites where the input may be absent. `None` fails with
/// [`RadixParseError::NullInput`], which is distinct from the empty string.
pub fn parse_positive_by_radix_opt(text: Option<&str>, radix: u32) -> Result<i32, RadixParseError> {
    let radix = Radix::from_base(radix)?;
    convert(text, radix, ParseMode::Positive)
}

/// Non-erroring form of [`parse_positive_octal`].
pub fn try_parse_positive_octal(text: &str) -> Option<i32> {
    parse_positive_octal(text).ok()
}

/// Non-erroring form of [`parse_positive_decimal`].
pub fn try_parse_positive_decimal(text: &str) -> Option<i32> {
    parse_positive_decimal(text).ok()
}

/// Non-erroring form of [`parse_positive_hex`].
pub fn try_parse_positive_hex(text: &str) -> Option<i32> {
    parse_positive_hex(text).ok()
}

/// Non-erroring form of [`parse_positive_by_radix`]. Rejected input text becomes `None`, but an unsupported radix is
/// still a hard error.
pub fn try_parse_positive_by_radix(text: &str, radix: u32) -> Result<Option<i32>, InvalidRadixError> {
    let radix = Radix::from_base(radix)?;
    Ok(convert(Some(text), radix, ParseMode::Positive).ok())
}
