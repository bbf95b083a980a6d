use crate::{
    error::RadixParseError,
    radix::{InvalidRadixError, Radix},
};

use super::{ParseMode, convert};

/// Signed parse with the radix chosen at runtime. Only base 10 has a sign character, so the full `i32` range is
/// reachable in base 10 while base 8 and 16 cover `0..=i32::MAX` and treat `-` as an invalid character. Out-of-range
/// values fail with [`RadixParseError::Overflow`], large hex values are never reinterpreted as negative.
pub fn parse_by_radix(text: &str, radix: u32) -> Result<i32, RadixParseError> {
    let radix = Radix::from_base(radix)?;
    convert(Some(text), radix, ParseMode::Signed)
}

/// Like [`parse_by_radix`], for call sites where the input may be absent. `None` fails with
/// [`RadixParseError::NullInput`], which is distinct from the empty string.
pub fn parse_by_radix_opt(text: Option<&str>, radix: u32) -> Result<i32, RadixParseError> {
    let radix = Radix::from_base(radix)?;
    convert(text, radix, ParseMode::Signed)
}

/// Non-erroring form of [`parse_by_radix`]. Rejected input text becomes `None`, but an unsupported radix is still a
/// hard error.
pub fn try_parse_by_radix(text: &str, radix: u32) -> Result<Option<i32>, InvalidRadixError> {
    let radix = Radix::from_base(radix)?;
    Ok(convert(Some(text), radix, ParseMode::Signed).ok())
}
