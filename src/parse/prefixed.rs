use crate::{error::RadixParseError, radix::Radix};

use super::{ParseMode, convert};

/// Parses a numeral whose radix is announced by its prefix: `0x`/`0X` for hex, `0o`/`0O` for octal, no prefix for
/// decimal. A leading `-` may precede the prefix, so hex and octal values are signed here and cover
/// `-i32::MAX..=i32::MAX`. Unprefixed input is plain decimal and covers the full `i32` range; a leading zero does not
/// mean octal.
pub fn parse_prefixed(text: &str) -> Result<i32, RadixParseError> {
    let (negative, unsigned) = text.strip_prefix('-').map(|abs| (true, abs)).unwrap_or((false, text));
    if let Some(digits) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        let magnitude = convert(Some(digits), Radix::Hex, ParseMode::Signed)?;
        Ok(if negative { -magnitude } else { magnitude })
    } else if let Some(digits) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
        let magnitude = convert(Some(digits), Radix::Octal, ParseMode::Signed)?;
        Ok(if negative { -magnitude } else { magnitude })
    } else {
        convert(Some(text), Radix::Decimal, ParseMode::Signed)
    }
}

/// Non-erroring form of [`parse_prefixed`].
pub fn try_parse_prefixed(text: &str) -> Option<i32> {
    parse_prefixed(text).ok()
}
