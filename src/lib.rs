//! Strict parsing of octal, decimal and hex numerals into signed 32-bit integers.
//!
//! Every operation validates the entire input. There is no whitespace trimming, no `+` sign and no partial parse: a
//! single character outside the radix makes the whole input invalid. Each operation exists in an erroring form
//! returning [`RadixParseError`] and a non-erroring `try_` form returning `None` for rejected input.
//!
//! ```
//! use radix_parse::{parse_by_radix, parse_positive_hex, try_parse_positive_hex};
//!
//! assert_eq!(parse_positive_hex("7de").unwrap(), 2014);
//! assert_eq!(parse_by_radix("-123", 10).unwrap(), -123);
//! assert_eq!(try_parse_positive_hex("GG"), None);
//! ```

pub mod error;
pub mod parse;
pub mod radix;

pub use error::RadixParseError;
pub use parse::{
    positive::{
        parse_positive_by_radix, parse_positive_by_radix_opt, parse_positive_decimal, parse_positive_hex,
        parse_positive_octal, try_parse_positive_by_radix, try_parse_positive_decimal, try_parse_positive_hex,
        try_parse_positive_octal,
    },
    prefixed::{parse_prefixed, try_parse_prefixed},
    signed::{parse_by_radix, parse_by_radix_opt, try_parse_by_radix},
};
pub use radix::{InvalidRadixError, Radix};
