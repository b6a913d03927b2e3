use std::num::ParseFloatError;

use thiserror::Error;

use crate::{
    bytes::units,
    utils::macros::{ok_or, some_or},
};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid number in '{input}'")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },
    #[error("no units found in '{input}'")]
    MissingUnit { input: String },
    #[error("unrecognized units {unit}")]
    UnrecognizedUnit { unit: String },
    #[error("value {value} too large for int64")]
    RangeOverflow { value: f64 },
}

/// Splits `s` into its numeric prefix and unit suffix.
///
/// Digits and `.` belong to the number only until the first other character;
/// everything after that is the unit. Spaces are dropped from both parts.
pub fn split(s: &str) -> (String, String) {
    let mut number = String::with_capacity(s.len());
    let mut unit = String::with_capacity(s.len());

    for c in s.chars() {
        if (c.is_numeric() || c == '.') && unit.is_empty() {
            number.push(c);
        } else if c != ' ' {
            unit.push(c);
        }
    }

    (number, unit)
}

/// Parses a human-readable quantity of bytes such as `"1.5GiB"` or `"10 MB"`
/// and returns the raw number of bytes.
///
/// Whitespace is allowed between the number and the units. The `B` for bytes
/// must be upper case; a lower case `b` would be bits.
pub fn parse_bytes_float(s: &str) -> Result<f64, ParseError> {
    let (number, unit) = split(s);

    let coefficient: f64 = ok_or!(number.parse(), source => {
        log::trace!("invalid number {number:?} in {s:?}");
        return Err(ParseError::InvalidNumber {
            input: s.to_string(),
            source,
        });
    });

    if unit.is_empty() {
        log::trace!("no units in {s:?}");
        return Err(ParseError::MissingUnit {
            input: s.to_string(),
        });
    }

    let multiplier = some_or!(units::lookup(&unit), {
        log::trace!("unrecognized units {unit:?} in {s:?}");
        return Err(ParseError::UnrecognizedUnit { unit });
    });

    Ok(coefficient * multiplier)
}

/// Like [`parse_bytes_float`], truncated to a whole number of bytes.
///
/// ```
/// assert_eq!(bytesize::parse_bytes("1.5GiB").unwrap(), 1610612736);
/// assert!(bytesize::parse_bytes("1ZB").is_err());
/// ```
pub fn parse_bytes(s: &str) -> Result<i64, ParseError> {
    let value = parse_bytes_float(s)?;
    // i64::MAX rounds up to 2^63 as f64, which is already out of range.
    if value >= i64::MAX as f64 {
        log::trace!("{s:?} is {value} bytes, too large for int64");
        return Err(ParseError::RangeOverflow { value });
    }
    Ok(value as i64)
}
