//! Formats quantities of data as human-readable values such as `1MB` or
//! `2.2GiB`, and parses such values back into byte counts.
//!
//! ```
//! use bytesize::{format_bytes, parse_bytes};
//!
//! assert_eq!(format_bytes(8589934592, 2, 2), "8.00GiB");
//! assert_eq!(format_bytes(300000000000, 10, 1), "300.0GB");
//! assert_eq!(parse_bytes("6 GiB").unwrap(), 6442450944);
//! ```

pub mod bytes;
mod utils;

pub use bytes::{
    format::{format_bytes, try_format_bytes, FormatError, MAX_PRECISION, SENTINEL_PREFIX},
    multiplier::*,
    parse::{parse_bytes, parse_bytes_float, split, ParseError},
    system::ByteUnitSystem,
};
