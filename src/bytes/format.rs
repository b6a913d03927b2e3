use thiserror::Error;

use crate::bytes::system::ByteUnitSystem;

/// Every sentinel returned by [`format_bytes`] starts with this marker.
pub const SENTINEL_PREFIX: &str = "%!";

/// Precisions above this are reported as bad, like printf-style formatters do.
pub const MAX_PRECISION: i32 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    #[error("invalid base {0}; expected 10 or 2")]
    BadBase(i32),
    #[error("invalid precision {0}; expected 0 to 1000000")]
    BadPrecision(i32),
}

impl FormatError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadBase(_) => "BADBASE",
            Self::BadPrecision(_) => "BADPREC",
        }
    }

    /// Inline error text, e.g. `%!(BADBASE)`.
    pub fn sentinel(&self) -> String {
        format!("{}({})", SENTINEL_PREFIX, self.code())
    }
}

/// Formats `bytes` in base 10 (SI) or base 2 (IEC) units with `precision`
/// fractional digits.
///
/// ```
/// assert_eq!(bytesize::try_format_bytes(1024 * 1024, 2, 2).unwrap(), "1.00MiB");
/// assert_eq!(bytesize::try_format_bytes(2_000_000_000, 10, 2).unwrap(), "2.00GB");
/// ```
pub fn try_format_bytes(bytes: i64, base: i32, precision: i32) -> Result<String, FormatError> {
    let system = ByteUnitSystem::try_from(base)?;
    if !(0..=MAX_PRECISION).contains(&precision) {
        return Err(FormatError::BadPrecision(precision));
    }
    Ok(system.format(bytes, precision as usize))
}

/// Same as [`try_format_bytes`], but an invalid base or precision is rendered
/// as a printf-style error string starting with `%!` followed by an error
/// code in parentheses, e.g. `%!(BADBASE)`.
pub fn format_bytes(bytes: i64, base: i32, precision: i32) -> String {
    try_format_bytes(bytes, base, precision).unwrap_or_else(|err| {
        log::debug!("format_bytes({bytes}, {base}, {precision}): {err}");
        err.sentinel()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_common_sizes() {
        let cases = [
            (1000, 10, 0, "1KB"),
            (1024, 10, 2, "1.02KB"),
            (1024, 2, 1, "1.0KiB"),
            (56000, 10, 2, "56.00KB"), // 1 sec of 56K modem
            (1024000, 2, 2, "1000.00KiB"), // a "1MB" floppy disk
            (52428800, 2, 0, "50MiB"), // a "50MB" file on a CD
            (1300000000, 2, 2, "1.21GiB"), // a 1.3GB file on a DVD
            (300000000000, 10, 1, "300.0GB"), // a 300GB hard disk
            (8589934592, 2, 2, "8.00GiB"), // "8GB" of RAM
        ];
        for (bytes, base, precision, expected) in cases {
            assert_eq!(
                format_bytes(bytes, base, precision),
                expected,
                "{bytes} base {base} precision {precision}"
            );
        }
    }

    #[test]
    fn below_smallest_unit_stays_in_bytes() {
        assert_eq!(format_bytes(0, 10, 0), "0B");
        assert_eq!(format_bytes(0, 2, 2), "0.00B");
        assert_eq!(format_bytes(999, 10, 0), "999B");
        assert_eq!(format_bytes(999, 2, 0), "999B");
        assert_eq!(format_bytes(1023, 2, 0), "1023B");
    }

    #[test]
    fn max_int64() {
        assert_eq!(format_bytes(i64::MAX, 10, 2), "9.22EB");
        assert_eq!(format_bytes(i64::MAX, 2, 2), "8.00EiB");
    }

    #[test]
    fn bad_base() {
        for bytes in [0, 1, 1024, i64::MAX] {
            let s = format_bytes(bytes, 3, 1);
            assert!(s.starts_with(SENTINEL_PREFIX), "{s}");
            assert_eq!(s, "%!(BADBASE)");
        }
        assert_eq!(try_format_bytes(1, 0, 0), Err(FormatError::BadBase(0)));
    }

    #[test]
    fn bad_precision() {
        for bytes in [0, 1, 1024, i64::MAX] {
            let s = format_bytes(bytes, 10, -1);
            assert!(s.starts_with(SENTINEL_PREFIX), "{s}");
            assert_eq!(s, "%!(BADPREC)");
        }
        assert_eq!(
            try_format_bytes(1, 2, MAX_PRECISION + 1),
            Err(FormatError::BadPrecision(MAX_PRECISION + 1))
        );
    }

    #[test]
    fn base_is_checked_before_precision() {
        assert_eq!(format_bytes(1, 7, -3), "%!(BADBASE)");
    }
}
