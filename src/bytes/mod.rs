pub mod format;
pub mod parse;
pub mod system;
pub mod units;

pub(crate) const B: &str = "B";

pub(crate) const KB: &str = "KB";
pub(crate) const MB: &str = "MB";
pub(crate) const GB: &str = "GB";
pub(crate) const TB: &str = "TB";
pub(crate) const PB: &str = "PB";
pub(crate) const EB: &str = "EB";
pub(crate) const ZB: &str = "ZB";
pub(crate) const YB: &str = "YB";

pub(crate) const KIB: &str = "KiB";
pub(crate) const MIB: &str = "MiB";
pub(crate) const GIB: &str = "GiB";
pub(crate) const TIB: &str = "TiB";
pub(crate) const PIB: &str = "PiB";
pub(crate) const EIB: &str = "EiB";
pub(crate) const ZIB: &str = "ZiB";
pub(crate) const YIB: &str = "YiB";

/// Multipliers for each unit, in bytes.
///
/// SI units are powers of 1000, see <http://physics.nist.gov/cuu/Units/prefixes.html>.
/// IEC units are powers of 1024, see <http://physics.nist.gov/cuu/Units/binary.html>.
///
/// Unit suffix strings stay internal; only the multipliers are public.
///
/// ```compile_fail
/// let suffix: &str = bytesize::bytes::KB;
/// ```
pub mod multiplier {
    pub const KB: f64 = 1000.0;
    pub const MB: f64 = 1000.0 * KB;
    pub const GB: f64 = 1000.0 * MB;
    pub const TB: f64 = 1000.0 * GB;
    pub const PB: f64 = 1000.0 * TB;
    pub const EB: f64 = 1000.0 * PB;
    pub const ZB: f64 = 1000.0 * EB;
    pub const YB: f64 = 1000.0 * ZB;

    pub const KIB: f64 = 1024.0;
    pub const MIB: f64 = 1024.0 * KIB;
    pub const GIB: f64 = 1024.0 * MIB;
    pub const TIB: f64 = 1024.0 * GIB;
    pub const PIB: f64 = 1024.0 * TIB;
    pub const EIB: f64 = 1024.0 * PIB;
    pub const ZIB: f64 = 1024.0 * EIB;
    pub const YIB: f64 = 1024.0 * ZIB;
}
