use std::str::FromStr;

use anyhow::anyhow;

use crate::bytes::{
    format::FormatError,
    units::{Unit, BINARY_UNITS, BYTE, SI_UNITS},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ByteUnitSystem {
    /// Base 10: KB, MB, GB, ...
    SI,
    /// Base 2: KiB, MiB, GiB, ...
    Binary,
}

impl ByteUnitSystem {
    pub fn from_base(base: i32) -> Result<Self, FormatError> {
        match base {
            10 => Ok(Self::SI),
            2 => Ok(Self::Binary),
            _ => Err(FormatError::BadBase(base)),
        }
    }

    pub fn base(&self) -> i32 {
        match self {
            Self::SI => 10,
            Self::Binary => 2,
        }
    }

    /// Ratio between two neighbouring units.
    pub fn step(&self) -> f64 {
        match self {
            Self::SI => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    /// Ladder from the smallest unit to the largest, bytes excluded.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Self::SI => &SI_UNITS,
            Self::Binary => &BINARY_UNITS,
        }
    }

    /// Largest unit whose multiplier does not exceed `value`, or bytes.
    pub fn select_unit(&self, value: f64) -> Unit {
        self.units()
            .iter()
            .rev()
            .find(|unit| value >= unit.multiplier)
            .copied()
            .unwrap_or(BYTE)
    }

    pub fn format(&self, bytes: i64, precision: usize) -> String {
        let value = bytes as f64;
        let unit = self.select_unit(value);
        format!("{:.*}{}", precision, value / unit.multiplier, unit.suffix)
    }
}

impl TryFrom<i32> for ByteUnitSystem {
    type Error = FormatError;

    fn try_from(base: i32) -> Result<Self, Self::Error> {
        Self::from_base(base)
    }
}

impl FromStr for ByteUnitSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if ["si", "10", "decimal"].iter().any(|n| s.eq_ignore_ascii_case(n)) {
            Ok(Self::SI)
        } else if ["binary", "bin", "iec", "2"]
            .iter()
            .any(|n| s.eq_ignore_ascii_case(n))
        {
            Ok(Self::Binary)
        } else {
            Err(anyhow!("Invalid value for ByteUnitSystem: {}", s))
        }
    }
}
