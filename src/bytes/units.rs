use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::bytes::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    pub suffix: &'static str,
    pub multiplier: f64,
}

impl Unit {
    const fn new(suffix: &'static str, multiplier: f64) -> Self {
        Self { suffix, multiplier }
    }
}

/// Bytes sit below the smallest unit of either ladder.
pub const BYTE: Unit = Unit::new(B, 1.0);

pub const SI_UNITS: [Unit; 8] = [
    Unit::new(KB, multiplier::KB),
    Unit::new(MB, multiplier::MB),
    Unit::new(GB, multiplier::GB),
    Unit::new(TB, multiplier::TB),
    Unit::new(PB, multiplier::PB),
    Unit::new(EB, multiplier::EB),
    Unit::new(ZB, multiplier::ZB),
    Unit::new(YB, multiplier::YB),
];

pub const BINARY_UNITS: [Unit; 8] = [
    Unit::new(KIB, multiplier::KIB),
    Unit::new(MIB, multiplier::MIB),
    Unit::new(GIB, multiplier::GIB),
    Unit::new(TIB, multiplier::TIB),
    Unit::new(PIB, multiplier::PIB),
    Unit::new(EIB, multiplier::EIB),
    Unit::new(ZIB, multiplier::ZIB),
    Unit::new(YIB, multiplier::YIB),
];

static MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(BYTE.suffix, BYTE.multiplier);
    for unit in SI_UNITS.iter().chain(BINARY_UNITS.iter()) {
        map.insert(unit.suffix, unit.multiplier);
    }

    map
});

/// Returns the multiplier for a case-sensitive unit suffix such as `"MiB"`.
pub fn lookup(suffix: &str) -> Option<f64> {
    MULTIPLIERS.get(suffix).copied()
}
