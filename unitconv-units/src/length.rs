//! Length conversions: meters and feet

use unitconv_plugin::{ConversionDef, ConversionDomain, DomainMeta, UnitDef};

/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;

pub fn m_to_ft(m: f64) -> f64 {
    m / M_PER_FT
}

pub fn ft_to_m(f: f64) -> f64 {
    f * M_PER_FT
}

pub struct Length;

static LENGTH_UNITS: [UnitDef; 2] = [
    UnitDef::new("meter", "m", &["m", "meters", "metre", "metres"]),
    UnitDef::new("foot", "ft", &["ft", "feet"]),
];

static LENGTH_CONVERSIONS: [ConversionDef; 2] = [
    ConversionDef::new("m_to_ft", "meter", "foot", m_to_ft),
    ConversionDef::new("ft_to_m", "foot", "meter", ft_to_m),
];

impl ConversionDomain for Length {
    fn meta(&self) -> DomainMeta {
        DomainMeta {
            name: "length",
            description: "Meters and feet",
            category: "length",
            units: &LENGTH_UNITS,
            conversions: &LENGTH_CONVERSIONS,
        }
    }
}
