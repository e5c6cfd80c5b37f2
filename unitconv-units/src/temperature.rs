//! Temperature conversions: Celsius, Kelvin, Fahrenheit
//!
//! Only the Celsius edges go in both directions. Fahrenheit ↔ Kelvin has
//! no direct edge and is reached through Celsius.

use unitconv_plugin::{ConversionDef, ConversionDomain, DomainMeta, UnitDef};

/// Offset between the Celsius and Kelvin scales
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn c_to_k(c: f64) -> f64 {
    c - ABSOLUTE_ZERO_C
}

pub fn k_to_c(k: f64) -> f64 {
    k + ABSOLUTE_ZERO_C
}

pub struct Temperature;

static TEMPERATURE_UNITS: [UnitDef; 3] = [
    UnitDef::new("celsius", "°C", &["c"]),
    UnitDef::new("kelvin", "K", &["k"]),
    UnitDef::new("fahrenheit", "°F", &["f"]),
];

static TEMPERATURE_CONVERSIONS: [ConversionDef; 4] = [
    ConversionDef::new("c_to_f", "celsius", "fahrenheit", c_to_f),
    ConversionDef::new("c_to_k", "celsius", "kelvin", c_to_k),
    ConversionDef::new("k_to_c", "kelvin", "celsius", k_to_c),
    ConversionDef::new("f_to_c", "fahrenheit", "celsius", f_to_c),
];

impl ConversionDomain for Temperature {
    fn meta(&self) -> DomainMeta {
        DomainMeta {
            name: "temperature",
            description: "Celsius, Kelvin and Fahrenheit temperatures",
            category: "temperature",
            units: &TEMPERATURE_UNITS,
            conversions: &TEMPERATURE_CONVERSIONS,
        }
    }
}
