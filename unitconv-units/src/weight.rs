//! Weight conversions: pounds and kilograms

use unitconv_plugin::{ConversionDef, ConversionDomain, DomainMeta, UnitDef};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

pub fn lb_to_kg(p: f64) -> f64 {
    p * KG_PER_LB
}

pub fn kg_to_lb(k: f64) -> f64 {
    k / KG_PER_LB
}

pub struct Weight;

static WEIGHT_UNITS: [UnitDef; 2] = [
    UnitDef::new("pound", "lb", &["lb", "lbs", "pounds"]),
    UnitDef::new("kilogram", "kg", &["kg", "kilograms"]),
];

static WEIGHT_CONVERSIONS: [ConversionDef; 2] = [
    ConversionDef::new("lb_to_kg", "pound", "kilogram", lb_to_kg),
    ConversionDef::new("kg_to_lb", "kilogram", "pound", kg_to_lb),
];

impl ConversionDomain for Weight {
    fn meta(&self) -> DomainMeta {
        DomainMeta {
            name: "weight",
            description: "Pounds and kilograms",
            category: "weight",
            units: &WEIGHT_UNITS,
            conversions: &WEIGHT_CONVERSIONS,
        }
    }
}
