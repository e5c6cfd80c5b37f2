//! Domain plugin traits

use serde::Serialize;

/// Static definition of a unit inside a domain
#[derive(Debug, Clone, Serialize)]
pub struct UnitDef {
    pub name: &'static str,
    pub symbol: &'static str,
    pub aliases: &'static [&'static str],
}

impl UnitDef {
    pub const fn new(name: &'static str, symbol: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, symbol, aliases }
    }
}

/// Static definition of a directed conversion between two unit names
#[derive(Debug, Clone, Serialize)]
pub struct ConversionDef {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    #[serde(skip)]
    pub func: fn(f64) -> f64,
}

impl ConversionDef {
    pub const fn new(name: &'static str, from: &'static str, to: &'static str, func: fn(f64) -> f64) -> Self {
        Self { name, from, to, func }
    }
}

/// Metadata for a conversion domain
#[derive(Debug, Clone, Serialize)]
pub struct DomainMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub units: &'static [UnitDef],
    pub conversions: &'static [ConversionDef],
}

/// A bundle of units and conversions installed together
pub trait ConversionDomain: Send + Sync {
    fn meta(&self) -> DomainMeta;
}
