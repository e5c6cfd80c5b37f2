//! Unit identity and descriptive metadata

use std::fmt;
use serde::{Deserialize, Serialize};

/// Interned identifier of a distinct physical unit.
///
/// Handed out by [`UnitRegistry::define`](crate::UnitRegistry::define).
/// Two units are the same unit only if their `UnitType`s are equal;
/// names never take part in comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitType(u32);

impl UnitType {
    pub(crate) fn from_index(index: usize) -> Self {
        UnitType(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Descriptive data attached to a unit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Canonical lowercase name (e.g., "celsius", "meter")
    pub name: String,
    /// Suffix printed after values (e.g., "°C", "ft")
    pub symbol: String,
    /// Category for organization (e.g., "temperature", "length")
    pub category: String,
}

impl UnitInfo {
    pub fn new(name: &str, symbol: &str, category: &str) -> Self {
        UnitInfo {
            name: name.to_lowercase(),
            symbol: symbol.to_string(),
            category: category.to_string(),
        }
    }

    /// Format a value with this unit's suffix
    pub fn format_value(&self, value: f64) -> String {
        format!("{} {}", format_number(value), self.symbol)
    }
}

/// Shortest round-trip digits, `%g` style: exponent form (`1e+06`,
/// `2.5e-07`) when the decimal exponent is below -4 or at least 6.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", value);
    let parts = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => value.to_string(),
    }
}

impl fmt::Display for UnitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
