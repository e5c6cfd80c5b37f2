//! unitconv Units - Standard conversion domains
//!
//! Categories:
//! - Temperature (celsius, kelvin, fahrenheit)
//! - Weight (pound, kilogram)
//! - Length (meter, foot)
//!
//! Each domain only registers the conversions it defines. Routes such as
//! fahrenheit → kelvin are found by path search at conversion time.

pub mod temperature;
pub mod weight;
pub mod length;

pub use temperature::Temperature;
pub use weight::Weight;
pub use length::Length;

use unitconv_core::Result;
use unitconv_plugin::{Engine, EngineBuilder};

/// Load the standard domains into a builder
pub fn load_standard_domains(builder: EngineBuilder) -> EngineBuilder {
    builder
        .with_domain(Temperature)
        .with_domain(Weight)
        .with_domain(Length)
}

/// Build an engine with every standard domain installed
pub fn standard_engine() -> Result<Engine> {
    load_standard_domains(EngineBuilder::new()).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_standard_domains() {
        let builder = load_standard_domains(EngineBuilder::new());
        assert_eq!(builder.domain_count(), 3);
    }

    #[test]
    fn test_standard_engine_builds() {
        let engine = standard_engine().unwrap();
        assert_eq!(engine.units().count(), 7);
        assert_eq!(engine.graph().edge_count(), 8);

        let domains: Vec<&str> = engine.domains().iter().map(|d| d.name).collect();
        assert_eq!(domains, vec!["temperature", "weight", "length"]);
    }

    #[test]
    fn test_names_start_with_canonical_temperatures() {
        let engine = standard_engine().unwrap();
        assert_eq!(&engine.names()[..4], &["celsius", "c", "kelvin", "k"]);
    }
}
