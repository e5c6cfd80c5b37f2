//! Engine construction from conversion domains

use std::sync::Arc;
use tracing::{error, info};
use unitconv_core::{ConversionGraph, Result, UnitInfo, UnitRegistry, UnitType};

use crate::{ConversionDomain, Engine};

/// Collects domains and builds a frozen [`Engine`]
#[derive(Default)]
pub struct EngineBuilder {
    domains: Vec<Arc<dyn ConversionDomain>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self { domains: Vec::new() }
    }

    pub fn with_domain<D: ConversionDomain + 'static>(mut self, d: D) -> Self {
        self.domains.push(Arc::new(d));
        self
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Install every domain and freeze the result.
    ///
    /// All units of all domains are defined before any conversion is added,
    /// so a conversion may name a unit from another domain. The first
    /// duplicate name or dangling unit reference aborts the build.
    pub fn build(self) -> Result<Engine> {
        let mut registry = UnitRegistry::new();
        let mut graph = ConversionGraph::new();
        let metas: Vec<_> = self.domains.iter().map(|d| d.meta()).collect();

        for meta in &metas {
            for def in meta.units {
                let unit = registry
                    .define(UnitInfo::new(def.name, def.symbol, meta.category))
                    .inspect_err(|e| error!(domain = meta.name, error = %e, "failed to define unit"))?;
                for alias in def.aliases {
                    registry
                        .register(alias, unit)
                        .inspect_err(|e| error!(domain = meta.name, error = %e, "failed to register alias"))?;
                }
            }
        }

        for meta in &metas {
            for def in meta.conversions {
                let from = resolve_endpoint(&registry, meta.name, def.from)?;
                let to = resolve_endpoint(&registry, meta.name, def.to)?;
                graph.add_edge(from, to, def.name, def.func);
            }
        }

        info!(
            domains = metas.len(),
            units = registry.len(),
            edges = graph.edge_count(),
            "conversion engine built"
        );
        Ok(Engine::new(registry, graph, metas))
    }
}

fn resolve_endpoint(registry: &UnitRegistry, domain: &str, name: &str) -> Result<UnitType> {
    registry
        .resolve(name)
        .inspect_err(|_| error!(domain, unit = name, "conversion refers to an undefined unit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConversionDef, DomainMeta, UnitDef};
    use unitconv_core::{codes, ConversionError};

    struct Distance;

    static DISTANCE_UNITS: [UnitDef; 2] = [
        UnitDef::new("league", "lea", &["lg"]),
        UnitDef::new("mile", "mi", &[]),
    ];

    fn league_to_mile(v: f64) -> f64 { v * 3.0 }

    static DISTANCE_CONVERSIONS: [ConversionDef; 1] = [
        ConversionDef::new("league_to_mile", "league", "mile", league_to_mile),
    ];

    impl ConversionDomain for Distance {
        fn meta(&self) -> DomainMeta {
            DomainMeta {
                name: "distance",
                description: "Test distances",
                category: "length",
                units: &DISTANCE_UNITS,
                conversions: &DISTANCE_CONVERSIONS,
            }
        }
    }

    struct Nautical;

    static NAUTICAL_UNITS: [UnitDef; 1] = [UnitDef::new("nautical mile", "nmi", &[])];

    fn nmi_to_mile(v: f64) -> f64 { v * 1.150779 }

    // Points at a unit owned by another domain
    static NAUTICAL_CONVERSIONS: [ConversionDef; 1] = [
        ConversionDef::new("nmi_to_mile", "nautical mile", "mile", nmi_to_mile),
    ];

    impl ConversionDomain for Nautical {
        fn meta(&self) -> DomainMeta {
            DomainMeta {
                name: "nautical",
                description: "Test nautical units",
                category: "length",
                units: &NAUTICAL_UNITS,
                conversions: &NAUTICAL_CONVERSIONS,
            }
        }
    }

    struct Clashing;

    static CLASHING_UNITS: [UnitDef; 1] = [UnitDef::new("furlong", "fur", &["LG"])];

    impl ConversionDomain for Clashing {
        fn meta(&self) -> DomainMeta {
            DomainMeta {
                name: "clashing",
                description: "Reuses an alias",
                category: "length",
                units: &CLASHING_UNITS,
                conversions: &[],
            }
        }
    }

    struct Dangling;

    fn identity(v: f64) -> f64 { v }

    static DANGLING_CONVERSIONS: [ConversionDef; 1] = [
        ConversionDef::new("ghost", "league", "parsec", identity),
    ];

    impl ConversionDomain for Dangling {
        fn meta(&self) -> DomainMeta {
            DomainMeta {
                name: "dangling",
                description: "Refers to a missing unit",
                category: "length",
                units: &[],
                conversions: &DANGLING_CONVERSIONS,
            }
        }
    }

    #[test]
    fn test_build_installs_units_and_edges() {
        let engine = EngineBuilder::new().with_domain(Distance).build().unwrap();
        assert_eq!(engine.units().count(), 2);
        assert_eq!(engine.graph().edge_count(), 1);
        assert_eq!(engine.resolve("LG").unwrap(), engine.resolve("league").unwrap());
    }

    #[test]
    fn test_cross_domain_conversion() {
        // Nautical is installed first but its edge targets a Distance unit
        let engine = EngineBuilder::new()
            .with_domain(Nautical)
            .with_domain(Distance)
            .build()
            .unwrap();
        let values = engine.convert("nautical mile", "mile", &[1.0]).unwrap();
        assert!((values[0] - 1.150779).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_alias_is_fatal() {
        let err = EngineBuilder::new()
            .with_domain(Distance)
            .with_domain(Clashing)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), codes::DUPLICATE_UNIT_NAME);
        assert_eq!(err, ConversionError::duplicate_unit_name("lg"));
    }

    #[test]
    fn test_dangling_reference_fails() {
        let err = EngineBuilder::new()
            .with_domain(Distance)
            .with_domain(Dangling)
            .build()
            .unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit("parsec"));
    }

    #[test]
    fn test_empty_builder() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.domain_count(), 0);
        let engine = builder.build().unwrap();
        assert!(engine.names().is_empty());
    }
}
