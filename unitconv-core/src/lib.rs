//! unitconv Core - Fundamental types
//!
//! This crate provides the conversion engine's building blocks:
//! - `UnitRegistry`: unit names to interned `UnitType`s
//! - `ConversionGraph`: directed edges carrying conversion functions
//! - `PathFinder`: depth-first search for a chain of edges
//! - `convert::apply`: folds a value through a `ConversionPath`
//! - `ConversionError`: typed failures with machine-readable codes

mod unit;
mod error;
mod registry;
mod graph;
mod path;
pub mod convert;

pub use unit::{UnitType, UnitInfo};
pub use error::{ConversionError, ErrorReport, Result, codes};
pub use registry::UnitRegistry;
pub use graph::{ConversionEdge, ConversionGraph, ConvertFn};
pub use path::{ConversionPath, PathFinder, find_path};
pub use convert::{apply, apply_all};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        UnitType, UnitInfo, UnitRegistry,
        ConversionEdge, ConversionGraph, ConversionPath, PathFinder,
        ConversionError, Result,
    };
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Three temperature units wired like the seed data
    fn temperatures() -> (UnitRegistry, ConversionGraph) {
        let mut reg = UnitRegistry::new();
        let c = reg.define(UnitInfo::new("celsius", "°C", "temperature")).unwrap();
        let k = reg.define(UnitInfo::new("kelvin", "K", "temperature")).unwrap();
        let f = reg.define(UnitInfo::new("fahrenheit", "°F", "temperature")).unwrap();

        let mut g = ConversionGraph::new();
        g.add_edge(c, f, "c_to_f", |v| v * 9.0 / 5.0 + 32.0);
        g.add_edge(c, k, "c_to_k", |v| v + 273.15);
        g.add_edge(k, c, "k_to_c", |v| v - 273.15);
        g.add_edge(f, c, "f_to_c", |v| (v - 32.0) * 5.0 / 9.0);
        (reg, g)
    }

    #[test]
    fn test_resolve_find_apply() {
        let (reg, g) = temperatures();
        let from = reg.resolve("Fahrenheit").unwrap();
        let to = reg.resolve("kelvin").unwrap();
        let path = find_path(&g, from, to).unwrap();
        assert_eq!(path.edge_names(), vec!["f_to_c", "c_to_k"]);
        assert!((apply(&path, 32.0) - 273.15).abs() < 1e-9);
    }

    #[test]
    fn test_every_unit_has_identity_path() {
        let (reg, g) = temperatures();
        for (unit, _) in reg.units() {
            let path = find_path(&g, unit, unit).unwrap();
            assert!(path.is_empty());
        }
    }

    // Arbitrary graphs over a handful of nodes, edges as (from, to, offset)
    fn arb_graph() -> impl Strategy<Value = ConversionGraph> {
        prop::collection::vec((0usize..6, 0usize..6, -100i32..100), 0..20).prop_map(|edges| {
            let mut g = ConversionGraph::new();
            for (from, to, offset) in edges {
                let offset = offset as f64;
                g.add_edge(
                    UnitType::from_index(from),
                    UnitType::from_index(to),
                    format!("{}_to_{}", from, to),
                    move |v| v + offset,
                );
            }
            g
        })
    }

    proptest! {
        #[test]
        fn prop_search_is_deterministic(g in arb_graph(), from in 0usize..6, to in 0usize..6) {
            let (from, to) = (UnitType::from_index(from), UnitType::from_index(to));
            let first = find_path(&g, from, to);
            let second = find_path(&g, from, to);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_found_paths_are_chained(g in arb_graph(), from in 0usize..6, to in 0usize..6) {
            let (from, to) = (UnitType::from_index(from), UnitType::from_index(to));
            if let Ok(path) = find_path(&g, from, to) {
                let rebuilt = ConversionPath::from_edges(from, to, path.edges().to_vec());
                prop_assert!(rebuilt.is_some());
                prop_assert!(path.len() <= 6);
            }
        }

        #[test]
        fn prop_identity_returns_input(g in arb_graph(), unit in 0usize..6, v in -1e9f64..1e9) {
            let unit = UnitType::from_index(unit);
            let path = find_path(&g, unit, unit).unwrap();
            prop_assert_eq!(apply(&path, v), v);
        }

        #[test]
        fn prop_direct_edge_matches_function(g in arb_graph(), v in -1e6f64..1e6) {
            for from in 0..6 {
                for edge in g.edges_from(UnitType::from_index(from)) {
                    let path = ConversionPath::from_edges(edge.from, edge.to, vec![edge.clone()]).unwrap();
                    prop_assert_eq!(apply(&path, v), edge.convert(v));
                }
            }
        }
    }
}
