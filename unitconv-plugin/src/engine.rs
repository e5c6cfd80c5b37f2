//! Frozen conversion engine

use std::collections::HashSet;
use tracing::debug;
use unitconv_core::{
    apply_all, ConversionGraph, ConversionPath, PathFinder, Result, UnitInfo, UnitRegistry, UnitType,
};

use crate::DomainMeta;

/// Registry and graph, read-only once built.
///
/// Built by [`EngineBuilder`](crate::EngineBuilder) and passed by reference
/// to whoever needs to convert.
#[derive(Debug)]
pub struct Engine {
    registry: UnitRegistry,
    graph: ConversionGraph,
    domains: Vec<DomainMeta>,
}

impl Engine {
    pub(crate) fn new(registry: UnitRegistry, graph: ConversionGraph, domains: Vec<DomainMeta>) -> Self {
        Self { registry, graph, domains }
    }

    pub fn resolve(&self, name: &str) -> Result<UnitType> {
        self.registry.resolve(name)
    }

    /// Resolve a name together with the unit's metadata
    pub fn resolve_info(&self, name: &str) -> Result<(UnitType, &UnitInfo)> {
        self.registry.resolve_info(name)
    }

    pub fn find_path(&self, from: UnitType, to: UnitType) -> Result<ConversionPath> {
        PathFinder::new(&self.graph).find(from, to)
    }

    /// Resolve both names, then search once
    pub fn path_between(&self, from: &str, to: &str) -> Result<ConversionPath> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.find_path(from, to)
    }

    pub fn apply(&self, path: &ConversionPath, value: f64) -> f64 {
        path.apply(value)
    }

    /// Convert every value from `from` to `to` with a single path search
    pub fn convert(&self, from: &str, to: &str, values: &[f64]) -> Result<Vec<f64>> {
        let path = self.path_between(from, to)?;
        debug!(from, to, hops = path.len(), count = values.len(), "converting");
        Ok(apply_all(&path, values))
    }

    /// All registered names, in registration order
    pub fn names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn info(&self, unit: UnitType) -> Option<&UnitInfo> {
        self.registry.info(unit)
    }

    /// Canonical name of a unit, or its raw id if it is not registered here
    pub fn unit_name(&self, unit: UnitType) -> String {
        self.info(unit)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| unit.to_string())
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitType, &UnitInfo)> {
        self.registry.units()
    }

    /// Names other than the canonical one
    pub fn aliases(&self, unit: UnitType) -> Vec<&str> {
        self.registry.names_for(unit).into_iter().skip(1).collect()
    }

    pub fn domains(&self) -> &[DomainMeta] {
        &self.domains
    }

    pub fn graph(&self) -> &ConversionGraph {
        &self.graph
    }

    /// Registered names resembling `name`, best match first
    pub fn similar_names(&self, name: &str) -> Vec<&str> {
        let query = name.trim().to_lowercase();
        let mut matches: Vec<(&str, usize)> = self.names()
            .iter()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, candidate);
                if score > 0 {
                    Some((candidate.as_str(), score))
                } else {
                    None
                }
            })
            .collect();

        // Sort by similarity score (higher = more similar); stable keeps registration order on ties
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        // Exact prefix match is best
        if candidate.starts_with(query) {
            score += 100;
        }
        // Contains the query
        else if candidate.contains(query) {
            score += 50;
        }
        // Query contains the candidate
        else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // A single shared letter is noise
        if score == 0 && common < 3 {
            return 0;
        }
        score += common * 2;

        // Penalize length difference
        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 {
            score += 5 - len_diff;
        }

        score
    }
}
