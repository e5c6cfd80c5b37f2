//! Conversion paths and depth-first path search
//!
//! The search returns the *first* path it discovers, walking adjacency
//! lists in registration order. It is not a shortest-path search: with
//! several routes available, the chosen one depends on the order edges
//! were registered.

use std::collections::HashSet;
use tracing::debug;
use crate::{ConversionEdge, ConversionError, ConversionGraph, Result, UnitType};

/// Ordered chain of edges from `source` to `destination`
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionPath {
    source: UnitType,
    destination: UnitType,
    edges: Vec<ConversionEdge>,
}

impl ConversionPath {
    /// Empty path: converting a unit to itself
    pub fn identity(unit: UnitType) -> Self {
        ConversionPath { source: unit, destination: unit, edges: Vec::new() }
    }

    /// Build a path from chained edges. Returns `None` if the edges do not
    /// connect `source` to `destination`.
    pub fn from_edges(source: UnitType, destination: UnitType, edges: Vec<ConversionEdge>) -> Option<Self> {
        let mut at = source;
        for edge in &edges {
            if edge.from != at {
                return None;
            }
            at = edge.to;
        }
        if at != destination {
            return None;
        }
        Some(ConversionPath { source, destination, edges })
    }

    pub fn source(&self) -> UnitType {
        self.source
    }

    pub fn destination(&self) -> UnitType {
        self.destination
    }

    pub fn edges(&self) -> &[ConversionEdge] {
        &self.edges
    }

    /// Number of hops
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionEdge> {
        self.edges.iter()
    }

    /// Edge labels in order, e.g. `["f_to_c", "c_to_k"]`
    pub fn edge_names(&self) -> Vec<&str> {
        self.edges.iter().map(|e| e.name.as_str()).collect()
    }

    /// Apply this path to a value (see [`crate::convert::apply`])
    pub fn apply(&self, value: f64) -> f64 {
        crate::convert::apply(self, value)
    }
}

impl<'a> IntoIterator for &'a ConversionPath {
    type Item = &'a ConversionEdge;
    type IntoIter = std::slice::Iter<'a, ConversionEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Depth-first search over a [`ConversionGraph`]
pub struct PathFinder<'g> {
    graph: &'g ConversionGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g ConversionGraph) -> Self {
        PathFinder { graph }
    }

    /// Find some path from `from` to `to`
    pub fn find(&self, from: UnitType, to: UnitType) -> Result<ConversionPath> {
        if from == to {
            return Ok(ConversionPath::identity(from));
        }

        let mut visited = HashSet::new();
        match self.search(from, to, &mut visited) {
            Some(mut edges) => {
                // search() pushes on the way back up, so the chain is reversed
                edges.reverse();
                debug!(%from, %to, hops = edges.len(), "found conversion path");
                Ok(ConversionPath { source: from, destination: to, edges })
            }
            None => {
                debug!(%from, %to, visited = visited.len(), "no conversion path");
                Err(ConversionError::NoConversionPath { from, to })
            }
        }
    }

    fn search(
        &self,
        src: UnitType,
        dst: UnitType,
        visited: &mut HashSet<UnitType>,
    ) -> Option<Vec<ConversionEdge>> {
        visited.insert(src);

        for edge in self.graph.edges_from(src) {
            if edge.to == dst {
                return Some(vec![edge.clone()]);
            }
            if !visited.contains(&edge.to) {
                if let Some(mut tail) = self.search(edge.to, dst, visited) {
                    tail.push(edge.clone());
                    return Some(tail);
                }
            }
        }

        None
    }
}

/// Shorthand for `PathFinder::new(graph).find(from, to)`
pub fn find_path(graph: &ConversionGraph, from: UnitType, to: UnitType) -> Result<ConversionPath> {
    PathFinder::new(graph).find(from, to)
}
