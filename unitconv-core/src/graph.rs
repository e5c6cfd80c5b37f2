//! Directed conversion graph
//!
//! Nodes are unit types, edges are conversion functions. Adjacency lists
//! keep insertion order, which path search uses to break ties.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use crate::UnitType;

/// Conversion function stored on an edge
pub type ConvertFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A single directed conversion `from -> to`
#[derive(Clone)]
pub struct ConversionEdge {
    pub from: UnitType,
    pub to: UnitType,
    /// Label for diagnostics (e.g., "c_to_f")
    pub name: String,
    func: ConvertFn,
}

impl ConversionEdge {
    pub fn new<F>(from: UnitType, to: UnitType, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ConversionEdge {
            from,
            to,
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Run this edge's function
    pub fn convert(&self, value: f64) -> f64 {
        (self.func)(value)
    }

    fn same_func(&self, other: &ConversionEdge) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.func), Arc::as_ptr(&other.func))
    }
}

impl PartialEq for ConversionEdge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.name == other.name
            && self.same_func(other)
    }
}

impl fmt::Debug for ConversionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionEdge")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConversionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.name, self.from, self.to)
    }
}

/// Adjacency-list graph of conversion edges
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    adjacency: HashMap<UnitType, Vec<ConversionEdge>>,
    edge_count: usize,
}

impl ConversionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge to `from`'s adjacency list.
    ///
    /// Registering the same `(from, to)` pair again replaces the function of
    /// the existing edge and keeps its position: the last registration wins.
    pub fn add_edge<F>(&mut self, from: UnitType, to: UnitType, name: impl Into<String>, func: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.insert(ConversionEdge::new(from, to, name, func));
    }

    pub fn insert(&mut self, edge: ConversionEdge) {
        let edges = self.adjacency.entry(edge.from).or_default();
        if let Some(existing) = edges.iter_mut().find(|e| e.to == edge.to) {
            warn!(from = %edge.from, to = %edge.to, old = %existing.name, new = %edge.name,
                "replacing conversion edge");
            *existing = edge;
            return;
        }

        debug!(edge = %edge, "added conversion edge");
        edges.push(edge);
        self.edge_count += 1;
    }

    /// Outgoing edges in registration order; empty if there are none
    pub fn edges_from(&self, unit: UnitType) -> &[ConversionEdge] {
        self.adjacency.get(&unit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct edge `from -> to`, if registered
    pub fn edge(&self, from: UnitType, to: UnitType) -> Option<&ConversionEdge> {
        self.edges_from(from).iter().find(|e| e.to == to)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
