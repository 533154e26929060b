//! Weighted graph data structure consumed by the graph searches
//!
//! Adjacency lists keep the insertion order of edges, which is the order
//! every search expands neighbours in. Traversal order is therefore fully
//! determined by how the graph was built.
//!
//! Searches never see [`WeightedGraph`] directly: they are written against
//! the read-only [`SearchGraph`] trait, and the geometric heuristics against
//! [`CoordinateSource`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// 2D position used by geometric heuristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    #[inline]
    pub fn squared_distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn manhattan_distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Non-negative, finite edge weight
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EdgeWeight(f64);

impl EdgeWeight {
    pub fn new(weight: f64) -> Result<Self, GraphError> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(Self(weight))
        } else {
            Err(GraphError::InvalidWeight(weight))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Outgoing edge as reported by [`SearchGraph::neighbors`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    pub target: V,
    pub weight: EdgeWeight,
}

/// Errors raised while building a graph
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
}

/// Read-only view of a graph, as consumed by every search
///
/// Implementations must report neighbours in a stable order; that order is
/// the tie-break for DFS and BFS.
pub trait SearchGraph<V> {
    fn contains(&self, vertex: &V) -> bool;

    /// All vertices, in a stable order
    fn vertices(&self) -> Vec<&V>;

    /// Outgoing edges of `vertex`, or `None` if the graph does not know it
    fn neighbors(&self, vertex: &V) -> Option<&[Edge<V>]>;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// Supplies planar coordinates for the geometric heuristics
pub trait CoordinateSource<V: ?Sized> {
    fn coordinates(&self, vertex: &V) -> Option<Position>;
}

impl<V: ?Sized, C: CoordinateSource<V> + ?Sized> CoordinateSource<V> for &C {
    fn coordinates(&self, vertex: &V) -> Option<Position> {
        (**self).coordinates(vertex)
    }
}

/// Adjacency-list graph with non-negative edge weights
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    directed: bool,
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<Edge<V>>>,
    positions: Vec<Option<Position>>,
    edge_count: usize,
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates an empty graph; undirected edges are stored in both directions
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            positions: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Builds a graph from `(from, to, weight)` triples, adding vertices in
    /// first-mention order
    pub fn from_edges<I>(directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.ensure_vertex(from.clone());
            graph.ensure_vertex(to.clone());
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.index.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(format!("{vertex:?}")));
        }
        self.insert_vertex(vertex, None);
        Ok(())
    }

    /// Adds a vertex carrying coordinates for the geometric heuristics
    pub fn add_vertex_at(&mut self, vertex: V, position: Position) -> Result<(), GraphError> {
        if self.index.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(format!("{vertex:?}")));
        }
        self.insert_vertex(vertex, Some(position));
        Ok(())
    }

    pub fn set_position(&mut self, vertex: &V, position: Position) -> Result<(), GraphError> {
        let idx = self.slot(vertex)?;
        self.positions[idx] = Some(position);
        Ok(())
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<(), GraphError> {
        let weight = EdgeWeight::new(weight)?;
        let from_idx = self.slot(&from)?;
        let to_idx = self.slot(&to)?;

        if self.adjacency[from_idx].iter().any(|edge| edge.target == to) {
            return Err(GraphError::DuplicateEdge {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }

        if !self.directed && from_idx != to_idx {
            self.adjacency[to_idx].push(Edge {
                target: from.clone(),
                weight,
            });
        }
        self.adjacency[from_idx].push(Edge { target: to, weight });
        self.edge_count += 1;

        Ok(())
    }

    /// Number of edges as inserted; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edge_weight(&self, from: &V, to: &V) -> Option<f64> {
        let idx = *self.index.get(from)?;
        self.adjacency[idx]
            .iter()
            .find(|edge| &edge.target == to)
            .map(|edge| edge.weight.value())
    }

    pub fn position(&self, vertex: &V) -> Option<Position> {
        self.index.get(vertex).and_then(|&idx| self.positions[idx])
    }

    fn ensure_vertex(&mut self, vertex: V) {
        if !self.index.contains_key(&vertex) {
            self.insert_vertex(vertex, None);
        }
    }

    fn insert_vertex(&mut self, vertex: V, position: Option<Position>) {
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        self.positions.push(position);
    }

    fn slot(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{vertex:?}")))
    }
}

impl<V> SearchGraph<V> for WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<&V> {
        self.vertices.iter().collect()
    }

    fn neighbors(&self, vertex: &V) -> Option<&[Edge<V>]> {
        self.index
            .get(vertex)
            .map(|&idx| self.adjacency[idx].as_slice())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V> CoordinateSource<V> for WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn coordinates(&self, vertex: &V) -> Option<Position> {
        self.position(vertex)
    }
}
