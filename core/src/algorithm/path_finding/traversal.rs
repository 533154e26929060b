//! Traversal primitives shared by the graph searches
//!
//! Frontier disciplines, the visited set, the parent map and path
//! reconstruction. Every search allocates these per call and drops them on
//! return; nothing here outlives a single invocation.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmMetrics, SearchError};
use crate::data_structures::graph::{Edge, SearchGraph};

/// Ordered working set of pending items
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Vertices already claimed by the traversal
#[derive(Debug, Clone)]
pub struct VisitedSet<V> {
    seen: HashSet<V>,
}

impl<V: Eq + Hash> VisitedSet<V> {
    pub fn new() -> Self {
        Self { seen: HashSet::new() }
    }

    /// Marks `vertex`; false if it was already marked
    pub fn insert(&mut self, vertex: V) -> bool {
        self.seen.insert(vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<V: Eq + Hash> Default for VisitedSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Backtracking map from a vertex to the predecessor it was reached through
#[derive(Debug, Clone)]
pub struct ParentMap<V> {
    parents: HashMap<V, V>,
}

impl<V: Clone + Eq + Hash> ParentMap<V> {
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Sets or replaces the predecessor of `child`
    pub fn record(&mut self, child: V, parent: V) {
        self.parents.insert(child, parent);
    }

    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.parents.get(vertex)
    }

    /// Walks predecessors back from `goal`; the result runs root to goal
    ///
    /// The root is the first vertex without a recorded predecessor, so the
    /// start vertex must never be given one.
    pub fn reconstruct(&self, goal: &V) -> Vec<V> {
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(parent) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

impl<V: Clone + Eq + Hash> Default for ParentMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a DFS or BFS run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traversal<V> {
    /// Vertices in the order they were expanded
    pub visit_order: Vec<V>,
    /// Start-to-goal path, when a goal was given and reached
    pub path: Option<Vec<V>>,
    pub metrics: AlgorithmMetrics,
}

impl<V> Traversal<V> {
    pub fn reached_goal(&self) -> bool {
        self.path.is_some()
    }
}

/// Fails with `VertexNotFound` unless the graph knows `vertex`
pub fn require_vertex<V, G>(graph: &G, vertex: &V) -> Result<(), SearchError>
where
    V: Debug,
    G: SearchGraph<V> + ?Sized,
{
    if graph.contains(vertex) {
        Ok(())
    } else {
        Err(SearchError::vertex_not_found(vertex))
    }
}

/// Out-edges of `vertex`; an edge target the graph does not know is reported
/// here, at expansion time, rather than validated up front
pub fn expand<'g, V, G>(graph: &'g G, vertex: &V) -> Result<&'g [Edge<V>], SearchError>
where
    V: Debug,
    G: SearchGraph<V> + ?Sized,
{
    let edges = graph
        .neighbors(vertex)
        .ok_or_else(|| SearchError::vertex_not_found(vertex))?;

    if let Some(dangling) = edges.iter().find(|edge| !graph.contains(&edge.target)) {
        return Err(SearchError::vertex_not_found(&dangling.target));
    }
    Ok(edges)
}
