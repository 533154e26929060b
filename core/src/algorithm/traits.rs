//! Core algorithm trait definitions for the CHRONOS search library
//!
//! Every search strategy in the crate, array or graph, describes itself
//! through [`Algorithm`] so the catalogue and any visualization layer can
//! treat them uniformly. Graph searches additionally implement
//! [`PathfindingAlgorithm`].
//!
//! All fallible graph operations report a [`SearchError`]. The error kinds
//! are ordinary values: an unreachable goal is an expected outcome of a
//! search, and callers decide whether it is exceptional.

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Universal algorithm identifier for type-safe dispatch
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Family an algorithm belongs to
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmCategory {
    /// Index arithmetic over linear or sorted sequences
    ArraySearch,
    /// Traversal and path finding over weighted graphs
    GraphSearch,
}

impl AlgorithmCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArraySearch => "array_search",
            Self::GraphSearch => "graph_search",
        }
    }
}

/// Algorithm parameter with strongly typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmParameter {
    pub name: String,
    pub value: String,
    pub value_type: ParameterType,
}

/// Parameter type enumeration for type-safe parameter handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    Integer,
    Boolean,
}

/// Errors reported by graph search operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Start or goal absent from the graph, or an edge pointing at a vertex
    /// the graph does not know
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// Frontier exhausted without reaching the goal
    #[error("Goal unreachable from start vertex")]
    GoalUnreachable,

    /// Heuristic produced a negative or NaN estimate
    #[error("Invalid heuristic estimate {value} at vertex {vertex}")]
    InvalidHeuristic { vertex: String, value: f64 },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl SearchError {
    pub fn vertex_not_found<V: Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub fn invalid_heuristic<V: Debug>(vertex: &V, value: f64) -> Self {
        Self::InvalidHeuristic {
            vertex: format!("{vertex:?}"),
            value,
        }
    }

    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }

    /// True for the "no path" outcome, which most callers treat as absence
    /// rather than failure
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::GoalUnreachable)
    }
}

/// Algorithm execution metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    pub steps_executed: usize,
    pub nodes_explored: usize,
    pub execution_time: Duration,
    pub custom_metrics: HashMap<String, f64>,
}

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
}

impl AlgorithmComplexity {
    pub fn new(time: &str, space: &str, best: &str, average: &str, worst: &str) -> Self {
        Self {
            time_complexity: time.to_owned(),
            space_complexity: space.to_owned(),
            best_case: best.to_owned(),
            average_case: average.to_owned(),
            worst_case: worst.to_owned(),
        }
    }
}

/// Main algorithm trait
///
/// # Invariants
/// - State isolation between runs: implementors hold configuration only
/// - Deterministic behavior for given inputs
pub trait Algorithm: Debug + Send + Sync {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's unique identifier
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new(self.name())
    }

    fn category(&self) -> AlgorithmCategory;

    /// One-line description of the strategy
    fn description(&self) -> &'static str;

    /// Typical inputs the algorithm is suited for
    fn best_for(&self) -> &'static str;

    /// Returns the algorithm's asymptotic complexity in Big-O notation
    fn complexity(&self) -> AlgorithmComplexity;

    /// Public entry points, in the order they are documented
    fn operations(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns supported parameters with type information
    fn parameters(&self) -> Vec<AlgorithmParameter> {
        Vec::new()
    }

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, _value: &str) -> Result<(), SearchError> {
        Err(SearchError::invalid_parameter(name, "unknown parameter"))
    }

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters()
            .into_iter()
            .find(|param| param.name == name)
            .map(|param| param.value)
    }
}

/// Pathfinding algorithm trait specialization
pub trait PathfindingAlgorithm: Algorithm {
    /// Returns whether the algorithm guarantees optimal paths
    fn guarantees_optimal_path(&self) -> bool;

    /// Returns the heuristic function used (if applicable)
    fn heuristic_description(&self) -> Option<String> {
        None
    }
}

/// Collects [`AlgorithmMetrics`] while a single search runs
#[derive(Debug)]
pub struct AlgorithmProfiler {
    metrics: AlgorithmMetrics,
    start_time: Option<Instant>,
}

impl AlgorithmProfiler {
    pub fn new() -> Self {
        Self {
            metrics: AlgorithmMetrics::default(),
            start_time: None,
        }
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.metrics.execution_time = start.elapsed();
        }
    }

    pub fn record_node_exploration(&mut self) {
        self.metrics.nodes_explored += 1;
    }

    pub fn record_step(&mut self) {
        self.metrics.steps_executed += 1;
    }

    /// Keeps the largest value seen for `name`
    pub fn record_peak(&mut self, name: &str, value: f64) {
        let slot = self.metrics.custom_metrics.entry(name.to_owned()).or_insert(value);
        if value > *slot {
            *slot = value;
        }
    }

    pub fn increment(&mut self, name: &str) {
        *self.metrics.custom_metrics.entry(name.to_owned()).or_insert(0.0) += 1.0;
    }

    pub fn get_metrics(&self) -> AlgorithmMetrics {
        self.metrics.clone()
    }

    /// Stops the clock and hands over the collected metrics
    pub fn finish(mut self) -> AlgorithmMetrics {
        self.stop();
        self.metrics
    }
}

impl Default for AlgorithmProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_id_uniqueness() {
        let id1 = AlgorithmId::new("astar");
        let id2 = AlgorithmId::new("dijkstra");
        let id3 = AlgorithmId::new("astar");

        assert_ne!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(id1.as_str(), "astar");
    }

    #[test]
    fn test_error_helpers_render_vertex_debug() {
        let err = SearchError::vertex_not_found(&"Z");
        assert_eq!(err, SearchError::VertexNotFound("\"Z\"".to_string()));
        assert!(!err.is_unreachable());
        assert!(SearchError::GoalUnreachable.is_unreachable());

        let err = SearchError::invalid_heuristic(&(1, 2), -3.0);
        assert_eq!(err.to_string(), "Invalid heuristic estimate -3 at vertex (1, 2)");
    }

    #[test]
    fn test_profiler_counts_and_peaks() {
        let mut profiler = AlgorithmProfiler::new();
        profiler.start();
        profiler.record_step();
        profiler.record_step();
        profiler.record_node_exploration();
        profiler.record_peak("frontier_peak", 3.0);
        profiler.record_peak("frontier_peak", 1.0);
        profiler.increment("reopened");

        let metrics = profiler.finish();
        assert_eq!(metrics.steps_executed, 2);
        assert_eq!(metrics.nodes_explored, 1);
        assert_eq!(metrics.custom_metrics["frontier_peak"], 3.0);
        assert_eq!(metrics.custom_metrics["reopened"], 1.0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(AlgorithmCategory::ArraySearch.as_str(), "array_search");
        assert_eq!(
            serde_json::to_string(&AlgorithmCategory::GraphSearch).unwrap(),
            "\"graph_search\""
        );
    }
}
