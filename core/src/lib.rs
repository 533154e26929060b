//! CHRONOS Search
//!
//! Classic search algorithms with observable execution: index searches over
//! slices and DFS, BFS and A* over weighted graphs. Every algorithm
//! describes itself through [`Algorithm`] and every graph search can record
//! a step-by-step [`ExecutionTracer`] for replay in a visualization layer.
//!
//! ```
//! use chronos_search::{AStarSearch, WeightedGraph, ZeroHeuristic};
//!
//! let graph = WeightedGraph::from_edges(false, vec![("a", "b", 2.0), ("b", "c", 1.5)])?;
//! let result = AStarSearch::new().search(&graph, &"a", &"c", &ZeroHeuristic)?;
//! assert_eq!(result.path, vec!["a", "b", "c"]);
//! assert_eq!(result.cost, 3.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod utils;

pub use crate::algorithm::array_search::{
    BinarySearch, ExponentialSearch, Interpolate, InterpolationSearch, JumpSearch, LinearSearch,
    OrderedSearch,
};
pub use crate::algorithm::catalog::{by_category, catalog, lookup, AlgorithmInfo};
pub use crate::algorithm::path_finding::{
    AStarSearch, BreadthFirstSearch, DepthFirstSearch, Euclidean, Heuristic, Intrinsic, Manhattan,
    MinOverGoals, PathResult, Planar, TargetPath, Traversal, ZeroHeuristic,
};
pub use crate::algorithm::traits::{
    Algorithm, AlgorithmCategory, AlgorithmComplexity, AlgorithmMetrics, PathfindingAlgorithm,
    SearchError,
};
pub use crate::config::{AStarConfig, ConfigError};
pub use crate::data_structures::graph::{
    CoordinateSource, Edge, EdgeWeight, GraphError, Position, SearchGraph, WeightedGraph,
};
pub use crate::execution::tracer::{ExecutionTracer, TraceEvent, TraceEventKind};
