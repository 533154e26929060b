//! Breadth-First Search
//!
//! FIFO traversal that claims a vertex when it is enqueued, so every vertex
//! enters the queue once and its recorded parent lies on a shortest
//! (fewest-edges) path from the start. Depth is fixed at discovery time as
//! parent depth + 1.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::path_finding::traversal::{
    expand, require_vertex, Frontier, ParentMap, QueueFrontier, Traversal, VisitedSet,
};
use crate::algorithm::traits::{
    Algorithm, AlgorithmCategory, AlgorithmComplexity, AlgorithmProfiler, PathfindingAlgorithm,
    SearchError,
};
use crate::data_structures::graph::SearchGraph;
use crate::execution::tracer::{ExecutionTracer, TraceEventKind, TraceSink};

/// Breadth-first traversal, unweighted shortest paths and levels
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self
    }

    /// Traverses from `start`, stopping early once `goal` is dequeued
    pub fn search<V, G>(&self, graph: &G, start: &V, goal: Option<&V>) -> Result<Traversal<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        self.search_with_tracing(graph, start, goal, None)
    }

    pub fn search_with_tracing<V, G>(
        &self,
        graph: &G,
        start: &V,
        goal: Option<&V>,
        tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<Traversal<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        self.run(graph, start, goal, tracer).map(|(traversal, _)| traversal)
    }

    /// Path with the fewest edges, or `None` when `goal` is unreachable
    pub fn shortest_path<V, G>(&self, graph: &G, start: &V, goal: &V) -> Result<Option<Vec<V>>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        Ok(self.search(graph, start, Some(goal))?.path)
    }

    /// Edge-count depth of every vertex reachable from `start`
    ///
    /// Unreached vertices are absent from the map.
    pub fn levels<V, G>(&self, graph: &G, start: &V) -> Result<HashMap<V, usize>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        self.run(graph, start, None, None).map(|(_, levels)| levels)
    }

    fn run<V, G>(
        &self,
        graph: &G,
        start: &V,
        goal: Option<&V>,
        mut tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<(Traversal<V>, HashMap<V, usize>), SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        require_vertex(graph, start)?;
        if let Some(goal) = goal {
            require_vertex(graph, goal)?;
        }
        if let Some(tracer) = tracer.as_deref_mut() {
            tracer.begin(self.name());
        }
        debug!("BFS from {:?} (goal: {:?})", start, goal);

        let mut profiler = AlgorithmProfiler::new();
        profiler.start();

        let mut queue: QueueFrontier<(V, usize)> = QueueFrontier::new();
        let mut visited = VisitedSet::new();
        let mut parents = ParentMap::new();
        let mut levels = HashMap::new();
        let mut visit_order = Vec::new();
        let mut path = None;

        visited.insert(start.clone());
        levels.insert(start.clone(), 0);
        queue.push((start.clone(), 0));
        tracer.note(TraceEventKind::Discover, start);

        while let Some((vertex, depth)) = queue.pop() {
            profiler.record_step();
            profiler.record_node_exploration();
            tracer.note(TraceEventKind::Expand, &vertex);
            trace!("BFS expand {:?} at depth {}", vertex, depth);
            visit_order.push(vertex.clone());

            if goal == Some(&vertex) {
                tracer.note(TraceEventKind::GoalReached, &vertex);
                path = Some(parents.reconstruct(&vertex));
                break;
            }

            for edge in expand(graph, &vertex)? {
                if visited.insert(edge.target.clone()) {
                    parents.record(edge.target.clone(), vertex.clone());
                    levels.insert(edge.target.clone(), depth + 1);
                    tracer.note(TraceEventKind::Discover, &edge.target);
                    queue.push((edge.target.clone(), depth + 1));
                }
            }
            profiler.record_peak("frontier_peak", queue.len() as f64);
        }

        if path.is_none() {
            tracer.note_exhausted();
        }
        debug!("BFS from {:?} expanded {} vertices", start, visit_order.len());

        let traversal = Traversal {
            visit_order,
            path,
            metrics: profiler.finish(),
        };
        Ok((traversal, levels))
    }
}

impl Algorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "BreadthFirstSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::GraphSearch
    }

    fn description(&self) -> &'static str {
        "Breadth-first graph traversal over a FIFO queue"
    }

    fn best_for(&self) -> &'static str {
        "Unweighted shortest paths, level-order traversal"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(V + E)", "O(V)", "O(1)", "O(V + E)", "O(V + E)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_with_tracing", "shortest_path", "levels"]
    }
}

impl PathfindingAlgorithm for BreadthFirstSearch {
    /// Optimal by edge count; edge weights are ignored
    fn guarantees_optimal_path(&self) -> bool {
        true
    }
}
