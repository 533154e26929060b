//! Depth-First Search
//!
//! Iterative DFS over an explicit LIFO stack. Neighbours are pushed in the
//! order the graph reports them, so the last-reported neighbour is expanded
//! first. A vertex is claimed when it is popped, which keeps self-loops and
//! back-edges from causing repeat expansions.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::path_finding::traversal::{
    expand, require_vertex, Frontier, ParentMap, StackFrontier, Traversal, VisitedSet,
};
use crate::algorithm::traits::{
    Algorithm, AlgorithmCategory, AlgorithmComplexity, AlgorithmProfiler, PathfindingAlgorithm,
    SearchError,
};
use crate::data_structures::graph::SearchGraph;
use crate::execution::tracer::{ExecutionTracer, TraceEventKind, TraceSink};

/// Depth-first traversal, path finding and reachability
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self
    }

    /// Traverses from `start`, stopping early once `goal` is expanded
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
        mut tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<Traversal<V>, SearchError>
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
        debug!("DFS from {:?} (goal: {:?})", start, goal);

        let mut profiler = AlgorithmProfiler::new();
        profiler.start();

        // Entries carry the vertex that pushed them so the parent map
        // reflects the edge actually taken.
        let mut stack: StackFrontier<(V, Option<V>)> = StackFrontier::new();
        let mut visited = VisitedSet::new();
        let mut parents = ParentMap::new();
        let mut visit_order = Vec::new();
        let mut path = None;

        stack.push((start.clone(), None));
        tracer.note(TraceEventKind::Discover, start);

        while let Some((vertex, parent)) = stack.pop() {
            profiler.record_step();
            if !visited.insert(vertex.clone()) {
                continue;
            }
            if let Some(parent) = parent {
                parents.record(vertex.clone(), parent);
            }

            profiler.record_node_exploration();
            tracer.note(TraceEventKind::Expand, &vertex);
            trace!("DFS expand {:?}", vertex);
            visit_order.push(vertex.clone());

            if goal == Some(&vertex) {
                tracer.note(TraceEventKind::GoalReached, &vertex);
                path = Some(parents.reconstruct(&vertex));
                break;
            }

            for edge in expand(graph, &vertex)? {
                if !visited.contains(&edge.target) {
                    tracer.note(TraceEventKind::Discover, &edge.target);
                    stack.push((edge.target.clone(), Some(vertex.clone())));
                }
            }
            profiler.record_peak("frontier_peak", stack.len() as f64);
        }

        if path.is_none() {
            tracer.note_exhausted();
        }
        debug!("DFS from {:?} expanded {} vertices", start, visit_order.len());

        Ok(Traversal {
            visit_order,
            path,
            metrics: profiler.finish(),
        })
    }

    /// Some start-to-goal path, not necessarily the shortest; `None` when the
    /// goal is unreachable
    pub fn find_path<V, G>(&self, graph: &G, start: &V, goal: &V) -> Result<Option<Vec<V>>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        Ok(self.search(graph, start, Some(goal))?.path)
    }

    /// Every vertex reachable from `start`, including `start`
    pub fn connected_component<V, G>(&self, graph: &G, start: &V) -> Result<HashSet<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
    {
        let traversal = self.search(graph, start, None)?;
        Ok(traversal.visit_order.into_iter().collect())
    }
}

impl Algorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "DepthFirstSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::GraphSearch
    }

    fn description(&self) -> &'static str {
        "Depth-first graph traversal over an explicit LIFO stack"
    }

    fn best_for(&self) -> &'static str {
        "Graph traversal, reachability, connected components"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(V + E)", "O(V)", "O(1)", "O(V + E)", "O(V + E)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_with_tracing", "find_path", "connected_component"]
    }
}

impl PathfindingAlgorithm for DepthFirstSearch {
    fn guarantees_optimal_path(&self) -> bool {
        false
    }
}
