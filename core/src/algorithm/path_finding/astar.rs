//! A* Search
//!
//! Best-first search on `f = g + h` over an indexed binary heap, so each
//! vertex has at most one frontier entry and a cheaper path lowers its key in
//! place. Ties on `f` go to the lower `g`, then to the earlier push, which
//! makes every run over the same input expand vertices in the same order.
//!
//! With an admissible heuristic and non-negative weights the first goal taken
//! off the frontier carries an optimal cost. Inconsistent (but admissible)
//! heuristics may finalize a vertex too early; such a vertex is reopened when
//! a strictly cheaper path arrives, unless [`AStarConfig::reopen_closed`] is
//! turned off.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::heuristic::{Heuristic, MinOverGoals};
use crate::algorithm::path_finding::traversal::{expand, require_vertex, ParentMap};
use crate::algorithm::traits::{
    Algorithm, AlgorithmCategory, AlgorithmComplexity, AlgorithmMetrics, AlgorithmParameter,
    AlgorithmProfiler, ParameterType, PathfindingAlgorithm, SearchError,
};
use crate::config::AStarConfig;
use crate::data_structures::graph::SearchGraph;
use crate::data_structures::priority_queue::IndexedPriorityQueue;
use crate::execution::tracer::{ExecutionTracer, TraceEventKind, TraceSink};
use crate::utils::math::{strictly_less, FloatOrd};

/// Optimal path to a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<V> {
    /// Start first, goal last
    pub path: Vec<V>,
    pub cost: f64,
    pub metrics: AlgorithmMetrics,
}

impl<V> PathResult<V> {
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Path to whichever goal of a goal set was reached first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPath<V> {
    pub goal: V,
    pub path: Vec<V>,
    pub cost: f64,
    pub metrics: AlgorithmMetrics,
}

impl<V> From<TargetPath<V>> for PathResult<V> {
    fn from(target: TargetPath<V>) -> Self {
        Self {
            path: target.path,
            cost: target.cost,
            metrics: target.metrics,
        }
    }
}

/// Frontier ordering: `f`, then `g`, then push sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierPriority {
    f: FloatOrd,
    g: FloatOrd,
    seq: u64,
}

impl FrontierPriority {
    fn new(g: f64, h: f64, seq: u64) -> Self {
        Self {
            f: FloatOrd(g + h),
            g: FloatOrd(g),
            seq,
        }
    }
}

/// A* path finder
#[derive(Debug, Clone, Default)]
pub struct AStarSearch {
    config: AStarConfig,
}

impl AStarSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AStarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Cheapest path from `start` to `goal`
    ///
    /// Returns [`SearchError::GoalUnreachable`] when the frontier runs dry.
    pub fn search<V, G, H>(&self, graph: &G, start: &V, goal: &V, heuristic: &H) -> Result<PathResult<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
        H: Heuristic<V> + ?Sized,
    {
        self.search_with_tracing(graph, start, goal, heuristic, None)
    }

    pub fn search_with_tracing<V, G, H>(
        &self,
        graph: &G,
        start: &V,
        goal: &V,
        heuristic: &H,
        tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<PathResult<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
        H: Heuristic<V> + ?Sized,
    {
        require_vertex(graph, start)?;
        require_vertex(graph, goal)?;
        debug!(
            "A* from {:?} to {:?} with {} heuristic",
            start,
            goal,
            heuristic.describe()
        );

        let goals = std::slice::from_ref(goal);
        self.run(graph, start, goals, |vertex| heuristic.estimate(vertex, goal), tracer)
            .map(PathResult::from)
    }

    /// Cheapest path to the nearest of `goals`
    ///
    /// Guided by `h(v) = min over goals of heuristic(v, goal)`, which stays
    /// admissible for every goal whenever `heuristic` is admissible per goal.
    pub fn multi_target_search<V, G, H>(
        &self,
        graph: &G,
        start: &V,
        goals: &[V],
        heuristic: &H,
    ) -> Result<TargetPath<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
        H: Heuristic<V> + ?Sized,
    {
        self.multi_target_search_with_tracing(graph, start, goals, heuristic, None)
    }

    pub fn multi_target_search_with_tracing<V, G, H>(
        &self,
        graph: &G,
        start: &V,
        goals: &[V],
        heuristic: &H,
        tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<TargetPath<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
        H: Heuristic<V> + ?Sized,
    {
        let Some(first_goal) = goals.first() else {
            return Err(SearchError::invalid_parameter("goals", "at least one goal is required"));
        };
        require_vertex(graph, start)?;
        for goal in goals {
            require_vertex(graph, goal)?;
        }

        let nearest = MinOverGoals::new(heuristic, goals);
        debug!("A* from {:?} to any of {} goals ({})", start, goals.len(), nearest.describe());

        self.run(graph, start, goals, |vertex| nearest.estimate(vertex, first_goal), tracer)
    }

    /// Independent A* run per goal, executed on the rayon pool
    ///
    /// Every goal gets its own result; one failing goal does not affect the
    /// others. Duplicate goals collapse into one entry.
    pub fn search_each_goal<V, G, H>(
        &self,
        graph: &G,
        start: &V,
        goals: &[V],
        heuristic: &H,
    ) -> HashMap<V, Result<PathResult<V>, SearchError>>
    where
        V: Clone + Eq + Hash + Debug + Send + Sync,
        G: SearchGraph<V> + Sync + ?Sized,
        H: Heuristic<V> + Sync + ?Sized,
    {
        debug!("A* from {:?} to each of {} goals", start, goals.len());
        goals
            .par_iter()
            .map(|goal| (goal.clone(), self.search(graph, start, goal, heuristic)))
            .collect()
    }

    fn run<V, G, E>(
        &self,
        graph: &G,
        start: &V,
        goals: &[V],
        estimate: E,
        mut tracer: Option<&mut ExecutionTracer<V>>,
    ) -> Result<TargetPath<V>, SearchError>
    where
        V: Clone + Eq + Hash + Debug,
        G: SearchGraph<V> + ?Sized,
        E: Fn(&V) -> f64,
    {
        if let Some(tracer) = tracer.as_deref_mut() {
            tracer.begin(self.name());
        }

        let mut profiler = AlgorithmProfiler::new();
        profiler.start();

        let capacity = self.config.initial_capacity;
        let goal_set: HashSet<&V> = goals.iter().collect();
        let mut open: IndexedPriorityQueue<V, FrontierPriority> = IndexedPriorityQueue::with_capacity(capacity);
        let mut g_score: HashMap<V, f64> = HashMap::with_capacity(capacity);
        let mut h_cache: HashMap<V, f64> = HashMap::with_capacity(capacity);
        let mut closed: HashSet<V> = HashSet::with_capacity(capacity);
        let mut parents = ParentMap::new();
        let mut seq: u64 = 0;

        let mut heuristic_of = |vertex: &V| -> Result<f64, SearchError> {
            if let Some(&h) = h_cache.get(vertex) {
                return Ok(h);
            }
            let h = estimate(vertex);
            if self.config.validate_heuristic && (h.is_nan() || h < 0.0) {
                warn!("A* heuristic returned {} for {:?}", h, vertex);
                return Err(SearchError::invalid_heuristic(vertex, h));
            }
            h_cache.insert(vertex.clone(), h);
            Ok(h)
        };

        let h_start = heuristic_of(start)?;
        g_score.insert(start.clone(), 0.0);
        open.push(start.clone(), FrontierPriority::new(0.0, h_start, seq));
        tracer.note_cost(TraceEventKind::Discover, start, 0.0);

        while let Some((vertex, priority)) = open.pop() {
            let g = priority.g.0;
            profiler.record_step();
            profiler.record_node_exploration();
            tracer.note_cost(TraceEventKind::Expand, &vertex, g);
            trace!("A* expand {:?} g={} f={}", vertex, g, priority.f.0);

            if goal_set.contains(&vertex) {
                tracer.note_cost(TraceEventKind::GoalReached, &vertex, g);
                let path = parents.reconstruct(&vertex);
                let metrics = profiler.finish();
                debug!(
                    "A* reached {:?} at cost {} after {} expansions",
                    vertex, g, metrics.nodes_explored
                );
                return Ok(TargetPath {
                    goal: vertex,
                    path,
                    cost: g,
                    metrics,
                });
            }
            closed.insert(vertex.clone());

            for edge in expand(graph, &vertex)? {
                let neighbor = &edge.target;
                let tentative = g + edge.weight.value();

                if let Some(&known) = g_score.get(neighbor) {
                    if !strictly_less(tentative, known) {
                        continue;
                    }
                }

                if closed.contains(neighbor) {
                    if !self.config.reopen_closed {
                        continue;
                    }
                    closed.remove(neighbor);
                    profiler.increment("reopened");
                    tracer.note_cost(TraceEventKind::Reopen, neighbor, tentative);
                    debug!("A* reopening {:?} at g={}", neighbor, tentative);
                }

                let h = heuristic_of(neighbor)?;
                let discovered = g_score.insert(neighbor.clone(), tentative).is_none();
                parents.record(neighbor.clone(), vertex.clone());

                seq += 1;
                open.push(neighbor.clone(), FrontierPriority::new(tentative, h, seq));

                let kind = if discovered {
                    TraceEventKind::Discover
                } else {
                    TraceEventKind::Relax
                };
                tracer.note_cost(kind, neighbor, tentative);
            }
            profiler.record_peak("frontier_peak", open.len() as f64);
        }

        tracer.note_exhausted();
        debug!(
            "A* from {:?} exhausted the frontier after {} expansions",
            start,
            profiler.get_metrics().nodes_explored
        );
        Err(SearchError::GoalUnreachable)
    }
}

impl Algorithm for AStarSearch {
    fn name(&self) -> &'static str {
        "AStarSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::GraphSearch
    }

    fn description(&self) -> &'static str {
        "Best-first search on f = g + h with an indexed decrease-key frontier"
    }

    fn best_for(&self) -> &'static str {
        "Weighted shortest paths with a good admissible heuristic"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new(
            "O((V + E) log V)",
            "O(V)",
            "O(d) with a perfect heuristic",
            "O((V + E) log V)",
            "O((V + E) log V)",
        )
    }

    fn operations(&self) -> &'static [&'static str] {
        &[
            "search",
            "search_with_tracing",
            "multi_target_search",
            "multi_target_search_with_tracing",
            "search_each_goal",
        ]
    }

    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter {
                name: "validate_heuristic".to_owned(),
                value: self.config.validate_heuristic.to_string(),
                value_type: ParameterType::Boolean,
            },
            AlgorithmParameter {
                name: "reopen_closed".to_owned(),
                value: self.config.reopen_closed.to_string(),
                value_type: ParameterType::Boolean,
            },
            AlgorithmParameter {
                name: "initial_capacity".to_owned(),
                value: self.config.initial_capacity.to_string(),
                value_type: ParameterType::Integer,
            },
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), SearchError> {
        let mut config = self.config;
        match name {
            "validate_heuristic" => {
                config.validate_heuristic = value
                    .parse()
                    .map_err(|_| SearchError::invalid_parameter(name, format!("expected true or false, got {value}")))?;
            }
            "reopen_closed" => {
                config.reopen_closed = value
                    .parse()
                    .map_err(|_| SearchError::invalid_parameter(name, format!("expected true or false, got {value}")))?;
            }
            "initial_capacity" => {
                config.initial_capacity = value
                    .parse()
                    .map_err(|_| SearchError::invalid_parameter(name, format!("expected an integer, got {value}")))?;
            }
            _ => {
                return Err(SearchError::invalid_parameter(
                    name,
                    "unknown parameter; valid parameters: validate_heuristic, reopen_closed, initial_capacity",
                ))
            }
        }
        config
            .validate()
            .map_err(|err| SearchError::invalid_parameter(name, err.to_string()))?;
        self.config = config;
        Ok(())
    }
}

impl PathfindingAlgorithm for AStarSearch {
    /// Optimal whenever the supplied heuristic is admissible
    fn guarantees_optimal_path(&self) -> bool {
        true
    }

    fn heuristic_description(&self) -> Option<String> {
        Some("caller-supplied estimate h(v, goal); admissible estimates keep paths optimal".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::path_finding::fixtures::{grid_graph, init_logging, sample_graph, DanglingGraph};
    use crate::algorithm::path_finding::heuristic::{Euclidean, Manhattan, ZeroHeuristic};
    use crate::data_structures::graph::WeightedGraph;

    /// S-A 1, A-C 3, S-B 1, B-C 1, C-G 4 (directed). With h(B) = 4 and zero
    /// elsewhere the heuristic is admissible but inconsistent: C is first
    /// finalized at g = 4 via A before the cheaper route through B shows up.
    fn inconsistent_fixture() -> (WeightedGraph<&'static str>, impl Fn(&&'static str, &&'static str) -> f64) {
        let graph = WeightedGraph::from_edges(
            true,
            vec![
                ("S", "A", 1.0),
                ("S", "B", 1.0),
                ("A", "C", 3.0),
                ("B", "C", 1.0),
                ("C", "G", 4.0),
            ],
        )
        .unwrap();
        let heuristic = |v: &&'static str, _: &&'static str| if *v == "B" { 4.0 } else { 0.0 };
        (graph, heuristic)
    }

    #[test]
    fn test_zero_heuristic_scenario() {
        init_logging();
        let graph = sample_graph();
        let result = AStarSearch::new().search(&graph, &"A", &"F", &ZeroHeuristic).unwrap();

        assert_eq!(result.path, vec!["A", "B", "D", "F"]);
        assert_eq!(result.cost, 10.0);
        assert_eq!(result.edge_count(), 3);
        assert_eq!(result.metrics.nodes_explored, 6);
    }

    #[test]
    fn test_closure_heuristic() {
        let graph = sample_graph();
        let zero = |_: &&str, _: &&str| 0.0;
        let result = AStarSearch::new().search(&graph, &"A", &"E", &zero).unwrap();

        assert_eq!(result.path, vec!["A", "B", "E"]);
        assert_eq!(result.cost, 5.0);
    }

    #[test]
    fn test_manhattan_prunes_grid_expansions() {
        let graph = grid_graph(10, 10);
        let astar = AStarSearch::new();

        let guided = astar
            .search(&graph, &(0, 0), &(9, 0), &Manhattan::intrinsic())
            .unwrap();
        let blind = astar.search(&graph, &(0, 0), &(9, 0), &ZeroHeuristic).unwrap();

        assert_eq!(guided.cost, 9.0);
        assert_eq!(blind.cost, 9.0);
        assert_eq!(guided.path.len(), 10);
        assert_eq!(guided.metrics.nodes_explored, 10);
        assert!(guided.metrics.nodes_explored < blind.metrics.nodes_explored);
    }

    #[test]
    fn test_manhattan_over_scalar_vertices() {
        let graph = WeightedGraph::from_edges(
            false,
            vec![(0u32, 1u32, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 5, 2.0), (5, 3, 2.5)],
        )
        .unwrap();

        let result = AStarSearch::new()
            .search(&graph, &0, &3, &Manhattan::intrinsic())
            .unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_euclidean_over_graph_positions() {
        use crate::data_structures::graph::Position;

        let mut graph = WeightedGraph::undirected();
        graph.add_vertex_at("a", Position::new(0.0, 0.0)).unwrap();
        graph.add_vertex_at("b", Position::new(3.0, 0.0)).unwrap();
        graph.add_vertex_at("c", Position::new(3.0, 4.0)).unwrap();
        graph.add_vertex_at("d", Position::new(0.0, 4.0)).unwrap();
        graph.add_edge("a", "b", 3.0).unwrap();
        graph.add_edge("b", "c", 4.5).unwrap();
        graph.add_edge("a", "d", 4.0).unwrap();
        graph.add_edge("d", "c", 3.0).unwrap();

        let result = AStarSearch::new()
            .search(&graph, &"a", &"c", &Euclidean::new(&graph))
            .unwrap();
        assert_eq!(result.path, vec!["a", "d", "c"]);
        assert_eq!(result.cost, 7.0);
    }

    #[test]
    fn test_unreachable_goal() {
        let mut graph = sample_graph();
        graph.add_vertex("Z").unwrap();

        let err = AStarSearch::new()
            .search(&graph, &"A", &"Z", &ZeroHeuristic)
            .unwrap_err();
        assert_eq!(err, SearchError::GoalUnreachable);
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_start_is_goal() {
        let mut graph = WeightedGraph::directed();
        graph.add_vertex(7u32).unwrap();

        let result = AStarSearch::new().search(&graph, &7, &7, &ZeroHeuristic).unwrap();
        assert_eq!(result.path, vec![7]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_missing_vertices() {
        let graph = sample_graph();
        let astar = AStarSearch::new();

        assert_eq!(
            astar.search(&graph, &"Q", &"A", &ZeroHeuristic),
            Err(SearchError::VertexNotFound("\"Q\"".into()))
        );
        assert_eq!(
            astar.search(&DanglingGraph::new(), &0, &1, &ZeroHeuristic),
            Err(SearchError::VertexNotFound("99".into()))
        );
    }

    #[test]
    fn test_invalid_heuristic_is_rejected() {
        let graph = sample_graph();
        let negative = |v: &&str, _: &&str| if *v == "B" { -1.0 } else { 0.0 };

        let err = AStarSearch::new().search(&graph, &"A", &"F", &negative).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidHeuristic {
                vertex: "\"B\"".into(),
                value: -1.0
            }
        );

        // no positions in the graph, so the estimate is NaN at the start
        let err = AStarSearch::new()
            .search(&graph, &"A", &"F", &Euclidean::new(&graph))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidHeuristic { value, .. } if value.is_nan()));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let graph = sample_graph();
        let negative = |v: &&str, _: &&str| if *v == "B" { -1.0 } else { 0.0 };
        let astar = AStarSearch::with_config(AStarConfig {
            validate_heuristic: false,
            ..AStarConfig::default()
        });

        let result = astar.search(&graph, &"A", &"F", &negative).unwrap();
        assert_eq!(result.cost, 10.0);
    }

    #[test]
    fn test_reopens_closed_vertex_on_cheaper_path() {
        let (graph, heuristic) = inconsistent_fixture();
        let mut tracer = ExecutionTracer::new();

        let result = AStarSearch::new()
            .search_with_tracing(&graph, &"S", &"G", &heuristic, Some(&mut tracer))
            .unwrap();

        assert_eq!(result.path, vec!["S", "B", "C", "G"]);
        assert_eq!(result.cost, 6.0);
        assert_eq!(result.metrics.custom_metrics["reopened"], 1.0);
        assert_eq!(tracer.events_of_kind(TraceEventKind::Reopen).count(), 1);
        assert_eq!(tracer.expansion_order(), vec!["S", "A", "C", "B", "C", "G"]);
    }

    #[test]
    fn test_without_reopening_keeps_first_finalization() {
        let (graph, heuristic) = inconsistent_fixture();
        let astar = AStarSearch::with_config(AStarConfig {
            reopen_closed: false,
            ..AStarConfig::default()
        });

        let result = astar.search(&graph, &"S", &"G", &heuristic).unwrap();
        assert_eq!(result.path, vec!["S", "A", "C", "G"]);
        assert_eq!(result.cost, 8.0);
        assert!(!result.metrics.custom_metrics.contains_key("reopened"));
    }

    #[test]
    fn test_multi_target_picks_nearest_goal() {
        let graph = sample_graph();
        let astar = AStarSearch::new();

        let target = astar
            .multi_target_search(&graph, &"A", &["F", "E"], &ZeroHeuristic)
            .unwrap();
        assert_eq!(target.goal, "E");
        assert_eq!(target.path, vec!["A", "B", "E"]);
        assert_eq!(target.cost, 5.0);

        let grid = grid_graph(6, 6);
        let target = astar
            .multi_target_search(&grid, &(0, 0), &[(4, 4), (1, 2)], &Manhattan::intrinsic())
            .unwrap();
        assert_eq!(target.goal, (1, 2));
        assert_eq!(target.cost, 3.0);
    }

    #[test]
    fn test_multi_target_rejects_bad_goal_sets() {
        let graph = sample_graph();
        let astar = AStarSearch::new();

        let err = astar
            .multi_target_search(&graph, &"A", &[], &ZeroHeuristic)
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidParameter { ref name, .. } if name == "goals"));

        assert!(matches!(
            astar.multi_target_search(&graph, &"A", &["F", "nope"], &ZeroHeuristic),
            Err(SearchError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_search_each_goal() {
        let mut graph = sample_graph();
        graph.add_vertex("Z").unwrap();

        let results = AStarSearch::new().search_each_goal(&graph, &"A", &["D", "F", "Z"], &ZeroHeuristic);

        assert_eq!(results.len(), 3);
        assert_eq!(results[&"D"].as_ref().unwrap().cost, 4.0);
        assert_eq!(results[&"F"].as_ref().unwrap().path, vec!["A", "B", "D", "F"]);
        assert_eq!(results[&"Z"], Err(SearchError::GoalUnreachable));
    }

    #[test]
    fn test_tracing_and_determinism() {
        let graph = sample_graph();
        let astar = AStarSearch::new();
        let mut tracer = ExecutionTracer::new();

        let first = astar
            .search_with_tracing(&graph, &"A", &"F", &ZeroHeuristic, Some(&mut tracer))
            .unwrap();
        let second = astar.search(&graph, &"A", &"F", &ZeroHeuristic).unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.cost, second.cost);
        assert_eq!(tracer.algorithm(), Some("AStarSearch"));
        assert_eq!(tracer.expansion_order(), vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(tracer.events_of_kind(TraceEventKind::Discover).count(), 6);
        assert_eq!(tracer.events_of_kind(TraceEventKind::GoalReached).count(), 1);
    }

    #[test]
    fn test_tiny_weights_still_relax() {
        let graph = WeightedGraph::from_edges(
            true,
            vec![("A", "C", 3e-10), ("A", "B", 1e-10), ("B", "C", 1e-10)],
        )
        .unwrap();

        let result = AStarSearch::new().search(&graph, &"A", &"C", &ZeroHeuristic).unwrap();
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.cost, 2e-10);
    }

    #[test]
    fn test_equal_f_prefers_lower_g() {
        // B is pushed before A, both at f = 3; A wins on g = 1
        let graph = WeightedGraph::from_edges(
            true,
            vec![("S", "B", 2.0), ("S", "A", 1.0), ("A", "G", 2.0), ("B", "G", 2.0)],
        )
        .unwrap();
        let heuristic = |v: &&str, _: &&str| match *v {
            "A" => 2.0,
            "B" => 1.0,
            _ => 0.0,
        };
        let mut tracer = ExecutionTracer::new();

        let result = AStarSearch::new()
            .search_with_tracing(&graph, &"S", &"G", &heuristic, Some(&mut tracer))
            .unwrap();

        assert_eq!(tracer.expansion_order(), vec!["S", "A", "B", "G"]);
        assert_eq!(result.path, vec!["S", "A", "G"]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_equal_f_and_g_follow_push_order() {
        let graph = WeightedGraph::from_edges(
            true,
            vec![("S", "B", 1.0), ("S", "A", 1.0), ("A", "G", 1.0), ("B", "G", 1.0)],
        )
        .unwrap();
        let mut tracer = ExecutionTracer::new();

        let result = AStarSearch::new()
            .search_with_tracing(&graph, &"S", &"G", &ZeroHeuristic, Some(&mut tracer))
            .unwrap();

        assert_eq!(tracer.expansion_order(), vec!["S", "B", "A", "G"]);
        assert_eq!(result.path, vec!["S", "B", "G"]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_parameters() {
        let mut astar = AStarSearch::new();
        assert_eq!(astar.get_parameter("reopen_closed").as_deref(), Some("true"));

        astar.set_parameter("reopen_closed", "false").unwrap();
        astar.set_parameter("initial_capacity", "256").unwrap();
        assert!(!astar.config().reopen_closed);
        assert_eq!(astar.get_parameter("initial_capacity").as_deref(), Some("256"));

        assert!(astar.set_parameter("validate_heuristic", "maybe").is_err());
        assert!(astar.set_parameter("initial_capacity", "999999999999").is_err());
        assert!(matches!(
            astar.set_parameter("max_depth", "3"),
            Err(SearchError::InvalidParameter { .. })
        ));
        assert_eq!(astar.config().initial_capacity, 256);
    }

    #[test]
    fn test_result_serializes() {
        let graph = sample_graph();
        let result = AStarSearch::new().search(&graph, &"A", &"D", &ZeroHeuristic).unwrap();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"path\":[\"A\",\"B\",\"D\"]"));
        assert!(json.contains("\"cost\":4.0"));
    }
}
