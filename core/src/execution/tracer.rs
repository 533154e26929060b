//! Step-by-step execution tracing for graph searches
//!
//! A tracer is owned by the caller and lent to one search call through the
//! `*_with_tracing` entry points. It records what the search did to its
//! frontier, in order, so a visualization layer can replay the run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

/// What happened to a vertex at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEventKind {
    /// Vertex placed on the frontier
    Discover,
    /// Vertex taken off the frontier and its edges examined
    Expand,
    /// A cheaper path to the vertex was found
    Relax,
    /// A finalized vertex went back on the frontier
    Reopen,
    /// The goal was taken off the frontier
    GoalReached,
    /// Frontier ran empty
    Exhausted,
}

/// Single recorded step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent<V> {
    pub step: usize,
    pub kind: TraceEventKind,
    /// Absent only for [`TraceEventKind::Exhausted`]
    pub vertex: Option<V>,
    /// Accumulated path cost, for weighted searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Ordered record of a single search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionTracer<V> {
    algorithm: Option<String>,
    events: Vec<TraceEvent<V>>,
    capacity: Option<usize>,
    dropped: usize,
    next_step: usize,
}

impl<V: Clone> ExecutionTracer<V> {
    pub fn new() -> Self {
        Self {
            algorithm: None,
            events: Vec::new(),
            capacity: None,
            dropped: 0,
            next_step: 0,
        }
    }

    /// Tracer that keeps at most `capacity` events; later ones are only counted
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    /// Marks the start of a run by `algorithm`
    pub fn begin(&mut self, algorithm: &str) {
        self.algorithm = Some(algorithm.to_owned());
    }

    pub fn record(&mut self, kind: TraceEventKind, vertex: &V) {
        self.push(kind, Some(vertex.clone()), None);
    }

    pub fn record_cost(&mut self, kind: TraceEventKind, vertex: &V, cost: f64) {
        self.push(kind, Some(vertex.clone()), Some(cost));
    }

    pub fn record_exhausted(&mut self) {
        self.push(TraceEventKind::Exhausted, None, None);
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    pub fn events(&self) -> &[TraceEvent<V>] {
        &self.events
    }

    pub fn events_of_kind(&self, kind: TraceEventKind) -> impl Iterator<Item = &TraceEvent<V>> {
        self.events.iter().filter(move |event| event.kind == kind)
    }

    /// Vertices in the order they were expanded
    pub fn expansion_order(&self) -> Vec<V> {
        self.events_of_kind(TraceEventKind::Expand)
            .filter_map(|event| event.vertex.clone())
            .collect()
    }

    /// Number of events that did not fit under the capacity limit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn push(&mut self, kind: TraceEventKind, vertex: Option<V>, cost: Option<f64>) {
        let step = self.next_step;
        self.next_step += 1;

        if self.capacity.is_some_and(|cap| self.events.len() >= cap) {
            self.dropped += 1;
            return;
        }
        self.events.push(TraceEvent {
            step,
            kind,
            vertex,
            cost,
        });
    }
}

impl<V: Clone + Serialize> ExecutionTracer<V> {
    /// Exports the run as JSON for an external visualizer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<V: Clone> Default for ExecutionTracer<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Records into an optional tracer; keeps call sites free of `if let`
pub(crate) trait TraceSink<V> {
    fn note(&mut self, kind: TraceEventKind, vertex: &V);
    fn note_cost(&mut self, kind: TraceEventKind, vertex: &V, cost: f64);
    fn note_exhausted(&mut self);
}

impl<V: Clone> TraceSink<V> for Option<&mut ExecutionTracer<V>> {
    fn note(&mut self, kind: TraceEventKind, vertex: &V) {
        if let Some(tracer) = self {
            tracer.record(kind, vertex);
        }
    }

    fn note_cost(&mut self, kind: TraceEventKind, vertex: &V, cost: f64) {
        if let Some(tracer) = self {
            tracer.record_cost(kind, vertex, cost);
        }
    }

    fn note_exhausted(&mut self) {
        if let Some(tracer) = self {
            tracer.record_exhausted();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut tracer = ExecutionTracer::new();
        tracer.begin("BreadthFirstSearch");
        tracer.record(TraceEventKind::Discover, &"a");
        tracer.record(TraceEventKind::Expand, &"a");
        tracer.record_cost(TraceEventKind::Relax, &"b", 2.0);
        tracer.record_exhausted();

        assert_eq!(tracer.algorithm(), Some("BreadthFirstSearch"));
        assert_eq!(tracer.len(), 4);
        let steps: Vec<usize> = tracer.events().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3]);
        assert_eq!(tracer.expansion_order(), vec!["a"]);
        assert_eq!(tracer.events()[2].cost, Some(2.0));
        assert_eq!(tracer.events()[3].vertex, None);
    }

    #[test]
    fn test_capacity_limit_counts_drops() {
        let mut tracer = ExecutionTracer::with_capacity_limit(2);
        for v in 0..5 {
            tracer.record(TraceEventKind::Expand, &v);
        }

        assert_eq!(tracer.len(), 2);
        assert_eq!(tracer.dropped(), 3);
    }

    #[test]
    fn test_json_export() {
        let mut tracer = ExecutionTracer::new();
        tracer.record(TraceEventKind::GoalReached, &7u32);

        let json = tracer.to_json().unwrap();
        assert!(json.contains("\"kind\":\"goal_reached\""));
        assert!(json.contains("\"vertex\":7"));
        assert!(!json.contains("\"cost\""));
    }

    #[test]
    fn test_optional_sink_is_noop_when_absent() {
        let mut sink: Option<&mut ExecutionTracer<u8>> = None;
        sink.note(TraceEventKind::Expand, &1);
        sink.note_exhausted();

        let mut tracer = ExecutionTracer::new();
        let mut sink = Some(&mut tracer);
        sink.note_cost(TraceEventKind::Relax, &1u8, 0.5);
        assert_eq!(tracer.len(), 1);
    }
}
