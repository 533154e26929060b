//! Heuristic functions for A*
//!
//! A heuristic is a single method, `estimate(from, to)`, returning a
//! non-negative guess of the remaining cost. Any `Fn(&V, &V) -> f64` closure
//! qualifies. A* stays optimal only if the estimate never exceeds the true
//! remaining cost (admissibility); this is a contract on the caller and is
//! not checked at runtime.
//!
//! The geometric heuristics read coordinates from a [`CoordinateSource`]:
//! either the graph itself (vertices added with `add_vertex_at`) or the
//! vertex value ([`Intrinsic`] over [`Planar`] vertex types). A vertex
//! without coordinates yields `NaN`, which A* rejects as an invalid estimate.

use crate::data_structures::graph::{CoordinateSource, Position};

/// Admissible estimate of the remaining cost between two vertices
pub trait Heuristic<V: ?Sized> {
    fn estimate(&self, from: &V, to: &V) -> f64;

    /// Short label used in algorithm descriptions and logs
    fn describe(&self) -> String {
        "custom".to_owned()
    }
}

impl<V: ?Sized, F> Heuristic<V> for F
where
    F: Fn(&V, &V) -> f64,
{
    fn estimate(&self, from: &V, to: &V) -> f64 {
        self(from, to)
    }
}

/// Vertex types that carry their own planar coordinates
pub trait Planar {
    fn position(&self) -> Position;
}

impl Planar for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl Planar for (f64, f64) {
    fn position(&self) -> Position {
        Position::new(self.0, self.1)
    }
}

impl Planar for (f32, f32) {
    fn position(&self) -> Position {
        Position::new(f64::from(self.0), f64::from(self.1))
    }
}

impl Planar for (i32, i32) {
    fn position(&self) -> Position {
        Position::new(f64::from(self.0), f64::from(self.1))
    }
}

impl Planar for (i64, i64) {
    fn position(&self) -> Position {
        Position::new(self.0 as f64, self.1 as f64)
    }
}

impl Planar for (usize, usize) {
    fn position(&self) -> Position {
        Position::new(self.0 as f64, self.1 as f64)
    }
}

// scalar vertices lie on the x axis, so both distances reduce to `|a - b|`
macro_rules! impl_planar_scalar {
    ($($t:ty),*) => {
        $(
            impl Planar for $t {
                fn position(&self) -> Position {
                    Position::new(*self as f64, 0.0)
                }
            }
        )*
    };
}

impl_planar_scalar!(i32, i64, u32, u64, usize, f32, f64);

/// Coordinate source for [`Planar`] vertices: the vertex is its own position
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsic;

impl<V: Planar + ?Sized> CoordinateSource<V> for Intrinsic {
    fn coordinates(&self, vertex: &V) -> Option<Position> {
        Some(vertex.position())
    }
}

/// `|x1 - x2| + |y1 - y2|`; admissible on 4-connected unit grids
#[derive(Debug, Clone, Copy)]
pub struct Manhattan<C> {
    source: C,
}

impl<C> Manhattan<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }
}

impl Manhattan<Intrinsic> {
    pub fn intrinsic() -> Self {
        Self::new(Intrinsic)
    }
}

impl<V: ?Sized, C: CoordinateSource<V>> Heuristic<V> for Manhattan<C> {
    fn estimate(&self, from: &V, to: &V) -> f64 {
        match (self.source.coordinates(from), self.source.coordinates(to)) {
            (Some(a), Some(b)) => a.manhattan_distance_to(&b),
            _ => f64::NAN,
        }
    }

    fn describe(&self) -> String {
        "manhattan".to_owned()
    }
}

/// Straight-line distance; admissible whenever edge weights are at least the
/// distance between their endpoints
#[derive(Debug, Clone, Copy)]
pub struct Euclidean<C> {
    source: C,
}

impl<C> Euclidean<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }
}

impl Euclidean<Intrinsic> {
    pub fn intrinsic() -> Self {
        Self::new(Intrinsic)
    }
}

impl<V: ?Sized, C: CoordinateSource<V>> Heuristic<V> for Euclidean<C> {
    fn estimate(&self, from: &V, to: &V) -> f64 {
        match (self.source.coordinates(from), self.source.coordinates(to)) {
            (Some(a), Some(b)) => a.distance_to(&b),
            _ => f64::NAN,
        }
    }

    fn describe(&self) -> String {
        "euclidean".to_owned()
    }
}

/// Always zero; reduces A* to Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<V: ?Sized> Heuristic<V> for ZeroHeuristic {
    fn estimate(&self, _from: &V, _to: &V) -> f64 {
        0.0
    }

    fn describe(&self) -> String {
        "zero".to_owned()
    }
}

/// `h(v) = min over goals of inner(v, goal)`
///
/// Admissible for every goal at once whenever `inner` is admissible per goal,
/// which is what a nearest-of-many-goals search needs. The `to` argument is
/// ignored.
#[derive(Debug)]
pub struct MinOverGoals<'a, V, H: ?Sized> {
    inner: &'a H,
    goals: &'a [V],
}

impl<'a, V, H: ?Sized> MinOverGoals<'a, V, H> {
    pub fn new(inner: &'a H, goals: &'a [V]) -> Self {
        Self { inner, goals }
    }
}

impl<V, H: Heuristic<V> + ?Sized> Heuristic<V> for MinOverGoals<'_, V, H> {
    fn estimate(&self, from: &V, _to: &V) -> f64 {
        self.goals
            .iter()
            .map(|goal| self.inner.estimate(from, goal))
            .fold(f64::INFINITY, |best, h| if h < best || h.is_nan() { h } else { best })
    }

    fn describe(&self) -> String {
        format!("min over {} goals of {}", self.goals.len(), self.inner.describe())
    }
}
