//! Graph storage and the indexed heap behind A*
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod priority_queue;

pub use self::graph::{CoordinateSource, Edge, EdgeWeight, GraphError, Position, SearchGraph, WeightedGraph};
pub use self::priority_queue::{HeapOperation, IndexedPriorityQueue, PriorityQueueError};
