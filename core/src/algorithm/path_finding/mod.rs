//! Graph search algorithms: DFS, BFS and A*
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod heuristic;
pub mod traversal;

pub use self::astar::{AStarSearch, PathResult, TargetPath};
pub use self::bfs::BreadthFirstSearch;
pub use self::dfs::DepthFirstSearch;
pub use self::heuristic::{
    Euclidean, Heuristic, Intrinsic, Manhattan, MinOverGoals, Planar, ZeroHeuristic,
};
pub use self::traversal::{Frontier, ParentMap, QueueFrontier, StackFrontier, Traversal, VisitedSet};
pub use crate::config::AStarConfig;
