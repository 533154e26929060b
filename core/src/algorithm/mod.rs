//! CHRONOS search algorithms: array searches, graph searches and the
//! catalogue describing them
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod array_search;
pub mod catalog;
pub mod path_finding;
pub mod traits;

pub use self::catalog::{by_category, catalog, lookup, AlgorithmInfo};
pub use self::traits::*;
