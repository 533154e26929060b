//! Algorithm catalogue
//!
//! Static descriptions of every algorithm in the crate, for menus, docs and
//! visualization front-ends. Entries are built from the [`Algorithm`] impls
//! themselves so metadata has a single source.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::array_search::{
    BinarySearch, ExponentialSearch, InterpolationSearch, JumpSearch, LinearSearch,
};
use crate::algorithm::path_finding::{AStarSearch, BreadthFirstSearch, DepthFirstSearch};
use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity, AlgorithmId};

/// Serializable description of one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: String,
    pub category: AlgorithmCategory,
    pub description: String,
    pub best_for: String,
    pub complexity: AlgorithmComplexity,
    pub operations: Vec<String>,
}

impl AlgorithmInfo {
    pub fn from_algorithm(algorithm: &dyn Algorithm) -> Self {
        Self {
            id: algorithm.id(),
            name: algorithm.name().to_owned(),
            category: algorithm.category(),
            description: algorithm.description().to_owned(),
            best_for: algorithm.best_for().to_owned(),
            complexity: algorithm.complexity(),
            operations: algorithm.operations().iter().map(|op| (*op).to_owned()).collect(),
        }
    }
}

/// One default-configured instance of every algorithm, array searches first
pub fn algorithms() -> Vec<Box<dyn Algorithm>> {
    vec![
        Box::new(LinearSearch::new()),
        Box::new(BinarySearch::new()),
        Box::new(JumpSearch::new()),
        Box::new(InterpolationSearch::new()),
        Box::new(ExponentialSearch::new()),
        Box::new(DepthFirstSearch::new()),
        Box::new(BreadthFirstSearch::new()),
        Box::new(AStarSearch::new()),
    ]
}

pub fn catalog() -> Vec<AlgorithmInfo> {
    algorithms()
        .iter()
        .map(|algorithm| AlgorithmInfo::from_algorithm(algorithm.as_ref()))
        .collect()
}

/// Finds an entry by name, ignoring case and word separators (`_`, `-`,
/// space), so `"astar_search"` finds `AStarSearch`
pub fn lookup(name: &str) -> Option<AlgorithmInfo> {
    let wanted = normalize(name);
    catalog().into_iter().find(|info| normalize(&info.name) == wanted)
}

pub fn by_category(category: AlgorithmCategory) -> Vec<AlgorithmInfo> {
    catalog()
        .into_iter()
        .filter(|info| info.category == category)
        .collect()
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
