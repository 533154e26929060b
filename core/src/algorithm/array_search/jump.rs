//! Jump Search
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::array_search::OrderedSearch;
use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity};

/// Block-skipping search over sorted data
///
/// Jumps ahead `step` elements at a time until a block ends at or past the
/// target, then scans that block linearly. Every block before it ends below
/// the target, so the scan yields the first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpSearch;

impl JumpSearch {
    pub fn new() -> Self {
        Self
    }

    /// Jump search with a step of `⌊√n⌋`
    pub fn search<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search_with_custom_step(data, target, Self::optimal_step_size(data.len()))
    }

    /// Jump search with a caller-chosen block size; `step == 0` finds nothing
    pub fn search_with_custom_step<T: Ord>(&self, data: &[T], target: &T, step: usize) -> Option<usize> {
        if step == 0 || data.is_empty() {
            return None;
        }

        let len = data.len();
        let mut block_start = 0;
        let mut block_end = step.min(len);
        while data[block_end - 1] < *target {
            block_start = block_end;
            if block_start >= len {
                return None;
            }
            block_end = block_end.saturating_add(step).min(len);
        }

        for (offset, element) in data[block_start..block_end].iter().enumerate() {
            if element == target {
                return Some(block_start + offset);
            }
            if element > target {
                break;
            }
        }
        None
    }

    /// `⌊√n⌋`, never less than 1; balances jumps against the final scan
    pub fn optimal_step_size(len: usize) -> usize {
        let mut root = (len as f64).sqrt() as usize;
        // float sqrt can be off by one for very large `len`
        while root > 0 && root.saturating_mul(root) > len {
            root -= 1;
        }
        while (root + 1).saturating_mul(root + 1) <= len {
            root += 1;
        }
        root.max(1)
    }
}

impl OrderedSearch for JumpSearch {
    fn find<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search(data, target)
    }
}

impl Algorithm for JumpSearch {
    fn name(&self) -> &'static str {
        "JumpSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::ArraySearch
    }

    fn description(&self) -> &'static str {
        "Skips fixed-size blocks, then scans the block that may hold the target"
    }

    fn best_for(&self) -> &'static str {
        "Medium-sized sorted arrays where backward steps are expensive"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(√n)", "O(1)", "O(1)", "O(√n)", "O(√n)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_with_custom_step", "optimal_step_size"]
    }
}
