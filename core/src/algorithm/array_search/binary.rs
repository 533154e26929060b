//! Binary Search
//!
//! All three variants work on a half-open window `[low, high)` so no index
//! arithmetic can underflow.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use crate::algorithm::array_search::OrderedSearch;
use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity};

/// Halving search over sorted data
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl BinarySearch {
    pub fn new() -> Self {
        Self
    }

    /// Index of some element equal to `target`
    pub fn search<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        let (mut low, mut high) = (0, data.len());
        while low < high {
            let mid = low + (high - low) / 2;
            match data[mid].cmp(target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }

    /// Lowest index holding `target`
    pub fn search_first_occurrence<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        first_in_range(data, target, 0, data.len())
    }

    /// Highest index holding `target`
    pub fn search_last_occurrence<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        let (mut low, mut high) = (0, data.len());
        while low < high {
            let mid = low + (high - low) / 2;
            if data[mid] <= *target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        // `low` is one past the last element <= target
        let candidate = low.checked_sub(1)?;
        (data[candidate] == *target).then_some(candidate)
    }
}

/// Lower-bound search restricted to `data[low..high]`
pub(crate) fn first_in_range<T: Ord>(data: &[T], target: &T, mut low: usize, high: usize) -> Option<usize> {
    let end = high.min(data.len());
    let mut high = end;
    while low < high {
        let mid = low + (high - low) / 2;
        if data[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    (low < end && data[low] == *target).then_some(low)
}

impl OrderedSearch for BinarySearch {
    fn find<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search_first_occurrence(data, target)
    }
}

impl Algorithm for BinarySearch {
    fn name(&self) -> &'static str {
        "BinarySearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::ArraySearch
    }

    fn description(&self) -> &'static str {
        "Repeatedly halves the search window of a sorted array"
    }

    fn best_for(&self) -> &'static str {
        "Large sorted arrays"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(log n)", "O(1)", "O(1)", "O(log n)", "O(log n)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_first_occurrence", "search_last_occurrence"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search() {
        let data = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
        let binary = BinarySearch::new();

        assert_eq!(binary.search(&data, &15), Some(7));
        assert_eq!(binary.search(&data, &1), Some(0));
        assert_eq!(binary.search(&data, &19), Some(9));
        assert_eq!(binary.search(&data, &4), None);
        assert_eq!(binary.search(&data, &20), None);
        assert_eq!(binary.search(&data, &0), None);
        assert_eq!(binary.search::<i32>(&[], &1), None);
    }

    #[test]
    fn test_first_and_last_occurrence() {
        let data = [1, 2, 2, 2, 3, 4, 5, 5, 5, 6];
        let binary = BinarySearch::new();

        assert_eq!(binary.search_first_occurrence(&data, &2), Some(1));
        assert_eq!(binary.search_last_occurrence(&data, &2), Some(3));
        assert_eq!(binary.search_first_occurrence(&data, &5), Some(6));
        assert_eq!(binary.search_last_occurrence(&data, &5), Some(8));
        assert_eq!(binary.search_first_occurrence(&data, &1), Some(0));
        assert_eq!(binary.search_last_occurrence(&data, &6), Some(9));
        assert_eq!(binary.search_first_occurrence(&data, &0), None);
        assert_eq!(binary.search_last_occurrence(&data, &0), None);
        assert_eq!(binary.search_last_occurrence(&data, &7), None);
    }

    #[test]
    fn test_range_helper_clamps() {
        let data = [1, 4, 4, 9];
        assert_eq!(first_in_range(&data, &4, 0, 100), Some(1));
        assert_eq!(first_in_range(&data, &4, 2, 4), Some(2));
        assert_eq!(first_in_range(&data, &9, 0, 3), None);
        assert_eq!(first_in_range(&data, &10, 0, 4), None);
    }

    #[test]
    fn test_strings() {
        let words = ["ant", "bee", "cat", "dog"];
        assert_eq!(BinarySearch::new().search(&words, &"cat"), Some(2));
    }
}
