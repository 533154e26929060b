//! Linear Search
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::array_search::OrderedSearch;
use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity};

/// Element-by-element scan; the only search here that accepts unsorted data
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl LinearSearch {
    pub fn new() -> Self {
        Self
    }

    /// Index of the first element equal to `target`
    pub fn search<T: PartialEq>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search_with_condition(data, |element| element == target)
    }

    /// Index of the first element satisfying `condition`
    pub fn search_with_condition<T, F>(&self, data: &[T], mut condition: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        for (index, element) in data.iter().enumerate() {
            if condition(element) {
                return Some(index);
            }
        }
        None
    }

    /// Every index holding `target`, ascending
    pub fn search_all_occurrences<T: PartialEq>(&self, data: &[T], target: &T) -> Vec<usize> {
        data.iter()
            .enumerate()
            .filter(|(_, element)| *element == target)
            .map(|(index, _)| index)
            .collect()
    }

    /// Sentinel variant: the last slot temporarily holds `target`, so the
    /// scan loop needs no bounds test. The slice is restored before
    /// returning.
    pub fn search_sentinel<T: PartialEq + Clone>(&self, data: &mut [T], target: &T) -> Option<usize> {
        let last_index = data.len().checked_sub(1)?;
        let last = std::mem::replace(&mut data[last_index], target.clone());
        // a target unequal to itself (NaN) would never stop the scan
        if data[last_index] != *target {
            data[last_index] = last;
            return None;
        }

        let mut index = 0;
        while data[index] != *target {
            index += 1;
        }
        data[last_index] = last;

        if index < last_index || data[last_index] == *target {
            Some(index)
        } else {
            None
        }
    }
}

impl OrderedSearch for LinearSearch {
    fn find<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search(data, target)
    }

    fn requires_sorted_input(&self) -> bool {
        false
    }
}

impl Algorithm for LinearSearch {
    fn name(&self) -> &'static str {
        "LinearSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::ArraySearch
    }

    fn description(&self) -> &'static str {
        "Checks every element in turn until the target is found"
    }

    fn best_for(&self) -> &'static str {
        "Small or unsorted data"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(n)", "O(1)", "O(1)", "O(n/2)", "O(n)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_with_condition", "search_all_occurrences", "search_sentinel"]
    }
}
