//! Exponential Search
//!
//! Doubles an upper bound until it passes the target, then binary-searches
//! the last doubling interval. Cost depends on the target's position rather
//! than the sequence length, which is what makes the unbounded form work.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use log::trace;

use crate::algorithm::array_search::binary::first_in_range;
use crate::algorithm::array_search::OrderedSearch;
use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialSearch;

impl ExponentialSearch {
    pub fn new() -> Self {
        Self
    }

    /// Index of the first element equal to `target` in sorted `data`
    pub fn search<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        let first = data.first()?;
        if first == target {
            return Some(0);
        }

        let mut bound = 1;
        while bound < data.len() && data[bound] < *target {
            bound = bound.saturating_mul(2);
        }
        // data[bound / 2] < target, so the first occurrence lies after it
        first_in_range(data, target, bound / 2 + 1, bound.saturating_add(1))
    }

    /// Search over a sequence of unknown length
    ///
    /// `probe(i)` returns the element at `i`, or `None` past the end. Indices
    /// above `max_index` are never probed.
    pub fn search_unbounded<T, F>(&self, mut probe: F, target: &T, max_index: usize) -> Option<usize>
    where
        T: Ord,
        F: FnMut(usize) -> Option<T>,
    {
        match probe(0)?.cmp(target) {
            Ordering::Equal => return Some(0),
            Ordering::Greater => return None,
            Ordering::Less => {}
        }

        // `below` always indexes an element known to be < target
        let mut below = 0;
        let mut bound = 1;
        while bound <= max_index {
            match probe(bound) {
                Some(value) if value < *target => {
                    below = bound;
                    if bound == max_index {
                        break;
                    }
                    bound = bound.saturating_mul(2);
                }
                _ => break,
            }
        }
        if below == max_index {
            // everything up to the limit is below the target
            return None;
        }
        let mut high = bound.min(max_index);
        trace!("unbounded exponential search narrowed to ({}, {}]", below, high);

        let mut low = below + 1;
        let mut found = None;
        while low <= high {
            let mid = low + (high - low) / 2;
            match probe(mid).map(|value| value.cmp(target)) {
                Some(Ordering::Less) => match mid.checked_add(1) {
                    Some(next) => low = next,
                    None => break,
                },
                Some(Ordering::Equal) => {
                    found = Some(mid);
                    high = mid - 1;
                }
                // past the end counts as greater
                Some(Ordering::Greater) | None => high = mid - 1,
            }
        }
        found
    }
}

impl OrderedSearch for ExponentialSearch {
    fn find<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        self.search(data, target)
    }
}

impl Algorithm for ExponentialSearch {
    fn name(&self) -> &'static str {
        "ExponentialSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::ArraySearch
    }

    fn description(&self) -> &'static str {
        "Doubles a bound until it passes the target, then binary-searches the range"
    }

    fn best_for(&self) -> &'static str {
        "Unbounded or streamed sorted sequences, targets near the front"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(log i)", "O(1)", "O(1)", "O(log n)", "O(log n)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "search_unbounded"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search() {
        let data = [2, 3, 4, 10, 40, 41, 42, 80, 99];
        let search = ExponentialSearch::new();

        assert_eq!(search.search(&data, &2), Some(0));
        assert_eq!(search.search(&data, &10), Some(3));
        assert_eq!(search.search(&data, &41), Some(5));
        assert_eq!(search.search(&data, &99), Some(8));
        assert_eq!(search.search(&data, &5), None);
        assert_eq!(search.search(&data, &100), None);
        assert_eq!(search.search::<i32>(&[], &1), None);
    }

    #[test]
    fn test_search_returns_first_of_duplicates() {
        let data = [1, 5, 5, 5, 5, 5, 5, 5, 9];
        assert_eq!(ExponentialSearch::new().search(&data, &5), Some(1));
    }

    #[test]
    fn test_unbounded_over_generator() {
        let search = ExponentialSearch::new();
        let squares = |i: usize| Some(i * i);

        assert_eq!(search.search_unbounded(squares, &0, 1_000), Some(0));
        assert_eq!(search.search_unbounded(squares, &144, 1_000), Some(12));
        assert_eq!(search.search_unbounded(squares, &145, 1_000), None);
        // 500^2 lies beyond the probing limit
        assert_eq!(search.search_unbounded(squares, &250_000, 100), None);
    }

    #[test]
    fn test_unbounded_respects_end_of_sequence() {
        let data = vec![1, 3, 5, 7, 9, 11];
        let probe = |i: usize| data.get(i).copied();
        let search = ExponentialSearch::new();

        assert_eq!(search.search_unbounded(probe, &11, usize::MAX), Some(5));
        assert_eq!(search.search_unbounded(probe, &7, usize::MAX), Some(3));
        assert_eq!(search.search_unbounded(probe, &12, usize::MAX), None);
        assert_eq!(search.search_unbounded(probe, &0, usize::MAX), None);
        assert_eq!(search.search_unbounded(|_| None::<i32>, &0, 10), None);
    }

    #[test]
    fn test_unbounded_stops_at_usize_max() {
        let search = ExponentialSearch::new();
        let mut probes = 0;
        let always_below = |_: usize| {
            probes += 1;
            Some(0u8)
        };

        assert_eq!(search.search_unbounded(always_below, &1, usize::MAX), None);
        assert!(probes <= usize::BITS as usize + 2);

        let identity = |i: usize| Some(i);
        assert_eq!(search.search_unbounded(identity, &usize::MAX, usize::MAX), Some(usize::MAX));
        assert_eq!(search.search_unbounded(identity, &(usize::MAX - 1), usize::MAX), Some(usize::MAX - 1));
    }

    #[test]
    fn test_unbounded_never_probes_past_limit() {
        let mut highest = 0;
        let probe = |i: usize| {
            highest = highest.max(i);
            Some(i)
        };
        let found = ExponentialSearch::new().search_unbounded(probe, &37, 40);

        assert_eq!(found, Some(37));
        assert!(highest <= 40);
    }
}
