//! Interpolation Search
//!
//! Probes where the target would sit if values grew linearly between the
//! window bounds. Uniform data converges in `O(log log n)` probes; skewed
//! data degrades towards a linear scan, but every probe is clamped into the
//! window so the search always terminates.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::traits::{Algorithm, AlgorithmCategory, AlgorithmComplexity};

/// Numeric element that can be placed on a line
pub trait Interpolate: PartialOrd + Copy {
    fn as_f64(self) -> f64;
}

macro_rules! impl_interpolate {
    ($($ty:ty),*) => {
        $(
            impl Interpolate for $ty {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_interpolate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Position-estimating search over sorted numeric data
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpolationSearch;

impl InterpolationSearch {
    pub fn new() -> Self {
        Self
    }

    /// Index of some element equal to `target`
    pub fn search<T: Interpolate>(&self, data: &[T], target: T) -> Option<usize> {
        let mut low = 0;
        let mut high = data.len().checked_sub(1)?;

        while low <= high && target >= data[low] && target <= data[high] {
            if data[low] == data[high] {
                // flat window: interpolating would divide by zero
                return (data[low] == target).then_some(low);
            }

            let span = data[high].as_f64() - data[low].as_f64();
            let ratio = (target.as_f64() - data[low].as_f64()) / span;
            let offset = (ratio * (high - low) as f64) as usize;
            let probe = (low + offset).min(high);

            if data[probe] == target {
                return Some(probe);
            }
            if data[probe] < target {
                low = probe + 1;
            } else {
                high = probe.checked_sub(1)?;
            }
        }
        None
    }

    /// True when every gap between neighbours is within `tolerance` (relative
    /// to the mean gap) of the mean gap
    ///
    /// Fewer than three elements are trivially uniform.
    pub fn is_uniformly_distributed<T: Interpolate>(&self, data: &[T], tolerance: f64) -> bool {
        if data.len() < 3 {
            return true;
        }

        let gaps: Vec<f64> = data
            .windows(2)
            .map(|pair| pair[1].as_f64() - pair[0].as_f64())
            .collect();
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        let allowed = tolerance.max(0.0) * mean.abs();

        gaps.iter().all(|gap| (gap - mean).abs() <= allowed)
    }
}

impl Algorithm for InterpolationSearch {
    fn name(&self) -> &'static str {
        "InterpolationSearch"
    }

    fn category(&self) -> AlgorithmCategory {
        AlgorithmCategory::ArraySearch
    }

    fn description(&self) -> &'static str {
        "Estimates the target position by linear interpolation between the bounds"
    }

    fn best_for(&self) -> &'static str {
        "Sorted, uniformly distributed numeric data"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity::new("O(log log n)", "O(1)", "O(1)", "O(log log n)", "O(n)")
    }

    fn operations(&self) -> &'static [&'static str] {
        &["search", "is_uniformly_distributed"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_data() {
        let data: Vec<i32> = (1..=100).collect();
        let search = InterpolationSearch::new();

        assert_eq!(search.search(&data, 50), Some(49));
        assert_eq!(search.search(&data, 1), Some(0));
        assert_eq!(search.search(&data, 100), Some(99));
        assert_eq!(search.search(&data, 0), None);
        assert_eq!(search.search(&data, 101), None);
    }

    #[test]
    fn test_skewed_data() {
        let data: Vec<u64> = (0..20).map(|i| 1u64 << i).collect();
        let search = InterpolationSearch::new();

        assert_eq!(search.search(&data, 64), Some(6));
        assert_eq!(search.search(&data, 1), Some(0));
        assert_eq!(search.search(&data, 1 << 19), Some(19));
        assert_eq!(search.search(&data, 65), None);
    }

    #[test]
    fn test_flat_and_tiny_inputs() {
        let search = InterpolationSearch::new();

        assert_eq!(search.search(&[7, 7, 7, 7], 7), Some(0));
        assert_eq!(search.search(&[7, 7, 7, 7], 8), None);
        assert_eq!(search.search(&[5], 5), Some(0));
        assert_eq!(search.search::<i32>(&[], 5), None);
    }

    #[test]
    fn test_floats() {
        let data = [0.5, 1.5, 2.25, 3.0, 10.0];
        let search = InterpolationSearch::new();

        assert_eq!(search.search(&data, 2.25), Some(2));
        assert_eq!(search.search(&data, 2.5), None);
        assert_eq!(search.search(&data, f64::NAN), None);
    }

    #[test]
    fn test_uniformity_check() {
        let search = InterpolationSearch::new();

        assert!(search.is_uniformly_distributed(&[10, 20, 30, 40, 50], 0.1));
        assert!(search.is_uniformly_distributed(&[10, 21, 30, 41, 50], 0.15));
        assert!(!search.is_uniformly_distributed(&[1, 2, 4, 8, 16, 32], 0.1));
        assert!(search.is_uniformly_distributed(&[3, 3, 3], 0.0));
        assert!(search.is_uniformly_distributed(&[1, 100], 0.0));
    }
}
