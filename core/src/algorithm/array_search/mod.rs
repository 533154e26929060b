//! Index searches over slices
//!
//! Linear search works on any slice; the others assume ascending order. On
//! unsorted input they may miss a present target, but a returned index
//! always holds an element equal to the target.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod binary;
pub mod exponential;
pub mod interpolation;
pub mod jump;
pub mod linear;

pub use self::binary::BinarySearch;
pub use self::exponential::ExponentialSearch;
pub use self::interpolation::{Interpolate, InterpolationSearch};
pub use self::jump::JumpSearch;
pub use self::linear::LinearSearch;

use crate::algorithm::traits::Algorithm;

/// Comparison-based search over a totally ordered slice
///
/// Lets callers and tests swap strategies over the same input. For sorted
/// input every implementation returns the first index holding `target`.
pub trait OrderedSearch: Algorithm {
    fn find<T: Ord>(&self, data: &[T], target: &T) -> Option<usize>;

    /// Whether `find` relies on `data` being sorted ascending
    fn requires_sorted_input(&self) -> bool {
        true
    }
}
