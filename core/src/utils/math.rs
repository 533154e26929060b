//! Numeric helpers shared by the weighted search algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Relative tolerance used when comparing accumulated path costs
///
/// A few ULPs, so summation noise is ignored at any magnitude while a
/// genuinely cheaper cost is accepted however small the weights are.
pub const RELATIVE_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Totally ordered wrapper around `f64`
///
/// Uses IEEE 754 `totalOrder`, so it can key a heap. Callers are expected to
/// reject NaN before it reaches a frontier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloatOrd(pub f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Returns true when `a` is smaller than `b` by more than
/// [`RELATIVE_EPSILON`] scaled to the larger magnitude of the two
#[inline]
pub fn strictly_less(a: f64, b: f64) -> bool {
    a < b - RELATIVE_EPSILON * a.abs().max(b.abs())
}
