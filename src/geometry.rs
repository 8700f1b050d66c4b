//! Distance and box-containment primitives.
//!
//! These are the only geometric predicates the queries use; nearest-neighbor
//! pruning and the ordered searches rely on them agreeing with the build
//! comparators.

use crate::point::KdPoint;
use crate::r#type::{scalar_diff, scalar_dist};

/// Signed difference on axis `i` as an `f64`.
#[inline]
pub fn diff_axis<P: KdPoint>(lhs: &P, rhs: &P, i: usize) -> f64 {
    scalar_diff(lhs.axis(i), rhs.axis(i))
}

/// Absolute distance on axis `i` as an `f64`.
#[inline]
pub fn dist_axis<P: KdPoint>(lhs: &P, rhs: &P, i: usize) -> f64 {
    scalar_dist(lhs.axis(i), rhs.axis(i))
}

/// Sum of squared per-axis differences.
pub fn sum_of_squares<P: KdPoint>(lhs: &P, rhs: &P) -> f64 {
    (0..P::DIM).map(|i| diff_axis(lhs, rhs, i).powi(2)).sum()
}

/// Euclidean distance.
#[inline]
pub fn l2dist<P: KdPoint>(lhs: &P, rhs: &P) -> f64 {
    sum_of_squares(lhs, rhs).sqrt()
}

/// `true` if `lhs` is strictly less than `rhs` on every axis.
pub fn all_less<P: KdPoint>(lhs: &P, rhs: &P) -> bool {
    (0..P::DIM).all(|i| lhs.axis(i) < rhs.axis(i))
}

/// `true` if `lhs` is greater than or equal to `rhs` on every axis.
pub fn none_less<P: KdPoint>(lhs: &P, rhs: &P) -> bool {
    (0..P::DIM).all(|i| lhs.axis(i) >= rhs.axis(i))
}

/// Containment in the componentwise half-open box `[lower, upper)`.
#[inline]
pub fn within<P: KdPoint>(value: &P, lower: &P, upper: &P) -> bool {
    none_less(value, lower) && all_less(value, upper)
}
