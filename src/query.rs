//! Ordered lookup over a kd-sorted slice.
//!
//! The tree is only partitioned along one rotating axis per level, so these
//! searches are phrased with the componentwise box predicates
//! [`all_less`]/[`none_less`] rather than any total order. A bound therefore
//! returns *an* element satisfying its goal predicate, not the first in
//! lexicographic order.

use std::ops::Range;

use crate::compare::next_axis;
use crate::geometry::{all_less, none_less};
use crate::point::KdPoint;
use crate::sort::find_pivot;

fn lower_bound_in<P: KdPoint>(
    points: &[P],
    first: usize,
    last: usize,
    value: &P,
    axis: usize,
) -> Option<usize> {
    match last - first {
        0 => return None,
        1 => return none_less(&points[first], value).then_some(first),
        _ => {}
    }
    let pivot = first + find_pivot(&points[first..last], axis);
    let next = next_axis::<P>(axis);
    if none_less(&points[pivot], value) {
        // the pivot already qualifies; the left subtree can only improve on it
        return lower_bound_in(points, first, pivot, value, next).or(Some(pivot));
    }
    if all_less(&points[pivot], value) {
        return lower_bound_in(points, pivot + 1, last, value, next);
    }
    lower_bound_in(points, first, pivot, value, next)
        .or_else(|| lower_bound_in(points, pivot + 1, last, value, next))
}

fn upper_bound_in<P: KdPoint>(
    points: &[P],
    first: usize,
    last: usize,
    value: &P,
    axis: usize,
) -> Option<usize> {
    match last - first {
        0 => return None,
        1 => return all_less(value, &points[first]).then_some(first),
        _ => {}
    }
    let pivot = first + find_pivot(&points[first..last], axis);
    let next = next_axis::<P>(axis);
    if all_less(value, &points[pivot]) {
        return upper_bound_in(points, first, pivot, value, next).or(Some(pivot));
    }
    if none_less(value, &points[pivot]) {
        return upper_bound_in(points, pivot + 1, last, value, next);
    }
    upper_bound_in(points, first, pivot, value, next)
        .or_else(|| upper_bound_in(points, pivot + 1, last, value, next))
}

/// Find an element that is greater than or equal to `value` on every axis.
pub fn kd_lower_bound<P: KdPoint>(points: &[P], value: &P) -> Option<usize> {
    lower_bound_in(points, 0, points.len(), value, 0)
}

/// Find an element that is strictly greater than `value` on every axis.
pub fn kd_upper_bound<P: KdPoint>(points: &[P], value: &P) -> Option<usize> {
    upper_bound_in(points, 0, points.len(), value, 0)
}

/// Exact-match membership: some element equals `value` on every axis.
pub fn kd_binary_search<P: KdPoint>(points: &[P], value: &P) -> bool {
    match kd_lower_bound(points, value) {
        Some(i) => none_less(value, &points[i]),
        None => false,
    }
}

/// The pair of [`kd_lower_bound`] and [`kd_upper_bound`] as an index range,
/// with `points.len()` standing in for a missing bound.
pub fn kd_equal_range<P: KdPoint>(points: &[P], value: &P) -> Range<usize> {
    let start = kd_lower_bound(points, value).unwrap_or(points.len());
    let end = kd_upper_bound(points, value).unwrap_or(points.len());
    start..end
}
