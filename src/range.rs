//! Axis-aligned box reporting.

use crate::compare::{axis_less, next_axis};
use crate::geometry::within;
use crate::point::KdPoint;
use crate::sort::find_pivot;

/// Subranges at or below this size are scanned linearly instead of recursed.
const LINEAR_SCAN_SIZE: usize = 32;

fn range_in<P: KdPoint>(
    points: &[P],
    first: usize,
    last: usize,
    lower: &P,
    upper: &P,
    axis: usize,
    out: &mut Vec<usize>,
) {
    if last - first > LINEAR_SCAN_SIZE {
        let pivot = first + find_pivot(&points[first..last], axis);
        let next = next_axis::<P>(axis);
        if within(&points[pivot], lower, upper) {
            out.push(pivot);
        }
        if !axis_less(&points[pivot], lower, axis) {
            range_in(points, first, pivot, lower, upper, next, out);
        }
        if axis_less(&points[pivot], upper, axis) {
            range_in(points, pivot + 1, last, lower, upper, next, out);
        }
    } else {
        for i in first..last {
            if within(&points[i], lower, upper) {
                out.push(i);
            }
        }
    }
}

/// Indices of all elements inside the componentwise half-open box
/// `[lower, upper)`.
///
/// Emission order is the traversal order: each subtree reports its pivot
/// first, then its left half, then its right half.
pub fn kd_range_query<P: KdPoint>(points: &[P], lower: &P, upper: &P) -> Vec<usize> {
    let mut out = Vec::new();
    range_in(points, 0, points.len(), lower, upper, 0, &mut out);
    out
}
