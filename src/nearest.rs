//! Nearest-neighbor search.
//!
//! Both searches descend into the subtree on the probe's side of the splitting
//! axis first, then visit the far side only when the axis-only distance to the
//! pivot could still beat the incumbent. The Euclidean metric and the per-axis
//! distance must come from the same primitives ([`l2dist`], [`dist_axis`]) or
//! the pruning bound is wrong.

use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::compare::{axis_less, next_axis};
use crate::geometry::{dist_axis, l2dist};
use crate::point::KdPoint;
use crate::sort::find_pivot;

fn nearest_in<P: KdPoint>(
    points: &[P],
    first: usize,
    last: usize,
    value: &P,
    axis: usize,
) -> Option<usize> {
    match last - first {
        0 => return None,
        1 => return Some(first),
        _ => {}
    }
    let pivot = first + find_pivot(&points[first..last], axis);
    let next = next_axis::<P>(axis);
    let go_left = axis_less(value, &points[pivot], axis);

    let near = if go_left {
        nearest_in(points, first, pivot, value, next)
    } else {
        nearest_in(points, pivot + 1, last, value, next)
    };

    // the near-side candidate replaces the pivot only when strictly closer
    let mut best = pivot;
    let mut min_dist = l2dist(&points[pivot], value);
    if let Some(i) = near {
        let d = l2dist(&points[i], value);
        if d < min_dist {
            best = i;
            min_dist = d;
        }
    }

    if dist_axis(value, &points[pivot], axis) < min_dist {
        let far = if go_left {
            nearest_in(points, pivot + 1, last, value, next)
        } else {
            nearest_in(points, first, pivot, value, next)
        };
        if let Some(i) = far {
            if l2dist(&points[i], value) < min_dist {
                best = i;
            }
        }
    }
    Some(best)
}

/// Index of the element closest to `value` under [`l2dist`], or `None` for an
/// empty slice. Ties go to the candidate discovered first.
pub fn kd_nearest_neighbor<P: KdPoint>(points: &[P], value: &P) -> Option<usize> {
    nearest_in(points, 0, points.len(), value, 0)
}

/// Bounded max-heap of the best `capacity` candidates seen so far.
struct NBest {
    capacity: usize,
    heap: BinaryHeap<(OrderedFloat<f64>, usize)>,
}

impl NBest {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// The distance a candidate must beat; unbounded until the heap is full.
    fn max_key(&self) -> f64 {
        if self.heap.len() < self.capacity {
            f64::INFINITY
        } else {
            self.heap
                .peek()
                .map_or(f64::INFINITY, |(d, _)| d.into_inner())
        }
    }

    fn add(&mut self, dist: f64, index: usize) {
        self.heap.push((OrderedFloat(dist), index));
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// Drain in pop order: largest distance first.
    fn into_indices(self) -> Vec<usize> {
        let mut heap = self.heap;
        let mut out = Vec::with_capacity(heap.len());
        while let Some((_, i)) = heap.pop() {
            out.push(i);
        }
        out
    }
}

fn knn_in<P: KdPoint>(points: &[P], first: usize, last: usize, value: &P, axis: usize, best: &mut NBest) {
    match last - first {
        0 => return,
        1 => {
            best.add(l2dist(&points[first], value), first);
            return;
        }
        _ => {}
    }
    let pivot = first + find_pivot(&points[first..last], axis);
    best.add(l2dist(&points[pivot], value), pivot);
    let next = next_axis::<P>(axis);
    let go_left = axis_less(value, &points[pivot], axis);
    if go_left {
        knn_in(points, first, pivot, value, next, best);
    } else {
        knn_in(points, pivot + 1, last, value, next, best);
    }
    if dist_axis(value, &points[pivot], axis) <= best.max_key() {
        if go_left {
            knn_in(points, pivot + 1, last, value, next, best);
        } else {
            knn_in(points, first, pivot, value, next, best);
        }
    }
}

/// Indices of the `k` elements closest to `value`, largest distance first.
///
/// Fewer than `k` indices are returned only when the slice itself holds fewer
/// elements.
pub fn kd_nearest_neighbors<P: KdPoint>(points: &[P], value: &P, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }
    let mut best = NBest::new(k);
    knn_in(points, 0, points.len(), value, 0, &mut best);
    best.into_indices()
}
