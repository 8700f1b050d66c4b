//! Dimension-indexed comparators.
//!
//! The tree is partitioned with [`kd_less`]: compare on the level's axis and
//! break ties by the following axes in rotation, so that the predicate is a
//! strict weak order even when many points share coordinates.

use crate::point::KdPoint;

/// The axis that the children of a node splitting on `axis` are split over.
#[inline]
pub(crate) fn next_axis<P: KdPoint>(axis: usize) -> usize {
    (axis + 1) % P::DIM
}

/// Single-axis comparison: `a.axis(i) < b.axis(i)`.
#[inline]
pub fn axis_less<P: KdPoint>(lhs: &P, rhs: &P, i: usize) -> bool {
    lhs.axis(i) < rhs.axis(i)
}

/// Rotating lexicographic comparison starting at `start`.
///
/// Axes are examined in the order `start, start + 1, …` modulo `DIM`; exactly
/// `DIM` axes are visited, so equal points compare as not-less from either
/// side.
pub fn kd_less<P: KdPoint>(lhs: &P, rhs: &P, start: usize) -> bool {
    for step in 0..P::DIM {
        let i = (start + step) % P::DIM;
        let (x, y) = (lhs.axis(i), rhs.axis(i));
        if x < y {
            return true;
        }
        if y < x {
            return false;
        }
    }
    false
}

/// [`kd_less`] lifted over a caller-supplied strict weak order on scalars.
///
/// Two axis values are treated as equal when the predicate orders them in
/// neither direction.
pub fn kd_compare<P, F>(lhs: &P, rhs: &P, start: usize, pred: &F) -> bool
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    for step in 0..P::DIM {
        let i = (start + step) % P::DIM;
        let (x, y) = (lhs.axis(i), rhs.axis(i));
        if pred(x, y) {
            return true;
        }
        if pred(y, x) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_less_is_single_axis() {
        let a = [1, 9];
        let b = [2, 0];
        assert!(axis_less(&a, &b, 0));
        assert!(!axis_less(&a, &b, 1));
    }

    #[test]
    fn kd_less_breaks_ties_on_the_next_axis() {
        let a = [5, 1, 7];
        let b = [5, 2, 0];
        // equal on axis 0, decided on axis 1
        assert!(kd_less(&a, &b, 0));
        assert!(!kd_less(&b, &a, 0));
        // starting at axis 2 the lead comparison decides
        assert!(!kd_less(&a, &b, 2));
        assert!(kd_less(&b, &a, 2));
    }

    #[test]
    fn kd_less_rotation_wraps_past_the_last_axis() {
        let a = [1, 5];
        let b = [2, 5];
        // start at axis 1: tie there, resolved on axis 0 after wrapping
        assert!(kd_less(&a, &b, 1));
        assert!(!kd_less(&b, &a, 1));
    }

    #[test]
    fn kd_less_equal_points_are_not_less() {
        let a = [4, 4, 4];
        assert!(!kd_less(&a, &a, 0));
        assert!(!kd_less(&a, &a, 1));
        assert!(!kd_less(&a, &a, 2));
    }

    #[test]
    fn kd_compare_uses_predicate_equality() {
        // descending order on scalars
        let gt = |x: i32, y: i32| x > y;
        let a = [3, 8];
        let b = [3, 2];
        assert!(kd_compare(&a, &b, 0, &gt));
        assert!(!kd_compare(&b, &a, 0, &gt));
        // fully equal under the predicate
        assert!(!kd_compare(&a, &a, 0, &gt));
    }
}
