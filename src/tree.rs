//! Owned and borrowed views over a built array.
//!
//! The free functions in this crate operate on bare slices; these types tie a
//! slice to the invariant it was built with, so downstream code can accept
//! "something queryable" without re-checking.

use std::ops::Range;

use crate::error::{KdIndexError, Result};
use crate::nearest::{kd_nearest_neighbor, kd_nearest_neighbors};
use crate::point::KdPoint;
use crate::query::{kd_binary_search, kd_equal_range, kd_lower_bound, kd_upper_bound};
use crate::range::kd_range_query;
use crate::sort::{kd_is_sorted, kd_sort, kd_sort_threaded};

/// Query surface shared by [`KdTree`] and [`KdTreeRef`].
///
/// Every method runs against [`points`][KdIndex::points], which implementors
/// guarantee to be kd-sorted.
pub trait KdIndex<P: KdPoint> {
    /// The kd-sorted elements.
    fn points(&self) -> &[P];

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// See [`kd_lower_bound`].
    fn lower_bound(&self, value: &P) -> Option<usize> {
        kd_lower_bound(self.points(), value)
    }

    /// See [`kd_upper_bound`].
    fn upper_bound(&self, value: &P) -> Option<usize> {
        kd_upper_bound(self.points(), value)
    }

    /// See [`kd_binary_search`].
    fn binary_search(&self, value: &P) -> bool {
        kd_binary_search(self.points(), value)
    }

    /// See [`kd_equal_range`].
    fn equal_range(&self, value: &P) -> Range<usize> {
        kd_equal_range(self.points(), value)
    }

    /// See [`kd_nearest_neighbor`].
    fn nearest_neighbor(&self, value: &P) -> Option<usize> {
        kd_nearest_neighbor(self.points(), value)
    }

    /// See [`kd_nearest_neighbors`].
    fn nearest_neighbors(&self, value: &P, k: usize) -> Vec<usize> {
        kd_nearest_neighbors(self.points(), value, k)
    }

    /// See [`kd_range_query`].
    fn range_query(&self, lower: &P, upper: &P) -> Vec<usize> {
        kd_range_query(self.points(), lower, upper)
    }
}

/// An owned, kd-sorted array.
///
/// Usually created from raw points via [`KdTree::build`], which sorts them in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<P: KdPoint> {
    points: Vec<P>,
}

impl<P: KdPoint> KdTree<P> {
    /// Sort `points` and take ownership of the result.
    pub fn build(mut points: Vec<P>) -> Self {
        kd_sort(&mut points);
        Self { points }
    }

    /// [`build`][Self::build] using the fork-join parallel sort.
    pub fn build_threaded(mut points: Vec<P>) -> Self
    where
        P: Send,
    {
        kd_sort_threaded(&mut points);
        Self { points }
    }

    /// Recover the underlying array, still kd-sorted.
    pub fn into_inner(self) -> Vec<P> {
        self.points
    }

    pub fn as_ref(&self) -> KdTreeRef<'_, P> {
        KdTreeRef {
            points: &self.points,
        }
    }
}

impl<P: KdPoint> KdIndex<P> for KdTree<P> {
    fn points(&self) -> &[P] {
        &self.points
    }
}

/// A reference to an external kd-sorted slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdTreeRef<'a, P: KdPoint> {
    points: &'a [P],
}

impl<'a, P: KdPoint> KdTreeRef<'a, P> {
    /// Wrap a slice that was already built with [`kd_sort`].
    ///
    /// ## Errors
    ///
    /// - If the slice does not satisfy the kd-sorted invariant.
    pub fn try_new(points: &'a [P]) -> Result<Self> {
        if !kd_is_sorted(points) {
            return Err(KdIndexError::NotKdSorted);
        }
        Ok(Self { points })
    }
}

impl<P: KdPoint> KdIndex<P> for KdTreeRef<'_, P> {
    fn points(&self) -> &[P] {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::KeyValue;

    fn sample() -> Vec<[i32; 2]> {
        vec![[3, 1], [1, 4], [2, 2], [5, 5], [4, 3]]
    }

    #[test]
    fn build_then_query() {
        let tree = KdTree::build(sample());
        assert_eq!(tree.len(), 5);
        assert!(tree.binary_search(&[2, 2]));
        assert!(!tree.binary_search(&[2, 3]));
        let nn = tree.nearest_neighbor(&[4, 2]).unwrap();
        assert_eq!(tree.points()[nn], [4, 3]);
    }

    #[test]
    fn threaded_build_is_queryable() {
        let tree = KdTree::build_threaded(sample());
        assert!(tree.binary_search(&[5, 5]));
        assert_eq!(tree.range_query(&[1, 1], &[4, 5]).len(), 3);
    }

    #[test]
    fn ref_view_validates_the_invariant() {
        let unsorted = sample();
        assert!(matches!(
            KdTreeRef::try_new(&unsorted),
            Err(KdIndexError::NotKdSorted)
        ));

        let built = KdTree::build(sample());
        let points = built.into_inner();
        let view = KdTreeRef::try_new(&points).unwrap();
        assert!(view.binary_search(&[4, 3]));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn as_ref_borrows_the_same_points() {
        let tree = KdTree::build(sample());
        let view = tree.as_ref();
        assert_eq!(view.points(), tree.points());
        assert_eq!(
            view.nearest_neighbors(&[2, 2], 2),
            tree.nearest_neighbors(&[2, 2], 2)
        );
    }

    #[test]
    fn record_trees_query_by_key() {
        let records = vec![
            KeyValue::new([3.0, 1.0], 10u8),
            KeyValue::new([1.0, 4.0], 20),
            KeyValue::new([2.0, 2.0], 30),
        ];
        let tree = KdTree::build(records);
        let probe = KeyValue::new([2.0, 2.0], 0);
        assert!(tree.binary_search(&probe));
        let i = tree.nearest_neighbor(&probe).unwrap();
        assert_eq!(tree.points()[i].value, 30);
    }
}
