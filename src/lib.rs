//! Implicit k-d trees laid out in place over contiguous arrays.
//!
//! There are no tree nodes: [`kd_sort`] permutes a slice so that every
//! subrange is partitioned around its middle element on a rotating axis, and
//! the queries re-derive that structure from subrange bounds alone. The slice
//! stays yours; build it once, then query it read-only from as many threads
//! as you like.
//!
//! ## Creation
//!
//! Use [`kd_sort`] (or [`kd_sort_threaded`] for large arrays) on a mutable
//! slice of points: coordinate arrays, homogeneous tuples, or [`KeyValue`]
//! records keyed by either.
//!
//! ## Search
//!
//! Exact membership via [`kd_binary_search`] / [`kd_equal_range`], proximity
//! via [`kd_nearest_neighbor`] / [`kd_nearest_neighbors`], and box reporting
//! via [`kd_range_query`]. The [`KdTree`] / [`KdTreeRef`] views bundle a
//! built slice with the [`KdIndex`] query trait.
//!
//! ## Coordinate types
//!
//! Any scalar implementing [`KdScalar`] works on every axis. Note that float
//! `NaN` is not supported and may panic.
//!
//! ## Example
//!
//! ```
//! use kd_index::{kd_binary_search, kd_is_sorted, kd_nearest_neighbor, kd_range_query, kd_sort};
//!
//! let mut points = vec![[3.0, 1.0], [1.0, 4.0], [2.0, 2.0], [5.0, 5.0], [4.0, 3.0]];
//! kd_sort(&mut points);
//! assert!(kd_is_sorted(&points));
//!
//! assert!(kd_binary_search(&points, &[2.0, 2.0]));
//! assert!(!kd_binary_search(&points, &[2.0, 3.0]));
//!
//! let nn = kd_nearest_neighbor(&points, &[2.0, 2.0]).unwrap();
//! assert_eq!(points[nn], [2.0, 2.0]);
//!
//! let in_box = kd_range_query(&points, &[2.0, 2.0], &[5.0, 5.0]);
//! assert_eq!(in_box.len(), 2);
//! ```

mod compare;
mod error;
mod geometry;
mod nearest;
mod point;
mod query;
mod range;
mod sort;
mod tree;
mod r#type;

pub use compare::{axis_less, kd_compare, kd_less};
pub use error::{KdIndexError, Result};
pub use geometry::{all_less, diff_axis, dist_axis, l2dist, none_less, sum_of_squares, within};
pub use nearest::{kd_nearest_neighbor, kd_nearest_neighbors};
pub use point::{KdPoint, KeyValue};
pub use query::{kd_binary_search, kd_equal_range, kd_lower_bound, kd_upper_bound};
pub use range::kd_range_query;
pub use sort::{
    kd_is_sorted, kd_is_sorted_by, kd_sort, kd_sort_by, kd_sort_threaded, kd_sort_threaded_with,
    lex_sort, lex_sort_by,
};
pub use tree::{KdIndex, KdTree, KdTreeRef};
pub use r#type::{scalar_diff, scalar_dist, KdScalar};
