//! Construction and verification of the implicit tree.
//!
//! [`kd_sort`] rearranges a slice in place so that every subrange is
//! partitioned around its middle element under the rotating comparator
//! [`kd_less`]. No node structure is allocated: queries re-derive the split
//! point of any subrange with [`find_pivot`].

use std::cmp::Ordering;

use crate::compare::{axis_less, kd_compare, kd_less, next_axis};
use crate::point::KdPoint;

/// Locate the partition boundary of a kd-sorted subrange.
///
/// Selection leaves elements that tie with the middle element on the level
/// axis packed immediately to its left, so the boundary the subtree actually
/// uses is the first position in `[0, mid]` not strictly below the middle
/// element on that axis.
pub(crate) fn find_pivot<P: KdPoint>(points: &[P], axis: usize) -> usize {
    let mid = points.len() / 2;
    points[..mid].partition_point(|x| axis_less(x, &points[mid], axis))
}

fn strict_ordering<P, L>(less: &L, a: &P, b: &P) -> Ordering
where
    L: Fn(&P, &P) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Re-partition `[0, mid)` so every element strictly below the pivot under
/// `less` precedes every element that ties with it. Returns the pivot's final
/// position.
fn adjust_pivot<P, L>(points: &mut [P], mid: usize, less: &L) -> usize
where
    L: Fn(&P, &P) -> bool,
{
    let (head, rest) = points.split_at_mut(mid);
    let pivot = &rest[0];
    let mut boundary = 0;
    for i in 0..head.len() {
        if less(&head[i], pivot) {
            head.swap(boundary, i);
            boundary += 1;
        }
    }
    boundary
}

/// Selection step shared by the sequential and threaded builds: move the
/// median under `less` to the middle slot, then tighten the left half to the
/// strict predicate. Requires `points.len() >= 2`.
fn split_at_median<P, L>(points: &mut [P], less: &L) -> usize
where
    L: Fn(&P, &P) -> bool,
{
    let mid = points.len() / 2;
    points.select_nth_unstable_by(mid, |a, b| strict_ordering(less, a, b));
    adjust_pivot(points, mid, less)
}

fn kd_sort_at<P: KdPoint>(points: &mut [P], axis: usize) {
    if points.len() <= 1 {
        return;
    }
    let pivot = split_at_median(points, &|a: &P, b: &P| kd_less(a, b, axis));
    let next = next_axis::<P>(axis);
    let (left, rest) = points.split_at_mut(pivot);
    kd_sort_at(&mut rest[1..], next);
    kd_sort_at(left, next);
}

/// Sort `points` into kd-sorted order, in place.
///
/// After this call the whole slice satisfies the invariant checked by
/// [`kd_is_sorted`] and can be handed to any of the query functions.
pub fn kd_sort<P: KdPoint>(points: &mut [P]) {
    kd_sort_at(points, 0);
}

fn kd_sort_by_at<P, F>(points: &mut [P], axis: usize, pred: &F)
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    if points.len() <= 1 {
        return;
    }
    let pivot = split_at_median(points, &|a: &P, b: &P| kd_compare(a, b, axis, pred));
    let next = next_axis::<P>(axis);
    let (left, rest) = points.split_at_mut(pivot);
    kd_sort_by_at(&mut rest[1..], next, pred);
    kd_sort_by_at(left, next, pred);
}

/// [`kd_sort`] under a caller-supplied strict weak order on scalars.
///
/// An array built with a custom predicate must also be verified and queried
/// with the same predicate ([`kd_is_sorted_by`]).
pub fn kd_sort_by<P, F>(points: &mut [P], pred: F)
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    kd_sort_by_at(points, 0, &pred);
}

fn kd_sort_threaded_at<P: KdPoint + Send>(
    points: &mut [P],
    axis: usize,
    max_threads: usize,
    depth: usize,
) {
    if points.len() <= 1 {
        return;
    }
    let pivot = split_at_median(points, &|a: &P, b: &P| kd_less(a, b, axis));
    let next = next_axis::<P>(axis);
    let (left, rest) = points.split_at_mut(pivot);
    let right = &mut rest[1..];
    if depth < usize::BITS as usize && (1usize << depth) <= max_threads {
        rayon::join(
            || kd_sort_threaded_at(right, next, max_threads, depth + 1),
            || kd_sort_threaded_at(left, next, max_threads, depth + 1),
        );
    } else {
        kd_sort_at(right, next);
        kd_sort_at(left, next);
    }
}

/// [`kd_sort`] with fork-join recursion over the available parallelism.
pub fn kd_sort_threaded<P: KdPoint + Send>(points: &mut [P]) {
    kd_sort_threaded_with(points, rayon::current_num_threads());
}

/// [`kd_sort_threaded`] with an explicit thread budget.
///
/// The two halves of each split run concurrently while `2^depth` stays within
/// `max_threads`; below that the sequential build takes over. The halves are
/// disjoint subslices, so siblings need no synchronization.
pub fn kd_sort_threaded_with<P: KdPoint + Send>(points: &mut [P], max_threads: usize) {
    kd_sort_threaded_at(points, 0, max_threads, 1);
}

fn check_partition<P, L>(points: &[P], pivot: usize, less: &L) -> bool
where
    L: Fn(&P, &P) -> bool,
{
    let p = &points[pivot];
    points
        .iter()
        .skip_while(|x| less(*x, p))
        .all(|x| !less(x, p))
}

fn kd_is_sorted_at<P: KdPoint>(points: &[P], axis: usize) -> bool {
    if points.len() < 2 {
        return true;
    }
    let pivot = find_pivot(points, axis);
    let next = next_axis::<P>(axis);
    check_partition(points, pivot, &|a: &P, b: &P| kd_less(a, b, axis))
        && kd_is_sorted_at(&points[..pivot], next)
        && kd_is_sorted_at(&points[pivot + 1..], next)
}

/// Verify the invariant [`kd_sort`] establishes.
pub fn kd_is_sorted<P: KdPoint>(points: &[P]) -> bool {
    kd_is_sorted_at(points, 0)
}

fn kd_is_sorted_by_at<P, F>(points: &[P], axis: usize, pred: &F) -> bool
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    if points.len() < 2 {
        return true;
    }
    let pivot = find_pivot(points, axis);
    let next = next_axis::<P>(axis);
    check_partition(points, pivot, &|a: &P, b: &P| kd_compare(a, b, axis, pred))
        && kd_is_sorted_by_at(&points[..pivot], next, pred)
        && kd_is_sorted_by_at(&points[pivot + 1..], next, pred)
}

/// Verify the invariant [`kd_sort_by`] establishes under the same predicate.
pub fn kd_is_sorted_by<P, F>(points: &[P], pred: F) -> bool
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    kd_is_sorted_by_at(points, 0, &pred)
}

/// Sort the whole slice by the rotating lexicographic order starting at
/// axis 0.
///
/// Unlike [`kd_sort`] this is a total ordering of the slice; use it when
/// callers need strict lexicographic order rather than a searchable tree.
pub fn lex_sort<P: KdPoint>(points: &mut [P]) {
    points.sort_unstable_by(|a, b| strict_ordering(&|a: &P, b: &P| kd_less(a, b, 0), a, b));
}

/// [`lex_sort`] under a caller-supplied strict weak order on scalars.
pub fn lex_sort_by<P, F>(points: &mut [P], pred: F)
where
    P: KdPoint,
    F: Fn(P::Scalar, P::Scalar) -> bool,
{
    points.sort_unstable_by(|a, b| strict_ordering(&|a: &P, b: &P| kd_compare(a, b, 0, &pred), a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::KeyValue;

    fn s1_points() -> Vec<[i32; 2]> {
        vec![[3, 1], [1, 4], [2, 2], [5, 5], [4, 3]]
    }

    fn multiset<P: Clone + KdPoint>(points: &[P]) -> Vec<P> {
        let mut sorted = points.to_vec();
        lex_sort(&mut sorted);
        sorted
    }

    #[test]
    fn kd_sort_establishes_the_invariant() {
        let mut points = s1_points();
        let before = multiset(&points);
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));
        assert_eq!(multiset(&points), before);
    }

    #[test]
    fn unsorted_input_fails_the_verifier() {
        let points = s1_points();
        assert!(!kd_is_sorted(&points));
    }

    #[test]
    fn tiny_slices_are_trivially_sorted() {
        let mut empty: Vec<[i32; 2]> = vec![];
        kd_sort(&mut empty);
        assert!(kd_is_sorted(&empty));

        let mut one = vec![[7, 7]];
        kd_sort(&mut one);
        assert!(kd_is_sorted(&one));
    }

    #[test]
    fn duplicates_end_up_partitioned_strictly() {
        let mut points = vec![[2, 2]; 6];
        points.extend([[1, 9], [3, 0], [2, 2], [0, 0], [2, 2]]);
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));
    }

    #[test]
    fn find_pivot_skips_equal_axis_runoff() {
        // all elements share axis 0, so nothing is strictly less than the
        // middle element there and the partition boundary is position 0
        let mut points = vec![[5, 4], [5, 2], [5, 1], [5, 3], [5, 0]];
        kd_sort(&mut points);
        assert_eq!(find_pivot(&points, 0), 0);
        assert!(kd_is_sorted(&points));
    }

    #[test]
    fn threaded_build_matches_the_invariant() {
        let mut points = s1_points();
        let before = multiset(&points);
        kd_sort_threaded(&mut points);
        assert!(kd_is_sorted(&points));
        assert_eq!(multiset(&points), before);

        let mut points = s1_points();
        kd_sort_threaded_with(&mut points, 4);
        assert!(kd_is_sorted(&points));
    }

    #[test]
    fn custom_predicate_build_and_verify() {
        let mut points = s1_points();
        let desc = |x: i32, y: i32| x > y;
        kd_sort_by(&mut points, desc);
        assert!(kd_is_sorted_by(&points, desc));
        // a descending build is not an ascending tree for this input
        assert!(!kd_is_sorted(&points));
    }

    #[test]
    fn lex_sort_orders_fully() {
        let mut points = vec![[2, 9], [1, 4], [2, 2], [1, 1], [2, 2]];
        lex_sort(&mut points);
        assert_eq!(points, vec![[1, 1], [1, 4], [2, 2], [2, 2], [2, 9]]);

        let mut points = s1_points();
        lex_sort_by(&mut points, |x: i32, y: i32| x > y);
        assert_eq!(points, vec![[5, 5], [4, 3], [3, 1], [2, 2], [1, 4]]);
    }

    #[test]
    fn records_sort_by_key_and_keep_payloads() {
        let mut records: Vec<KeyValue<(i32, i32), char>> = vec![
            KeyValue::new((3, 1), 'a'),
            KeyValue::new((1, 4), 'b'),
            KeyValue::new((2, 2), 'c'),
            KeyValue::new((5, 5), 'd'),
            KeyValue::new((4, 3), 'e'),
        ];
        kd_sort(&mut records);
        assert!(kd_is_sorted(&records));
        let mut payloads: Vec<char> = records.iter().map(|r| r.value).collect();
        payloads.sort_unstable();
        assert_eq!(payloads, vec!['a', 'b', 'c', 'd', 'e']);
    }
}
