use std::fmt::Debug;

use num_traits::{Num, NumCast, ToPrimitive};

/// Numbers that can be used as point coordinates.
///
/// Every axis of a [`KdPoint`][crate::KdPoint] carries one scalar type.
/// Ordering must be a strict weak order over the values actually stored; float
/// `NaN` is not supported and may panic.
pub trait KdScalar:
    Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync
{
}

impl<T> KdScalar for T where
    T: Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync
{
}

/// Difference of two scalars as an `f64`.
///
/// Widening happens before the subtraction so unsigned scalar types cannot
/// underflow.
#[inline]
pub fn scalar_diff<N: KdScalar>(lhs: N, rhs: N) -> f64 {
    lhs.to_f64().unwrap() - rhs.to_f64().unwrap()
}

/// Absolute difference of two scalars as an `f64`.
#[inline]
pub fn scalar_dist<N: KdScalar>(lhs: N, rhs: N) -> f64 {
    scalar_diff(lhs, rhs).abs()
}
