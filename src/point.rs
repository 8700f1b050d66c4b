use crate::r#type::KdScalar;

/// A value with a fixed number of ordered coordinates.
///
/// Implementations exist for coordinate arrays `[N; D]` and for homogeneous
/// tuples up to arity 8. The arity is part of the type: every element of one
/// array shares the same `DIM`, and queries address axes by index at runtime.
pub trait KdPoint {
    /// The scalar type stored on every axis.
    type Scalar: KdScalar;

    /// Number of dimensions, at least 1.
    const DIM: usize;

    /// The coordinate on axis `i`, `i < Self::DIM`.
    fn axis(&self, i: usize) -> Self::Scalar;
}

impl<N: KdScalar, const D: usize> KdPoint for [N; D] {
    type Scalar = N;
    const DIM: usize = D;

    #[inline]
    fn axis(&self, i: usize) -> N {
        self[i]
    }
}

macro_rules! replace_expr {
    ($_idx:tt, $sub:ty) => {
        $sub
    };
}

macro_rules! impl_point_for_tuple {
    ($dim:expr; $($idx:tt),+) => {
        impl<N: KdScalar> KdPoint for ($(replace_expr!($idx, N),)+) {
            type Scalar = N;
            const DIM: usize = $dim;

            #[inline]
            fn axis(&self, i: usize) -> N {
                match i {
                    $($idx => self.$idx,)+
                    _ => panic!("axis {} out of bounds for {}-tuple", i, $dim),
                }
            }
        }
    };
}

impl_point_for_tuple!(1; 0);
impl_point_for_tuple!(2; 0, 1);
impl_point_for_tuple!(3; 0, 1, 2);
impl_point_for_tuple!(4; 0, 1, 2, 3);
impl_point_for_tuple!(5; 0, 1, 2, 3, 4);
impl_point_for_tuple!(6; 0, 1, 2, 3, 4, 5);
impl_point_for_tuple!(7; 0, 1, 2, 3, 4, 5, 6);
impl_point_for_tuple!(8; 0, 1, 2, 3, 4, 5, 6, 7);

/// A record keyed by a point.
///
/// Comparators and distance primitives look only at `key`; `value` rides along
/// through sorting untouched. A `KeyValue` array is built and queried exactly
/// like a point array of its key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: KdPoint, V> KdPoint for KeyValue<K, V> {
    type Scalar = K::Scalar;
    const DIM: usize = K::DIM;

    #[inline]
    fn axis(&self, i: usize) -> Self::Scalar {
        self.key.axis(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_and_tuples_agree() {
        let a = [3.0, 1.0, 4.0];
        let t = (3.0, 1.0, 4.0);
        assert_eq!(<[f64; 3]>::DIM, 3);
        assert_eq!(<(f64, f64, f64)>::DIM, 3);
        for i in 0..3 {
            assert_eq!(a.axis(i), t.axis(i));
        }
    }

    #[test]
    fn key_value_delegates_to_key() {
        let kv = KeyValue::new([2u32, 7u32], "payload");
        assert_eq!(KeyValue::<[u32; 2], &str>::DIM, 2);
        assert_eq!(kv.axis(0), 2);
        assert_eq!(kv.axis(1), 7);
        assert_eq!(kv.value, "payload");
    }

    #[test]
    #[should_panic]
    fn tuple_axis_out_of_bounds_panics() {
        let t = (1.0, 2.0);
        t.axis(2);
    }
}
