//! Geometric functions over float vectors.

use crate::scalar::Float;
use crate::vector::{map2, reduce, Vector};

/// Sum of per-lane products over the logical lanes.
#[inline]
pub fn dot<const N: usize, V>(a: V, b: V) -> V::Scalar
where
    V: Vector<N>,
    V::Scalar: Float,
{
    let products: V = map2(a, b, |x, y| x * y);
    reduce(products, |x, y| x + y)
}

/// Cross product of the first three lanes. Lane 3 of a 4-wide result
/// is zero; widths below 3 are a programmer error.
#[inline]
pub fn cross<const N: usize, V>(a: V, b: V) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
{
    debug_assert!(N >= 3, "cross requires at least 3 lanes");
    V::from_fn(|i| match i {
        0 => a.lane(1) * b.lane(2) - a.lane(2) * b.lane(1),
        1 => a.lane(2) * b.lane(0) - a.lane(0) * b.lane(2),
        2 => a.lane(0) * b.lane(1) - a.lane(1) * b.lane(0),
        _ => <V::Scalar as crate::scalar::Scalar>::ZERO,
    })
}

/// Euclidean length.
#[inline]
pub fn length<const N: usize, V>(v: V) -> V::Scalar
where
    V: Vector<N>,
    V::Scalar: Float,
{
    dot(v, v).sqrt()
}

/// `v` scaled to unit length.
#[inline]
pub fn normalize<const N: usize, V>(v: V) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
{
    let len = length(v);
    crate::vector::map(v, |x| x / len)
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance<const N: usize, V>(a: V, b: V) -> V::Scalar
where
    V: Vector<N>,
    V::Scalar: Float,
{
    let diff: V = map2(a, b, |x, y| x - y);
    length(diff)
}

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Double3, Float3, Float4};

    #[test]
    fn dot_covers_logical_lanes() {
        assert_eq!(dot(Float3::new(1.0, 2.0, 3.0), Float3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(dot(Float4::new(1.0, 0.0, 0.0, 2.0), Float4::new(3.0, 9.0, 9.0, 4.0)), 11.0);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Float3::new(1.0, 0.0, 0.0);
        let y = Float3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(x, y), Float3::new(0.0, 0.0, 1.0));
        assert_eq!(cross(y, x), Float3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_on_four_wide_zeroes_last_lane() {
        let a = Float4::new(1.0, 2.0, 3.0, 99.0);
        let b = Float4::new(4.0, 5.0, 6.0, 42.0);
        let c = cross(a, b);
        assert_eq!(c, Float4::new(-3.0, 6.0, -3.0, 0.0));
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(length(Float3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(
            distance(Double3::new(1.0, 1.0, 1.0), Double3::new(1.0, 1.0, 3.0)),
            2.0
        );
    }

    #[test]
    fn normalize_yields_unit_length() {
        let v = Float3::new(3.0, 0.0, 4.0);
        let n = normalize(v);
        assert_eq!(n, Float3::new(0.6, 0.0, 0.8));
        assert!((length(n) - 1.0).abs() < 1e-6);
    }
}
