//! Relational and selection functions.
//!
//! Comparisons return mask vectors: same-width signed integer lanes
//! holding all-bits-one for true and all-bits-zero for false. `any`
//! and `all` test the lane sign bit, so a relational result and a
//! hand-built mask behave identically through `select`/`bitselect`.

use crate::scalar::{Float, MaskScalar, Scalar};
use crate::vector::{map, map2, map3, reduce, Vector};

// ─── Comparisons ───────────────────────────────────────────────────

macro_rules! relational2 {
    ($($(#[$meta:meta])* $name:ident => |$a:ident, $b:ident| $test:expr),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<const N: usize, V>(a: V, b: V) -> V::Mask
            where
                V: Vector<N>,
            {
                map2(a, b, |$a, $b| {
                    <<V::Scalar as Scalar>::Mask>::from_bool($test)
                })
            }
        )+
    };
}

relational2!(
    isequal => |a, b| a == b,
    /// Also true when either lane is NaN.
    isnotequal => |a, b| a != b,
    isless => |a, b| a < b,
    islessequal => |a, b| a <= b,
    isgreater => |a, b| a > b,
    isgreaterequal => |a, b| a >= b,
    /// True when the lanes compare ordered and unequal.
    islessgreater => |a, b| a < b || a > b,
);

/// True when neither lane is NaN.
#[inline]
pub fn isordered<const N: usize, V>(a: V, b: V) -> V::Mask
where
    V: Vector<N>,
    V::Scalar: Float,
{
    map2(a, b, |a, b| {
        <<V::Scalar as Scalar>::Mask>::from_bool(!a.is_nan() && !b.is_nan())
    })
}

/// True when either lane is NaN.
#[inline]
pub fn isunordered<const N: usize, V>(a: V, b: V) -> V::Mask
where
    V: Vector<N>,
    V::Scalar: Float,
{
    map2(a, b, |a, b| {
        <<V::Scalar as Scalar>::Mask>::from_bool(a.is_nan() || b.is_nan())
    })
}

macro_rules! relational1 {
    ($($(#[$meta:meta])* $name:ident => $test:path),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<const N: usize, V>(v: V) -> V::Mask
            where
                V: Vector<N>,
                V::Scalar: Float,
            {
                map(v, |x| <<V::Scalar as Scalar>::Mask>::from_bool($test(x)))
            }
        )+
    };
}

relational1!(
    isnan => Float::is_nan,
    isinf => Float::is_infinite,
    isfinite => Float::is_finite,
    /// Neither zero, subnormal, infinite nor NaN.
    isnormal => Float::is_normal,
    /// Sign bit set, including -0.0 and negative NaNs.
    signbit => Float::signbit,
);

// ─── Mask reductions ───────────────────────────────────────────────

/// True when any lane has its most significant bit set.
#[inline]
pub fn any<const N: usize, M>(m: M) -> bool
where
    M: Vector<N>,
    M::Scalar: MaskScalar,
{
    let folded = reduce(m, |a, b| a | b);
    folded.msb()
}

/// True when every lane has its most significant bit set.
#[inline]
pub fn all<const N: usize, M>(m: M) -> bool
where
    M: Vector<N>,
    M::Scalar: MaskScalar,
{
    let folded = reduce(m, |a, b| a & b);
    folded.msb()
}

// ─── Selection ─────────────────────────────────────────────────────

/// Bitwise blend: each result bit comes from `b` where the mask bit is
/// set, from `a` where it is clear. Works on arbitrary bit patterns,
/// not only all-ones/all-zeros lanes.
#[inline]
pub fn bitselect<const N: usize, V>(a: V, b: V, mask: V::Mask) -> V
where
    V: Vector<N>,
{
    map3(a, b, mask, |a, b, m| {
        let a = a.to_mask_bits();
        let b = b.to_mask_bits();
        V::Scalar::from_mask_bits((a & !m) | (b & m))
    })
}

/// Lane blend: take the `b` lane where the mask lane is nonzero, the
/// `a` lane otherwise. On a relational result this agrees with
/// [`bitselect`].
#[inline]
pub fn select<const N: usize, V>(a: V, b: V, mask: V::Mask) -> V
where
    V: Vector<N>,
{
    map3(a, b, mask, |a, b, m| {
        if m != <<V::Scalar as Scalar>::Mask>::ZERO {
            b
        } else {
            a
        }
    })
}

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Float4, Int4, Long2, Double2, UInt4};

    #[test]
    fn comparison_lanes_are_all_bits() {
        let a = Float4::new(1.0, 2.0, 3.0, f32::NAN);
        let b = Float4::new(1.0, 5.0, 2.0, 1.0);
        assert_eq!(isequal(a, b), Int4::new(-1, 0, 0, 0));
        assert_eq!(isless(a, b), Int4::new(0, -1, 0, 0));
        assert_eq!(isgreater(a, b), Int4::new(0, 0, -1, 0));
        // NaN compares unequal to everything.
        assert_eq!(isnotequal(a, b), Int4::new(0, -1, -1, -1));
    }

    #[test]
    fn ordered_and_unordered() {
        let a = Double2::new(1.0, f64::NAN);
        let b = Double2::new(2.0, 3.0);
        assert_eq!(isordered(a, b), Long2::new(-1, 0));
        assert_eq!(isunordered(a, b), Long2::new(0, -1));
        assert_eq!(islessgreater(a, b), Long2::new(-1, 0));
    }

    #[test]
    fn classification() {
        let v = Float4::new(f32::NAN, f32::INFINITY, -0.0, 1e-40);
        assert_eq!(isnan(v), Int4::new(-1, 0, 0, 0));
        assert_eq!(isinf(v), Int4::new(0, -1, 0, 0));
        assert_eq!(isfinite(v), Int4::new(0, 0, -1, -1));
        // 1e-40 is subnormal in f32.
        assert_eq!(isnormal(v), Int4::new(0, 0, 0, 0));
        assert_eq!(signbit(v), Int4::new(0, 0, -1, 0));
    }

    #[test]
    fn any_all_test_the_sign_bit() {
        assert!(any(Int4::new(0, 0, -1, 0)));
        assert!(!any(Int4::new(0, 0, 0, 0)));
        assert!(all(Int4::splat(-1)));
        assert!(!all(Int4::new(-1, -1, 0, -1)));
        // Any negative lane counts, not just -1.
        assert!(any(Int4::new(0, i32::MIN, 0, 0)));
        // A positive lane never counts, whatever its low bits.
        assert!(!any(Int4::new(1, i32::MAX, 0, 0)));
    }

    #[test]
    fn select_takes_nonzero_mask_lanes() {
        let a = UInt4::new(10, 20, 30, 40);
        let b = UInt4::new(1, 2, 3, 4);
        assert_eq!(select(a, b, Int4::new(0, -1, 0, -1)), UInt4::new(10, 2, 30, 4));
        // Nonzero is enough, all-bits is not required.
        assert_eq!(select(a, b, Int4::new(0, 1, 0, 0)), UInt4::new(10, 2, 30, 40));
    }

    #[test]
    fn bitselect_blends_bits() {
        let a = UInt4::splat(0xffff_0000);
        let b = UInt4::splat(0x0000_ffff);
        // A half-set mask picks the low byte of each half from b.
        let m = Int4::splat(0x00ff_00ffu32 as i32);
        assert_eq!(bitselect(a, b, m), UInt4::splat(0xff00_00ff));
    }

    #[test]
    fn select_and_bitselect_agree_on_relational_masks() {
        let a = Float4::new(1.0, 2.0, 3.0, 4.0);
        let b = Float4::new(-1.0, -2.0, -3.0, -4.0);
        let m = isless(a, Float4::splat(2.5));
        assert_eq!(select(a, b, m), bitselect(a, b, m));
        assert_eq!(select(a, b, m), Float4::new(-1.0, -2.0, 3.0, 4.0));
    }
}
