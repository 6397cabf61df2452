//! Bit-reinterpretation and numeric conversion.
//!
//! Two deliberately different families:
//! - `bitcast` reinterprets bytes and requires the source and target
//!   sizes to match exactly — a hard precondition, never a narrowing
//!   cast.
//! - `convert` performs real numeric conversion lane by lane (`as`
//!   semantics: truncation toward zero for float→int, value-preserving
//!   widening, two's-complement wrap for narrowing integers).

use super::{map, Vector};

// ─── Bit reinterpretation ──────────────────────────────────────────

/// Reinterpret the bytes of `a` as a `B`.
///
/// Sizes must match exactly; a mismatch is a programmer error and
/// fails fast. Note that the 3-wide vectors are physically 4 wide, so
/// they bit-cast against 4-wide types of the same scalar size.
#[inline]
pub fn bitcast<A, B>(a: A) -> B
where
    A: bytemuck::Pod,
    B: bytemuck::Pod,
{
    assert_eq!(
        std::mem::size_of::<A>(),
        std::mem::size_of::<B>(),
        "bitcast requires identical sizes"
    );
    bytemuck::cast(a)
}

// ─── Numeric conversion ────────────────────────────────────────────

/// Per-lane numeric conversion with `as`-cast semantics.
pub trait ScalarFrom<S>: Sized {
    fn scalar_from(s: S) -> Self;
}

macro_rules! impl_scalar_from {
    ($dst:ty; $($src:ty),+ $(,)?) => {
        $(
            impl ScalarFrom<$src> for $dst {
                #[inline]
                fn scalar_from(s: $src) -> Self {
                    s as $dst
                }
            }
        )+
    };
}

impl_scalar_from!(i8; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(u8; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(i16; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(u16; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(i32; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(u32; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(i64; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(u64; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(f32; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_scalar_from!(f64; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Convert every lane of `v` into the scalar type of `W`.
///
/// ```
/// use riptide::vector::{convert::convert, Float4, Int4};
///
/// let v = Float4::new(1.9, -2.9, 3.0, -0.1);
/// let i: Int4 = convert(v);
/// assert_eq!(i, Int4::new(1, -2, 3, 0));
/// ```
#[inline]
pub fn convert<const N: usize, V, W>(v: V) -> W
where
    V: Vector<N>,
    W: Vector<N>,
    W::Scalar: ScalarFrom<V::Scalar>,
{
    map(v, W::Scalar::scalar_from)
}

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Char4, Float2, Float3, Float4, Int3, Int4, Long2, UChar4, UInt4};

    #[test]
    fn bitcast_preserves_bits() {
        let f = Float4::new(1.0, -1.0, 0.0, f32::INFINITY);
        let u: UInt4 = bitcast(f);
        assert_eq!(u, UInt4::new(0x3f80_0000, 0xbf80_0000, 0, 0x7f80_0000));
        let back: Float4 = bitcast(u);
        assert_eq!(back, f);
    }

    #[test]
    fn bitcast_scalar_and_vector() {
        let bits: u32 = bitcast(1.0f32);
        assert_eq!(bits, 0x3f80_0000);
        // A 4-lane char vector against a single 32-bit integer.
        let v = Char4::new(1, 0, 0, 0);
        let as_int: i32 = bitcast(v);
        assert_eq!(as_int.to_le_bytes()[0], 1);
    }

    #[test]
    fn three_wide_bitcasts_as_four_wide() {
        // Physical width rules the size check.
        let v = Float3::new(1.0, 2.0, 3.0);
        let i: Int4 = bitcast(v);
        assert_eq!(i.w(), 0, "padding lane bits");
        let back: Float3 = bitcast(i);
        assert_eq!(back, v);
    }

    #[test]
    #[should_panic(expected = "identical sizes")]
    fn size_mismatch_is_fatal() {
        let _: Long2 = bitcast(Float2::new(0.0, 0.0));
    }

    #[test]
    fn convert_float_to_int_truncates() {
        let v = Float4::new(1.9, -2.9, 3.0, -0.1);
        let i: Int4 = convert(v);
        assert_eq!(i, Int4::new(1, -2, 3, 0));
    }

    #[test]
    fn convert_widens_and_narrows() {
        let v = Int3::new(300, -1, 40);
        let narrowed: UChar4 = convert(Int4::new(300, 255, 0, 256));
        assert_eq!(narrowed, UChar4::new(44, 255, 0, 0));
        let widened: Float3 = convert(v);
        assert_eq!(widened, Float3::new(300.0, -1.0, 40.0));
    }

    #[test]
    fn convert_saturates_float_to_int_bounds() {
        // Rust `as` casts saturate out-of-range floats.
        let v = Float2::new(1e10, -1e10);
        let i: crate::vector::Int2 = convert(v);
        assert_eq!(i, crate::vector::Int2::new(i32::MAX, i32::MIN));
    }
}
