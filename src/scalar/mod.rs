//! Scalar element traits for the vector type family.
//!
//! Every vector lane holds a `Scalar`. The trait family mirrors the
//! capabilities kernel code relies on:
//! - `Scalar` — arithmetic, plus the mapping to its same-size signed
//!   integer ("mask") type used by comparison results
//! - `Int` — bitwise and shift operations for integer lanes
//! - `MaskScalar` — the comparison-result convention: true is all bits
//!   set, false is all bits clear
//! - `Float` — the full math surface, implemented once per float width
//!   and lifted to every vector width by the elementwise combinators
//!
//! The all-bits-one convention is load-bearing: `select`/`bitselect`
//! blend by bit pattern, so a relational result and a hand-built mask
//! must be interchangeable.

pub mod float;

pub use float::Float;

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

// ─── Scalar ────────────────────────────────────────────────────────

/// A scalar arithmetic type that can populate vector lanes.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Same-size signed integer carried by comparison-result lanes.
    type Mask: MaskScalar;

    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Reinterpret this scalar's bytes as its mask type.
    fn to_mask_bits(self) -> Self::Mask;
    /// Reinterpret mask bytes back into the scalar.
    fn from_mask_bits(bits: Self::Mask) -> Self;
}

// ─── Int ───────────────────────────────────────────────────────────

/// Integer lane operations: bitwise logic and lane-by-lane shifts.
pub trait Int:
    Scalar
    + Eq
    + Ord
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<Self, Output = Self>
    + Shr<Self, Output = Self>
{
    const MIN: Self;
    const MAX: Self;
}

// ─── MaskScalar ────────────────────────────────────────────────────

/// Comparison-result lane type: a signed integer where true is
/// all-bits-one and false is all-bits-zero — never 1/0.
pub trait MaskScalar: Int + Scalar<Mask = Self> {
    /// All bits set.
    const TRUE: Self;
    /// All bits clear.
    const FALSE: Self;

    #[inline]
    fn from_bool(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Most-significant-bit test, the `any`/`all` convention.
    fn msb(self) -> bool;
}

// ─── Implementations ───────────────────────────────────────────────

macro_rules! impl_int_scalar {
    ($($t:ty => $mask:ty),+ $(,)?) => {
        $(
            impl Scalar for $t {
                type Mask = $mask;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_mask_bits(self) -> $mask {
                    self as $mask
                }

                #[inline]
                fn from_mask_bits(bits: $mask) -> Self {
                    bits as $t
                }
            }

            impl Int for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )+
    };
}

impl_int_scalar!(
    i8 => i8,
    u8 => i8,
    i16 => i16,
    u16 => i16,
    i32 => i32,
    u32 => i32,
    i64 => i64,
    u64 => i64,
);

macro_rules! impl_mask_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl MaskScalar for $t {
                const TRUE: Self = -1;
                const FALSE: Self = 0;

                #[inline]
                fn msb(self) -> bool {
                    self < 0
                }
            }
        )+
    };
}

impl_mask_scalar!(i8, i16, i32, i64);

macro_rules! impl_float_scalar {
    ($($t:ty => $mask:ty),+ $(,)?) => {
        $(
            impl Scalar for $t {
                type Mask = $mask;
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn to_mask_bits(self) -> $mask {
                    self.to_bits() as $mask
                }

                #[inline]
                fn from_mask_bits(bits: $mask) -> Self {
                    <$t>::from_bits(bits as _)
                }
            }
        )+
    };
}

impl_float_scalar!(f32 => i32, f64 => i64);

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_constants_are_bit_patterns() {
        assert_eq!(i32::TRUE, -1);
        assert_eq!(i32::TRUE as u32, u32::MAX);
        assert_eq!(i32::FALSE, 0);
        assert_eq!(i8::TRUE as u8, 0xff);
        assert_eq!(i64::TRUE as u64, u64::MAX);
    }

    #[test]
    fn from_bool_round_trip() {
        assert_eq!(i32::from_bool(true), -1);
        assert_eq!(i32::from_bool(false), 0);
        assert!(i32::from_bool(true).msb());
        assert!(!i32::from_bool(false).msb());
    }

    #[test]
    fn float_mask_bits_round_trip() {
        let x = -1.5f32;
        assert_eq!(f32::from_mask_bits(x.to_mask_bits()), x);
        let y = 2.25f64;
        assert_eq!(f64::from_mask_bits(y.to_mask_bits()), y);
    }

    #[test]
    fn unsigned_to_mask_is_reinterpret() {
        assert_eq!(u8::MAX.to_mask_bits(), -1i8);
        assert_eq!(u8::from_mask_bits(-1i8), u8::MAX);
        assert_eq!(u64::MAX.to_mask_bits(), -1i64);
    }
}
