//! Elementwise math library over float vectors.
//!
//! Every function here is the scalar operation from
//! [`crate::scalar::Float`] lifted through the combinators in
//! [`crate::vector`] — one definition per operation regardless of
//! width, and scalar/vector agreement holds by construction:
//! `F(v)[i] == f(v[i])`.
//!
//! Output-parameter forms (`fract`, `frexp`, `modf`) mirror the
//! pointer-out signatures of the source language.

pub mod geometric;
pub mod relational;

use crate::scalar::Float;
use crate::vector::{map, map2, map3, unzip_map, Vector};

macro_rules! lift1 {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<const N: usize, V>(v: V) -> V
            where
                V: Vector<N>,
                V::Scalar: Float,
            {
                map(v, Float::$name)
            }
        )+
    };
}

macro_rules! lift2 {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<const N: usize, V>(a: V, b: V) -> V
            where
                V: Vector<N>,
                V::Scalar: Float,
            {
                map2(a, b, Float::$name)
            }
        )+
    };
}

macro_rules! lift3 {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<const N: usize, V>(a: V, b: V, c: V) -> V
            where
                V: Vector<N>,
                V::Scalar: Float,
            {
                map3(a, b, c, Float::$name)
            }
        )+
    };
}

lift1!(
    /// Round each lane up to an integer.
    ceil,
    /// Round each lane down to an integer.
    floor,
    /// Round each lane toward zero.
    trunc,
    /// Round each lane to the nearest integer, halves away from zero.
    round,
    /// Round each lane to the nearest integer, ties to even.
    rint,
    /// Absolute value per lane.
    fabs,
    exp,
    exp2,
    /// Natural logarithm per lane.
    log,
    log2,
    log10,
    expm1,
    log1p,
    sqrt,
    /// Reciprocal square root, exactly `1/sqrt(x)` per lane.
    rsqrt,
    cbrt,
    sin,
    cos,
    tan,
    asin,
    acos,
    atan,
    sinh,
    cosh,
    tanh,
    asinh,
    acosh,
    atanh,
    /// Unbiased exponent per lane as a float; `-inf` for zero lanes.
    logb,
    /// -1, 0 or +1 per lane by strict comparison; NaN and ±0 give 0.
    sign,
);

lift2!(
    /// Remainder with the sign of the dividend.
    fmod,
    pow,
    /// Per-lane minimum; a NaN lane yields the other argument.
    fmin,
    /// Per-lane maximum; a NaN lane yields the other argument.
    fmax,
    copysign,
    /// Next representable value after `a` toward `b`, per lane.
    nextafter,
);

/// `atan2(y, x)` per lane.
#[inline]
pub fn atan2<const N: usize, V>(y: V, x: V) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
{
    map2(y, x, Float::atan2)
}

lift3!(
    /// Fused multiply-add `a * b + c` with a single rounding.
    fma,
    /// Multiply-add without the fusing guarantee.
    mad,
);

// ─── Integer-exponent forms ────────────────────────────────────────

/// `a^n` per lane for an integer exponent vector.
#[inline]
pub fn pown<const N: usize, V, I>(a: V, n: I) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
    I: Vector<N, Scalar = i32>,
{
    map2(a, n, Float::pown)
}

/// `a * 2^n` per lane, exact over the whole exponent range.
#[inline]
pub fn ldexp<const N: usize, V, I>(a: V, n: I) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
    I: Vector<N, Scalar = i32>,
{
    map2(a, n, Float::ldexp)
}

/// Unbiased exponent per lane; `i32::MIN` for zero, `i32::MAX` for
/// infinities and NaN.
#[inline]
pub fn ilogb<const N: usize, V, I>(v: V) -> I
where
    V: Vector<N>,
    V::Scalar: Float,
    I: Vector<N, Scalar = i32>,
{
    map(v, Float::ilogb)
}

// ─── Output-parameter forms ────────────────────────────────────────

/// Per-lane mantissa in ±[0.5, 1); the exponents land in `exp`.
#[inline]
pub fn frexp<const N: usize, V, I>(v: V, exp: &mut I) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
    I: Vector<N, Scalar = i32>,
{
    unzip_map(v, exp, Float::frexp)
}

/// Per-lane fractional part carrying the sign of the input; the
/// integral parts land in `int_part`.
#[inline]
pub fn modf<const N: usize, V>(v: V, int_part: &mut V) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
{
    unzip_map(v, int_part, Float::modf)
}

/// Per-lane `min(x - floor(x), largest-below-1)`; the floors land in
/// `floor_part`.
#[inline]
pub fn fract<const N: usize, V>(v: V, floor_part: &mut V) -> V
where
    V: Vector<N>,
    V::Scalar: Float,
{
    unzip_map(v, floor_part, Float::fract_floor)
}

// ─── Tests ─────────────────────────────────────────────────────────
