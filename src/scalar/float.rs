//! Floating-point scalar operations.
//!
//! The whole math surface of the kernel library is implemented here,
//! once per float width, and lifted to every vector width through the
//! elementwise combinators in `vector`. Nothing in `math` computes at
//! vector granularity.
//!
//! Bit-level decomposition (`frexp`, `ldexp`, `ilogb`, `nextafter`)
//! follows the IEEE-754 binary layout directly; the standard library
//! has no counterparts for these.

use super::Scalar;
use std::ops::Neg;

/// Floating-point lane type: f32 or f64.
///
/// Numeric contracts kernel code depends on:
/// - `rsqrt(x) == 1/sqrt(x)` exactly — no fast-reciprocal approximation
/// - `sign` uses strict comparisons, so NaN and ±0 map to 0
/// - `fract_floor` clamps the fraction below 1.0
/// - `rint` rounds ties to even
pub trait Float: Scalar + Neg<Output = Self> {
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    /// Largest representable value strictly below 1.0.
    const ALMOST_ONE: Self;

    // Rounding.
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Round to nearest integer, ties to even.
    fn rint(self) -> Self;

    // Basic arithmetic.
    fn fabs(self) -> Self;
    fn fmod(self, y: Self) -> Self;
    /// Fused multiply-add: `self * b + c` with a single rounding.
    fn fma(self, b: Self, c: Self) -> Self;
    /// Multiply-add without the fusing guarantee.
    fn mad(self, b: Self, c: Self) -> Self;
    /// Minimum; if one argument is NaN, returns the other.
    fn fmin(self, y: Self) -> Self;
    /// Maximum; if one argument is NaN, returns the other.
    fn fmax(self, y: Self) -> Self;

    // Exponential / logarithmic.
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn log(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn expm1(self) -> Self;
    fn log1p(self) -> Self;

    // Power.
    fn pow(self, y: Self) -> Self;
    fn pown(self, n: i32) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;

    /// Reciprocal square root, exactly `1/sqrt(x)`.
    #[inline]
    fn rsqrt(self) -> Self {
        Self::ONE / self.sqrt()
    }

    // Trigonometric.
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, x: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;

    // Decomposition.
    /// Split into `(mantissa, exponent)` with mantissa in ±[0.5, 1).
    /// Zero, infinities and NaN return `(self, 0)`.
    fn frexp(self) -> (Self, i32);
    /// `self * 2^n`, exact over the whole exponent range.
    fn ldexp(self, n: i32) -> Self;
    /// Unbiased exponent as an integer; `i32::MIN` for zero,
    /// `i32::MAX` for infinities and NaN.
    fn ilogb(self) -> i32;
    /// Unbiased exponent as a float; `-inf` for zero.
    fn logb(self) -> Self;
    /// Split into `(fractional, integral)` parts, both carrying the
    /// sign of `self`.
    fn modf(self) -> (Self, Self);
    /// `(min(x - floor(x), ALMOST_ONE), floor(x))`. NaN propagates to
    /// both parts; infinities yield `(±0, x)`.
    fn fract_floor(self) -> (Self, Self);
    /// Next representable value after `self` toward `toward`.
    fn nextafter(self, toward: Self) -> Self;
    fn copysign(self, sign: Self) -> Self;

    // Classification.
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_normal(self) -> bool;
    fn signbit(self) -> bool;

    /// -1, 0 or +1 by strict comparison against zero; NaN and ±0
    /// yield 0.
    #[inline]
    fn sign(self) -> Self {
        if self > Self::ZERO {
            Self::ONE
        } else if self < Self::ZERO {
            Self::ZERO - Self::ONE
        } else {
            Self::ZERO
        }
    }
}

macro_rules! impl_float {
    (
        $t:ty, $bits:ty,
        mant = $mant:expr, exp_mask = $exp_mask:expr, bias = $bias:expr,
        almost_one = $almost_one:expr
    ) => {
        impl Float for $t {
            const NAN: Self = <$t>::NAN;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;
            const ALMOST_ONE: Self = $almost_one;

            #[inline]
            fn ceil(self) -> Self {
                self.ceil()
            }
            #[inline]
            fn floor(self) -> Self {
                self.floor()
            }
            #[inline]
            fn trunc(self) -> Self {
                self.trunc()
            }
            #[inline]
            fn round(self) -> Self {
                self.round()
            }
            #[inline]
            fn rint(self) -> Self {
                self.round_ties_even()
            }

            #[inline]
            fn fabs(self) -> Self {
                self.abs()
            }
            #[inline]
            fn fmod(self, y: Self) -> Self {
                self % y
            }
            #[inline]
            fn fma(self, b: Self, c: Self) -> Self {
                self.mul_add(b, c)
            }
            #[inline]
            fn mad(self, b: Self, c: Self) -> Self {
                self * b + c
            }
            #[inline]
            fn fmin(self, y: Self) -> Self {
                self.min(y)
            }
            #[inline]
            fn fmax(self, y: Self) -> Self {
                self.max(y)
            }

            #[inline]
            fn exp(self) -> Self {
                self.exp()
            }
            #[inline]
            fn exp2(self) -> Self {
                self.exp2()
            }
            #[inline]
            fn log(self) -> Self {
                self.ln()
            }
            #[inline]
            fn log2(self) -> Self {
                self.log2()
            }
            #[inline]
            fn log10(self) -> Self {
                self.log10()
            }
            #[inline]
            fn expm1(self) -> Self {
                self.exp_m1()
            }
            #[inline]
            fn log1p(self) -> Self {
                self.ln_1p()
            }

            #[inline]
            fn pow(self, y: Self) -> Self {
                self.powf(y)
            }
            #[inline]
            fn pown(self, n: i32) -> Self {
                self.powi(n)
            }
            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }
            #[inline]
            fn cbrt(self) -> Self {
                self.cbrt()
            }

            #[inline]
            fn sin(self) -> Self {
                self.sin()
            }
            #[inline]
            fn cos(self) -> Self {
                self.cos()
            }
            #[inline]
            fn tan(self) -> Self {
                self.tan()
            }
            #[inline]
            fn asin(self) -> Self {
                self.asin()
            }
            #[inline]
            fn acos(self) -> Self {
                self.acos()
            }
            #[inline]
            fn atan(self) -> Self {
                self.atan()
            }
            #[inline]
            fn atan2(self, x: Self) -> Self {
                self.atan2(x)
            }
            #[inline]
            fn sinh(self) -> Self {
                self.sinh()
            }
            #[inline]
            fn cosh(self) -> Self {
                self.cosh()
            }
            #[inline]
            fn tanh(self) -> Self {
                self.tanh()
            }
            #[inline]
            fn asinh(self) -> Self {
                self.asinh()
            }
            #[inline]
            fn acosh(self) -> Self {
                self.acosh()
            }
            #[inline]
            fn atanh(self) -> Self {
                self.atanh()
            }

            fn frexp(self) -> (Self, i32) {
                if self == 0.0 || self.is_nan() || self.is_infinite() {
                    return (self, 0);
                }
                let mut x = self;
                let mut adjust = 0i32;
                // Subnormals: scale into the normal range first.
                if ((x.to_bits() >> $mant) & $exp_mask) == 0 {
                    x *= exp2i_raw::<$t, $bits>(64, $mant, $bias);
                    adjust = -64;
                }
                let bits = x.to_bits();
                let e = (((bits >> $mant) & $exp_mask) as i32) - ($bias - 1) + adjust;
                let mant_bits =
                    (bits & !($exp_mask << $mant)) | ((($bias - 1) as $bits) << $mant);
                (<$t>::from_bits(mant_bits), e)
            }

            fn ldexp(self, n: i32) -> Self {
                const MAX_EXP: i32 = $bias;
                const MIN_EXP: i32 = 1 - $bias;
                let mut x = self;
                let mut n = n;
                while n > MAX_EXP {
                    x *= exp2i_raw::<$t, $bits>(MAX_EXP, $mant, $bias);
                    n -= MAX_EXP;
                    if !x.is_finite() {
                        return x;
                    }
                }
                while n < MIN_EXP {
                    x *= exp2i_raw::<$t, $bits>(MIN_EXP, $mant, $bias);
                    n -= MIN_EXP;
                    if x == 0.0 {
                        return x;
                    }
                }
                x * exp2i_raw::<$t, $bits>(n, $mant, $bias)
            }

            fn ilogb(self) -> i32 {
                if self == 0.0 {
                    return i32::MIN;
                }
                if self.is_nan() || self.is_infinite() {
                    return i32::MAX;
                }
                let (_, e) = self.frexp();
                e - 1
            }

            fn logb(self) -> Self {
                if self == 0.0 {
                    return Self::NEG_INFINITY;
                }
                if self.is_nan() {
                    return self;
                }
                if self.is_infinite() {
                    return Self::INFINITY;
                }
                self.ilogb() as $t
            }

            fn modf(self) -> (Self, Self) {
                if self.is_nan() {
                    return (self, self);
                }
                if self.is_infinite() {
                    return ((0.0 as $t).copysign(self), self);
                }
                let i = self.trunc();
                (self - i, i)
            }

            fn fract_floor(self) -> (Self, Self) {
                if self.is_nan() {
                    return (self, self);
                }
                if self.is_infinite() {
                    return ((0.0 as $t).copysign(self), self);
                }
                let f = self.floor();
                ((self - f).min(Self::ALMOST_ONE), f)
            }

            fn nextafter(self, toward: Self) -> Self {
                if self.is_nan() || toward.is_nan() {
                    return Self::NAN;
                }
                if self == toward {
                    return toward;
                }
                if self == 0.0 {
                    // Smallest subnormal with the sign of the target.
                    return <$t>::from_bits(1).copysign(toward);
                }
                let bits = self.to_bits();
                let bits = if (self < toward) == (self > 0.0) {
                    bits + 1
                } else {
                    bits - 1
                };
                <$t>::from_bits(bits)
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                self.copysign(sign)
            }

            #[inline]
            fn is_nan(self) -> bool {
                self.is_nan()
            }
            #[inline]
            fn is_infinite(self) -> bool {
                self.is_infinite()
            }
            #[inline]
            fn is_finite(self) -> bool {
                self.is_finite()
            }
            #[inline]
            fn is_normal(self) -> bool {
                self.is_normal()
            }
            #[inline]
            fn signbit(self) -> bool {
                self.is_sign_negative()
            }
        }
    };
}

/// 2^n as a float, for n within the normal exponent range.
#[inline]
fn exp2i_raw<F, B>(n: i32, mant: u32, bias: i32) -> F
where
    F: FloatBits<Bits = B>,
{
    F::from_raw_bits(((n + bias) as u64) << mant)
}

/// Internal helper tying a float type to its raw bit width.
trait FloatBits {
    type Bits;
    fn from_raw_bits(bits: u64) -> Self;
}

impl FloatBits for f32 {
    type Bits = u32;
    #[inline]
    fn from_raw_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl FloatBits for f64 {
    type Bits = u64;
    #[inline]
    fn from_raw_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

// 0.99999994 is the f32 just below 1.0 (1 - 2^-24); the f64 literal
// rounds to 1 - 2^-53.
impl_float!(f32, u32, mant = 23, exp_mask = 0xff, bias = 127, almost_one = 0.99999994);
impl_float!(
    f64,
    u64,
    mant = 52,
    exp_mask = 0x7ff,
    bias = 1023,
    almost_one = 0.9999999999999999
);

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsqrt_is_exact_reciprocal_sqrt() {
        assert_eq!(4.0f32.rsqrt(), 0.5);
        assert_eq!(4.0f64.rsqrt(), 0.5);
        let x = 7.3f64;
        assert_eq!(x.rsqrt(), 1.0 / x.sqrt());
    }

    #[test]
    fn sign_contract() {
        assert_eq!(Float::sign(-3.0f64), -1.0);
        assert_eq!(Float::sign(0.0f64), 0.0);
        assert_eq!(Float::sign(-0.0f64), 0.0);
        assert_eq!(Float::sign(f64::NAN), 0.0);
        assert_eq!(Float::sign(2.5f32), 1.0);
        assert_eq!(Float::sign(f32::NEG_INFINITY), -1.0);
    }

    #[test]
    fn frexp_ldexp_round_trip() {
        for &x in &[1.0f64, -2.5, 0.375, 1e300, 1e-300, 5e-324] {
            let (m, e) = x.frexp();
            assert!(m == 0.0 || (0.5..1.0).contains(&m.abs()), "mantissa {m} for {x}");
            assert_eq!(m.ldexp(e), x, "round trip failed for {x}");
        }
    }

    #[test]
    fn frexp_edge_cases() {
        assert_eq!(0.0f32.frexp(), (0.0, 0));
        let (m, e) = f32::INFINITY.frexp();
        assert!(m.is_infinite());
        assert_eq!(e, 0);
        let (m, _) = f32::NAN.frexp();
        assert!(m.is_nan());
    }

    #[test]
    fn ldexp_extremes() {
        // Below the smallest f32 subnormal (2^-149).
        assert_eq!(1.0f32.ldexp(-160), 0.0);
        assert_eq!(1.5f64.ldexp(3), 12.0);
        assert_eq!(1.0f64.ldexp(2000), f64::INFINITY);
        assert_eq!(1.0f64.ldexp(-2000), 0.0);
        // Subnormal result reached through two scaling steps.
        assert_eq!(1.0f64.ldexp(-1074), 5e-324);
    }

    #[test]
    fn ilogb_and_logb() {
        assert_eq!(8.0f32.ilogb(), 3);
        assert_eq!(0.25f64.ilogb(), -2);
        assert_eq!(0.0f64.ilogb(), i32::MIN);
        assert_eq!(f64::NAN.ilogb(), i32::MAX);
        assert_eq!(f64::INFINITY.ilogb(), i32::MAX);
        assert_eq!(8.0f64.logb(), 3.0);
        assert_eq!(0.0f32.logb(), f32::NEG_INFINITY);
    }

    #[test]
    fn ilogb_subnormal() {
        // 2^-1074 is the smallest positive f64.
        assert_eq!(5e-324f64.ilogb(), -1074);
    }

    #[test]
    fn fract_floor_contract() {
        let (f, fl) = 2.7f32.fract_floor();
        assert_eq!(fl, 2.0);
        assert!(f < 1.0);
        assert!((f - 0.7).abs() < 1e-6);

        let (f, fl) = (-0.25f64).fract_floor();
        assert_eq!(fl, -1.0);
        assert!((f - 0.75).abs() < 1e-12);

        // The fraction is clamped strictly below 1.0 even when
        // x - floor(x) rounds up to 1.
        let (f, _) = (-1e-9f32).fract_floor();
        assert!(f < 1.0);

        let (f, fl) = f32::NAN.fract_floor();
        assert!(f.is_nan() && fl.is_nan());
    }

    #[test]
    fn modf_splits_sign() {
        let (f, i) = (-2.75f64).modf();
        assert_eq!(i, -2.0);
        assert_eq!(f, -0.75);
        let (f, i) = f64::INFINITY.modf();
        assert_eq!(f, 0.0);
        assert_eq!(i, f64::INFINITY);
    }

    #[test]
    fn nextafter_steps() {
        assert_eq!(1.0f32.nextafter(2.0), f32::from_bits(1.0f32.to_bits() + 1));
        assert_eq!(1.0f32.nextafter(0.0), f32::from_bits(1.0f32.to_bits() - 1));
        assert_eq!(0.0f64.nextafter(1.0), 5e-324);
        assert_eq!(0.0f64.nextafter(-1.0), -5e-324);
        assert!((-1.0f64).nextafter(0.0) > -1.0);
        assert_eq!(1.0f64.nextafter(1.0), 1.0);
        assert!(1.0f64.nextafter(f64::NAN).is_nan());
    }

    #[test]
    fn rint_ties_to_even() {
        assert_eq!(0.5f32.rint(), 0.0);
        assert_eq!(1.5f32.rint(), 2.0);
        assert_eq!(2.5f64.rint(), 2.0);
        assert_eq!((-0.5f64).rint(), -0.0);
    }

    #[test]
    fn almost_one_is_largest_below_one() {
        assert!(f32::ALMOST_ONE < 1.0);
        assert_eq!(f32::ALMOST_ONE.nextafter(2.0), 1.0);
        assert!(f64::ALMOST_ONE < 1.0);
        assert_eq!(f64::ALMOST_ONE.nextafter(2.0), 1.0);
    }
}
