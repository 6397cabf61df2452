//! Fixed-width vector type family.
//!
//! Widths 2, 3, 4, 8 and 16 over every scalar kind, matching the
//! layout a GPU compiler gives the same kernel source:
//! - trivially copyable, standard layout, `Pod`
//! - byte size `N * size_of::<T>()`, except the 3-lane vector which is
//!   physically 4 wide (one padding lane)
//! - alignment equal to the vector's own byte size
//!
//! The `Vector<N>` trait exposes just enough to write the elementwise
//! combinators (`map`, `map2`, `map3`, `unzip_map`, `reduce`); the
//! whole operator surface and every function in `math` is derived from
//! those rather than duplicated per width.

pub mod convert;
pub mod loadstore;
pub mod types;

pub use types::*;

use crate::scalar::Scalar;
use std::fmt::Debug;

// ─── Trait ─────────────────────────────────────────────────────────

/// A fixed-width vector of `N` logical lanes.
///
/// `N` is the logical lane count; the physical width may be larger
/// (the 3-lane types carry a fourth padding lane). Equality and
/// `Debug` cover logical lanes only.
pub trait Vector<const N: usize>:
    Copy + PartialEq + Debug + Send + Sync + 'static + bytemuck::Pod
{
    type Scalar: Scalar;
    /// Comparison-result vector: same width, same-size signed integer
    /// lanes, all-bits-one/zero values.
    type Mask: Vector<N, Scalar = <Self::Scalar as Scalar>::Mask>;

    const LANES: usize = N;

    /// Broadcast one value to every lane.
    fn splat(v: Self::Scalar) -> Self;

    /// Build from a per-lane function; any padding lane is zeroed.
    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;

    /// Read lane `i`. `i >= N` is a programmer error.
    fn lane(self, i: usize) -> Self::Scalar;

    /// Write lane `i`. `i >= N` is a programmer error.
    fn set_lane(&mut self, i: usize, v: Self::Scalar);
}

// ─── Elementwise combinators ───────────────────────────────────────

/// Lift a unary scalar function to vectors: `map(v, f)[i] == f(v[i])`.
#[inline]
pub fn map<const N: usize, V, W>(v: V, mut f: impl FnMut(V::Scalar) -> W::Scalar) -> W
where
    V: Vector<N>,
    W: Vector<N>,
{
    W::from_fn(|i| f(v.lane(i)))
}

/// Lift a binary scalar function to vectors.
#[inline]
pub fn map2<const N: usize, A, B, W>(
    a: A,
    b: B,
    mut f: impl FnMut(A::Scalar, B::Scalar) -> W::Scalar,
) -> W
where
    A: Vector<N>,
    B: Vector<N>,
    W: Vector<N>,
{
    W::from_fn(|i| f(a.lane(i), b.lane(i)))
}

/// Lift a ternary scalar function to vectors.
#[inline]
pub fn map3<const N: usize, A, B, C, W>(
    a: A,
    b: B,
    c: C,
    mut f: impl FnMut(A::Scalar, B::Scalar, C::Scalar) -> W::Scalar,
) -> W
where
    A: Vector<N>,
    B: Vector<N>,
    C: Vector<N>,
    W: Vector<N>,
{
    W::from_fn(|i| f(a.lane(i), b.lane(i), c.lane(i)))
}

/// Lift a scalar function with a secondary output: returns the primary
/// result vector and writes the secondary one through `out`. This is
/// the output-parameter form used by `fract`, `frexp` and `modf`.
#[inline]
pub fn unzip_map<const N: usize, V, W, U>(
    v: V,
    out: &mut U,
    mut f: impl FnMut(V::Scalar) -> (W::Scalar, U::Scalar),
) -> W
where
    V: Vector<N>,
    W: Vector<N>,
    U: Vector<N>,
{
    let mut secondary = *out;
    let primary = W::from_fn(|i| {
        let (a, b) = f(v.lane(i));
        secondary.set_lane(i, b);
        a
    });
    *out = secondary;
    primary
}

/// Fold the logical lanes with a binary scalar function.
#[inline]
pub fn reduce<const N: usize, V>(v: V, mut f: impl FnMut(V::Scalar, V::Scalar) -> V::Scalar) -> V::Scalar
where
    V: Vector<N>,
{
    let mut acc = v.lane(0);
    for i in 1..N {
        acc = f(acc, v.lane(i));
    }
    acc
}

// ─── Tests ─────────────────────────────────────────────────────────
