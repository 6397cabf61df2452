//! Unaligned vector load/store, including half-precision variants.
//!
//! `vload`/`vstore` move `N` consecutive scalars regardless of the
//! address alignment — kernel buffers are packed arrays, not arrays of
//! padded vectors, so a 3-wide load really touches 3 elements.
//!
//! The half-precision variants convert through f32 on the way in and
//! out; binary16 is a storage format only, never a compute format.

use super::Vector;
use half::f16;

// ─── Slice forms ───────────────────────────────────────────────────

/// Load `N` consecutive scalars starting at `data[offset * N]`.
#[inline]
pub fn vload<const N: usize, V>(data: &[V::Scalar], offset: usize) -> V
where
    V: Vector<N>,
{
    let base = offset * N;
    assert!(
        base + N <= data.len(),
        "vload of {N} lanes at element offset {base} overruns buffer of {}",
        data.len()
    );
    V::from_fn(|i| data[base + i])
}

/// Store the logical lanes to `N` consecutive scalars starting at
/// `data[offset * N]`.
#[inline]
pub fn vstore<const N: usize, V>(v: V, data: &mut [V::Scalar], offset: usize)
where
    V: Vector<N>,
{
    let base = offset * N;
    assert!(
        base + N <= data.len(),
        "vstore of {N} lanes at element offset {base} overruns buffer of {}",
        data.len()
    );
    for i in 0..N {
        data[base + i] = v.lane(i);
    }
}

// ─── Raw-pointer forms ─────────────────────────────────────────────

/// Load `N` consecutive scalars from `p + offset * N`. The address
/// need not be aligned for the scalar type.
///
/// # Safety
/// `p + offset * N .. p + (offset + 1) * N` must be readable.
#[inline]
pub unsafe fn vload_ptr<const N: usize, V>(p: *const V::Scalar, offset: usize) -> V
where
    V: Vector<N>,
{
    let base = p.add(offset * N);
    V::from_fn(|i| base.add(i).read_unaligned())
}

/// Store the logical lanes to `N` consecutive scalars at
/// `p + offset * N`, without any alignment requirement.
///
/// # Safety
/// `p + offset * N .. p + (offset + 1) * N` must be writable.
#[inline]
pub unsafe fn vstore_ptr<const N: usize, V>(v: V, p: *mut V::Scalar, offset: usize)
where
    V: Vector<N>,
{
    let base = p.add(offset * N);
    for i in 0..N {
        base.add(i).write_unaligned(v.lane(i));
    }
}

// ─── Half precision ────────────────────────────────────────────────

/// Load `N` consecutive binary16 values, widened to f32 lanes.
#[inline]
pub fn vload_half<const N: usize, V>(data: &[f16], offset: usize) -> V
where
    V: Vector<N, Scalar = f32>,
{
    let base = offset * N;
    assert!(
        base + N <= data.len(),
        "vload_half of {N} lanes at element offset {base} overruns buffer of {}",
        data.len()
    );
    V::from_fn(|i| data[base + i].to_f32())
}

/// Store f32 lanes as `N` consecutive binary16 values, rounding to
/// nearest even.
#[inline]
pub fn vstore_half<const N: usize, V>(v: V, data: &mut [f16], offset: usize)
where
    V: Vector<N, Scalar = f32>,
{
    let base = offset * N;
    assert!(
        base + N <= data.len(),
        "vstore_half of {N} lanes at element offset {base} overruns buffer of {}",
        data.len()
    );
    for i in 0..N {
        data[base + i] = f16::from_f32(v.lane(i));
    }
}

/// Widen one binary16 value to f32.
#[inline]
pub fn load_half(v: f16) -> f32 {
    v.to_f32()
}

/// Narrow one f32 to binary16, rounding to nearest even.
#[inline]
pub fn store_half(v: f32) -> f16 {
    f16::from_f32(v)
}

// ─── Tests ─────────────────────────────────────────────────────────
