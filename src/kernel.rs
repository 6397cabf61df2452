//! Kernel-facing prelude.
//!
//! One `use riptide::kernel::*;` gives kernel code the surface it had
//! in its source language: lowercase vector type names, `get_*`
//! work-item queries over an explicit context argument, and the math,
//! relational, atomic and load/store function families.

#![allow(non_camel_case_types)]

use crate::dispatch::DispatchContext;

pub use crate::math::geometric::{cross, distance, dot, length, normalize};
pub use crate::math::relational::{
    all, any, bitselect, isequal, isfinite, isgreater, isgreaterequal, isinf, isless,
    islessequal, islessgreater, isnan, isnormal, isnotequal, isordered, isunordered, select,
    signbit,
};
pub use crate::math::*;

pub use crate::atomic::*;
pub use crate::ptr::{ConstantPtr, GlobalPtr, LocalPtr, PrivatePtr};
pub use crate::vector::convert::{bitcast, convert};
pub use crate::vector::loadstore::{
    load_half, store_half, vload, vload_half, vload_ptr, vstore, vstore_half, vstore_ptr,
};

// ─── Lowercase type aliases ────────────────────────────────────────

macro_rules! kernel_aliases {
    ($($alias:ident = $ty:ident),+ $(,)?) => {
        $(pub type $alias = crate::vector::$ty;)+
    };
}

kernel_aliases!(
    char2 = Char2, char3 = Char3, char4 = Char4, char8 = Char8, char16 = Char16,
    uchar2 = UChar2, uchar3 = UChar3, uchar4 = UChar4, uchar8 = UChar8, uchar16 = UChar16,
    short2 = Short2, short3 = Short3, short4 = Short4, short8 = Short8, short16 = Short16,
    ushort2 = UShort2, ushort3 = UShort3, ushort4 = UShort4, ushort8 = UShort8,
    ushort16 = UShort16,
    int2 = Int2, int3 = Int3, int4 = Int4, int8 = Int8, int16 = Int16,
    uint2 = UInt2, uint3 = UInt3, uint4 = UInt4, uint8 = UInt8, uint16 = UInt16,
    long2 = Long2, long3 = Long3, long4 = Long4, long8 = Long8, long16 = Long16,
    ulong2 = ULong2, ulong3 = ULong3, ulong4 = ULong4, ulong8 = ULong8, ulong16 = ULong16,
    float2 = Float2, float3 = Float3, float4 = Float4, float8 = Float8, float16 = Float16,
    double2 = Double2, double3 = Double3, double4 = Double4, double8 = Double8,
    double16 = Double16,
);

// ─── Work-item queries ─────────────────────────────────────────────

/// Rank of the launch geometry.
#[inline]
pub fn get_work_dim(ctx: &DispatchContext) -> u32 {
    ctx.work_dim()
}

/// Global work-item id along `d`; 0 for `d >= work_dim`.
#[inline]
pub fn get_global_id(ctx: &DispatchContext, d: u32) -> usize {
    ctx.global_id(d)
}

/// Total work-items along `d`; 1 for `d >= work_dim`.
#[inline]
pub fn get_global_size(ctx: &DispatchContext, d: u32) -> usize {
    ctx.global_size(d)
}

/// Launch offset along `d`; 0 for `d >= work_dim`.
#[inline]
pub fn get_global_offset(ctx: &DispatchContext, d: u32) -> usize {
    ctx.global_offset(d)
}

/// Work-group extent along `d`: always 1 on this backend.
#[inline]
pub fn get_local_size(ctx: &DispatchContext, d: u32) -> usize {
    ctx.local_size(d)
}

/// Matches [`get_local_size`] on this backend.
#[inline]
pub fn get_enqueued_local_size(ctx: &DispatchContext, d: u32) -> usize {
    ctx.enqueued_local_size(d)
}

/// Position within the work-group: always 0.
#[inline]
pub fn get_local_id(ctx: &DispatchContext, d: u32) -> usize {
    ctx.local_id(d)
}

/// Work-group count along `d`; 1 for `d >= work_dim`.
#[inline]
pub fn get_num_groups(ctx: &DispatchContext, d: u32) -> usize {
    ctx.num_groups(d)
}

/// This invocation's work-group id along `d`; 0 for `d >= work_dim`.
#[inline]
pub fn get_group_id(ctx: &DispatchContext, d: u32) -> usize {
    ctx.group_id(d)
}

/// Flat global id over the first `work_dim` dimensions, x fastest.
#[inline]
pub fn get_global_linear_id(ctx: &DispatchContext) -> usize {
    ctx.global_linear_id()
}

/// Flat id within the work-group: always 0.
#[inline]
pub fn get_local_linear_id(ctx: &DispatchContext) -> usize {
    ctx.local_linear_id()
}

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchContext;

    #[test]
    fn queries_forward_to_the_context() {
        let mut ctx = DispatchContext::new(2, [4, 0, 0], [8, 2, 1]);
        ctx.set_flat_group_id(9);
        assert_eq!(get_work_dim(&ctx), 2);
        assert_eq!(get_global_id(&ctx, 0), 5);
        assert_eq!(get_global_id(&ctx, 1), 1);
        assert_eq!(get_global_size(&ctx, 0), 8);
        assert_eq!(get_global_offset(&ctx, 0), 4);
        assert_eq!(get_local_size(&ctx, 0), 1);
        assert_eq!(get_local_id(&ctx, 0), 0);
        assert_eq!(get_num_groups(&ctx, 1), 2);
        assert_eq!(get_group_id(&ctx, 0), 1);
        assert_eq!(get_global_linear_id(&ctx), 9);
        assert_eq!(get_local_linear_id(&ctx), 0);
    }

    #[test]
    fn aliases_name_the_padded_types() {
        assert_eq!(std::mem::size_of::<float3>(), 16);
        assert_eq!(std::mem::size_of::<uchar16>(), 16);
        let v = float4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(dot(v, v), 30.0);
    }
}
