//! Concrete vector types for every (scalar kind, width) pair.
//!
//! The whole surface here is derived mechanically: one `vector_type!`
//! invocation per type plus small per-width constructor macros. Layout
//! follows the GPU ABI: `#[repr(C, align(size))]`, 3-lane types stored
//! 4 wide with the padding lane zeroed by every constructor.
//!
//! Operator impls route through the combinators in the parent module,
//! so each scalar operator is written exactly once.

// ─── Core type macro ───────────────────────────────────────────────

macro_rules! vector_type {
    ($name:ident, $scalar:ty, $mask:ident, $n:literal, $phys:literal, $align:literal) => {
        #[repr(C, align($align))]
        #[derive(Clone, Copy)]
        pub struct $name {
            lanes: [$scalar; $phys],
        }

        // Sound: the array fills the struct exactly and align equals
        // size, so there is no padding anywhere.
        unsafe impl bytemuck::Zeroable for $name {}
        unsafe impl bytemuck::Pod for $name {}

        impl $name {
            /// Logical lane count.
            pub const LANES: usize = $n;

            /// Broadcast one value to every lane.
            #[inline]
            pub fn splat(v: $scalar) -> Self {
                let mut lanes = [<$scalar as crate::scalar::Scalar>::ZERO; $phys];
                let mut i = 0;
                while i < $n {
                    lanes[i] = v;
                    i += 1;
                }
                Self { lanes }
            }

            /// Build from exactly the logical lanes.
            #[inline]
            pub fn from_array(a: [$scalar; $n]) -> Self {
                let mut lanes = [<$scalar as crate::scalar::Scalar>::ZERO; $phys];
                let mut i = 0;
                while i < $n {
                    lanes[i] = a[i];
                    i += 1;
                }
                Self { lanes }
            }

            /// Copy out the logical lanes.
            #[inline]
            pub fn to_array(self) -> [$scalar; $n] {
                let mut a = [<$scalar as crate::scalar::Scalar>::ZERO; $n];
                let mut i = 0;
                while i < $n {
                    a[i] = self.lanes[i];
                    i += 1;
                }
                a
            }

            /// Read lane `i`. `i >= LANES` is a programmer error.
            #[inline]
            pub fn lane(self, i: usize) -> $scalar {
                debug_assert!(i < $n, "lane {i} out of range for {}", stringify!($name));
                self.lanes[i]
            }

            /// Write lane `i`. `i >= LANES` is a programmer error.
            #[inline]
            pub fn set_lane(&mut self, i: usize, v: $scalar) {
                debug_assert!(i < $n, "lane {i} out of range for {}", stringify!($name));
                self.lanes[i] = v;
            }

            /// Reduce the logical lanes by addition.
            #[inline]
            pub fn sum(self) -> $scalar {
                let mut acc = self.lanes[0];
                let mut i = 1;
                while i < $n {
                    acc = acc + self.lanes[i];
                    i += 1;
                }
                acc
            }
        }

        impl crate::vector::Vector<$n> for $name {
            type Scalar = $scalar;
            type Mask = $mask;

            #[inline]
            fn splat(v: $scalar) -> Self {
                Self::splat(v)
            }

            #[inline]
            fn from_fn(mut f: impl FnMut(usize) -> $scalar) -> Self {
                let mut lanes = [<$scalar as crate::scalar::Scalar>::ZERO; $phys];
                let mut i = 0;
                while i < $n {
                    lanes[i] = f(i);
                    i += 1;
                }
                Self { lanes }
            }

            #[inline]
            fn lane(self, i: usize) -> $scalar {
                Self::lane(self, i)
            }

            #[inline]
            fn set_lane(&mut self, i: usize, v: $scalar) {
                Self::set_lane(self, i, v)
            }
        }

        // Logical lanes only; the padding lane of 3-wide types never
        // takes part in equality or formatting.
        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                let mut i = 0;
                while i < $n {
                    if self.lanes[i] != other.lanes[i] {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut t = f.debug_tuple(stringify!($name));
                let mut i = 0;
                while i < $n {
                    t.field(&self.lanes[i]);
                    i += 1;
                }
                t.finish()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::splat(<$scalar as crate::scalar::Scalar>::ZERO)
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = $scalar;
            #[inline]
            fn index(&self, i: usize) -> &$scalar {
                debug_assert!(i < $n, "lane {i} out of range for {}", stringify!($name));
                &self.lanes[i]
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $scalar {
                debug_assert!(i < $n, "lane {i} out of range for {}", stringify!($name));
                &mut self.lanes[i]
            }
        }

        vector_cmp!($name, $scalar, $mask, $n, eq, ==);
        vector_cmp!($name, $scalar, $mask, $n, ne, !=);
        vector_cmp!($name, $scalar, $mask, $n, lt, <);
        vector_cmp!($name, $scalar, $mask, $n, le, <=);
        vector_cmp!($name, $scalar, $mask, $n, gt, >);
        vector_cmp!($name, $scalar, $mask, $n, ge, >=);

        vector_binop!($name, $scalar, $n, Add, add, AddAssign, add_assign);
        vector_binop!($name, $scalar, $n, Sub, sub, SubAssign, sub_assign);
        vector_binop!($name, $scalar, $n, Mul, mul, MulAssign, mul_assign);
        vector_binop!($name, $scalar, $n, Div, div, DivAssign, div_assign);
        vector_binop!($name, $scalar, $n, Rem, rem, RemAssign, rem_assign);
    };
}

// ─── Operator macros ───────────────────────────────────────────────

// Lane-wise comparison methods. These return the mask vector
// (all-bits-one / all-bits-zero lanes), unlike `PartialEq` which
// answers for the whole value; the by-value signature keeps the two
// from colliding in operator position.
macro_rules! vector_cmp {
    ($name:ident, $scalar:ty, $mask:ident, $n:literal, $method:ident, $op:tt) => {
        impl $name {
            #[inline]
            pub fn $method(self, other: Self) -> $mask {
                crate::vector::map2::<$n, _, _, _>(self, other, |a, b| {
                    <<$scalar as crate::scalar::Scalar>::Mask as crate::scalar::MaskScalar>::from_bool(a $op b)
                })
            }
        }
    };
}

macro_rules! vector_binop {
    ($name:ident, $scalar:ty, $n:literal,
     $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl std::ops::$trait for $name {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                crate::vector::map2::<$n, _, _, _>(
                    self,
                    rhs,
                    <$scalar as std::ops::$trait>::$method,
                )
            }
        }

        impl std::ops::$trait<$scalar> for $name {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                crate::vector::map::<$n, _, _>(self, |a| std::ops::$trait::$method(a, rhs))
            }
        }

        impl std::ops::$trait<$name> for $scalar {
            type Output = $name;
            #[inline]
            fn $method(self, rhs: $name) -> $name {
                crate::vector::map::<$n, _, _>(rhs, |b| std::ops::$trait::$method(self, b))
            }
        }

        impl std::ops::$assign_trait for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }

        impl std::ops::$assign_trait<$scalar> for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! vector_shift {
    ($name:ident, $scalar:ty, $n:literal,
     $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl std::ops::$trait for $name {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                crate::vector::map2::<$n, _, _, _>(
                    self,
                    rhs,
                    <$scalar as std::ops::$trait>::$method,
                )
            }
        }

        impl std::ops::$trait<$scalar> for $name {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                crate::vector::map::<$n, _, _>(self, |a| std::ops::$trait::$method(a, rhs))
            }
        }

        impl std::ops::$assign_trait for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }

        impl std::ops::$assign_trait<$scalar> for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! vector_bitops {
    ($name:ident, $scalar:ty, $n:literal) => {
        vector_binop!($name, $scalar, $n, BitAnd, bitand, BitAndAssign, bitand_assign);
        vector_binop!($name, $scalar, $n, BitOr, bitor, BitOrAssign, bitor_assign);
        vector_binop!($name, $scalar, $n, BitXor, bitxor, BitXorAssign, bitxor_assign);
        vector_shift!($name, $scalar, $n, Shl, shl, ShlAssign, shl_assign);
        vector_shift!($name, $scalar, $n, Shr, shr, ShrAssign, shr_assign);

        impl std::ops::Not for $name {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                crate::vector::map::<$n, _, _>(self, <$scalar as std::ops::Not>::not)
            }
        }
    };
}

macro_rules! vector_neg {
    ($name:ident, $scalar:ty, $n:literal) => {
        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                crate::vector::map::<$n, _, _>(self, <$scalar as std::ops::Neg>::neg)
            }
        }
    };
}

macro_rules! vector_bitops5 {
    ($scalar:ty, $v2:ident, $v3:ident, $v4:ident, $v8:ident, $v16:ident) => {
        vector_bitops!($v2, $scalar, 2);
        vector_bitops!($v3, $scalar, 3);
        vector_bitops!($v4, $scalar, 4);
        vector_bitops!($v8, $scalar, 8);
        vector_bitops!($v16, $scalar, 16);
    };
}

macro_rules! vector_neg5 {
    ($scalar:ty, $v2:ident, $v3:ident, $v4:ident, $v8:ident, $v16:ident) => {
        vector_neg!($v2, $scalar, 2);
        vector_neg!($v3, $scalar, 3);
        vector_neg!($v4, $scalar, 4);
        vector_neg!($v8, $scalar, 8);
        vector_neg!($v16, $scalar, 16);
    };
}

// ─── Per-width constructors and named lanes ────────────────────────

macro_rules! vector_ctor2 {
    ($name:ident, $scalar:ty) => {
        impl $name {
            #[inline]
            pub fn new(x: $scalar, y: $scalar) -> Self {
                Self { lanes: [x, y] }
            }

            #[inline]
            pub fn x(self) -> $scalar {
                self.lanes[0]
            }
            #[inline]
            pub fn y(self) -> $scalar {
                self.lanes[1]
            }
            #[inline]
            pub fn set_x(&mut self, v: $scalar) {
                self.lanes[0] = v;
            }
            #[inline]
            pub fn set_y(&mut self, v: $scalar) {
                self.lanes[1] = v;
            }
        }
    };
}

macro_rules! vector_ctor3 {
    ($name:ident, $scalar:ty) => {
        impl $name {
            #[inline]
            pub fn new(x: $scalar, y: $scalar, z: $scalar) -> Self {
                Self {
                    lanes: [x, y, z, <$scalar as crate::scalar::Scalar>::ZERO],
                }
            }

            #[inline]
            pub fn x(self) -> $scalar {
                self.lanes[0]
            }
            #[inline]
            pub fn y(self) -> $scalar {
                self.lanes[1]
            }
            #[inline]
            pub fn z(self) -> $scalar {
                self.lanes[2]
            }
            #[inline]
            pub fn set_x(&mut self, v: $scalar) {
                self.lanes[0] = v;
            }
            #[inline]
            pub fn set_y(&mut self, v: $scalar) {
                self.lanes[1] = v;
            }
            #[inline]
            pub fn set_z(&mut self, v: $scalar) {
                self.lanes[2] = v;
            }
        }
    };
}

macro_rules! vector_ctor4 {
    ($name:ident, $scalar:ty) => {
        impl $name {
            #[inline]
            pub fn new(x: $scalar, y: $scalar, z: $scalar, w: $scalar) -> Self {
                Self { lanes: [x, y, z, w] }
            }

            #[inline]
            pub fn x(self) -> $scalar {
                self.lanes[0]
            }
            #[inline]
            pub fn y(self) -> $scalar {
                self.lanes[1]
            }
            #[inline]
            pub fn z(self) -> $scalar {
                self.lanes[2]
            }
            #[inline]
            pub fn w(self) -> $scalar {
                self.lanes[3]
            }
            #[inline]
            pub fn set_x(&mut self, v: $scalar) {
                self.lanes[0] = v;
            }
            #[inline]
            pub fn set_y(&mut self, v: $scalar) {
                self.lanes[1] = v;
            }
            #[inline]
            pub fn set_z(&mut self, v: $scalar) {
                self.lanes[2] = v;
            }
            #[inline]
            pub fn set_w(&mut self, v: $scalar) {
                self.lanes[3] = v;
            }
        }
    };
}

macro_rules! lane_accessor {
    ($scalar:ty, $idx:literal, $get:ident, $set:ident) => {
        #[inline]
        pub fn $get(self) -> $scalar {
            self.lanes[$idx]
        }
        #[inline]
        pub fn $set(&mut self, v: $scalar) {
            self.lanes[$idx] = v;
        }
    };
}

macro_rules! vector_ctor8 {
    ($name:ident, $scalar:ty) => {
        impl $name {
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                s0: $scalar,
                s1: $scalar,
                s2: $scalar,
                s3: $scalar,
                s4: $scalar,
                s5: $scalar,
                s6: $scalar,
                s7: $scalar,
            ) -> Self {
                Self {
                    lanes: [s0, s1, s2, s3, s4, s5, s6, s7],
                }
            }

            lane_accessor!($scalar, 0, s0, set_s0);
            lane_accessor!($scalar, 1, s1, set_s1);
            lane_accessor!($scalar, 2, s2, set_s2);
            lane_accessor!($scalar, 3, s3, set_s3);
            lane_accessor!($scalar, 4, s4, set_s4);
            lane_accessor!($scalar, 5, s5, set_s5);
            lane_accessor!($scalar, 6, s6, set_s6);
            lane_accessor!($scalar, 7, s7, set_s7);
        }
    };
}

macro_rules! vector_ctor16 {
    ($name:ident, $scalar:ty) => {
        impl $name {
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                s0: $scalar,
                s1: $scalar,
                s2: $scalar,
                s3: $scalar,
                s4: $scalar,
                s5: $scalar,
                s6: $scalar,
                s7: $scalar,
                s8: $scalar,
                s9: $scalar,
                sa: $scalar,
                sb: $scalar,
                sc: $scalar,
                sd: $scalar,
                se: $scalar,
                sf: $scalar,
            ) -> Self {
                Self {
                    lanes: [
                        s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, sa, sb, sc, sd, se, sf,
                    ],
                }
            }

            lane_accessor!($scalar, 0, s0, set_s0);
            lane_accessor!($scalar, 1, s1, set_s1);
            lane_accessor!($scalar, 2, s2, set_s2);
            lane_accessor!($scalar, 3, s3, set_s3);
            lane_accessor!($scalar, 4, s4, set_s4);
            lane_accessor!($scalar, 5, s5, set_s5);
            lane_accessor!($scalar, 6, s6, set_s6);
            lane_accessor!($scalar, 7, s7, set_s7);
            lane_accessor!($scalar, 8, s8, set_s8);
            lane_accessor!($scalar, 9, s9, set_s9);
            lane_accessor!($scalar, 10, sa, set_sa);
            lane_accessor!($scalar, 11, sb, set_sb);
            lane_accessor!($scalar, 12, sc, set_sc);
            lane_accessor!($scalar, 13, sd, set_sd);
            lane_accessor!($scalar, 14, se, set_se);
            lane_accessor!($scalar, 15, sf, set_sf);
        }
    };
}

// ─── Concatenation ─────────────────────────────────────────────────

macro_rules! vector_concat {
    ($scalar:ty, $v2:ident, $v3:ident, $v4:ident, $v8:ident, $v16:ident) => {
        impl From<($v2, $v2)> for $v4 {
            #[inline]
            fn from((lo, hi): ($v2, $v2)) -> Self {
                Self::new(lo.x(), lo.y(), hi.x(), hi.y())
            }
        }

        impl From<($v2, $scalar)> for $v3 {
            #[inline]
            fn from((v, s): ($v2, $scalar)) -> Self {
                Self::new(v.x(), v.y(), s)
            }
        }

        impl From<($v3, $scalar)> for $v4 {
            #[inline]
            fn from((v, s): ($v3, $scalar)) -> Self {
                Self::new(v.x(), v.y(), v.z(), s)
            }
        }

        impl From<($v4, $v4)> for $v8 {
            #[inline]
            fn from((lo, hi): ($v4, $v4)) -> Self {
                <$v8 as crate::vector::Vector<8>>::from_fn(|i| {
                    if i < 4 {
                        lo.lane(i)
                    } else {
                        hi.lane(i - 4)
                    }
                })
            }
        }

        impl From<($v8, $v8)> for $v16 {
            #[inline]
            fn from((lo, hi): ($v8, $v8)) -> Self {
                <$v16 as crate::vector::Vector<16>>::from_fn(|i| {
                    if i < 8 {
                        lo.lane(i)
                    } else {
                        hi.lane(i - 8)
                    }
                })
            }
        }
    };
}

// ─── Family instantiation ──────────────────────────────────────────

macro_rules! vector_family {
    ($scalar:ty, $v2:ident, $v3:ident, $v4:ident, $v8:ident, $v16:ident,
     masks($m2:ident, $m3:ident, $m4:ident, $m8:ident, $m16:ident),
     aligns($a2:literal, $a3:literal, $a4:literal, $a8:literal, $a16:literal)) => {
        vector_type!($v2, $scalar, $m2, 2, 2, $a2);
        vector_type!($v3, $scalar, $m3, 3, 4, $a3);
        vector_type!($v4, $scalar, $m4, 4, 4, $a4);
        vector_type!($v8, $scalar, $m8, 8, 8, $a8);
        vector_type!($v16, $scalar, $m16, 16, 16, $a16);
        vector_ctor2!($v2, $scalar);
        vector_ctor3!($v3, $scalar);
        vector_ctor4!($v4, $scalar);
        vector_ctor8!($v8, $scalar);
        vector_ctor16!($v16, $scalar);
        vector_concat!($scalar, $v2, $v3, $v4, $v8, $v16);
    };
}

vector_family!(i8, Char2, Char3, Char4, Char8, Char16,
    masks(Char2, Char3, Char4, Char8, Char16),
    aligns(2, 4, 4, 8, 16));
vector_family!(u8, UChar2, UChar3, UChar4, UChar8, UChar16,
    masks(Char2, Char3, Char4, Char8, Char16),
    aligns(2, 4, 4, 8, 16));
vector_family!(i16, Short2, Short3, Short4, Short8, Short16,
    masks(Short2, Short3, Short4, Short8, Short16),
    aligns(4, 8, 8, 16, 32));
vector_family!(u16, UShort2, UShort3, UShort4, UShort8, UShort16,
    masks(Short2, Short3, Short4, Short8, Short16),
    aligns(4, 8, 8, 16, 32));
vector_family!(i32, Int2, Int3, Int4, Int8, Int16,
    masks(Int2, Int3, Int4, Int8, Int16),
    aligns(8, 16, 16, 32, 64));
vector_family!(u32, UInt2, UInt3, UInt4, UInt8, UInt16,
    masks(Int2, Int3, Int4, Int8, Int16),
    aligns(8, 16, 16, 32, 64));
vector_family!(i64, Long2, Long3, Long4, Long8, Long16,
    masks(Long2, Long3, Long4, Long8, Long16),
    aligns(16, 32, 32, 64, 128));
vector_family!(u64, ULong2, ULong3, ULong4, ULong8, ULong16,
    masks(Long2, Long3, Long4, Long8, Long16),
    aligns(16, 32, 32, 64, 128));
vector_family!(f32, Float2, Float3, Float4, Float8, Float16,
    masks(Int2, Int3, Int4, Int8, Int16),
    aligns(8, 16, 16, 32, 64));
vector_family!(f64, Double2, Double3, Double4, Double8, Double16,
    masks(Long2, Long3, Long4, Long8, Long16),
    aligns(16, 32, 32, 64, 128));

vector_bitops5!(i8, Char2, Char3, Char4, Char8, Char16);
vector_bitops5!(u8, UChar2, UChar3, UChar4, UChar8, UChar16);
vector_bitops5!(i16, Short2, Short3, Short4, Short8, Short16);
vector_bitops5!(u16, UShort2, UShort3, UShort4, UShort8, UShort16);
vector_bitops5!(i32, Int2, Int3, Int4, Int8, Int16);
vector_bitops5!(u32, UInt2, UInt3, UInt4, UInt8, UInt16);
vector_bitops5!(i64, Long2, Long3, Long4, Long8, Long16);
vector_bitops5!(u64, ULong2, ULong3, ULong4, ULong8, ULong16);

vector_neg5!(i8, Char2, Char3, Char4, Char8, Char16);
vector_neg5!(i16, Short2, Short3, Short4, Short8, Short16);
vector_neg5!(i32, Int2, Int3, Int4, Int8, Int16);
vector_neg5!(i64, Long2, Long3, Long4, Long8, Long16);
vector_neg5!(f32, Float2, Float3, Float4, Float8, Float16);
vector_neg5!(f64, Double2, Double3, Double4, Double8, Double16);

// ─── Tests ─────────────────────────────────────────────────────────
