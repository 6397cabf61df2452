//! Space-tagged pointers.
//!
//! Kernel languages distinguish global/local/constant/private memory
//! in the type system; on this CPU backend every space is the same
//! flat address space. The tag exists purely so kernel source keeps
//! its overload structure and readability — the wrapper is
//! `#[repr(transparent)]` over the raw pointer and carries no runtime
//! payload beyond the address.
//!
//! No implicit conversion exists between spaces. The only provided
//! conversion adds qualification: `Ptr<S, T>` into `ConstPtr<S, T>`.

use std::fmt;
use std::marker::PhantomData;

// ─── Space tags ────────────────────────────────────────────────────

mod sealed {
    pub trait Sealed {}
}

/// A logical memory space, inherited from GPU kernel-language
/// conventions. Compile-time only.
pub trait Space: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

macro_rules! space {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Space for $name {
            const NAME: &'static str = $label;
        }
    };
}

space!(
    /// Device-visible buffer memory.
    Global,
    "global"
);
space!(
    /// Work-group shared memory. Degenerate on this backend: one
    /// work-item per group, so it behaves like private memory.
    Local,
    "local"
);
space!(
    /// Read-only memory.
    Constant,
    "constant"
);
space!(
    /// Per-work-item memory.
    Private,
    "private"
);

// ─── Pointer wrappers ──────────────────────────────────────────────

/// A mutable pointer into memory space `S`.
///
/// Pure view over caller-owned memory; never owns. Shareable across
/// worker threads because the kernel memory model makes concurrent
/// unsynchronized access to the pointee undefined — ordering between
/// work-groups comes only from the atomic library.
#[repr(transparent)]
pub struct Ptr<S: Space, T> {
    raw: *mut T,
    _space: PhantomData<S>,
}

/// A read-only pointer into memory space `S`.
#[repr(transparent)]
pub struct ConstPtr<S: Space, T> {
    raw: *const T,
    _space: PhantomData<S>,
}

pub type GlobalPtr<T> = Ptr<Global, T>;
pub type LocalPtr<T> = Ptr<Local, T>;
pub type PrivatePtr<T> = Ptr<Private, T>;
pub type ConstantPtr<T> = ConstPtr<Constant, T>;

impl<S: Space, T> Ptr<S, T> {
    #[inline]
    pub fn from_raw(raw: *mut T) -> Self {
        Self {
            raw,
            _space: PhantomData,
        }
    }

    #[inline]
    pub fn from_mut(r: &mut T) -> Self {
        Self::from_raw(r)
    }

    #[inline]
    pub fn as_raw(self) -> *mut T {
        self.raw
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Adds qualification; the reverse conversion does not exist.
    #[inline]
    pub fn as_const(self) -> ConstPtr<S, T> {
        ConstPtr {
            raw: self.raw,
            _space: PhantomData,
        }
    }

    /// # Safety
    /// Same contract as `pointer::add`.
    #[inline]
    pub unsafe fn add(self, count: usize) -> Self {
        Self::from_raw(self.raw.add(count))
    }

    /// # Safety
    /// Same contract as `pointer::offset`.
    #[inline]
    pub unsafe fn offset(self, count: isize) -> Self {
        Self::from_raw(self.raw.offset(count))
    }

    /// # Safety
    /// The pointer must be valid for reads and the pointee initialized.
    #[inline]
    pub unsafe fn read(self) -> T {
        self.raw.read()
    }

    /// # Safety
    /// The pointer must be valid for writes.
    #[inline]
    pub unsafe fn write(self, v: T) {
        self.raw.write(v)
    }
}

impl<S: Space, T> ConstPtr<S, T> {
    #[inline]
    pub fn from_raw(raw: *const T) -> Self {
        Self {
            raw,
            _space: PhantomData,
        }
    }

    #[inline]
    pub fn from_ref(r: &T) -> Self {
        Self::from_raw(r)
    }

    #[inline]
    pub fn as_raw(self) -> *const T {
        self.raw
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// # Safety
    /// Same contract as `pointer::add`.
    #[inline]
    pub unsafe fn add(self, count: usize) -> Self {
        Self::from_raw(self.raw.add(count))
    }

    /// # Safety
    /// Same contract as `pointer::offset`.
    #[inline]
    pub unsafe fn offset(self, count: isize) -> Self {
        Self::from_raw(self.raw.offset(count))
    }

    /// # Safety
    /// The pointer must be valid for reads and the pointee initialized.
    #[inline]
    pub unsafe fn read(self) -> T {
        self.raw.read()
    }
}

impl<S: Space, T> From<Ptr<S, T>> for ConstPtr<S, T> {
    #[inline]
    fn from(p: Ptr<S, T>) -> Self {
        p.as_const()
    }
}

// Manual impls: derives would demand bounds on T, and a pointer copy
// never depends on the pointee.
impl<S: Space, T> Clone for Ptr<S, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<S: Space, T> Copy for Ptr<S, T> {}

impl<S: Space, T> Clone for ConstPtr<S, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<S: Space, T> Copy for ConstPtr<S, T> {}

impl<S: Space, T> fmt::Debug for Ptr<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr<{}>({:p})", S::NAME, self.raw)
    }
}

impl<S: Space, T> fmt::Debug for ConstPtr<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstPtr<{}>({:p})", S::NAME, self.raw)
    }
}

impl<S: Space, T> PartialEq for Ptr<S, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}
impl<S: Space, T> Eq for Ptr<S, T> {}

impl<S: Space, T> PartialEq for ConstPtr<S, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}
impl<S: Space, T> Eq for ConstPtr<S, T> {}

// The dispatcher hands kernels pointers into shared buffers. Data
// races on the pointee are the kernel author's contract, exactly as on
// a GPU; the wrapper itself is just an address.
unsafe impl<S: Space, T> Send for Ptr<S, T> {}
unsafe impl<S: Space, T> Sync for Ptr<S, T> {}
unsafe impl<S: Space, T> Send for ConstPtr<S, T> {}
unsafe impl<S: Space, T> Sync for ConstPtr<S, T> {}

// ─── Tests ─────────────────────────────────────────────────────────
