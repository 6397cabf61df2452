//! Host-side buffers and scoped mappings.
//!
//! A `HostBuffer` plays the role device memory plays on a real
//! accelerator; `map()` hands out the typed address range for the
//! duration of a scope and the unmap runs on every exit path through
//! `Drop`, panics included.

use crate::ptr::{ConstantPtr, ConstPtr, GlobalPtr, Ptr};

// ─── Buffer ────────────────────────────────────────────────────────

/// An element-count-sized host allocation standing in for a device
/// buffer.
#[derive(Clone, Debug)]
pub struct HostBuffer<T> {
    data: Vec<T>,
}

impl<T: Default + Clone> HostBuffer<T> {
    /// Allocate `len` default-initialized elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }
}

impl<T> HostBuffer<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Map the buffer for kernel access. The mapping is unmapped when
    /// the guard drops, whichever way the scope exits.
    pub fn map(&mut self) -> Mapping<'_, T> {
        Mapping {
            ptr: self.data.as_mut_ptr(),
            len: self.data.len(),
            mapped: true,
            _buffer: std::marker::PhantomData,
        }
    }
}

// ─── Mapping guard ─────────────────────────────────────────────────

/// A live mapping of a [`HostBuffer`]. Borrows the buffer mutably, so
/// the host cannot touch the storage while kernels hold pointers into
/// it.
#[derive(Debug)]
pub struct Mapping<'a, T> {
    ptr: *mut T,
    len: usize,
    mapped: bool,
    _buffer: std::marker::PhantomData<&'a mut HostBuffer<T>>,
}

impl<T> Mapping<'_, T> {
    pub fn as_mut_ptr(&self) -> *mut T {
        debug_assert!(self.mapped);
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The mapped range as kernel-facing global memory.
    pub fn global_ptr(&self) -> GlobalPtr<T> {
        Ptr::from_raw(self.as_mut_ptr())
    }

    /// The mapped range as kernel-facing constant memory.
    pub fn constant_ptr(&self) -> ConstantPtr<T> {
        ConstPtr::from_raw(self.as_mut_ptr() as *const T)
    }

    /// Release the mapping early. Idempotent; `Drop` performs the same
    /// release if this is never called.
    pub fn unmap(&mut self) {
        self.mapped = false;
    }
}

impl<T> Drop for Mapping<'_, T> {
    fn drop(&mut self) {
        self.unmap();
    }
}

// Mappings are handed across the rayon pool alongside the kernels that
// use them.
unsafe impl<T: Send> Send for Mapping<'_, T> {}
unsafe impl<T: Sync> Sync for Mapping<'_, T> {}

// ─── Tests ─────────────────────────────────────────────────────────
