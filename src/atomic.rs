//! Atomic memory operations on scalar locations.
//!
//! The only inter-thread ordering this subsystem provides. Each
//! operation exists as a `seq_cst` convenience plus an `_explicit`
//! variant taking a [`std::sync::atomic::Ordering`], and accepts either
//! a raw pointer or the space-tagged equivalent — both forward to the
//! identical implementation through [`AtomicTarget`].
//!
//! Targets are always scalar; there is no atomic read-modify-write on
//! whole vectors.

use crate::ptr::{Ptr, Space};
use crate::scalar::Scalar;
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, Ordering};

// ─── Target abstraction ────────────────────────────────────────────

/// Anything that names an atomic scalar location: a raw pointer or a
/// space-tagged pointer.
pub trait AtomicTarget<T>: Copy {
    fn target(self) -> *mut T;
}

impl<T> AtomicTarget<T> for *mut T {
    #[inline]
    fn target(self) -> *mut T {
        self
    }
}

impl<S: Space, T> AtomicTarget<T> for Ptr<S, T> {
    #[inline]
    fn target(self) -> *mut T {
        self.as_raw()
    }
}

// ─── Scalar capability ─────────────────────────────────────────────

/// A scalar type with native atomic support.
pub trait AtomicScalar: Scalar {
    /// # Safety
    /// `p` must be valid, sufficiently aligned, and only accessed
    /// atomically for the duration of concurrent use.
    unsafe fn store_at(p: *mut Self, v: Self, order: Ordering);
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn load_at(p: *mut Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn swap_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn compare_exchange_at(
        p: *mut Self,
        expected: &mut Self,
        desired: Self,
        success: Ordering,
    ) -> bool;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_add_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_sub_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_and_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_or_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_xor_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_min_at(p: *mut Self, v: Self, order: Ordering) -> Self;
    /// # Safety
    /// See [`AtomicScalar::store_at`].
    unsafe fn fetch_max_at(p: *mut Self, v: Self, order: Ordering) -> Self;
}

/// Failure ordering for a compare-exchange: the success ordering with
/// any release component stripped.
#[inline]
fn failure_order(success: Ordering) -> Ordering {
    match success {
        Ordering::Release => Ordering::Relaxed,
        Ordering::AcqRel => Ordering::Acquire,
        other => other,
    }
}

macro_rules! impl_atomic_scalar {
    ($($t:ty => $atomic:ty),+ $(,)?) => {
        $(
            impl AtomicScalar for $t {
                #[inline]
                unsafe fn store_at(p: *mut Self, v: Self, order: Ordering) {
                    <$atomic>::from_ptr(p).store(v, order)
                }

                #[inline]
                unsafe fn load_at(p: *mut Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).load(order)
                }

                #[inline]
                unsafe fn swap_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).swap(v, order)
                }

                #[inline]
                unsafe fn compare_exchange_at(
                    p: *mut Self,
                    expected: &mut Self,
                    desired: Self,
                    success: Ordering,
                ) -> bool {
                    match <$atomic>::from_ptr(p).compare_exchange(
                        *expected,
                        desired,
                        success,
                        failure_order(success),
                    ) {
                        Ok(_) => true,
                        Err(actual) => {
                            *expected = actual;
                            false
                        }
                    }
                }

                #[inline]
                unsafe fn fetch_add_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_add(v, order)
                }

                #[inline]
                unsafe fn fetch_sub_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_sub(v, order)
                }

                #[inline]
                unsafe fn fetch_and_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_and(v, order)
                }

                #[inline]
                unsafe fn fetch_or_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_or(v, order)
                }

                #[inline]
                unsafe fn fetch_xor_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_xor(v, order)
                }

                #[inline]
                unsafe fn fetch_min_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_min(v, order)
                }

                #[inline]
                unsafe fn fetch_max_at(p: *mut Self, v: Self, order: Ordering) -> Self {
                    <$atomic>::from_ptr(p).fetch_max(v, order)
                }
            }
        )+
    };
}

impl_atomic_scalar!(
    i32 => AtomicI32,
    u32 => AtomicU32,
    i64 => AtomicI64,
    u64 => AtomicU64,
);

// ─── Free-function surface ─────────────────────────────────────────

macro_rules! atomic_fetch_op {
    ($(#[$meta:meta])* $name:ident, $name_explicit:ident, $method:ident) => {
        $(#[$meta])*
        ///
        /// Returns the value the target held before the update.
        /// Sequentially consistent.
        ///
        /// # Safety
        /// The target must be valid, aligned, and free of concurrent
        /// non-atomic access.
        #[inline]
        pub unsafe fn $name<T: AtomicScalar>(p: impl AtomicTarget<T>, v: T) -> T {
            T::$method(p.target(), v, Ordering::SeqCst)
        }

        $(#[$meta])*
        ///
        /// Returns the value the target held before the update, with an
        /// explicit memory order.
        ///
        /// # Safety
        /// The target must be valid, aligned, and free of concurrent
        /// non-atomic access.
        #[inline]
        pub unsafe fn $name_explicit<T: AtomicScalar>(
            p: impl AtomicTarget<T>,
            v: T,
            order: Ordering,
        ) -> T {
            T::$method(p.target(), v, order)
        }
    };
}

/// Atomically store `v`. Sequentially consistent.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_store<T: AtomicScalar>(p: impl AtomicTarget<T>, v: T) {
    T::store_at(p.target(), v, Ordering::SeqCst)
}

/// Atomically store `v` with an explicit memory order (`Relaxed`,
/// `Release` or `SeqCst`).
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_store_explicit<T: AtomicScalar>(
    p: impl AtomicTarget<T>,
    v: T,
    order: Ordering,
) {
    T::store_at(p.target(), v, order)
}

/// Atomically load the target. Sequentially consistent.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_load<T: AtomicScalar>(p: impl AtomicTarget<T>) -> T {
    T::load_at(p.target(), Ordering::SeqCst)
}

/// Atomically load the target with an explicit memory order
/// (`Relaxed`, `Acquire` or `SeqCst`).
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_load_explicit<T: AtomicScalar>(
    p: impl AtomicTarget<T>,
    order: Ordering,
) -> T {
    T::load_at(p.target(), order)
}

/// Atomically replace the target with `v`, returning the previous
/// value. Sequentially consistent.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_exchange<T: AtomicScalar>(p: impl AtomicTarget<T>, v: T) -> T {
    T::swap_at(p.target(), v, Ordering::SeqCst)
}

/// Atomically replace the target with `v`, returning the previous
/// value, with an explicit memory order.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_exchange_explicit<T: AtomicScalar>(
    p: impl AtomicTarget<T>,
    v: T,
    order: Ordering,
) -> T {
    T::swap_at(p.target(), v, order)
}

/// Atomically compare the target against `*expected`; on match, store
/// `desired` and return true. On mismatch, write the observed value
/// into `*expected` and return false. Sequentially consistent.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_compare_exchange_strong<T: AtomicScalar>(
    p: impl AtomicTarget<T>,
    expected: &mut T,
    desired: T,
) -> bool {
    T::compare_exchange_at(p.target(), expected, desired, Ordering::SeqCst)
}

/// [`atomic_compare_exchange_strong`] with an explicit success order;
/// the failure order is the same with any release component stripped.
///
/// # Safety
/// The target must be valid, aligned, and free of concurrent
/// non-atomic access.
#[inline]
pub unsafe fn atomic_compare_exchange_strong_explicit<T: AtomicScalar>(
    p: impl AtomicTarget<T>,
    expected: &mut T,
    desired: T,
    success: Ordering,
) -> bool {
    T::compare_exchange_at(p.target(), expected, desired, success)
}

atomic_fetch_op!(
    /// Atomically add `v` to the target.
    atomic_fetch_add,
    atomic_fetch_add_explicit,
    fetch_add_at
);
atomic_fetch_op!(
    /// Atomically subtract `v` from the target.
    atomic_fetch_sub,
    atomic_fetch_sub_explicit,
    fetch_sub_at
);
atomic_fetch_op!(
    /// Atomically AND the target with `v`.
    atomic_fetch_and,
    atomic_fetch_and_explicit,
    fetch_and_at
);
atomic_fetch_op!(
    /// Atomically OR the target with `v`.
    atomic_fetch_or,
    atomic_fetch_or_explicit,
    fetch_or_at
);
atomic_fetch_op!(
    /// Atomically XOR the target with `v`.
    atomic_fetch_xor,
    atomic_fetch_xor_explicit,
    fetch_xor_at
);
atomic_fetch_op!(
    /// Atomically take the minimum of the target and `v`.
    atomic_fetch_min,
    atomic_fetch_min_explicit,
    fetch_min_at
);
atomic_fetch_op!(
    /// Atomically take the maximum of the target and `v`.
    atomic_fetch_max,
    atomic_fetch_max_explicit,
    fetch_max_at
);

// ─── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptr::GlobalPtr;

    #[test]
    fn store_load_round_trip() {
        let mut x = 0u32;
        let p = &mut x as *mut u32;
        unsafe {
            atomic_store(p, 42);
            assert_eq!(atomic_load(p), 42);
        }
    }

    #[test]
    fn fetch_add_returns_pre_update_value() {
        let mut x = 10i64;
        let p = &mut x as *mut i64;
        unsafe {
            assert_eq!(atomic_fetch_add(p, 5), 10);
            assert_eq!(atomic_load(p), 15);
            assert_eq!(atomic_fetch_sub(p, 20), 15);
            assert_eq!(atomic_load(p), -5);
        }
    }

    #[test]
    fn bitwise_fetch_ops() {
        let mut x = 0b1100u32;
        let p = &mut x as *mut u32;
        unsafe {
            assert_eq!(atomic_fetch_and(p, 0b1010), 0b1100);
            assert_eq!(atomic_fetch_or(p, 0b0001), 0b1000);
            assert_eq!(atomic_fetch_xor(p, 0b1111), 0b1001);
            assert_eq!(atomic_load(p), 0b0110);
        }
    }

    #[test]
    fn min_max_respect_signedness() {
        let mut s = -5i32;
        let mut u = 5u32;
        unsafe {
            assert_eq!(atomic_fetch_min(&mut s as *mut i32, -10), -5);
            assert_eq!(atomic_load(&mut s as *mut i32), -10);
            assert_eq!(atomic_fetch_max(&mut u as *mut u32, 3), 5);
            assert_eq!(atomic_load(&mut u as *mut u32), 5);
        }
    }

    #[test]
    fn compare_exchange_success_and_failure() {
        let mut x = 7u32;
        let p = &mut x as *mut u32;
        unsafe {
            let mut expected = 7u32;
            assert!(atomic_compare_exchange_strong(p, &mut expected, 8));
            assert_eq!(atomic_load(p), 8);

            // Failure writes the observed value back into `expected`.
            let mut stale = 7u32;
            assert!(!atomic_compare_exchange_strong(p, &mut stale, 9));
            assert_eq!(stale, 8);
            assert_eq!(atomic_load(p), 8);
        }
    }

    #[test]
    fn space_tagged_pointers_forward() {
        let mut x = 0i32;
        let p = GlobalPtr::from_mut(&mut x);
        unsafe {
            atomic_store(p, 3);
            assert_eq!(atomic_fetch_add(p, 4), 3);
            assert_eq!(atomic_load_explicit(p, Ordering::Acquire), 7);
        }
    }

    #[test]
    fn concurrent_counter() {
        let mut counter = 0u64;
        let p = GlobalPtr::from_mut(&mut counter);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(move || {
                    for _ in 0..1000 {
                        unsafe {
                            atomic_fetch_add_explicit(p, 1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });
        assert_eq!(counter, 4000);
    }
}
