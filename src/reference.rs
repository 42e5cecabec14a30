//! Reference-typed slots: the CAS contract over pointer identity.
//!
//! A [`RefSlot`] holds one pointer; a [`RefLocation`] is the borrow-shaped
//! view the operation families run against. The compared value is the
//! pointer itself — reference identity, never pointee contents.

use core::sync::atomic::AtomicPtr;

use crate::consistency::Consistency;

/// A shareable slot holding one `*mut T`, accessed atomically.
#[repr(transparent)]
#[derive(Debug)]
pub struct RefSlot<T> {
    inner: AtomicPtr<T>,
}

impl<T> RefSlot<T> {
    /// Creates a slot holding `ptr` (which may be null).
    #[inline]
    pub const fn new(ptr: *mut T) -> Self {
        Self {
            inner: AtomicPtr::new(ptr),
        }
    }

    /// A location addressing this slot.
    #[inline(always)]
    pub fn location(&self) -> RefLocation<'_, T> {
        RefLocation { inner: &self.inner }
    }

    /// Consumes the slot and returns the contained pointer.
    #[inline]
    pub fn into_inner(self) -> *mut T {
        self.inner.into_inner()
    }
}

impl<T> Default for RefSlot<T> {
    fn default() -> Self {
        Self::new(core::ptr::null_mut())
    }
}

/// An addressable reference-typed cell.
///
/// Same operation surface and level semantics as the scalar families, with
/// bitwise comparison replaced by pointer identity.
#[derive(Debug)]
pub struct RefLocation<'a, T> {
    inner: &'a AtomicPtr<T>,
}

impl<'a, T> Clone for RefLocation<'a, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for RefLocation<'a, T> {}

impl<'a, T> RefLocation<'a, T> {
    /// Wraps an existing atomic pointer.
    #[inline]
    pub const fn from_atomic(inner: &'a AtomicPtr<T>) -> Self {
        Self { inner }
    }

    /// Volatile read of the pointer.
    #[inline(always)]
    pub fn get(self) -> *mut T {
        self.get_with(Consistency::Volatile)
    }

    /// Reads the pointer at the requested level.
    #[inline(always)]
    pub fn get_with(self, level: Consistency) -> *mut T {
        self.inner.load(level.load_ordering())
    }

    /// Volatile write of the pointer.
    #[inline(always)]
    pub fn put(self, ptr: *mut T) {
        self.put_with(ptr, Consistency::Volatile);
    }

    /// Writes the pointer at the requested level.
    #[inline(always)]
    pub fn put_with(self, ptr: *mut T, level: Consistency) {
        self.inner.store(ptr, level.store_ordering());
    }

    /// Acquire read.
    #[inline(always)]
    pub fn get_acquire(self) -> *mut T {
        self.get_with(Consistency::Acquire)
    }

    /// Release write.
    #[inline(always)]
    pub fn put_release(self, ptr: *mut T) {
        self.put_with(ptr, Consistency::Release);
    }

    /// Strong CAS on pointer identity at volatile strength.
    #[inline(always)]
    pub fn compare_and_set(self, expected: *mut T, new: *mut T) -> bool {
        self.compare_and_exchange_with(expected, new, Consistency::Volatile)
            .is_ok()
    }

    /// Strong compare-exchange, returning the pointer observed at the moment
    /// of comparison.
    #[inline(always)]
    pub fn compare_and_exchange(self, expected: *mut T, new: *mut T) -> *mut T {
        match self.compare_and_exchange_with(expected, new, Consistency::Volatile) {
            Ok(witnessed) | Err(witnessed) => witnessed,
        }
    }

    /// Strong compare-exchange at an explicit level.
    #[inline(always)]
    pub fn compare_and_exchange_with(
        self,
        expected: *mut T,
        new: *mut T,
        level: Consistency,
    ) -> Result<*mut T, *mut T> {
        self.inner.compare_exchange(
            expected,
            new,
            level.rmw_ordering(),
            level.cas_failure_ordering(),
        )
    }

    /// Weak CAS on pointer identity; may fail spuriously.
    #[inline(always)]
    pub fn weak_compare_and_set(self, expected: *mut T, new: *mut T) -> bool {
        self.weak_compare_and_set_with(expected, new, Consistency::Volatile)
    }

    /// Weak CAS at an explicit level.
    #[inline(always)]
    pub fn weak_compare_and_set_with(
        self,
        expected: *mut T,
        new: *mut T,
        level: Consistency,
    ) -> bool {
        self.inner
            .compare_exchange_weak(
                expected,
                new,
                level.rmw_ordering(),
                level.cas_failure_ordering(),
            )
            .is_ok()
    }

    /// Unconditional atomic swap, returning the previous pointer.
    #[inline(always)]
    pub fn fetch_set(self, new: *mut T) -> *mut T {
        self.fetch_set_with(new, Consistency::Volatile)
    }

    /// [`fetch_set`](Self::fetch_set) at an explicit level.
    #[inline(always)]
    pub fn fetch_set_with(self, new: *mut T, level: Consistency) -> *mut T {
        self.inner.swap(new, level.rmw_ordering())
    }
}
