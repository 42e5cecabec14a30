//! `ScalarCell` — the safe owner of one atomically accessed scalar.

use core::cell::UnsafeCell;
use core::ptr::NonNull;

use super::MemoryLocation;
use crate::scalar::AtomicScalar;

/// A shareable cell holding one scalar of kind `T`.
///
/// This is the safe route into the accessor families: the cell owns its
/// storage, so a [`MemoryLocation`] derived from it is always valid,
/// kind-aligned, and kind-stable for the borrow's duration. All shared
/// access goes through the location's atomics.
#[repr(transparent)]
#[derive(Debug)]
pub struct ScalarCell<T: AtomicScalar> {
    value: UnsafeCell<T>,
}

impl<T: AtomicScalar> ScalarCell<T> {
    /// Creates a cell containing `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
        }
    }

    /// A location addressing this cell.
    #[inline(always)]
    pub fn location(&self) -> MemoryLocation<'_, T> {
        // SAFETY: the cell owns kind-aligned storage for the borrow's
        // duration and every access through the location is atomic.
        unsafe { MemoryLocation::from_ptr(NonNull::new_unchecked(self.value.get())) }
    }

    /// Exclusive access to the value; no atomics needed.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the cell and returns the contained value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: AtomicScalar + Default> Default for ScalarCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: AtomicScalar> From<T> for ScalarCell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// SAFETY: shared access to the interior happens exclusively through the
// width-matched atomics; `T` itself is a plain scalar, always Send.
unsafe impl<T: AtomicScalar> Sync for ScalarCell<T> {}
unsafe impl<T: AtomicScalar> Send for ScalarCell<T> {}
