//! `OffHeap` — an RAII region for absolute-mode locations.

use core::alloc::Layout;
use core::ptr::NonNull;

use super::raw::{self, AllocError};
use crate::kind::{ArrayLayout, ScalarKind};
use crate::loc::MemoryLocation;
use crate::scalar::AtomicScalar;

/// An owned, zero-initialized off-heap byte region.
///
/// The region is the owner the resolver's lifetime rules need: locations
/// derived from it borrow the region and cannot outlive it, and dropping the
/// region frees the storage.
#[derive(Debug)]
pub struct OffHeap {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl OffHeap {
    /// Allocates a zeroed region for `layout`.
    ///
    /// # Errors
    /// [`AllocError`] if allocation fails or `layout` is zero-sized.
    pub fn new(layout: Layout) -> Result<Self, AllocError> {
        let ptr = raw::allocate_zeroed(layout)?;
        Ok(Self { ptr, layout })
    }

    /// Allocates a zeroed region for `len` scalars of `kind`, aligned for
    /// atomic access to that kind.
    ///
    /// # Errors
    /// [`AllocError`] if allocation fails or `len` is zero or overflows.
    pub fn for_kind(kind: ScalarKind, len: usize) -> Result<Self, AllocError> {
        let size = kind.width().checked_mul(len).ok_or(AllocError)?;
        let layout = Layout::from_size_align(size, kind.alignment()).map_err(|_| AllocError)?;
        Self::new(layout)
    }

    /// The region's base address.
    #[inline]
    pub fn base_address(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// The region's base pointer.
    #[inline]
    pub fn as_ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    /// The region's size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Whether the region has zero length (never true for a live region).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A location addressing the `T` at `byte_offset` into the region.
    ///
    /// # Panics
    /// If the scalar would extend past the region or the offset is not
    /// kind-aligned.
    pub fn location<T: AtomicScalar>(&self, byte_offset: usize) -> MemoryLocation<'_, T> {
        let kind = T::KIND;
        // checked_add: a huge offset must not wrap past the bounds check.
        assert!(
            byte_offset
                .checked_add(kind.width())
                .is_some_and(|end| end <= self.len()),
            "offset {byte_offset} out of range for {} byte region",
            self.len()
        );
        assert!(
            (self.base_address() + byte_offset) % kind.alignment() == 0,
            "offset {byte_offset} is not aligned for {kind:?}"
        );
        // SAFETY: in bounds and aligned per the asserts; the region owns the
        // bytes for the borrow's duration and never hands out non-atomic
        // references to them.
        unsafe { MemoryLocation::from_raw_address(self.base_address() + byte_offset) }
    }

    /// A location addressing element `index` of the region viewed as a dense
    /// array of `T`.
    ///
    /// # Panics
    /// If `index` is out of range for the region.
    pub fn element<T: AtomicScalar>(&self, index: usize) -> MemoryLocation<'_, T> {
        self.location(ArrayLayout::of(T::KIND).offset_of(index))
    }
}

impl Drop for OffHeap {
    fn drop(&mut self) {
        // SAFETY: ptr/layout came from allocate_zeroed and are freed once.
        unsafe { raw::free(self.ptr, self.layout) };
    }
}

// SAFETY: the region is a plain byte allocation; all shared access to it
// goes through atomic locations.
unsafe impl Send for OffHeap {}
unsafe impl Sync for OffHeap {}
