//! Allocate/reallocate/free over the global allocator.

use core::alloc::Layout;
use core::ptr::NonNull;

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("memory allocation failed")
    }
}

impl std::error::Error for AllocError {}

/// Allocates uninitialized memory for `layout`.
///
/// # Errors
/// [`AllocError`] if the allocator refuses or `layout` is zero-sized.
pub fn allocate(layout: Layout) -> Result<NonNull<u8>, AllocError> {
    if layout.size() == 0 {
        return Err(AllocError);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(size = layout.size(), align = layout.align(), "allocate");
    // SAFETY: layout has non-zero size.
    NonNull::new(unsafe { std::alloc::alloc(layout) }).ok_or(AllocError)
}

/// Allocates zeroed memory for `layout`.
///
/// # Errors
/// [`AllocError`] if the allocator refuses or `layout` is zero-sized.
pub fn allocate_zeroed(layout: Layout) -> Result<NonNull<u8>, AllocError> {
    if layout.size() == 0 {
        return Err(AllocError);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(size = layout.size(), align = layout.align(), "allocate_zeroed");
    // SAFETY: layout has non-zero size.
    NonNull::new(unsafe { std::alloc::alloc_zeroed(layout) }).ok_or(AllocError)
}

/// Grows or shrinks an allocation to `new_size` bytes, preserving contents
/// up to the smaller of the two sizes.
///
/// # Errors
/// [`AllocError`] if the allocator refuses or `new_size` is zero.
///
/// # Safety
/// `ptr` must denote a live block allocated by this module with `layout`,
/// and no location into the block may be used across the call (the block
/// may move).
pub unsafe fn reallocate(
    ptr: NonNull<u8>,
    layout: Layout,
    new_size: usize,
) -> Result<NonNull<u8>, AllocError> {
    if new_size == 0 {
        return Err(AllocError);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(old_size = layout.size(), new_size, "reallocate");
    // SAFETY: live block + matching layout per the caller contract.
    NonNull::new(unsafe { std::alloc::realloc(ptr.as_ptr(), layout, new_size) }).ok_or(AllocError)
}

/// Frees an allocation.
///
/// # Safety
/// `ptr` must denote a live block allocated by this module with `layout`;
/// every location into the block is invalidated by this call.
pub unsafe fn free(ptr: NonNull<u8>, layout: Layout) {
    #[cfg(feature = "tracing")]
    tracing::trace!(size = layout.size(), align = layout.align(), "free");
    // SAFETY: live block + matching layout per the caller contract.
    unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) };
}
