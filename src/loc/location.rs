//! `MemoryLocation` — a typed, kind-fixed view of one scalar cell.

use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::kind::ArrayLayout;
use crate::scalar::AtomicScalar;

/// An addressable scalar cell of kind `T`.
///
/// A location is a borrow-shaped view: `'a` ties a relative location to its
/// owning object or buffer, so a location cannot outlive the storage it
/// points into. It is `Copy` and word-sized; deriving one is free.
///
/// Every accessor on a location goes through the kind-width atomic, so
/// concurrent use from any number of threads is sound. What the unsafe
/// constructors cannot check — and the caller must uphold — is that the
/// address is valid, kind-aligned, and only ever accessed as kind `T`
/// through this layer for the duration of the access sequence.
#[repr(transparent)]
pub struct MemoryLocation<'a, T: AtomicScalar> {
    ptr: NonNull<T>,
    _owner: PhantomData<&'a core::cell::UnsafeCell<T>>,
}

impl<'a, T: AtomicScalar> Clone for MemoryLocation<'a, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: AtomicScalar> Copy for MemoryLocation<'a, T> {}

impl<'a, T: AtomicScalar> core::fmt::Debug for MemoryLocation<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("kind", &T::KIND)
            .field("addr", &self.ptr.as_ptr())
            .finish()
    }
}

// SAFETY: a location is a pointer whose every access path is atomic; it is
// as shareable as `&T::Atomic`.
unsafe impl<'a, T: AtomicScalar> Send for MemoryLocation<'a, T> {}
unsafe impl<'a, T: AtomicScalar> Sync for MemoryLocation<'a, T> {}

impl<'a, T: AtomicScalar> MemoryLocation<'a, T> {
    /// Resolves an absolute raw address (off-heap/native memory).
    ///
    /// # Safety
    /// `addr` must be non-zero, aligned to `T::KIND.alignment()`, valid for
    /// reads and writes of `T` for `'a`, and must not be accessed as any
    /// other kind, nor through non-atomic references, while locations to it
    /// exist.
    #[inline]
    pub unsafe fn from_raw_address(addr: usize) -> Self {
        debug_assert!(addr != 0, "absolute address must be non-zero");
        debug_assert!(
            addr % T::KIND.alignment() == 0,
            "absolute address must be kind-aligned"
        );
        Self {
            // SAFETY: non-zero per the caller contract (debug-asserted).
            ptr: unsafe { NonNull::new_unchecked(addr as *mut T) },
            _owner: PhantomData,
        }
    }

    /// Resolves a typed pointer.
    ///
    /// # Safety
    /// Same contract as [`Self::from_raw_address`].
    #[inline]
    pub const unsafe fn from_ptr(ptr: NonNull<T>) -> Self {
        Self {
            ptr,
            _owner: PhantomData,
        }
    }

    /// Resolves an owning object plus byte offset (an in-object field).
    ///
    /// The offset is normally obtained once from [`core::mem::offset_of!`]
    /// or a [`StructLayout`](crate::loc::StructLayout) and reused.
    ///
    /// # Safety
    /// `byte_offset` must land on a properly aligned `T` inside `owner`'s
    /// storage, and that field must not be accessed through non-atomic
    /// references while locations to it exist. Writing through the location
    /// additionally requires the field's storage to permit interior
    /// mutation, e.g. by living in a [`ScalarCell`](super::ScalarCell)
    /// (which is `repr(transparent)`, so field offsets are unchanged).
    #[inline]
    pub unsafe fn from_object<O>(owner: &'a O, byte_offset: usize) -> Self {
        let base = (owner as *const O).cast::<u8>();
        // SAFETY: in-bounds per the caller contract.
        let ptr = unsafe { base.add(byte_offset) }.cast::<T>().cast_mut();
        debug_assert!(
            ptr as usize % T::KIND.alignment() == 0,
            "field offset must be kind-aligned"
        );
        Self {
            // SAFETY: derived from a reference, hence non-null.
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            _owner: PhantomData,
        }
    }

    /// Resolves `(array, index)` through a layout descriptor:
    /// `effective_offset = base_offset + index * index_scale`.
    ///
    /// No bounds check happens here; the caller owns `0 <= index < length`.
    ///
    /// # Safety
    /// The effective offset must land on a properly aligned `T` inside the
    /// storage behind `base`, valid for `'a`, with the same aliasing
    /// obligations as [`Self::from_raw_address`].
    #[inline]
    pub unsafe fn array_element(base: NonNull<u8>, layout: ArrayLayout, index: usize) -> Self {
        // SAFETY: in-bounds per the caller contract.
        let ptr = unsafe { base.as_ptr().add(layout.offset_of(index)) }.cast::<T>();
        debug_assert!(
            ptr as usize % T::KIND.alignment() == 0,
            "array element must be kind-aligned"
        );
        Self {
            // SAFETY: offset from a non-null base.
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            _owner: PhantomData,
        }
    }

    /// The raw address of the cell.
    #[inline(always)]
    pub fn as_ptr(self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The width-matched atomic view of the cell.
    #[inline(always)]
    pub(crate) fn atomic(self) -> &'a T::Atomic {
        // SAFETY: the constructor contracts guarantee a valid, kind-aligned
        // cell for 'a, and the `AtomicScalar` contract guarantees `T` and
        // `T::Atomic` agree on size and alignment.
        unsafe { &*self.ptr.as_ptr().cast::<T::Atomic>().cast_const() }
    }
}
