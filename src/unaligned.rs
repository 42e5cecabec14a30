//! Endian-explicit access at arbitrary (unaligned) offsets.
//!
//! These operations exist for binary-format interoperability, not for
//! concurrency: **no atomicity is guaranteed** at any width, and a racing
//! writer can tear an unaligned read. They read and write the scalar via
//! unaligned machine accesses honoring the requested byte order, independent
//! of the host's native endianness and of the location's natural alignment.

use core::mem;

use num_traits::PrimInt;

use crate::loc::MemoryLocation;
use crate::scalar::AtomicScalar;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// The multi-byte integer kinds supporting unaligned endian-explicit access:
/// `i16`, `u16` (char16), `i32`, `i64`.
pub trait UnalignedScalar: PrimInt + sealed::Sealed {}

impl UnalignedScalar for i16 {}
impl UnalignedScalar for u16 {}
impl UnalignedScalar for i32 {}
impl UnalignedScalar for i64 {}

/// An explicit byte-order selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// The host platform's native byte order.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

/// Reads a `T` from `ptr` in the requested byte order. Not atomic.
///
/// # Safety
/// `ptr` must be valid for reads of `size_of::<T>()` bytes. No alignment
/// requirement.
#[inline]
pub unsafe fn get_unaligned<T: UnalignedScalar>(ptr: *const u8, order: Endian) -> T {
    // SAFETY: valid for size_of::<T>() reads per the caller contract.
    let raw = unsafe { ptr.cast::<T>().read_unaligned() };
    match order {
        Endian::Big => T::from_be(raw),
        Endian::Little => T::from_le(raw),
    }
}

/// Writes `value` to `ptr` in the requested byte order. Not atomic.
///
/// # Safety
/// `ptr` must be valid for writes of `size_of::<T>()` bytes. No alignment
/// requirement.
#[inline]
pub unsafe fn put_unaligned<T: UnalignedScalar>(ptr: *mut u8, value: T, order: Endian) {
    let raw = match order {
        Endian::Big => value.to_be(),
        Endian::Little => value.to_le(),
    };
    // SAFETY: valid for size_of::<T>() writes per the caller contract.
    unsafe { ptr.cast::<T>().write_unaligned(raw) };
}

/// Reads a `T` from `buf` at `offset` in the requested byte order.
///
/// # Panics
/// If `offset + size_of::<T>()` exceeds `buf.len()`.
#[inline]
pub fn get_unaligned_in<T: UnalignedScalar>(buf: &[u8], offset: usize, order: Endian) -> T {
    let window = &buf[offset..offset + mem::size_of::<T>()];
    // SAFETY: the slice index above proves the window is readable.
    unsafe { get_unaligned(window.as_ptr(), order) }
}

/// Writes `value` into `buf` at `offset` in the requested byte order.
///
/// # Panics
/// If `offset + size_of::<T>()` exceeds `buf.len()`.
#[inline]
pub fn put_unaligned_in<T: UnalignedScalar>(
    buf: &mut [u8],
    offset: usize,
    value: T,
    order: Endian,
) {
    let window = &mut buf[offset..offset + mem::size_of::<T>()];
    // SAFETY: the slice index above proves the window is writable.
    unsafe { put_unaligned(window.as_mut_ptr(), value, order) };
}

impl<'a, T: AtomicScalar + UnalignedScalar> MemoryLocation<'a, T> {
    /// Reads the scalar at this location in the requested byte order.
    ///
    /// Like the free functions, this is **not atomic** and exists for
    /// binary-format interoperability only.
    ///
    /// # Safety
    /// No thread may write the cell concurrently with this read; the
    /// location's atomic accessors do not synchronize with it.
    #[inline]
    pub unsafe fn get_unaligned(self, order: Endian) -> T {
        // SAFETY: the location contract guarantees the cell is valid for
        // reads of `T`; race freedom is the caller's obligation above.
        unsafe { get_unaligned(self.as_ptr().cast::<u8>().cast_const(), order) }
    }

    /// Writes the scalar at this location in the requested byte order.
    ///
    /// Like the free functions, this is **not atomic** and exists for
    /// binary-format interoperability only.
    ///
    /// # Safety
    /// No thread may access the cell concurrently with this write; the
    /// location's atomic accessors do not synchronize with it.
    #[inline]
    pub unsafe fn put_unaligned(self, value: T, order: Endian) {
        // SAFETY: the location contract guarantees the cell is valid for
        // writes of `T`; race freedom is the caller's obligation above.
        unsafe { put_unaligned(self.as_ptr().cast::<u8>(), value, order) };
    }
}
