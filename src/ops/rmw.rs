//! Fetch-and-modify: add, bitwise OR/AND/XOR, and unconditional swap.
//!
//! Every operation returns the value present *before* the modification.

use crate::consistency::Consistency;
use crate::loc::MemoryLocation;
use crate::scalar::{AtomicAdd, AtomicBitwise, AtomicScalar, RawAtomic};

impl<'a, T: AtomicAdd> MemoryLocation<'a, T> {
    /// Atomically adds `delta` at volatile strength, returning the previous
    /// value.
    ///
    /// Integer kinds map to the native read-modify-write intrinsic; floating
    /// kinds fall back to a compare-exchange retry loop that is lock-free
    /// but not wait-free.
    #[inline(always)]
    pub fn fetch_add(self, delta: T) -> T {
        self.fetch_add_with(delta, Consistency::Volatile)
    }

    /// [`fetch_add`](Self::fetch_add) at an explicit level.
    #[inline(always)]
    pub fn fetch_add_with(self, delta: T, level: Consistency) -> T {
        T::fetch_add_with(self.atomic(), delta, level)
    }
}

impl<'a, T: AtomicBitwise> MemoryLocation<'a, T> {
    /// Atomic bitwise OR at volatile strength, returning the previous value.
    #[inline(always)]
    pub fn fetch_or(self, operand: T) -> T {
        self.fetch_or_with(operand, Consistency::Volatile)
    }

    /// [`fetch_or`](Self::fetch_or) at an explicit level.
    #[inline(always)]
    pub fn fetch_or_with(self, operand: T, level: Consistency) -> T {
        T::from_raw(
            self.atomic()
                .fetch_or(operand.into_raw(), level.rmw_ordering()),
        )
    }

    /// Atomic bitwise AND at volatile strength, returning the previous value.
    #[inline(always)]
    pub fn fetch_and(self, operand: T) -> T {
        self.fetch_and_with(operand, Consistency::Volatile)
    }

    /// [`fetch_and`](Self::fetch_and) at an explicit level.
    #[inline(always)]
    pub fn fetch_and_with(self, operand: T, level: Consistency) -> T {
        T::from_raw(
            self.atomic()
                .fetch_and(operand.into_raw(), level.rmw_ordering()),
        )
    }

    /// Atomic bitwise XOR at volatile strength, returning the previous value.
    #[inline(always)]
    pub fn fetch_xor(self, operand: T) -> T {
        self.fetch_xor_with(operand, Consistency::Volatile)
    }

    /// [`fetch_xor`](Self::fetch_xor) at an explicit level.
    #[inline(always)]
    pub fn fetch_xor_with(self, operand: T, level: Consistency) -> T {
        T::from_raw(
            self.atomic()
                .fetch_xor(operand.into_raw(), level.rmw_ordering()),
        )
    }
}

impl<'a, T: AtomicScalar> MemoryLocation<'a, T> {
    /// Unconditional atomic swap at volatile strength, returning the
    /// previous value. Defined for every scalar kind (bitwise exchange).
    #[inline(always)]
    pub fn fetch_set(self, new: T) -> T {
        self.fetch_set_with(new, Consistency::Volatile)
    }

    /// [`fetch_set`](Self::fetch_set) at an explicit level.
    #[inline(always)]
    pub fn fetch_set_with(self, new: T, level: Consistency) -> T {
        T::from_raw(self.atomic().swap(new.into_raw(), level.rmw_ordering()))
    }
}
