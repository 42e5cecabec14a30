//! Compare-and-swap: strong, exchange, and weak variants.
//!
//! Comparison is always bitwise on the raw representation. For floating
//! kinds that means NaN payloads must match bit-for-bit; `-0.0` and `0.0`
//! never compare equal here even though they do numerically.

use crate::consistency::Consistency;
use crate::loc::MemoryLocation;
use crate::scalar::{AtomicScalar, RawAtomic};

impl<'a, T: AtomicScalar> MemoryLocation<'a, T> {
    /// Strong CAS at volatile strength: if the current value is bitwise
    /// equal to `expected`, replaces it with `new` and returns `true`;
    /// otherwise leaves it unchanged and returns `false`.
    ///
    /// A failed attempt carries no ordering promise.
    #[inline(always)]
    pub fn compare_and_set(self, expected: T, new: T) -> bool {
        self.compare_and_exchange_with(expected, new, Consistency::Volatile)
            .is_ok()
    }

    /// Strong compare-exchange at volatile strength, returning the value
    /// observed at the moment of comparison (equal to `expected` exactly
    /// when the exchange happened).
    #[inline(always)]
    pub fn compare_and_exchange(self, expected: T, new: T) -> T {
        match self.compare_and_exchange_with(expected, new, Consistency::Volatile) {
            Ok(witnessed) | Err(witnessed) => witnessed,
        }
    }

    /// Strong compare-exchange with acquire semantics on success.
    #[inline(always)]
    pub fn compare_and_exchange_acquire(self, expected: T, new: T) -> T {
        match self.compare_and_exchange_with(expected, new, Consistency::Acquire) {
            Ok(witnessed) | Err(witnessed) => witnessed,
        }
    }

    /// Strong compare-exchange with release semantics on success.
    #[inline(always)]
    pub fn compare_and_exchange_release(self, expected: T, new: T) -> T {
        match self.compare_and_exchange_with(expected, new, Consistency::Release) {
            Ok(witnessed) | Err(witnessed) => witnessed,
        }
    }

    /// Strong compare-exchange at an explicit level. `Ok(witnessed)` on
    /// success, `Err(witnessed)` on failure.
    #[inline(always)]
    pub fn compare_and_exchange_with(
        self,
        expected: T,
        new: T,
        level: Consistency,
    ) -> Result<T, T> {
        self.atomic()
            .compare_exchange(
                expected.into_raw(),
                new.into_raw(),
                level.rmw_ordering(),
                level.cas_failure_ordering(),
            )
            .map(T::from_raw)
            .map_err(T::from_raw)
    }

    /// Weak CAS at volatile strength. May fail spuriously even when the
    /// comparison would have succeeded, which permits cheaper hardware
    /// mappings on LL/SC architectures; always loop on a condition, never on
    /// a single call.
    #[inline(always)]
    pub fn weak_compare_and_set(self, expected: T, new: T) -> bool {
        self.weak_compare_and_set_with(expected, new, Consistency::Volatile)
    }

    /// Weak CAS with no ordering guarantee.
    #[inline(always)]
    pub fn weak_compare_and_set_plain(self, expected: T, new: T) -> bool {
        self.weak_compare_and_set_with(expected, new, Consistency::Plain)
    }

    /// Weak CAS with acquire semantics on success.
    #[inline(always)]
    pub fn weak_compare_and_set_acquire(self, expected: T, new: T) -> bool {
        self.weak_compare_and_set_with(expected, new, Consistency::Acquire)
    }

    /// Weak CAS with release semantics on success.
    #[inline(always)]
    pub fn weak_compare_and_set_release(self, expected: T, new: T) -> bool {
        self.weak_compare_and_set_with(expected, new, Consistency::Release)
    }

    /// Weak CAS at an explicit level.
    #[inline(always)]
    pub fn weak_compare_and_set_with(self, expected: T, new: T, level: Consistency) -> bool {
        self.atomic()
            .compare_exchange_weak(
                expected.into_raw(),
                new.into_raw(),
                level.rmw_ordering(),
                level.cas_failure_ordering(),
            )
            .is_ok()
    }
}
