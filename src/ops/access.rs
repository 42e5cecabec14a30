//! Leveled get/put for every scalar kind.

use crate::consistency::Consistency;
use crate::loc::MemoryLocation;
use crate::scalar::{AtomicScalar, RawAtomic};

impl<'a, T: AtomicScalar> MemoryLocation<'a, T> {
    /// Reads the value at the requested consistency level.
    #[inline(always)]
    pub fn get_with(self, level: Consistency) -> T {
        T::from_raw(self.atomic().load(level.load_ordering()))
    }

    /// Writes `value` at the requested consistency level.
    #[inline(always)]
    pub fn put_with(self, value: T, level: Consistency) {
        self.atomic().store(value.into_raw(), level.store_ordering());
    }

    /// Volatile read: acquire semantics plus total ordering with respect to
    /// other volatile operations. The default-strength read.
    #[inline(always)]
    pub fn get(self) -> T {
        self.get_with(Consistency::Volatile)
    }

    /// Volatile write: release semantics plus total ordering with respect to
    /// other volatile operations. The default-strength write.
    #[inline(always)]
    pub fn put(self, value: T) {
        self.put_with(value, Consistency::Volatile);
    }

    /// Plain read; no cross-thread guarantee.
    #[inline(always)]
    pub fn get_plain(self) -> T {
        self.get_with(Consistency::Plain)
    }

    /// Plain write; no cross-thread guarantee.
    #[inline(always)]
    pub fn put_plain(self, value: T) {
        self.put_with(value, Consistency::Plain);
    }

    /// Opaque read: same-location coherence, no cross-location ordering.
    #[inline(always)]
    pub fn get_opaque(self) -> T {
        self.get_with(Consistency::Opaque)
    }

    /// Opaque write: same-location coherence, no cross-location ordering.
    #[inline(always)]
    pub fn put_opaque(self, value: T) {
        self.put_with(value, Consistency::Opaque);
    }

    /// Acquire read: later operations in program order cannot move before
    /// it; synchronizes-with a release write of the same location.
    #[inline(always)]
    pub fn get_acquire(self) -> T {
        self.get_with(Consistency::Acquire)
    }

    /// Release write: earlier operations in program order cannot move after
    /// it; synchronizes-with an acquire read of the same location.
    #[inline(always)]
    pub fn put_release(self, value: T) {
        self.put_with(value, Consistency::Release);
    }
}
