//! Uniform surface over the width-matched standard atomics.

use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};

#[cfg(target_has_atomic = "64")]
use core::sync::atomic::AtomicU64;

/// The operations every width-matched atomic provides, expressed as a trait
/// so the accessor families can dispatch on the scalar kind at compile time.
///
/// Implemented only for the unsigned standard atomics backing the eight
/// scalar kinds.
pub trait RawAtomic: Sync + crate::scalar::sealed::Sealed {
    /// The unsigned value type this atomic operates on.
    type Value: Copy + Eq + core::fmt::Debug;

    /// Atomic load.
    fn load(&self, order: Ordering) -> Self::Value;

    /// Atomic store.
    fn store(&self, value: Self::Value, order: Ordering);

    /// Atomic unconditional swap, returning the previous value.
    fn swap(&self, value: Self::Value, order: Ordering) -> Self::Value;

    /// Strong compare-exchange.
    fn compare_exchange(
        &self,
        current: Self::Value,
        new: Self::Value,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Value, Self::Value>;

    /// Weak compare-exchange; may fail spuriously.
    fn compare_exchange_weak(
        &self,
        current: Self::Value,
        new: Self::Value,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Value, Self::Value>;

    /// Atomic wrapping add on the raw representation.
    fn fetch_add(&self, value: Self::Value, order: Ordering) -> Self::Value;

    /// Atomic bitwise OR.
    fn fetch_or(&self, value: Self::Value, order: Ordering) -> Self::Value;

    /// Atomic bitwise AND.
    fn fetch_and(&self, value: Self::Value, order: Ordering) -> Self::Value;

    /// Atomic bitwise XOR.
    fn fetch_xor(&self, value: Self::Value, order: Ordering) -> Self::Value;
}

macro_rules! impl_raw_atomic {
    ($atomic:ty, $value:ty) => {
        impl crate::scalar::sealed::Sealed for $atomic {}

        impl RawAtomic for $atomic {
            type Value = $value;

            #[inline(always)]
            fn load(&self, order: Ordering) -> $value {
                <$atomic>::load(self, order)
            }

            #[inline(always)]
            fn store(&self, value: $value, order: Ordering) {
                <$atomic>::store(self, value, order);
            }

            #[inline(always)]
            fn swap(&self, value: $value, order: Ordering) -> $value {
                <$atomic>::swap(self, value, order)
            }

            #[inline(always)]
            fn compare_exchange(
                &self,
                current: $value,
                new: $value,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$value, $value> {
                <$atomic>::compare_exchange(self, current, new, success, failure)
            }

            #[inline(always)]
            fn compare_exchange_weak(
                &self,
                current: $value,
                new: $value,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$value, $value> {
                <$atomic>::compare_exchange_weak(self, current, new, success, failure)
            }

            #[inline(always)]
            fn fetch_add(&self, value: $value, order: Ordering) -> $value {
                <$atomic>::fetch_add(self, value, order)
            }

            #[inline(always)]
            fn fetch_or(&self, value: $value, order: Ordering) -> $value {
                <$atomic>::fetch_or(self, value, order)
            }

            #[inline(always)]
            fn fetch_and(&self, value: $value, order: Ordering) -> $value {
                <$atomic>::fetch_and(self, value, order)
            }

            #[inline(always)]
            fn fetch_xor(&self, value: $value, order: Ordering) -> $value {
                <$atomic>::fetch_xor(self, value, order)
            }
        }
    };
}

impl_raw_atomic!(AtomicU8, u8);
impl_raw_atomic!(AtomicU16, u16);
impl_raw_atomic!(AtomicU32, u32);
#[cfg(target_has_atomic = "64")]
impl_raw_atomic!(AtomicU64, u64);
