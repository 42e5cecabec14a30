//! The eight scalar-kind implementations.
//!
//! One macro collapses the per-kind fan-out; each expansion also emits
//! compile-time layout assertions proving the pointer-reinterpretation
//! contract of [`AtomicScalar`] on the current target. Targets where a plain
//! scalar is laxer-aligned than its atomic (e.g. `f64` on 32-bit x86) fail
//! these assertions at compile time rather than tearing at run time.

use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU8};

#[cfg(target_has_atomic = "64")]
use core::sync::atomic::AtomicU64;

use crossbeam_utils::Backoff;

use super::{sealed, AtomicAdd, AtomicBitwise, AtomicScalar, RawAtomic};
use crate::consistency::Consistency;
use crate::kind::ScalarKind;

macro_rules! impl_scalar {
    ($ty:ty, $kind:ident, $raw:ty, $atomic:ty, |$v:ident| $to:expr, |$r:ident| $from:expr) => {
        impl sealed::Sealed for $ty {}

        // SAFETY: the assertions below prove the size/alignment contract on
        // this target; the conversions are bit-pattern bijections.
        unsafe impl AtomicScalar for $ty {
            const KIND: ScalarKind = ScalarKind::$kind;
            type Raw = $raw;
            type Atomic = $atomic;

            #[inline(always)]
            fn into_raw(self) -> $raw {
                let $v = self;
                $to
            }

            #[inline(always)]
            fn from_raw($r: $raw) -> Self {
                $from
            }
        }

        const _: () = {
            use core::mem::{align_of, size_of};
            assert!(size_of::<$ty>() == size_of::<$raw>());
            assert!(size_of::<$ty>() == size_of::<$atomic>());
            assert!(align_of::<$ty>() == align_of::<$atomic>());
        };
    };
}

macro_rules! impl_integer_add {
    ($ty:ty) => {
        impl AtomicAdd for $ty {
            #[inline(always)]
            fn fetch_add_with(
                atomic: &<$ty as AtomicScalar>::Atomic,
                delta: Self,
                level: Consistency,
            ) -> Self {
                // Wrapping add on the unsigned representation is exactly
                // two's-complement signed addition.
                Self::from_raw(RawAtomic::fetch_add(
                    atomic,
                    delta.into_raw(),
                    level.rmw_ordering(),
                ))
            }
        }
    };
}

macro_rules! impl_float_add {
    ($ty:ty) => {
        impl AtomicAdd for $ty {
            /// Compare-exchange retry loop: lock-free, not wait-free.
            fn fetch_add_with(
                atomic: &<$ty as AtomicScalar>::Atomic,
                delta: Self,
                level: Consistency,
            ) -> Self {
                let backoff = Backoff::new();
                let mut current = RawAtomic::load(atomic, level.load_ordering());
                loop {
                    let old = Self::from_raw(current);
                    let new = (old + delta).into_raw();
                    match RawAtomic::compare_exchange_weak(
                        atomic,
                        current,
                        new,
                        level.rmw_ordering(),
                        level.cas_failure_ordering(),
                    ) {
                        Ok(_) => return old,
                        Err(witnessed) => {
                            current = witnessed;
                            backoff.spin();
                        }
                    }
                }
            }
        }
    };
}

impl_scalar!(i32, I32, u32, AtomicU32, |v| v as u32, |r| r as i32);
impl_scalar!(f32, F32, u32, AtomicU32, |v| v.to_bits(), |r| f32::from_bits(r));
impl_scalar!(u16, Char16, u16, AtomicU16, |v| v, |r| r);
impl_scalar!(i16, I16, u16, AtomicU16, |v| v as u16, |r| r as i16);
impl_scalar!(i8, I8, u8, AtomicU8, |v| v as u8, |r| r as i8);
impl_scalar!(bool, Bool, u8, AtomicU8, |v| v as u8, |r| r != 0);

#[cfg(target_has_atomic = "64")]
mod width64 {
    use super::*;

    impl_scalar!(i64, I64, u64, AtomicU64, |v| v as u64, |r| r as i64);
    impl_scalar!(f64, F64, u64, AtomicU64, |v| v.to_bits(), |r| {
        f64::from_bits(r)
    });

    impl_integer_add!(i64);
    impl_float_add!(f64);

    impl AtomicBitwise for i64 {}
}

impl_integer_add!(i32);
impl_integer_add!(i16);
impl_integer_add!(i8);

impl_float_add!(f32);

impl AtomicBitwise for i32 {}
impl AtomicBitwise for i16 {}
impl AtomicBitwise for i8 {}
impl AtomicBitwise for bool {}
