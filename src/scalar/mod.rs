//! The closed scalar-kind traits behind the accessor families.
//!
//! Every operation in the crate is resolved at compile time through these
//! sealed traits: each of the eight kinds maps to a width-matched raw
//! unsigned integer and the corresponding `core::sync::atomic` type. No
//! access is ever emulated byte-at-a-time, so a read can never observe a
//! torn value from a concurrent kind-width write.
//!
//! Floating kinds convert through their bit patterns, which is what makes
//! compare-and-swap on them bitwise: NaN payloads compare exactly, never
//! numerically.

mod kinds;
mod raw;

pub use raw::RawAtomic;

use crate::consistency::Consistency;
use crate::kind::ScalarKind;

pub(crate) mod sealed {
    /// Seals the scalar-kind traits to the eight supported kinds.
    pub trait Sealed {}
}

/// A scalar kind with a width-matched hardware atomic.
///
/// # Safety
/// Implementations promise that `Self`, `Self::Raw`, and `Self::Atomic` have
/// identical size, that `Self::Atomic`'s alignment equals its size, and that
/// `into_raw`/`from_raw` are exact bijections on bit patterns (modulo the
/// byte-normalized `bool`). These guarantees are what permit reinterpreting
/// a suitably aligned `*mut Self` as `&Self::Atomic`.
pub unsafe trait AtomicScalar: Copy + Send + Sync + Sized + 'static + sealed::Sealed {
    /// The kind tag for this scalar.
    const KIND: ScalarKind;

    /// The width-matched unsigned representation the hardware operates on.
    type Raw: Copy + Eq + core::fmt::Debug;

    /// The width-matched `core::sync::atomic` type.
    type Atomic: RawAtomic<Value = Self::Raw>;

    /// Reinterprets the value as its raw representation.
    fn into_raw(self) -> Self::Raw;

    /// Reinterprets a raw representation as a value.
    fn from_raw(raw: Self::Raw) -> Self;
}

/// Scalar kinds supporting atomic bitwise OR/AND/XOR.
///
/// Implemented for the signed integer kinds and for `bool`. Boolean bitwise
/// atomics operate on the byte representation (`false` = 0, `true` = 1);
/// there is no separate single-bit intrinsic behind them.
pub trait AtomicBitwise: AtomicScalar {}

/// Scalar kinds supporting atomic fetch-add.
///
/// Integer kinds use the native read-modify-write intrinsic directly (two's
/// complement addition on the raw representation). Floating kinds have no
/// native fetch-add on common targets and fall back to a compare-exchange
/// retry loop: lock-free, but not wait-free.
pub trait AtomicAdd: AtomicScalar {
    /// Atomically adds `delta` at the given consistency level, returning the
    /// value present before the operation.
    fn fetch_add_with(atomic: &Self::Atomic, delta: Self, level: Consistency) -> Self;
}
