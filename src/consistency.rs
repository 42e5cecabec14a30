//! Consistency levels and their projection onto the Rust memory model.
//!
//! A consistency level is an attribute of an operation invocation, never of
//! a location: the same location may be accessed under different levels in
//! different calls.
//!
//! The five levels lower onto [`core::sync::atomic::Ordering`] as follows:
//!
//! | level    | load      | store     | read-modify-write |
//! |----------|-----------|-----------|-------------------|
//! | Plain    | `Relaxed` | `Relaxed` | `Relaxed`         |
//! | Opaque   | `Relaxed` | `Relaxed` | `Relaxed`         |
//! | Acquire  | `Acquire` | `Relaxed` | `Acquire`         |
//! | Release  | `Relaxed` | `Release` | `Release`         |
//! | Volatile | `SeqCst`  | `SeqCst`  | `SeqCst`          |
//!
//! Plain and Opaque coincide in the lowering: Rust offers no defined racy
//! non-atomic access, and a `Relaxed` access compiles to an ordinary load or
//! store on mainstream ISAs while already providing Opaque's same-location
//! coherence. The two levels remain distinct in the API because their
//! contracts differ — Plain promises nothing across threads, Opaque promises
//! per-location coherence.
//!
//! Acquire stores and Release loads are symmetry cases the model forbids;
//! they lower to `Relaxed`.

use core::sync::atomic::Ordering;

/// The ordering contract a single memory operation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Consistency {
    /// Ordinary load/store; no cross-thread guarantee.
    Plain,
    /// Per-location coherence only; no cross-location ordering.
    Opaque,
    /// Later operations cannot move before an acquire load;
    /// synchronizes-with a release store of the same location.
    Acquire,
    /// Earlier operations cannot move after a release store;
    /// synchronizes-with an acquire load of the same location.
    Release,
    /// Acquire on read, release on write, plus a single total order over all
    /// volatile operations. The default when no level is specified.
    #[default]
    Volatile,
}

impl Consistency {
    /// Ordering used for loads at this level.
    #[inline(always)]
    pub const fn load_ordering(self) -> Ordering {
        match self {
            Consistency::Plain | Consistency::Opaque | Consistency::Release => Ordering::Relaxed,
            Consistency::Acquire => Ordering::Acquire,
            Consistency::Volatile => Ordering::SeqCst,
        }
    }

    /// Ordering used for stores at this level.
    #[inline(always)]
    pub const fn store_ordering(self) -> Ordering {
        match self {
            Consistency::Plain | Consistency::Opaque | Consistency::Acquire => Ordering::Relaxed,
            Consistency::Release => Ordering::Release,
            Consistency::Volatile => Ordering::SeqCst,
        }
    }

    /// Ordering used for read-modify-write operations at this level.
    #[inline(always)]
    pub const fn rmw_ordering(self) -> Ordering {
        match self {
            Consistency::Plain | Consistency::Opaque => Ordering::Relaxed,
            Consistency::Acquire => Ordering::Acquire,
            Consistency::Release => Ordering::Release,
            Consistency::Volatile => Ordering::SeqCst,
        }
    }

    /// Ordering used for the failure path of compare-exchange at this level.
    ///
    /// A failed attempt carries no ordering promise, so this is the weakest
    /// legal projection (release has no load component and is stripped).
    #[inline(always)]
    pub const fn cas_failure_ordering(self) -> Ordering {
        match self {
            Consistency::Plain | Consistency::Opaque | Consistency::Release => Ordering::Relaxed,
            Consistency::Acquire => Ordering::Acquire,
            Consistency::Volatile => Ordering::SeqCst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_volatile() {
        assert_eq!(Consistency::default(), Consistency::Volatile);
    }

    #[test]
    fn release_never_orders_loads() {
        assert_eq!(Consistency::Release.load_ordering(), Ordering::Relaxed);
        assert_eq!(Consistency::Release.cas_failure_ordering(), Ordering::Relaxed);
    }

    #[test]
    fn acquire_never_orders_stores() {
        assert_eq!(Consistency::Acquire.store_ordering(), Ordering::Relaxed);
    }
}
