//! # `hematite` - Typed Atomic Memory Access Toolkit
//!
//! A uniform facade over raw-address and object-relative memory operations:
//! per-kind scalar accessors under five consistency levels, compare-and-swap
//! families, fetch-and-modify, hardware fences, and endian-aware unaligned
//! access.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Typed locations**: A [`MemoryLocation`] is permanently associated with
//!   one scalar kind, making the wrong-kind misuse class unrepresentable in
//!   safe code rather than detected at run time.
//! - **Borrow-shaped addressing**: Relative locations borrow their owning
//!   object or region, so a location cannot outlive the storage behind it.
//! - **No torn reads**: Every accessor operates on the full native width of
//!   its kind through width-matched atomics — never byte-at-a-time
//!   emulation — so a read can never observe a partial concurrent write.
//!
//! ### Concurrency Safety
//! - **Explicit consistency levels**: Every operation invocation names its
//!   ordering contract ([`Consistency`]); the layer enforces it with the
//!   platform's native atomic and fence instructions, never ad hoc locking.
//! - **Bounded completion**: Simple get/put and fences are wait-free; the
//!   only retry loop is the documented compare-exchange fallback behind
//!   floating-point fetch-add, which is lock-free.
//! - **No hidden state**: The layer owns no locks and no buffers; all
//!   mutation targets caller-supplied locations.
//!
//! ## Architecture
//!
//! Callers resolve an address — absolute, (object, byte-offset), or
//! (array, index) via a per-kind [`ArrayLayout`] — into a location, then
//! invoke one accessor, CAS, or fetch-and-modify operation against it. The
//! fence layer is invoked independently to order otherwise-unordered
//! operations on different locations.
//!
//! The eight-kind fan-out is closed over the sealed [`AtomicScalar`] trait
//! family and resolved entirely at compile time; there is no runtime kind
//! dispatch on the access path.
//!
//! ## Example
//!
//! ```rust
//! use hematite::{Consistency, ScalarCell};
//!
//! let counter = ScalarCell::new(0i64);
//! let loc = counter.location();
//!
//! loc.put(41);
//! assert_eq!(loc.fetch_add(1), 41);
//! assert_eq!(loc.get_with(Consistency::Acquire), 42);
//!
//! assert!(loc.compare_and_set(42, 7));
//! assert_eq!(loc.compare_and_exchange(0, 1), 7); // failed, witnessed 7
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

pub mod alloc;
pub mod consistency;
pub mod error;
pub mod fence;
pub mod kind;
pub mod loc;
pub mod ops;
pub mod reference;
pub mod scalar;
pub mod unaligned;

pub use alloc::{AllocError, OffHeap};
pub use consistency::Consistency;
pub use error::{LayoutError, PlatformError};
pub use kind::{platform_check, ArrayLayout, ScalarKind};
pub use loc::{FieldDescriptor, MemoryLocation, ScalarCell, StructLayout};
pub use reference::{RefLocation, RefSlot};
pub use scalar::{AtomicAdd, AtomicBitwise, AtomicScalar};
pub use unaligned::{get_unaligned, get_unaligned_in, put_unaligned, put_unaligned_in, Endian};

// Compile-time layout claims behind the accessor families.
const _: () = {
    use core::mem;

    // Locations are pointer-sized views.
    assert!(mem::size_of::<MemoryLocation<'static, i32>>() == mem::size_of::<usize>());

    // The safe cell is a transparent wrapper: same size and alignment as
    // the scalar it holds.
    assert!(mem::size_of::<ScalarCell<i32>>() == mem::size_of::<i32>());
    assert!(mem::align_of::<ScalarCell<i32>>() == mem::align_of::<i32>());
    assert!(mem::size_of::<ScalarCell<bool>>() == 1);

    // A consistency level is a single byte of operation metadata.
    assert!(mem::size_of::<Consistency>() == 1);
};
