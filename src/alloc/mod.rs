//! Raw allocation primitives backing off-heap (absolute) locations.
//!
//! This is not a general allocator: only allocate/reallocate/free, plus an
//! RAII region type that hands out kind-typed locations into its bytes.

mod offheap;
pub mod raw;

pub use offheap::OffHeap;
pub use raw::AllocError;
