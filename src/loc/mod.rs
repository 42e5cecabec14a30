//! The address resolver: typed memory locations and how to derive them.
//!
//! A [`MemoryLocation`] is an addressable scalar cell of one fixed kind,
//! derived on demand from longer-lived storage — an absolute address, an
//! owning object plus a byte offset, or an array plus a logical index. It
//! never owns the underlying storage and carries no lifetime of its own
//! beyond the borrow of its owner.
//!
//! [`ScalarCell`] is the safe route in: a transparent interior-mutability
//! wrapper whose `location()` is always valid. [`StructLayout`] holds
//! field offsets computed once at registration time.

mod cell;
mod layout;
mod location;

pub use cell::ScalarCell;
pub use layout::{FieldDescriptor, StructLayout};
pub use location::MemoryLocation;
