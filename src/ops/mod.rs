//! The operation families on [`MemoryLocation`](crate::loc::MemoryLocation).
//!
//! Split by family, one file per concern: leveled get/put (`access.rs`),
//! compare-and-swap, strong and weak (`cas.rs`), and fetch-and-modify
//! (`rmw.rs`).
//!
//! Naming convention across all three: the unsuffixed operation runs at
//! volatile strength (the default level), `*_with` takes an explicit
//! [`Consistency`](crate::consistency::Consistency), and the remaining
//! suffixes are the conventional leveled shorthands.

mod access;
mod cas;
mod rmw;
