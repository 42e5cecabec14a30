//! Ordering barriers independent of any specific memory location.
//!
//! Fences constrain how the issuing thread's surrounding operations may be
//! reordered relative to other threads' operations. They carry no data and
//! touch no location; pairing a fence with the matching fence or atomic
//! operation on the other thread is what creates synchronization.

use core::sync::atomic::{fence, Ordering};

/// No load after the fence (in program order) may be reordered before any
/// load preceding the fence.
#[inline(always)]
pub fn load_fence() {
    fence(Ordering::Acquire);
}

/// No store after the fence (in program order) may be reordered before any
/// store preceding the fence, and no store preceding the fence may be
/// reordered after it.
#[inline(always)]
pub fn store_fence() {
    fence(Ordering::Release);
}

/// Combines [`load_fence`] and [`store_fence`] and additionally orders
/// stores before subsequent loads — the only ordering the weaker pair does
/// not give.
#[inline(always)]
pub fn full_fence() {
    fence(Ordering::SeqCst);
}

/// Orders load-load pairs only.
///
/// Informational weakening for platforms that distinguish it; this lowering
/// is the acquire fence, so using [`load_fence`] instead is never wrong.
#[inline(always)]
pub fn load_load_fence() {
    fence(Ordering::Acquire);
}

/// Orders store-store pairs only.
///
/// Informational weakening for platforms that distinguish it; this lowering
/// is the release fence, so using [`store_fence`] instead is never wrong.
#[inline(always)]
pub fn store_store_fence() {
    fence(Ordering::Release);
}
