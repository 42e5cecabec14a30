use core::ptr;
use std::thread;

use hematite::{Consistency, RefSlot};

#[test]
fn reference_cas_uses_identity() {
    let mut a = 1i32;
    let mut b = 1i32; // equal contents, distinct identity
    let pa: *mut i32 = &mut a;
    let pb: *mut i32 = &mut b;

    let slot = RefSlot::new(pa);
    let loc = slot.location();

    // Identity of b does not match even though *a == *b.
    assert!(!loc.compare_and_set(pb, ptr::null_mut()));
    assert_eq!(loc.get(), pa);

    assert!(loc.compare_and_set(pa, pb));
    assert_eq!(loc.get(), pb);
}

#[test]
fn reference_exchange_reports_witness() {
    let mut x = 5u8;
    let px: *mut u8 = &mut x;

    let slot = RefSlot::<u8>::default();
    let loc = slot.location();

    assert_eq!(loc.compare_and_exchange(px, ptr::null_mut()), ptr::null_mut());
    assert_eq!(loc.compare_and_exchange(ptr::null_mut(), px), ptr::null_mut());
    assert_eq!(loc.get_acquire(), px);
}

#[test]
fn reference_swap_and_levels() {
    let mut x = 0i64;
    let px: *mut i64 = &mut x;

    let slot = RefSlot::new(ptr::null_mut());
    let loc = slot.location();

    loc.put_release(px);
    assert_eq!(loc.fetch_set(ptr::null_mut()), px);
    assert_eq!(loc.get_with(Consistency::Plain), ptr::null_mut());
}

#[test]
fn weak_reference_cas_eventually_succeeds() {
    let mut x = 9u32;
    let px: *mut u32 = &mut x;

    let slot = RefSlot::new(ptr::null_mut());
    let loc = slot.location();

    let mut spins = 0usize;
    while !loc.weak_compare_and_set(ptr::null_mut(), px) {
        spins += 1;
        assert!(spins < 1_000_000, "weak CAS failed to make progress");
    }
    assert_eq!(slot.into_inner(), px);
}

// Only one thread can claim a null slot.
#[test]
fn claim_is_exclusive_across_threads() {
    const ROUNDS: usize = 500;

    for _ in 0..ROUNDS {
        let slot = RefSlot::<i32>::new(ptr::null_mut());
        let mut markers = [1i32, 2i32];
        let (left, right) = markers.split_at_mut(1);
        let pl: *mut i32 = &mut left[0];
        let pr: *mut i32 = &mut right[0];
        // Raw pointers are not Send; ship them as addresses.
        let (al, ar) = (pl as usize, pr as usize);

        let (won_l, won_r) = thread::scope(|s| {
            let slot = &slot;
            let tl = s.spawn(move || slot.location().compare_and_set(ptr::null_mut(), al as *mut i32));
            let tr = s.spawn(move || slot.location().compare_and_set(ptr::null_mut(), ar as *mut i32));
            (tl.join().unwrap(), tr.join().unwrap())
        });

        assert!(won_l ^ won_r, "exactly one claimant must win");
        let winner = slot.into_inner();
        assert!(winner == pl || winner == pr);
    }
}
