use hematite::{Consistency, ScalarCell};

#[test]
fn strong_cas_success_installs_new_value() {
    let cell = ScalarCell::new(10i64);
    let loc = cell.location();

    assert!(loc.compare_and_set(10, 20));
    assert_eq!(loc.get_plain(), 20);
}

#[test]
fn strong_cas_failure_leaves_value_and_reports_witness() {
    let cell = ScalarCell::new(10i64);
    let loc = cell.location();

    assert!(!loc.compare_and_set(99, 20));
    assert_eq!(loc.get_plain(), 10);

    // The exchange form reports the prior value on failure.
    assert_eq!(loc.compare_and_exchange(99, 20), 10);
    assert_eq!(loc.get_plain(), 10);

    // And equals `expected` exactly when the exchange happened.
    assert_eq!(loc.compare_and_exchange(10, 30), 10);
    assert_eq!(loc.get_plain(), 30);
}

#[test]
fn cas_on_floats_is_bitwise() {
    let nan_a = f64::from_bits(0x7ff8_0000_0000_0001);
    let nan_b = f64::from_bits(0x7ff8_0000_0000_0002);

    let cell = ScalarCell::new(nan_a);
    let loc = cell.location();

    // NaN != NaN numerically, but CAS compares bit patterns.
    assert!(loc.compare_and_set(nan_a, nan_b));
    assert_eq!(loc.get().to_bits(), nan_b.to_bits());

    // A different NaN payload does not match.
    assert!(!loc.compare_and_set(nan_a, 0.0));
    assert_eq!(loc.get().to_bits(), nan_b.to_bits());
}

#[test]
fn cas_distinguishes_signed_zeros() {
    let cell = ScalarCell::new(0.0f32);
    let loc = cell.location();

    // 0.0 == -0.0 numerically, but their bit patterns differ.
    assert!(!loc.compare_and_set(-0.0, 1.0));
    assert!(loc.compare_and_set(0.0, 1.0));
}

#[test]
fn acquire_release_exchange_variants() {
    let cell = ScalarCell::new(1i32);
    let loc = cell.location();

    assert_eq!(loc.compare_and_exchange_acquire(1, 2), 1);
    assert_eq!(loc.compare_and_exchange_release(2, 3), 2);
    assert_eq!(loc.compare_and_exchange_release(9, 4), 3);
    assert_eq!(loc.get_plain(), 3);
}

#[test]
fn explicit_level_exchange_reports_result() {
    let cell = ScalarCell::new(true);
    let loc = cell.location();

    assert_eq!(loc.compare_and_exchange_with(true, false, Consistency::Plain), Ok(true));
    assert_eq!(loc.compare_and_exchange_with(true, false, Consistency::Plain), Err(false));
}

// Weak CAS may fail spuriously, so every use loops on a condition; with no
// concurrent writer the loop must terminate.
#[test]
fn weak_cas_eventually_succeeds_uncontended() {
    let cell = ScalarCell::new(0i32);
    let loc = cell.location();

    for variant in 0..4 {
        let expected = loc.get_plain();
        let new = expected + 1;
        let mut spins = 0usize;
        loop {
            let done = match variant {
                0 => loc.weak_compare_and_set(expected, new),
                1 => loc.weak_compare_and_set_plain(expected, new),
                2 => loc.weak_compare_and_set_acquire(expected, new),
                _ => loc.weak_compare_and_set_release(expected, new),
            };
            if done {
                break;
            }
            spins += 1;
            assert!(spins < 1_000_000, "weak CAS failed to make progress");
        }
        assert_eq!(loc.get_plain(), new);
    }
}
