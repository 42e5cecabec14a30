use hematite::{Consistency, ScalarCell};

const LEVELS: [Consistency; 5] = [
    Consistency::Plain,
    Consistency::Opaque,
    Consistency::Acquire,
    Consistency::Release,
    Consistency::Volatile,
];

fn roundtrip<T: hematite::AtomicScalar + PartialEq + core::fmt::Debug>(initial: T, values: &[T]) {
    let cell = ScalarCell::new(initial);
    let loc = cell.location();
    for &v in values {
        for level in LEVELS {
            loc.put_with(v, level);
            assert_eq!(loc.get_with(level), v);
        }
        loc.put(v);
        assert_eq!(loc.get(), v);
    }
}

#[test]
fn roundtrip_all_kinds() {
    roundtrip(0.0f64, &[0.0, -0.0, 1.5, f64::MAX, f64::MIN_POSITIVE, f64::NEG_INFINITY]);
    roundtrip(0i64, &[0, 1, -1, i64::MAX, i64::MIN]);
    roundtrip(0i32, &[0, 1, -1, i32::MAX, i32::MIN]);
    roundtrip(0.0f32, &[0.0, -0.0, 1.5, f32::MAX, f32::NEG_INFINITY]);
    roundtrip(0u16, &[0, 1, 0xD800, u16::MAX]);
    roundtrip(0i16, &[0, 1, -1, i16::MAX, i16::MIN]);
    roundtrip(0i8, &[0, 1, -1, i8::MAX, i8::MIN]);
    roundtrip(false, &[false, true]);
}

#[test]
fn nan_payload_survives_roundtrip() {
    let cell = ScalarCell::new(0.0f64);
    let loc = cell.location();
    let nan = f64::from_bits(0x7ff8_0000_dead_beef);
    loc.put(nan);
    assert_eq!(loc.get().to_bits(), nan.to_bits());
}

#[test]
fn leveled_shorthands_agree() {
    let cell = ScalarCell::new(0i32);
    let loc = cell.location();

    loc.put_plain(1);
    assert_eq!(loc.get_plain(), 1);
    loc.put_opaque(2);
    assert_eq!(loc.get_opaque(), 2);
    loc.put_release(3);
    assert_eq!(loc.get_acquire(), 3);
}

#[test]
fn exclusive_access_bypasses_atomics() {
    let mut cell = ScalarCell::new(5i16);
    *cell.get_mut() = 9;
    assert_eq!(cell.location().get(), 9);
    assert_eq!(cell.into_inner(), 9);
}
