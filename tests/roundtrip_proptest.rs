use proptest::prelude::*;

use hematite::{get_unaligned_in, put_unaligned_in, Endian, ScalarCell};

proptest! {
    #[test]
    fn volatile_roundtrip_i64(v in any::<i64>()) {
        let cell = ScalarCell::new(0i64);
        cell.location().put(v);
        prop_assert_eq!(cell.location().get(), v);
    }

    #[test]
    fn volatile_roundtrip_f64_bits(bits in any::<u64>()) {
        // Arbitrary bit patterns include every NaN payload.
        let v = f64::from_bits(bits);
        let cell = ScalarCell::new(0.0f64);
        cell.location().put(v);
        prop_assert_eq!(cell.location().get().to_bits(), bits);
    }

    #[test]
    fn volatile_roundtrip_small_kinds(c in any::<u16>(), s in any::<i16>(), b in any::<i8>()) {
        let cc = ScalarCell::new(0u16);
        cc.location().put(c);
        prop_assert_eq!(cc.location().get(), c);

        let cs = ScalarCell::new(0i16);
        cs.location().put(s);
        prop_assert_eq!(cs.location().get(), s);

        let cb = ScalarCell::new(0i8);
        cb.location().put(b);
        prop_assert_eq!(cb.location().get(), b);
    }

    #[test]
    fn successful_cas_installs_exactly_new(old in any::<i32>(), new in any::<i32>()) {
        let cell = ScalarCell::new(old);
        let loc = cell.location();
        prop_assert!(loc.compare_and_set(old, new));
        prop_assert_eq!(loc.get_plain(), new);
    }

    #[test]
    fn failed_cas_is_a_no_op(current in any::<i32>(), expected in any::<i32>(), new in any::<i32>()) {
        prop_assume!(current != expected);
        let cell = ScalarCell::new(current);
        let loc = cell.location();
        prop_assert!(!loc.compare_and_set(expected, new));
        prop_assert_eq!(loc.compare_and_exchange(expected, new), current);
        prop_assert_eq!(loc.get_plain(), current);
    }

    #[test]
    fn fetch_add_matches_wrapping_arithmetic(start in any::<i32>(), delta in any::<i32>()) {
        let cell = ScalarCell::new(start);
        let loc = cell.location();
        prop_assert_eq!(loc.fetch_add(delta), start);
        prop_assert_eq!(loc.get(), start.wrapping_add(delta));
    }

    #[test]
    fn unaligned_roundtrip_any_offset(v in any::<i64>(), offset in 0usize..8, big in any::<bool>()) {
        let order = if big { Endian::Big } else { Endian::Little };
        let mut buf = [0u8; 16];
        put_unaligned_in(&mut buf, offset, v, order);
        prop_assert_eq!(get_unaligned_in::<i64>(&buf, offset, order), v);
    }

    #[test]
    fn opposite_orders_disagree_beyond_palindromes(v in any::<i32>()) {
        let mut buf = [0u8; 4];
        put_unaligned_in(&mut buf, 0, v, Endian::Big);
        let flipped = get_unaligned_in::<i32>(&buf, 0, Endian::Little);
        prop_assert_eq!(flipped, v.swap_bytes());
    }
}
