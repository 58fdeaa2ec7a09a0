use super::*;
use crate::test_util::{assert_counts_match, assert_scans_match, seeded_rng, SAMPLES};
use rand::Rng;

macro_rules! check_all_types {
    ($check:ident) => {
        $check!(u8);
        $check!(i8);
        $check!(u16);
        $check!(i16);
        $check!(u32);
        $check!(i32);
        $check!(u64);
        $check!(i64);
        $check!(usize);
        $check!(isize);
    };
}

#[test]
fn test_examples() {
    assert_eq!(bit_count(228u8), 4);
    assert_eq!(first_set(228u8), 3);
    assert_eq!(bit_count(1337u16), 6);
    assert_eq!(first_set(1337u16), 1);

    assert_eq!(bit_count(228u64), 4);
    assert_eq!(first_set(228i32), 3);
    assert_eq!(bit_count(1337i64), 6);
    assert_eq!(first_set(1337usize), 1);
}

#[test]
fn test_zero() {
    macro_rules! check {
        ($t:ty) => {
            assert_eq!(bit_count(0 as $t), 0);
            assert_eq!(first_set(0 as $t), 0);
            assert_eq!(last_set(0 as $t), 0);
            assert!(!parity(0 as $t));
            assert_eq!(trailing_zeros(0 as $t), <$t>::BITS);
            assert_eq!(leading_zeros(0 as $t), <$t>::BITS);
        };
    }
    check_all_types!(check);
}

#[test]
fn test_all_ones() {
    macro_rules! check {
        ($t:ty) => {
            let ones = !(0 as $t);
            assert_eq!(bit_count(ones), <$t>::BITS, "{}", stringify!($t));
            assert_eq!(first_set(ones), 1, "{}", stringify!($t));
            assert_eq!(last_set(ones), <$t>::BITS, "{}", stringify!($t));
            assert!(!parity(ones), "{}", stringify!($t));
        };
    }
    check_all_types!(check);
}

#[test]
fn test_single_bits() {
    macro_rules! check {
        ($t:ty) => {
            for i in 0..(<$t>::BITS) {
                let value = (1 as $t) << i;
                assert_eq!(bit_count(value), 1, "{} bit {}", stringify!($t), i);
                assert_eq!(first_set(value), i + 1, "{} bit {}", stringify!($t), i);
                assert_eq!(last_set(value), i + 1, "{} bit {}", stringify!($t), i);
                assert!(parity(value));
            }
        };
    }
    check_all_types!(check);
}

#[test]
fn test_signed_unsigned_agree() {
    assert_eq!(bit_count(-1i8), bit_count(u8::MAX));
    assert_eq!(first_set(-1i8), first_set(u8::MAX));
    assert_eq!(bit_count(-1i64), bit_count(u64::MAX));
    assert_eq!(first_set(i64::MIN), first_set(1u64 << 63));

    let mut rng = seeded_rng();
    for _ in 0..SAMPLES {
        let v: u64 = rng.gen();
        assert_eq!(bit_count(v as i64), bit_count(v));
        assert_eq!(first_set(v as i64), first_set(v));
        assert_eq!(last_set(v as i64), last_set(v));
        assert_eq!(bit_count(v as i32), bit_count(v as u32));
        assert_eq!(first_set(v as i16), first_set(v as u16));
        assert_eq!(parity(v as i8), parity(v as u8));
    }
}

#[test]
fn test_zero_counts_match_std() {
    let mut rng = seeded_rng();
    for _ in 0..SAMPLES {
        let v: u64 = rng.gen();
        let shift: u32 = rng.gen_range(0..64);
        let v = v >> shift;
        assert_eq!(trailing_zeros(v), v.trailing_zeros());
        assert_eq!(leading_zeros(v), v.leading_zeros());
        assert_eq!(trailing_zeros(v as i32), (v as i32).trailing_zeros());
        assert_eq!(leading_zeros(v as u16), (v as u16).leading_zeros());
        assert_eq!(leading_zeros(v as i8), (v as i8).leading_zeros());
    }
}

#[test]
fn test_dispatched_matches_generic() {
    struct Dispatched;

    impl CountStrategy for Dispatched {
        fn tier(width: crate::word::Width) -> Tier {
            <Counter as CountStrategy>::tier(width)
        }

        fn bit_count<T: Word>(value: T) -> u32 {
            bit_count(value)
        }

        fn parity<T: Word>(value: T) -> bool {
            parity(value)
        }
    }

    impl ScanStrategy for Dispatched {
        fn tier(width: crate::word::Width) -> Tier {
            <Scanner as ScanStrategy>::tier(width)
        }

        fn first_set<T: Word>(value: T) -> u32 {
            first_set(value)
        }

        fn last_set<T: Word>(value: T) -> u32 {
            last_set(value)
        }
    }

    for v in 0..=u16::MAX {
        assert_counts_match::<Dispatched, _>(v);
        assert_scans_match::<Dispatched, _>(v as i16);
    }
}

#[test]
fn test_plan() {
    macro_rules! check {
        ($t:ty) => {
            let selected = plan::<$t>();
            assert_ne!(selected.count, Tier::Generic);
            assert_ne!(selected.scan, Tier::Generic);
        };
    }
    check_all_types!(check);

    // narrow words always fit the instruction
    let narrow = plan::<u16>();
    assert!(matches!(narrow.count, Tier::Table | Tier::Intrinsic));
    assert!(matches!(narrow.scan, Tier::Table | Tier::Intrinsic));
}

crate::arch::cfg_no_popcount! {
    #[test]
    fn test_plan_count_falls_back_to_table() {
        assert_eq!(plan::<u8>().count, Tier::Table);
        assert_eq!(plan::<i64>().count, Tier::Table);
    }
}

crate::arch::cfg_no_bitscan! {
    #[test]
    fn test_plan_scan_falls_back_to_table() {
        assert_eq!(plan::<u32>().scan, Tier::Table);
        assert_eq!(plan::<u64>().scan, Tier::Table);
    }
}

#[cfg(all(target_arch = "x86", not(feature = "force_table")))]
#[test]
fn test_plan_composes_wide_scans() {
    assert_eq!(plan::<u32>().scan, Tier::Intrinsic);
    assert_eq!(plan::<u64>().scan, Tier::Composed);
}
