//! Shared checks running a tier against the generic reference implementation.

use std::fmt::Debug;

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generic::Generic;
use crate::strategy::{CountStrategy, ScanStrategy};
use crate::word::Word;

/// Number of random draws for types too wide to check exhaustively.
#[cfg(feature = "soak")]
pub(crate) const SAMPLES: usize = 10_000_000;
#[cfg(not(feature = "soak"))]
pub(crate) const SAMPLES: usize = 1 << 16;

pub(crate) fn seeded_rng() -> StdRng {
    StdRng::from_seed([
        0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5,
        6, 7,
    ])
}

pub(crate) fn assert_counts_match<S: CountStrategy, T: Word + Debug>(value: T) {
    assert_eq!(
        S::bit_count(value),
        Generic::bit_count(value),
        "bit_count({:?})",
        value
    );
    assert_eq!(
        S::parity(value),
        Generic::parity(value),
        "parity({:?})",
        value
    );
}

pub(crate) fn assert_scans_match<S: ScanStrategy, T: Word + Debug>(value: T) {
    assert_eq!(
        S::first_set(value),
        Generic::first_set(value),
        "first_set({:?})",
        value
    );
    assert_eq!(
        S::last_set(value),
        Generic::last_set(value),
        "last_set({:?})",
        value
    );
}

fn sample<T, F: FnMut(T)>(rng: &mut StdRng, mut check: F)
where
    Standard: Distribution<T>,
{
    for _ in 0..SAMPLES {
        check(rng.gen());
    }
}

/// Exhaustive over the 8 and 16-bit types, sampled over the wider ones.
pub(crate) fn check_count_strategy<S: CountStrategy>() {
    for v in 0..=u8::MAX {
        assert_counts_match::<S, _>(v);
        assert_counts_match::<S, _>(v as i8);
    }
    for v in 0..=u16::MAX {
        assert_counts_match::<S, _>(v);
        assert_counts_match::<S, _>(v as i16);
    }

    let mut rng = seeded_rng();
    sample(&mut rng, assert_counts_match::<S, u32>);
    sample(&mut rng, assert_counts_match::<S, i32>);
    sample(&mut rng, assert_counts_match::<S, u64>);
    sample(&mut rng, assert_counts_match::<S, i64>);
    sample(&mut rng, assert_counts_match::<S, usize>);
}

/// Exhaustive over the 8 and 16-bit types, sampled over the wider ones.
pub(crate) fn check_scan_strategy<S: ScanStrategy>() {
    for v in 0..=u8::MAX {
        assert_scans_match::<S, _>(v);
        assert_scans_match::<S, _>(v as i8);
    }
    for v in 0..=u16::MAX {
        assert_scans_match::<S, _>(v);
        assert_scans_match::<S, _>(v as i16);
    }

    let mut rng = seeded_rng();
    sample(&mut rng, assert_scans_match::<S, u32>);
    sample(&mut rng, assert_scans_match::<S, i32>);
    sample(&mut rng, assert_scans_match::<S, u64>);
    sample(&mut rng, assert_scans_match::<S, i64>);
    sample(&mut rng, assert_scans_match::<S, usize>);

    // uniform draws almost never have a zero low half, which is where scanning gets interesting
    for _ in 0..SAMPLES {
        let value: u64 = rng.gen();
        let shift: u32 = rng.gen_range(0..64);
        assert_scans_match::<S, _>(value << shift);
        assert_scans_match::<S, _>(value >> shift);
        assert_scans_match::<S, _>((value << shift) as u32);
    }
}
