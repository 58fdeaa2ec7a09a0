//! Lookup-table implementations. Words are consumed one byte at a time, each byte is resolved
//! by one of three 256-entry tables computed at compile time.
//!
//! This tier backs every primitive the target has no hardware instruction for.

use crate::strategy::{CountStrategy, ScanStrategy, Tier};
use crate::word::{Bits, Width, Word};

/// Number of set bits of every byte value.
pub static COUNT_TABLE: [u8; 256] = calculate_count_table();

/// One plus the index of the least significant set bit of every byte value, zero for the zero
/// byte.
pub static FIRST_SET_TABLE: [u8; 256] = calculate_first_set_table();

/// One plus the index of the most significant set bit of every byte value, zero for the zero
/// byte.
pub static LAST_SET_TABLE: [u8; 256] = calculate_last_set_table();

const fn calculate_count_table() -> [u8; 256] {
    let mut lookup = [0; 256];
    let mut v: usize = 0;
    while v < 256 {
        let mut count = 0;
        let mut i = 0;
        while i < 8 {
            count += ((v >> i) & 1) as u8;
            i += 1;
        }
        lookup[v] = count;
        v += 1;
    }
    lookup
}

const fn calculate_first_set_table() -> [u8; 256] {
    let mut lookup = [0; 256];
    // entry 0 stays zero
    let mut v: usize = 1;
    while v < 256 {
        let mut i = 0;
        while (v >> i) & 1 == 0 {
            i += 1;
        }
        lookup[v] = i as u8 + 1;
        v += 1;
    }
    lookup
}

const fn calculate_last_set_table() -> [u8; 256] {
    let mut lookup = [0; 256];
    let mut v: usize = 1;
    while v < 256 {
        let mut i = 7;
        while (v >> i) & 1 == 0 {
            i -= 1;
        }
        lookup[v] = i as u8 + 1;
        v += 1;
    }
    lookup
}

/// Table-driven implementations, one lookup per byte of the word.
pub struct Table;

impl CountStrategy for Table {
    fn tier(_width: Width) -> Tier {
        Tier::Table
    }

    #[inline]
    fn bit_count<T: Word>(value: T) -> u32 {
        let mut bits = value.to_bits();
        let mut count = 0;

        // Small values stop early, the chunk bound covers the full-width case.
        let mut chunk = 0;
        while chunk < T::WIDTH.bytes() && bits != T::Bits::ZERO {
            count += u32::from(COUNT_TABLE[usize::from(bits.low_byte())]);
            bits = bits.shr_byte();
            chunk += 1;
        }

        count
    }

    #[inline]
    fn parity<T: Word>(value: T) -> bool {
        let mut bits = value.to_bits();
        let mut folded = 0u8;

        let mut chunk = 0;
        while chunk < T::WIDTH.bytes() && bits != T::Bits::ZERO {
            folded ^= bits.low_byte();
            bits = bits.shr_byte();
            chunk += 1;
        }

        COUNT_TABLE[usize::from(folded)] & 1 == 1
    }
}

impl ScanStrategy for Table {
    fn tier(_width: Width) -> Tier {
        Tier::Table
    }

    #[inline]
    fn first_set<T: Word>(value: T) -> u32 {
        let mut bits = value.to_bits();
        if bits == T::Bits::ZERO {
            return 0;
        }

        let mut skipped = 0;
        while skipped < T::WIDTH.bytes() {
            let position = FIRST_SET_TABLE[usize::from(bits.low_byte())];
            if position != 0 {
                return skipped * 8 + u32::from(position);
            }
            bits = bits.shr_byte();
            skipped += 1;
        }

        // unreachable for non-zero words
        0
    }

    #[inline]
    fn last_set<T: Word>(value: T) -> u32 {
        let bits = value.to_bits();
        if bits == T::Bits::ZERO {
            return 0;
        }

        let mut chunk = T::WIDTH.bytes();
        while chunk > 0 {
            chunk -= 1;
            let position = LAST_SET_TABLE[usize::from(bits.byte(chunk))];
            if position != 0 {
                return chunk * 8 + u32::from(position);
            }
        }

        // unreachable for non-zero words
        0
    }
}
