//! The interface every tier implements. The dispatcher picks one implementation of each trait
//! per target; the benches and tests use the traits to run the same checks against every tier.

use crate::word::{Width, Word};

/// The implementation strategy backing a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Bit-by-bit shift loop. Correct for every type, used as a reference.
    Generic,
    /// Byte-chunked lookup tables.
    Table,
    /// A single hardware instruction covering the whole word.
    Intrinsic,
    /// A narrower hardware instruction applied to both halves of the word.
    Composed,
}

/// Population count and parity.
pub trait CountStrategy {
    /// Which tier backs words of the given width.
    fn tier(width: Width) -> Tier;

    /// Number of set bits in the two's-complement bit pattern of `value`.
    fn bit_count<T: Word>(value: T) -> u32;

    /// Whether the number of set bits in `value` is odd.
    #[inline(always)]
    fn parity<T: Word>(value: T) -> bool {
        Self::bit_count(value) & 1 == 1
    }
}

/// Lowest and highest set bit.
pub trait ScanStrategy {
    /// Which tier backs words of the given width.
    fn tier(width: Width) -> Tier;

    /// One plus the index of the least significant set bit, or zero if no bit is set.
    fn first_set<T: Word>(value: T) -> u32;

    /// One plus the index of the most significant set bit, or zero if no bit is set.
    fn last_set<T: Word>(value: T) -> u32;
}
