//! The public entry points. Each resolves at compile time to exactly one tier: the hardware tier
//! if the target has the instruction, otherwise the lookup tables.
//!
//! Counting (`bit_count`, `parity`) and scanning (`first_set`, `last_set` and the zero counts
//! derived from them) are resolved separately, because targets differ in which of the two
//! instructions they offer.

use crate::arch;
#[allow(unused_imports)]
use crate::intrinsic::Intrinsic;
use crate::strategy::{CountStrategy, ScanStrategy, Tier};
#[allow(unused_imports)]
use crate::table::Table;
use crate::word::Word;

arch::cfg_popcount! {
    type Counter = Intrinsic;
}

arch::cfg_no_popcount! {
    type Counter = Table;
}

arch::cfg_bitscan! {
    type Scanner = Intrinsic;
}

arch::cfg_no_bitscan! {
    type Scanner = Table;
}

/// Count the number of set bits in the two's-complement bit pattern of `value`.
///
/// # Example
/// ```rust
/// use bit_algo::bit_count;
///
/// assert_eq!(bit_count(0b1110_0100u8), 4);
/// assert_eq!(bit_count(-1i32), 32);
/// ```
#[inline(always)]
#[must_use]
pub fn bit_count<T: Word>(value: T) -> u32 {
    Counter::bit_count(value)
}

/// Returns `true` if an odd number of bits of `value` is set.
#[inline(always)]
#[must_use]
pub fn parity<T: Word>(value: T) -> bool {
    Counter::parity(value)
}

/// One plus the index of the least significant set bit of `value`, or zero if `value` is zero.
/// Bit indices count from the least significant bit, so an odd value returns 1.
///
/// # Example
/// ```rust
/// use bit_algo::first_set;
///
/// assert_eq!(first_set(0b1110_0100u8), 3);
/// assert_eq!(first_set(0u64), 0);
/// assert_eq!(first_set(i16::MIN), 16);
/// ```
#[inline(always)]
#[must_use]
pub fn first_set<T: Word>(value: T) -> u32 {
    Scanner::first_set(value)
}

/// One plus the index of the most significant set bit of `value`, or zero if `value` is zero.
/// For negative values this is always the width of the type.
#[inline(always)]
#[must_use]
pub fn last_set<T: Word>(value: T) -> u32 {
    Scanner::last_set(value)
}

/// Number of zero bits below the least significant set bit. The full width for zero.
#[inline(always)]
#[must_use]
pub fn trailing_zeros<T: Word>(value: T) -> u32 {
    match first_set(value) {
        0 => T::WIDTH.bits(),
        position => position - 1,
    }
}

/// Number of zero bits above the most significant set bit. The full width for zero.
#[inline(always)]
#[must_use]
pub fn leading_zeros<T: Word>(value: T) -> u32 {
    T::WIDTH.bits() - last_set(value)
}

/// The tiers backing the entry points for a specific integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Tier of [`bit_count`] and [`parity`].
    pub count: Tier,

    /// Tier of [`first_set`], [`last_set`], [`trailing_zeros`] and [`leading_zeros`].
    pub scan: Tier,
}

/// Report which tiers the entry points use for `T` on this target.
///
/// # Example
/// ```rust
/// use bit_algo::{plan, Tier};
///
/// let plan = plan::<u64>();
/// assert_ne!(plan.count, Tier::Generic);
/// assert_ne!(plan.scan, Tier::Generic);
/// ```
#[must_use]
pub fn plan<T: Word>() -> Plan {
    Plan {
        count: <Counter as CountStrategy>::tier(T::WIDTH),
        scan: <Scanner as ScanStrategy>::tier(T::WIDTH),
    }
}

#[cfg(test)]
mod tests;
