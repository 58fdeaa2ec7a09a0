//! Narrow-instruction composition.
//!
//! Builds a primitive over a word of width `2W` out of a primitive over width `W` by applying it
//! to both halves. This is how the hardware tier covers 64-bit words on targets whose
//! instructions stop at 32 bits. The helpers take the narrow primitive as a parameter, so they do
//! not depend on any particular instruction.

use crate::word::{Halves, Word};

/// Population count of `value` from a population count of half its width. The half counts are
/// summed.
#[inline(always)]
pub fn bit_count<T: Halves>(value: T, narrow: impl Fn(T::Half) -> u32) -> u32 {
    let (low, high) = value.halves();
    narrow(low) + narrow(high)
}

/// First set bit of `value` from a first-set primitive of half its width.
///
/// The low half is tried first. Only if it has no set bit the high half decides, and its result
/// is shifted by the half width since it would otherwise read as a position in the low half.
#[inline(always)]
pub fn first_set<T: Halves>(value: T, narrow: impl Fn(T::Half) -> u32) -> u32 {
    let (low, high) = value.halves();
    match narrow(low) {
        0 => match narrow(high) {
            0 => 0,
            position => position + <T::Half as Word>::WIDTH.bits(),
        },
        position => position,
    }
}

/// Last set bit of `value` from a last-set primitive of half its width. Like [`first_set`] with
/// the halves swapped: the high half is tried first and carries the offset.
#[inline(always)]
pub fn last_set<T: Halves>(value: T, narrow: impl Fn(T::Half) -> u32) -> u32 {
    let (low, high) = value.halves();
    match narrow(high) {
        0 => narrow(low),
        position => position + <T::Half as Word>::WIDTH.bits(),
    }
}
