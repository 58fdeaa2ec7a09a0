//! Generic fallback implementations. Every primitive is a plain loop over the unsigned bit
//! pattern, one bit per iteration. These are never selected by the dispatcher, but all other
//! tiers are verified against them.

use crate::strategy::{CountStrategy, ScanStrategy, Tier};
use crate::word::{Bits, Width, Word};

/// Shift-loop implementations, correct for every [`Word`].
pub struct Generic;

impl CountStrategy for Generic {
    fn tier(_width: Width) -> Tier {
        Tier::Generic
    }

    #[inline]
    fn bit_count<T: Word>(value: T) -> u32 {
        let mut bits = value.to_bits();
        let mut count = 0;
        while bits != T::Bits::ZERO {
            if bits & T::Bits::ONE != T::Bits::ZERO {
                count += 1;
            }
            bits = bits >> 1;
        }
        count
    }

    #[inline]
    fn parity<T: Word>(value: T) -> bool {
        let mut bits = value.to_bits();
        let mut parity = false;
        while bits != T::Bits::ZERO {
            parity ^= bits & T::Bits::ONE != T::Bits::ZERO;
            bits = bits >> 1;
        }
        parity
    }
}

impl ScanStrategy for Generic {
    fn tier(_width: Width) -> Tier {
        Tier::Generic
    }

    #[inline]
    fn first_set<T: Word>(value: T) -> u32 {
        let mut bits = value.to_bits();
        if bits == T::Bits::ZERO {
            return 0;
        }

        let mut position = 1;
        while bits & T::Bits::ONE == T::Bits::ZERO {
            position += 1;
            bits = bits >> 1;
        }
        position
    }

    #[inline]
    fn last_set<T: Word>(value: T) -> u32 {
        let mut bits = value.to_bits();
        let mut position = 0;
        while bits != T::Bits::ZERO {
            position += 1;
            bits = bits >> 1;
        }
        position
    }
}
