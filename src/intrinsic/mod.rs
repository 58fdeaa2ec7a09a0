//! Hardware-backed implementations.
//!
//! Every word is zero-extended to the 32 or 64-bit operand of the target instruction, so signed
//! words are counted as their unsigned bit pattern and 8/16-bit words use the 32-bit instruction.
//! Where the instruction is narrower than the word, [`arch`](crate::arch) composes it from two
//! halves.
//!
//! [`Intrinsic`] only implements the strategies the target has instructions for. On a target
//! without any, it implements neither and cannot be selected.

use crate::arch;
#[allow(unused_imports)]
use crate::strategy::{CountStrategy, ScanStrategy, Tier};
#[allow(unused_imports)]
use crate::word::{Bits, Width, Word};

/// Implementations backed by the target's bit manipulation instructions.
pub struct Intrinsic;

arch::cfg_popcount! {
    impl CountStrategy for Intrinsic {
        fn tier(width: Width) -> Tier {
            match arch::hardware_popcount(width) {
                Some(_) => Tier::Intrinsic,
                None => Tier::Composed,
            }
        }

        #[inline(always)]
        fn bit_count<T: Word>(value: T) -> u32 {
            use arch::{HardwarePopcount, Popcount};

            let bits = value.to_bits().zero_extend();
            match T::WIDTH {
                Width::W8 | Width::W16 | Width::W32 => HardwarePopcount::popcount_u32(bits as u32),
                Width::W64 => HardwarePopcount::popcount_u64(bits),
            }
        }
    }
}

arch::cfg_bitscan! {
    impl ScanStrategy for Intrinsic {
        fn tier(width: Width) -> Tier {
            match arch::hardware_bitscan(width) {
                Some(_) => Tier::Intrinsic,
                None => Tier::Composed,
            }
        }

        #[inline(always)]
        fn first_set<T: Word>(value: T) -> u32 {
            use arch::{BitScan, HardwareBitScan};

            let bits = value.to_bits().zero_extend();
            match T::WIDTH {
                Width::W8 | Width::W16 | Width::W32 => HardwareBitScan::first_set_u32(bits as u32),
                Width::W64 => HardwareBitScan::first_set_u64(bits),
            }
        }

        #[inline(always)]
        fn last_set<T: Word>(value: T) -> u32 {
            use arch::{BitScan, HardwareBitScan};

            // zero extension keeps the bit index, so the 32-bit result is also the narrow result
            let bits = value.to_bits().zero_extend();
            match T::WIDTH {
                Width::W8 | Width::W16 | Width::W32 => HardwareBitScan::last_set_u32(bits as u32),
                Width::W64 => HardwareBitScan::last_set_u64(bits),
            }
        }
    }
}
