//! ARM64 (AArch64) instructions
//!
//! Bit scans use `clz` directly for the most significant bit and `rbit` + `clz` for the least
//! significant bit, both available on every AArch64 core for 32 and 64-bit registers. Population
//! count uses the NEON `cnt` instruction on the byte lanes followed by a horizontal add, which the
//! compiler emits for `count_ones` whenever NEON is enabled.

use super::BitScan;
#[cfg(target_feature = "neon")]
use super::Popcount;
use crate::word::Width;

/// ARM64 bit manipulation instructions
pub struct Arm64BitOps;

#[cfg(target_feature = "neon")]
impl Popcount for Arm64BitOps {
    const NATIVE_WIDTH: Width = Width::W64;

    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        value.count_ones()
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        value.count_ones()
    }
}

impl BitScan for Arm64BitOps {
    const NATIVE_WIDTH: Width = Width::W64;

    #[inline(always)]
    fn first_set_u32(value: u32) -> u32 {
        if value == 0 {
            return 0;
        }
        value.trailing_zeros() + 1
    }

    #[inline(always)]
    fn first_set_u64(value: u64) -> u32 {
        if value == 0 {
            return 0;
        }
        value.trailing_zeros() + 1
    }

    #[inline(always)]
    fn last_set_u32(value: u32) -> u32 {
        u32::BITS - value.leading_zeros()
    }

    #[inline(always)]
    fn last_set_u64(value: u64) -> u32 {
        u64::BITS - value.leading_zeros()
    }
}
