//! x86 and x86_64 instructions
//!
//! Bit scans use `tzcnt`/`lzcnt` if the BMI1 resp. LZCNT extensions are enabled, and the baseline
//! `bsf`/`bsr` instructions otherwise (which the compiler emits for `trailing_zeros` and
//! `leading_zeros`). Population count requires the `popcnt` extension. On 32-bit x86 all
//! instructions are limited to 32-bit operands.

use super::BitScan;
#[cfg(target_feature = "popcnt")]
use super::Popcount;
use crate::word::Width;

#[cfg(target_arch = "x86")]
use core::arch::x86 as intrinsics;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as intrinsics;

/// x86 bit manipulation instructions
pub struct X86BitOps;

#[cfg(target_arch = "x86_64")]
const NATIVE_WIDTH: Width = Width::W64;
#[cfg(target_arch = "x86")]
const NATIVE_WIDTH: Width = Width::W32;

#[cfg(target_feature = "popcnt")]
impl Popcount for X86BitOps {
    const NATIVE_WIDTH: Width = NATIVE_WIDTH;

    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        // the instruction is statically enabled, see the cfg on this impl
        unsafe { intrinsics::_popcnt32(value as i32) as u32 }
    }

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        unsafe { intrinsics::_popcnt64(value as i64) as u32 }
    }
}

impl BitScan for X86BitOps {
    const NATIVE_WIDTH: Width = NATIVE_WIDTH;

    #[inline(always)]
    fn first_set_u32(value: u32) -> u32 {
        if value == 0 {
            return 0;
        }
        tzcnt_u32(value) + 1
    }

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    fn first_set_u64(value: u64) -> u32 {
        if value == 0 {
            return 0;
        }
        tzcnt_u64(value) + 1
    }

    #[inline(always)]
    fn last_set_u32(value: u32) -> u32 {
        if value == 0 {
            return 0;
        }
        u32::BITS - lzcnt_u32(value)
    }

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    fn last_set_u64(value: u64) -> u32 {
        if value == 0 {
            return 0;
        }
        u64::BITS - lzcnt_u64(value)
    }
}

// Trailing and leading zero counts of non-zero words. `bsf`/`bsr` leave the destination
// undefined for zero, the callers above never pass it.

#[cfg(target_feature = "bmi1")]
#[inline(always)]
fn tzcnt_u32(value: u32) -> u32 {
    unsafe { intrinsics::_tzcnt_u32(value) }
}

#[cfg(not(target_feature = "bmi1"))]
#[inline(always)]
fn tzcnt_u32(value: u32) -> u32 {
    value.trailing_zeros()
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
#[inline(always)]
fn tzcnt_u64(value: u64) -> u32 {
    unsafe { intrinsics::_tzcnt_u64(value) as u32 }
}

#[cfg(all(target_arch = "x86_64", not(target_feature = "bmi1")))]
#[inline(always)]
fn tzcnt_u64(value: u64) -> u32 {
    value.trailing_zeros()
}

#[cfg(target_feature = "lzcnt")]
#[inline(always)]
fn lzcnt_u32(value: u32) -> u32 {
    unsafe { intrinsics::_lzcnt_u32(value) }
}

#[cfg(not(target_feature = "lzcnt"))]
#[inline(always)]
fn lzcnt_u32(value: u32) -> u32 {
    value.leading_zeros()
}

#[cfg(all(target_arch = "x86_64", target_feature = "lzcnt"))]
#[inline(always)]
fn lzcnt_u64(value: u64) -> u32 {
    unsafe { intrinsics::_lzcnt_u64(value) as u32 }
}

#[cfg(all(target_arch = "x86_64", not(target_feature = "lzcnt")))]
#[inline(always)]
fn lzcnt_u64(value: u64) -> u32 {
    value.leading_zeros()
}
