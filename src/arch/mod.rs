//! Architecture-specific instructions
//!
//! This module describes which bit-manipulation instructions the compilation target offers. Two
//! capabilities are tracked independently: population count ([`Popcount`]) and bit scanning
//! ([`BitScan`]). For each capability the target either provides an implementation, exported as
//! [`HardwarePopcount`] / [`HardwareBitScan`], or nothing at all, in which case the dispatcher
//! falls back to the lookup tables.
//!
//! Detection happens entirely at compile time through `target_arch` and `target_feature`:
//!  - x86_64 has `bsf`/`bsr` as baseline instructions (`tzcnt`/`lzcnt` with `bmi1`/`lzcnt`), but
//!    `popcnt` only with the `popcnt` target feature, which is not part of the default target.
//!  - 32-bit x86 has the same instructions, but only up to 32 bits. 64-bit words are composed
//!    from two halves.
//!  - aarch64 has `rbit`/`clz` as baseline instructions and `cnt` on the NEON unit.
//!
//! Build with `-C target-feature=+popcnt` (or `-C target-cpu=native`) to enable the population
//! count instruction on x86. The `force_table` crate feature disables every capability.

use crate::compose;
use crate::word::Width;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Hardware population count.
pub trait Popcount {
    /// Widest word the instruction accepts. Wider words are composed from halves.
    const NATIVE_WIDTH: Width;

    /// Count the number of set bits of a 32-bit word
    fn popcount_u32(value: u32) -> u32;

    /// Count the number of set bits of a 64-bit word
    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        compose::bit_count(value, Self::popcount_u32)
    }
}

/// Hardware bit scan. Both directions report one plus the bit index, zero for the zero word.
pub trait BitScan {
    /// Widest word the instructions accept. Wider words are composed from halves.
    const NATIVE_WIDTH: Width;

    /// Least significant set bit of a 32-bit word
    fn first_set_u32(value: u32) -> u32;

    /// Least significant set bit of a 64-bit word
    #[inline(always)]
    fn first_set_u64(value: u64) -> u32 {
        compose::first_set(value, Self::first_set_u32)
    }

    /// Most significant set bit of a 32-bit word
    fn last_set_u32(value: u32) -> u32;

    /// Most significant set bit of a 64-bit word
    #[inline(always)]
    fn last_set_u64(value: u64) -> u32 {
        compose::last_set(value, Self::last_set_u32)
    }
}

/// Emit the given items only if the target has a population count instruction.
macro_rules! cfg_popcount {
    ($($item:item)*) => {
        $(
            #[cfg(all(
                not(feature = "force_table"),
                any(
                    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "popcnt"),
                    all(target_arch = "aarch64", target_feature = "neon"),
                ),
            ))]
            $item
        )*
    };
}

/// Emit the given items only if the target has no population count instruction.
macro_rules! cfg_no_popcount {
    ($($item:item)*) => {
        $(
            #[cfg(not(all(
                not(feature = "force_table"),
                any(
                    all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "popcnt"),
                    all(target_arch = "aarch64", target_feature = "neon"),
                ),
            )))]
            $item
        )*
    };
}

/// Emit the given items only if the target has bit scan instructions.
macro_rules! cfg_bitscan {
    ($($item:item)*) => {
        $(
            #[cfg(all(
                not(feature = "force_table"),
                any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"),
            ))]
            $item
        )*
    };
}

/// Emit the given items only if the target has no bit scan instructions.
macro_rules! cfg_no_bitscan {
    ($($item:item)*) => {
        $(
            #[cfg(not(all(
                not(feature = "force_table"),
                any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"),
            )))]
            $item
        )*
    };
}

pub(crate) use cfg_bitscan;
pub(crate) use cfg_no_bitscan;
pub(crate) use cfg_no_popcount;
pub(crate) use cfg_popcount;

cfg_popcount! {
    /// Population count implementation of the target.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub type HardwarePopcount = x86::X86BitOps;

    /// Population count implementation of the target.
    #[cfg(target_arch = "aarch64")]
    pub type HardwarePopcount = aarch64::Arm64BitOps;

    /// The population count instruction for words of the given width, operating on the
    /// zero-extended word. Returns `None` if the width exceeds the instruction.
    pub fn hardware_popcount(width: Width) -> Option<fn(u64) -> u32> {
        if width > <HardwarePopcount as Popcount>::NATIVE_WIDTH {
            return None;
        }

        let instruction: fn(u64) -> u32 = match width {
            Width::W64 => HardwarePopcount::popcount_u64,
            Width::W8 | Width::W16 | Width::W32 => {
                |value| HardwarePopcount::popcount_u32(value as u32)
            }
        };
        Some(instruction)
    }
}

cfg_no_popcount! {
    /// The population count instruction for words of the given width. The target has none.
    pub fn hardware_popcount(_width: Width) -> Option<fn(u64) -> u32> {
        None
    }
}

cfg_bitscan! {
    /// Bit scan implementation of the target.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub type HardwareBitScan = x86::X86BitOps;

    /// Bit scan implementation of the target.
    #[cfg(target_arch = "aarch64")]
    pub type HardwareBitScan = aarch64::Arm64BitOps;

    /// The forward bit scan for words of the given width, operating on the zero-extended word and
    /// returning one plus the index of the lowest set bit. Returns `None` if the width exceeds
    /// the instruction.
    pub fn hardware_bitscan(width: Width) -> Option<fn(u64) -> u32> {
        if width > <HardwareBitScan as BitScan>::NATIVE_WIDTH {
            return None;
        }

        let instruction: fn(u64) -> u32 = match width {
            Width::W64 => HardwareBitScan::first_set_u64,
            Width::W8 | Width::W16 | Width::W32 => {
                |value| HardwareBitScan::first_set_u32(value as u32)
            }
        };
        Some(instruction)
    }
}

cfg_no_bitscan! {
    /// The forward bit scan for words of the given width. The target has none.
    pub fn hardware_bitscan(_width: Width) -> Option<fn(u64) -> u32> {
        None
    }
}
