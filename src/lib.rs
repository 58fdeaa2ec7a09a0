#![warn(missing_docs)]

//! This crate provides fast implementations of common single-word bit algorithms: population
//! count, parity, and the position of the least (or most) significant set bit. All primitives
//! accept every fixed-width integer, signed or unsigned, and operate on its two's-complement bit
//! pattern.
//!
//! # Primitives
//!  - [`bit_count`]: number of set bits.
//!  - [`parity`]: whether the number of set bits is odd.
//!  - [`first_set`]: one plus the index of the least significant set bit, zero for zero.
//!  - [`last_set`]: one plus the index of the most significant set bit, zero for zero.
//!  - [`trailing_zeros`] and [`leading_zeros`], derived from the two above.
//!
//! ```rust
//! use bit_algo::{bit_count, first_set, parity};
//!
//! assert_eq!(bit_count(228u8), 4);
//! assert_eq!(first_set(228u8), 3);
//! assert_eq!(bit_count(1337u32), 6);
//! assert_eq!(first_set(1337u32), 1);
//! assert!(!parity(1337u32));
//! ```
//!
//! Anything but an integer is rejected at compile time:
//!
//! ```compile_fail
//! let _ = bit_algo::bit_count(1.5f32);
//! ```
//!
//! # Implementation tiers
//! Each primitive exists in three implementations, called tiers:
//!  - [Generic][generic::Generic]: a bit-by-bit shift loop. It is never selected, but serves as
//!    the reference the other tiers are tested against.
//!  - [Table][table::Table]: consumes the word byte by byte through 256-entry lookup tables.
//!  - [Intrinsic][intrinsic::Intrinsic]: hardware instructions of the target. Words wider than the
//!    instruction are processed as two halves (see [`compose`]).
//!
//! The entry points resolve at compile time to the intrinsic tier if the target has the
//! instruction, and to the table tier otherwise. Population count and bit scanning are resolved
//! separately. [`plan`] reports the choice for a given type.
//!
//! # Intrinsics
//! Instruction availability is taken from the compile-time target features, never detected at
//! runtime. On x86_64, bit scanning is baseline (`bsf`/`bsr`, or `tzcnt` with `bmi1` and `lzcnt`
//! with `lzcnt`), but `popcnt` is not part of the default target. Compile with
//! `-C target-feature=+popcnt` or `-C target-cpu=native` to use it. On aarch64 both are
//! available (`rbit`/`clz`, and `cnt` with NEON). See [`arch`] for details.
//!
//! The `force_table` feature disables the intrinsic tier on every target.
//!
//! # Safety
//! This crate uses no unsafe code, with the only exception being compiler intrinsics for
//! bit-manipulation. Each intrinsic is only compiled if its target feature is statically enabled.

pub use crate::dispatch::{
    bit_count, first_set, last_set, leading_zeros, parity, plan, trailing_zeros, Plan,
};
pub use crate::strategy::{CountStrategy, ScanStrategy, Tier};
pub use crate::word::{Width, Word};

pub mod arch;
pub mod compose;
pub mod dispatch;
pub mod generic;
pub mod intrinsic;
pub mod strategy;
pub mod table;
pub mod word;

#[cfg(test)]
pub(crate) mod test_util;
