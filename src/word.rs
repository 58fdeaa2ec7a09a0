//! Integer types accepted by the bit primitives.
//!
//! Every supported integer implements [`Word`], which tags the type with its [`Width`] and
//! signedness and maps it onto the unsigned type of the same width ([`Bits`]). All primitives
//! operate on that unsigned bit pattern, so a signed value is counted and scanned exactly as its
//! two's-complement representation.
//!
//! The traits are sealed. A type outside of the fixed-width integers cannot implement them, which
//! turns a call like `bit_count(1.5f32)` into a compile error instead of a miscomputed result.

use std::ops::{BitAnd, Shr};

/// Bit width of a supported integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Width {
    /// 8 bits
    W8,
    /// 16 bits
    W16,
    /// 32 bits
    W32,
    /// 64 bits
    W64,
}

impl Width {
    /// Number of bits of this width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Number of whole bytes of this width, which is also the number of table lookups needed to
    /// cover a word of this width.
    #[must_use]
    pub const fn bytes(self) -> u32 {
        self.bits() / 8
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer the bit primitives can be applied to.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `usize` and their signed counterparts.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a fixed-width integer type",
    label = "bit primitives are only defined for 8, 16, 32 and 64-bit integers",
    note = "convert the value into one of `u8`, `u16`, `u32`, `u64`, `usize` or their signed counterparts first"
)]
pub trait Word: Copy + sealed::Sealed {
    /// The unsigned type of the same width.
    type Bits: Bits;

    /// Width tag the tiers dispatch on.
    const WIDTH: Width;

    /// Whether the type is signed. Signedness never changes a result, it only tells how the value
    /// was reinterpreted.
    const SIGNED: bool;

    /// Reinterpret the value as its unsigned bit pattern.
    fn to_bits(self) -> Self::Bits;
}

/// Unsigned bit pattern of a [`Word`]. Shifts on this type are always logical.
pub trait Bits: Word<Bits = Self> + Eq + BitAnd<Output = Self> + Shr<u32, Output = Self> {
    /// The all-zero pattern.
    const ZERO: Self;

    /// Only the least significant bit set.
    const ONE: Self;

    /// The least significant byte.
    fn low_byte(self) -> u8;

    /// Drop the least significant byte. Yields zero for single-byte words.
    fn shr_byte(self) -> Self;

    /// The value zero-extended to 64 bits.
    fn zero_extend(self) -> u64;

    /// Byte `index` counted from the least significant end. `index` must be below
    /// `Self::WIDTH.bytes()`.
    #[inline(always)]
    fn byte(self, index: u32) -> u8 {
        debug_assert!(index < Self::WIDTH.bytes(), "byte index out of range");
        (self.zero_extend() >> (8 * index)) as u8
    }
}

/// Unsigned words that split into two halves of half their width.
pub trait Halves: Bits {
    /// Unsigned type of half the width.
    type Half: Bits;

    /// Split into `(low, high)` halves.
    fn halves(self) -> (Self::Half, Self::Half);
}

macro_rules! impl_word {
    ($($t:ty => $bits:ty, $width:ident, $signed:literal;)*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                type Bits = $bits;
                const WIDTH: Width = Width::$width;
                const SIGNED: bool = $signed;

                #[inline(always)]
                fn to_bits(self) -> $bits {
                    self as $bits
                }
            }

            // a wrong tag would send the type to a specialization of a different width
            const _: () = assert!(<$t>::BITS == Width::$width.bits());
        )*
    };
}

macro_rules! impl_bits {
    ($($t:ty),*) => {
        $(
            impl Bits for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline(always)]
                fn shr_byte(self) -> Self {
                    self.checked_shr(8).unwrap_or(0)
                }

                #[inline(always)]
                fn zero_extend(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

macro_rules! impl_halves {
    ($($t:ty => $half:ty),*) => {
        $(
            impl Halves for $t {
                type Half = $half;

                #[inline(always)]
                fn halves(self) -> ($half, $half) {
                    (self as $half, (self >> <$half>::BITS) as $half)
                }
            }
        )*
    };
}

impl_word! {
    u8 => u8, W8, false;
    i8 => u8, W8, true;
    u16 => u16, W16, false;
    i16 => u16, W16, true;
    u32 => u32, W32, false;
    i32 => u32, W32, true;
    u64 => u64, W64, false;
    i64 => u64, W64, true;
}

#[cfg(target_pointer_width = "16")]
impl_word! {
    usize => usize, W16, false;
    isize => usize, W16, true;
}

#[cfg(target_pointer_width = "32")]
impl_word! {
    usize => usize, W32, false;
    isize => usize, W32, true;
}

#[cfg(target_pointer_width = "64")]
impl_word! {
    usize => usize, W64, false;
    isize => usize, W64, true;
}

impl_bits!(u8, u16, u32, u64, usize);

impl_halves!(u16 => u8, u32 => u16, u64 => u32);
