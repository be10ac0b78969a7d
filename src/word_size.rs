//! Word size selection for [`BarrettReducer`](crate::BarrettReducer).

use core::fmt;

/// Fixed word size tiers a reducer may snap its precision to.
///
/// A reducer built with word size `k` accepts inputs `0 <= z < 2^(2k)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordSize {
    /// 16-bit words.
    W16,
    /// 32-bit words.
    W32,
    /// 64-bit words.
    W64,
    /// 128-bit words.
    W128,
    /// 256-bit words.
    W256,
}

impl WordSize {
    /// All tiers, smallest first.
    pub const ALL: [Self; 5] = [Self::W16, Self::W32, Self::W64, Self::W128, Self::W256];

    /// The largest tier.
    pub const MAX: Self = Self::W256;

    /// Number of bits in a word of this size.
    pub const fn bits(self) -> u64 {
        match self {
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
            Self::W128 => 128,
            Self::W256 => 256,
        }
    }

    /// Smallest tier holding an integer of `bits` bits.
    ///
    /// Returns `None` if `bits` exceeds [`WordSize::MAX`].
    pub fn for_bits(bits: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|size| bits <= size.bits())
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// How a reducer derives its word size from the modulus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Snap to the smallest [`WordSize`] tier holding the modulus.
    ///
    /// Moduli wider than 256 bits are rejected.
    #[default]
    Tiered,

    /// Use the exact bit length of the modulus. There is no size ceiling.
    Exact,
}
