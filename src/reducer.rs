//! Barrett reduction parameters for a modulus provided at runtime.

mod mul;
mod pow;
mod reduce;

use crate::{ConstructionError, Precision, WordSize};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use tracing::debug;

/// Precomputed parameters for reducing integers modulo a fixed positive modulus `p`.
///
/// Holds `μ = ⌊2^(2k) / p⌋` for a word size `k`, chosen according to a [`Precision`] policy.
/// Any `0 <= z < 2^(2k)` can then be reduced with multiplications, shifts and at most two
/// subtractions of `p`.
///
/// Reduction branches on the input and is not constant-time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BarrettReducer {
    /// The modulus `p`.
    modulus: BigUint,

    /// `⌊2^(2k) / p⌋`.
    mu: BigUint,

    /// The word size `k`.
    word_bits: u64,

    /// Exact bit length of the modulus. Never exceeds `word_bits`.
    modulus_bits: u64,
}

impl BarrettReducer {
    /// Builds a reducer for `modulus`, snapping the word size to a [`WordSize`] tier.
    ///
    /// Fails if the modulus is zero or wider than 256 bits.
    pub fn new(modulus: BigUint) -> Result<Self, ConstructionError> {
        Self::with_precision(modulus, Precision::Tiered)
    }

    /// Builds a reducer for `modulus` using the given [`Precision`] policy.
    pub fn with_precision(
        modulus: BigUint,
        precision: Precision,
    ) -> Result<Self, ConstructionError> {
        if modulus.is_zero() {
            return Err(ConstructionError::ZeroModulus);
        }

        let modulus_bits = modulus.bits();
        let word_bits = match precision {
            Precision::Tiered => WordSize::for_bits(modulus_bits)
                .ok_or(ConstructionError::ModulusTooLarge {
                    bits: modulus_bits,
                    max_bits: WordSize::MAX.bits(),
                })?
                .bits(),
            Precision::Exact => modulus_bits,
        };

        let mu = (BigUint::one() << (2 * word_bits)) / &modulus;

        debug!(modulus_bits, word_bits, ?precision, "built Barrett reducer");

        Ok(Self {
            modulus,
            mu,
            word_bits,
            modulus_bits,
        })
    }

    /// Builds a tiered reducer from a signed modulus, rejecting zero and negative values.
    pub fn from_int(modulus: &BigInt) -> Result<Self, ConstructionError> {
        match modulus.sign() {
            Sign::Minus => Err(ConstructionError::NegativeModulus),
            Sign::NoSign => Err(ConstructionError::ZeroModulus),
            Sign::Plus => Self::new(modulus.magnitude().clone()),
        }
    }

    /// Returns the modulus which was used to initialize this reducer.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns the precomputed factor `μ = ⌊2^(2k) / p⌋`.
    pub fn mu(&self) -> &BigUint {
        &self.mu
    }

    /// Returns the word size `k` in bits.
    pub fn word_bits(&self) -> u64 {
        self.word_bits
    }

    /// Returns the [`WordSize`] tier matching `k`, if there is one.
    ///
    /// Always `Some` for reducers built with [`Precision::Tiered`].
    pub fn word_size(&self) -> Option<WordSize> {
        WordSize::ALL
            .into_iter()
            .find(|size| size.bits() == self.word_bits)
    }

    /// Returns the exact bit length of the modulus.
    pub fn modulus_bits(&self) -> u64 {
        self.modulus_bits
    }

    /// Returns the largest bit length of an input to [`BarrettReducer::reduce`] (`2k`).
    pub fn max_input_bits(&self) -> u64 {
        2 * self.word_bits
    }
}

impl TryFrom<BigUint> for BarrettReducer {
    type Error = ConstructionError;

    fn try_from(modulus: BigUint) -> Result<Self, Self::Error> {
        Self::new(modulus)
    }
}

impl TryFrom<BigInt> for BarrettReducer {
    type Error = ConstructionError;

    fn try_from(modulus: BigInt) -> Result<Self, Self::Error> {
        Self::from_int(&modulus)
    }
}
