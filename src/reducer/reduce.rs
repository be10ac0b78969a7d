//! Barrett reduction.

use super::BarrettReducer;
use crate::RangeError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use tracing::trace;

impl BarrettReducer {
    /// Computes `z mod p`.
    ///
    /// Fails with [`RangeError::TooLarge`] unless `z < 2^(2k)`.
    pub fn reduce(&self, z: &BigUint) -> Result<BigUint, RangeError> {
        let bits = z.bits();
        if bits > self.max_input_bits() {
            trace!(bits, max_bits = self.max_input_bits(), "rejected input");
            return Err(RangeError::TooLarge {
                bits,
                max_bits: self.max_input_bits(),
            });
        }

        Ok(self.reduce_unchecked(z))
    }

    /// Computes `z mod p` for a signed `z`, rejecting negative values.
    pub fn reduce_int(&self, z: &BigInt) -> Result<BigUint, RangeError> {
        if z.sign() == Sign::Minus {
            trace!("rejected negative input");
            return Err(RangeError::Negative);
        }

        self.reduce(z.magnitude())
    }

    /// Returns whether `z` lies in the range accepted by [`BarrettReducer::reduce`].
    pub fn is_reducible(&self, z: &BigUint) -> bool {
        z.bits() <= self.max_input_bits()
    }

    /// Reduction proper. The caller guarantees `z < 2^(2k)`.
    ///
    /// Algorithm 14.42 in Handbook of Applied Cryptography
    /// <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>, with radix 2. The quotient shifts follow
    /// the bit length `n` of the modulus rather than `k`, so that `q - 2 <= q̄ <= q` also holds
    /// when `n < k`. For `n = k` they are the usual `k - 1` and `k + 1`.
    pub(crate) fn reduce_unchecked(&self, z: &BigUint) -> BigUint {
        debug_assert!(self.is_reducible(z));

        let k = self.word_bits;
        let n = self.modulus_bits;

        // q̄ = ⌊⌊z / 2^(n-1)⌋ * μ / 2^(2k-n+1)⌋
        let q1 = z >> (n - 1);
        let q2 = q1 * &self.mu;
        let q3 = q2 >> (2 * k - n + 1);

        // z - q̄p < 3p < 2^(n+2), so it is recovered exactly from the low n + 2 bits.
        // A 2^(n+1) window is too small in radix 2.
        let mask = (BigUint::one() << (n + 2)) - 1u32;
        let r1 = z & &mask;
        let r2 = (q3 * &self.modulus) & &mask;

        let mut r = if r1 >= r2 {
            r1 - r2
        } else {
            r1 + mask + 1u32 - r2
        };

        while r >= self.modulus {
            r -= &self.modulus;
        }

        debug_assert!(r < self.modulus);
        r
    }
}
