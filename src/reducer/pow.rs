//! Modular exponentiation on top of Barrett reduction.

use super::BarrettReducer;
use crate::RangeError;
use num_bigint::BigUint;
use num_traits::One;

impl BarrettReducer {
    /// Computes `base^exponent mod p` by left-to-right square-and-multiply.
    ///
    /// `base` must satisfy the input range of [`BarrettReducer::reduce`]. The exponent is
    /// unrestricted. Running time depends on the bits of the exponent.
    pub fn pow_mod(&self, base: &BigUint, exponent: &BigUint) -> Result<BigUint, RangeError> {
        let base = self.reduce(base)?;

        // 1 mod p, which is 0 when p = 1
        let mut acc = self.reduce_unchecked(&BigUint::one());

        for i in (0..exponent.bits()).rev() {
            acc = self.mul_reduced(&acc, &acc);
            if exponent.bit(i) {
                acc = self.mul_reduced(&acc, &base);
            }
        }

        Ok(acc)
    }
}
