//! Modular multiplication on top of Barrett reduction.

use super::BarrettReducer;
use crate::RangeError;
use num_bigint::BigUint;

impl BarrettReducer {
    /// Computes `a * b mod p`.
    ///
    /// Both operands are reduced first, so each only needs to satisfy the input range of
    /// [`BarrettReducer::reduce`].
    pub fn mul_mod(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, RangeError> {
        let a = self.reduce(a)?;
        let b = self.reduce(b)?;
        Ok(self.mul_reduced(&a, &b))
    }

    /// Computes `a^2 mod p`.
    pub fn square_mod(&self, a: &BigUint) -> Result<BigUint, RangeError> {
        let a = self.reduce(a)?;
        Ok(self.mul_reduced(&a, &a))
    }

    /// Multiplies two residues already in `[0, p)`.
    ///
    /// The product is below `p^2 <= 2^(2k)`, so it is always a valid input.
    pub(crate) fn mul_reduced(&self, a: &BigUint, b: &BigUint) -> BigUint {
        debug_assert!(a < self.modulus() && b < self.modulus());
        self.reduce_unchecked(&(a * b))
    }
}
