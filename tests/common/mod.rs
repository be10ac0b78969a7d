//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::One;

/// secp256k1 group order.
pub const SECP256K1_ORDER: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// `2^255 - 19`.
pub const CURVE25519_PRIME: [u8; 32] =
    hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

/// Decode a big endian byte string.
pub fn to_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// `2^bits - 1`, the largest integer of `bits` bits.
pub fn max_of_bits(bits: u64) -> BigUint {
    (BigUint::one() << bits) - 1u32
}
