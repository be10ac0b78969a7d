//! Pure Rust implementation of Barrett reduction over arbitrary-precision integers.
//!
//! # About
//! Barrett reduction computes `z mod p` without a division per call. A [`BarrettReducer`]
//! precomputes `μ = ⌊2^(2k) / p⌋` once for a fixed modulus `p`, after which any
//! `0 <= z < 2^(2k)` is reduced with two multiplications, a few shifts and at most two
//! subtractions of `p`. This suits code that reduces many values against the same modulus,
//! e.g. scalar arithmetic modulo an elliptic curve group order.
//!
//! Integers are [`num_bigint`] values, which this crate re-exports.
//!
//! # Word sizes
//! By default the word size `k` is the smallest of 16, 32, 64, 128 or 256 bits which holds the
//! modulus (see [`WordSize`]), and moduli wider than 256 bits are rejected.
//! [`Precision::Exact`] sets `k` to the exact bit length of the modulus instead and accepts
//! moduli of any size.
//!
//! # Usage
//! ```
//! use crypto_barrett::{num_bigint::BigUint, BarrettReducer};
//!
//! // secp256k1 group order
//! let n = BigUint::parse_bytes(
//!     b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
//!     16,
//! )
//! .unwrap();
//! let reducer = BarrettReducer::new(n.clone())?;
//! assert_eq!(reducer.word_bits(), 256);
//!
//! let z = BigUint::from(i64::MAX as u64).pow(8);
//! assert_eq!(reducer.reduce(&z)?, &z % &n);
//! # Ok::<(), crypto_barrett::Error>(())
//! ```
//!
//! # Timing
//! Reduction branches and loops on the value being reduced. It is **not** constant-time and
//! must not be used on secret data where timing side channels matter.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod error;
mod reducer;
mod word_size;

pub use crate::{
    error::{ConstructionError, Error, RangeError},
    reducer::BarrettReducer,
    word_size::{Precision, WordSize},
};
pub use num_bigint;
