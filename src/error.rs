//! Error types.

use core::fmt;

/// Returned when a [`BarrettReducer`](crate::BarrettReducer) cannot be built for a modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// The modulus is zero.
    ZeroModulus,

    /// The modulus is negative.
    NegativeModulus,

    /// The modulus needs more bits than the largest supported word size.
    ModulusTooLarge {
        /// Bit length of the rejected modulus.
        bits: u64,
        /// Largest bit length accepted under the selected precision.
        max_bits: u64,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "modulus must be non-zero"),
            Self::NegativeModulus => write!(f, "modulus must be positive"),
            Self::ModulusTooLarge { bits, max_bits } => write!(
                f,
                "modulus is {bits} bits but at most {max_bits} bits are supported"
            ),
        }
    }
}

impl core::error::Error for ConstructionError {}

/// Returned when an input lies outside `0 <= z < 2^(2k)` for a reducer with word size `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The input is negative.
    Negative,

    /// The input has more bits than the reducer accepts.
    TooLarge {
        /// Bit length of the rejected input.
        bits: u64,
        /// Largest bit length the reducer accepts (`2k`).
        max_bits: u64,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "input must be non-negative"),
            Self::TooLarge { bits, max_bits } => write!(
                f,
                "input is {bits} bits but the reducer accepts at most {max_bits} bits"
            ),
        }
    }
}

impl core::error::Error for RangeError {}

/// Any error produced by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// See [`ConstructionError`].
    Construction(ConstructionError),

    /// See [`RangeError`].
    Range(RangeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(err) => write!(f, "invalid modulus: {err}"),
            Self::Range(err) => write!(f, "input out of range: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Construction(err) => Some(err),
            Self::Range(err) => Some(err),
        }
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        Self::Construction(err)
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}
