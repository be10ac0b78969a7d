//! Known-answer and boundary tests for `crypto_barrett::BarrettReducer`.

mod common;

use common::{CURVE25519_PRIME, SECP256K1_ORDER, max_of_bits, to_biguint};
use crypto_barrett::{
    BarrettReducer, ConstructionError, Error, Precision, RangeError, WordSize,
};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[test]
fn secp256k1_order_known_answer() {
    let n = to_biguint(&SECP256K1_ORDER);
    let reducer = BarrettReducer::new(n.clone()).unwrap();
    assert_eq!(reducer.word_size(), Some(WordSize::W256));

    // (2^63 - 1)^8
    let z = BigUint::from(i64::MAX as u64).pow(8);
    let expected = to_biguint(&hex!(
        "6aee0c60b5d5648c5ed61f5ea3e6bf3444c0bcf41257dd6ab0615ea20387337a"
    ));

    let result = reducer.reduce(&z).unwrap();
    assert_eq!(result, expected);
    assert_eq!(result, &z % &n);
}

#[test]
fn secp256k1_order_max_input() {
    let n = to_biguint(&SECP256K1_ORDER);
    let reducer = BarrettReducer::new(n).unwrap();

    let z = max_of_bits(512);
    let expected = to_biguint(&hex!(
        "9d671cd581c69bc5e697f5e45bcd07c6741496c20e7cf878896cf21467d7d13f"
    ));
    assert_eq!(reducer.reduce(&z).unwrap(), expected);
}

#[test]
fn curve25519_prime() {
    let p = to_biguint(&CURVE25519_PRIME);
    let reducer = BarrettReducer::new(p).unwrap();

    let z = (BigUint::one() << 510u32) + 12345u32;
    assert_eq!(reducer.reduce(&z).unwrap(), BigUint::from(0x31a2u32));
}

#[test]
fn boundaries() {
    for modulus in [
        BigUint::one(),
        BigUint::from(2u8),
        BigUint::from(3329u32),
        BigUint::from(u32::MAX),
        BigUint::from(u64::MAX) - 58u32,
        to_biguint(&SECP256K1_ORDER),
    ] {
        let reducer = BarrettReducer::new(modulus.clone()).unwrap();

        assert!(reducer.reduce(&BigUint::zero()).unwrap().is_zero());

        let below = &modulus - 1u32;
        assert_eq!(reducer.reduce(&below).unwrap(), below);

        let max = max_of_bits(reducer.max_input_bits());
        let result = reducer.reduce(&max).unwrap();
        assert!(result < modulus);
        assert_eq!(result, &max % &modulus);

        let too_large = max + 1u32;
        assert_eq!(
            reducer.reduce(&too_large),
            Err(RangeError::TooLarge {
                bits: reducer.max_input_bits() + 1,
                max_bits: reducer.max_input_bits(),
            })
        );
    }
}

#[test]
fn construction_failures() {
    assert_eq!(
        BarrettReducer::new(BigUint::zero()),
        Err(ConstructionError::ZeroModulus)
    );
    assert_eq!(
        BarrettReducer::try_from(BigInt::from(-1)),
        Err(ConstructionError::NegativeModulus)
    );
    assert_eq!(
        BarrettReducer::try_from(max_of_bits(257)),
        Err(ConstructionError::ModulusTooLarge {
            bits: 257,
            max_bits: 256,
        })
    );

    // the exact policy has no ceiling
    let reducer = BarrettReducer::with_precision(max_of_bits(257), Precision::Exact).unwrap();
    assert_eq!(reducer.word_bits(), 257);
}

#[test]
fn errors_compose() {
    fn reduce_with(modulus: BigUint, z: &BigUint) -> Result<BigUint, Error> {
        let reducer = BarrettReducer::new(modulus)?;
        Ok(reducer.reduce(z)?)
    }

    assert_eq!(
        reduce_with(BigUint::zero(), &BigUint::one()),
        Err(Error::Construction(ConstructionError::ZeroModulus))
    );
    assert!(matches!(
        reduce_with(BigUint::from(7u8), &(BigUint::one() << 32u32)),
        Err(Error::Range(RangeError::TooLarge { .. }))
    ));
    assert_eq!(
        reduce_with(BigUint::from(7u8), &BigUint::from(50u8)),
        Ok(BigUint::one())
    );
}

#[test]
fn shared_across_threads() {
    let n = to_biguint(&SECP256K1_ORDER);
    let reducer = BarrettReducer::new(n.clone()).unwrap();

    std::thread::scope(|scope| {
        for i in 1u32..=4 {
            let reducer = &reducer;
            let n = &n;
            scope.spawn(move || {
                let z = max_of_bits(512) / i;
                assert_eq!(reducer.reduce(&z).unwrap(), &z % n);
            });
        }
    });
}
