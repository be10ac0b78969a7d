#![no_main]
use libfuzzer_sys::fuzz_target;
use crypto_barrett::{BarrettReducer, Precision};
use num_bigint::BigUint;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct Input {
    modulus: Vec<u8>,
    values: Vec<Vec<u8>>,
    exact: bool,
}

fuzz_target!(|input: Input| {
    let precision = if input.exact { Precision::Exact } else { Precision::Tiered };
    let modulus = BigUint::from_bytes_be(&input.modulus);
    let Ok(reducer) = BarrettReducer::with_precision(modulus.clone(), precision) else {
        return;
    };

    for value in input.values {
        let z = BigUint::from_bytes_be(&value);
        match reducer.reduce(&z) {
            Ok(r) => assert_eq!(r, &z % &modulus),
            Err(_) => assert!(z.bits() > reducer.max_input_bits()),
        }
    }
});
