#![no_main]
use libfuzzer_sys::fuzz_target;
use crypto_barrett::BarrettReducer;
use num_bigint::BigUint;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    Mul, Square
}

fuzz_target!(|input: ([u8; 32], Vec<(u128, Operation)>)| {
    let (modulus, operations) = input;
    let modulus = BigUint::from_bytes_be(&modulus);
    let Ok(reducer) = BarrettReducer::new(modulus.clone()) else {
        return;
    };

    operations.into_iter().fold(BigUint::from(1u8) % &modulus, |acc, (operand, op)| {
        let operand = BigUint::from(operand);
        let (actual, expected) = match op {
            Operation::Mul => (reducer.mul_mod(&acc, &operand), &acc * &operand % &modulus),
            Operation::Square => (reducer.square_mod(&acc), &acc * &acc % &modulus),
        };
        match actual {
            Ok(actual) => {
                assert_eq!(actual, expected);
                actual
            }
            Err(_) => acc,
        }
    });
});
