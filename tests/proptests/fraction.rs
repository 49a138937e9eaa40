//! Property tests for exact fraction arithmetic

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::Error;
use shamir_recover::domain::Fraction;

/// Wrapper for a valid fraction built from a random numerator and non-zero denominator
#[derive(Clone, Debug)]
struct AnyFraction(Fraction);

impl Arbitrary for AnyFraction {
    fn arbitrary(g: &mut Gen) -> Self {
        let numer = i64::arbitrary(g);
        let denom = match i64::arbitrary(g) {
            0 => 1,
            d => d,
        };
        AnyFraction(Fraction::new(BigInt::from(numer), BigInt::from(denom)).unwrap())
    }
}

fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

fn is_normalized(f: &Fraction) -> bool {
    f.denom().is_positive() && gcd(f.numer().abs(), f.denom().clone()).is_one()
}

/// Test that construction always yields a positive, fully reduced denominator
#[quickcheck]
fn prop_construction_normalizes(numer: i64, denom: i64) -> bool {
    if denom == 0 {
        return true;
    }
    let f = Fraction::new(BigInt::from(numer), BigInt::from(denom)).unwrap();
    is_normalized(&f)
}

/// Test that every arithmetic result stays normalized
#[quickcheck]
fn prop_arithmetic_results_normalized(a: AnyFraction, b: AnyFraction) -> bool {
    let (AnyFraction(a), AnyFraction(b)) = (a, b);

    let mut results = vec![&a + &b, &a - &b, &a * &b, -&a];
    if let Ok(q) = a.checked_div(&b) {
        results.push(q);
    }
    results.iter().all(is_normalized)
}

/// Test that scaling numerator and denominator by the same factor gives the same value
#[quickcheck]
fn prop_scaling_is_invisible(numer: i64, denom: i64, factor: i64) -> bool {
    if denom == 0 || factor == 0 {
        return true;
    }
    let plain = Fraction::new(BigInt::from(numer), BigInt::from(denom)).unwrap();
    let scaled = Fraction::new(
        BigInt::from(numer) * factor,
        BigInt::from(denom) * factor,
    )
    .unwrap();
    plain == scaled
}

/// Test that subtraction undoes addition exactly
#[quickcheck]
fn prop_add_then_sub_is_identity(a: AnyFraction, b: AnyFraction) -> bool {
    let (AnyFraction(a), AnyFraction(b)) = (a, b);
    &(&a + &b) - &b == a
}

/// Test that division undoes multiplication exactly
#[quickcheck]
fn prop_mul_then_div_is_identity(a: AnyFraction, b: AnyFraction) -> bool {
    let (AnyFraction(a), AnyFraction(b)) = (a, b);
    match (&a * &b).checked_div(&b) {
        Ok(q) => q == a,
        Err(Error::DivisionByZero) => b == Fraction::zero(),
        Err(_) => false,
    }
}

/// Test that a zero denominator is always rejected
#[quickcheck]
fn prop_zero_denominator_rejected(numer: i64) -> bool {
    Fraction::new(BigInt::from(numer), BigInt::zero()) == Err(Error::DivisionByZero)
}

/// Test that dividing by zero is always rejected
#[quickcheck]
fn prop_division_by_zero_rejected(a: AnyFraction) -> bool {
    let AnyFraction(a) = a;
    a.checked_div(&Fraction::zero()) == Err(Error::DivisionByZero)
}

/// Test that the rendering is `n` exactly when the fraction is an integer
#[quickcheck]
fn prop_display_matches_is_integer(a: AnyFraction) -> bool {
    let AnyFraction(a) = a;
    a.to_string().contains('/') != a.is_integer()
}
