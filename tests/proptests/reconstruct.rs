//! Property tests for interpolation and document reconstruction

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::codec::encode;
use shamir_recover::domain::{Fraction, Radix, SharePoint};
use shamir_recover::interpolate::interpolate_at_zero;
use shamir_recover::report::Diagnostic;
use shamir_recover::reconstruct_json;

/// Wrapper for a polynomial with non-negative coefficients and its distinct share x's
///
/// Non-negative coefficients and positive x's keep every y non-negative, which the
/// share value encoding requires.
#[derive(Clone, Debug)]
struct SharedPolynomial {
    coefficients: Vec<u64>,
    xs: Vec<u64>,
}

impl Arbitrary for SharedPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // Threshold between 1 and 8, up to 4 spare shares
        let threshold = usize::arbitrary(g) % 8 + 1;
        let share_count = threshold + usize::arbitrary(g) % 5;

        let coefficients = (0..threshold).map(|_| u64::arbitrary(g)).collect();

        let mut xs: Vec<u64> = Vec::with_capacity(share_count);
        while xs.len() < share_count {
            let x = u64::arbitrary(g) % 1000 + 1;
            if !xs.contains(&x) {
                xs.push(x);
            }
        }

        SharedPolynomial { coefficients, xs }
    }
}

impl SharedPolynomial {
    fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    fn secret(&self) -> BigInt {
        BigInt::from(self.coefficients[0])
    }

    /// Horner evaluation over big integers
    fn eval(&self, x: u64) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::from(0u8), |acc, &c| acc * x + c)
    }

    fn points(&self) -> Vec<SharePoint> {
        self.xs
            .iter()
            .map(|&x| SharePoint::new(BigInt::from(x), BigInt::from(self.eval(x))))
            .collect()
    }
}

/// Deterministic shuffle driven by `seed`
fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut seed = seed;
    for i in 0..items.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = u64::try_from(items.len() - i).unwrap_or_else(|_| unreachable!("fits in u64"));
        let offset = usize::try_from((seed >> 33) % range)
            .unwrap_or_else(|_| unreachable!("offset < range fits in usize"));
        items.swap(i, i + offset);
    }
}

/// Renders a share document, keeping the entries in the given order
fn document(declared: usize, threshold: usize, entries: &[(u64, u32, String)]) -> String {
    let body = entries
        .iter()
        .map(|(x, base, digits)| format!(r#""{x}": {{ "base": "{base}", "value": "{digits}" }}"#))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(r#"{{ "keys": {{ "n": {declared}, "k": {threshold} }}, {body} }}"#)
}

/// Test that any k points of a degree < k polynomial give back its constant term
#[quickcheck]
fn prop_interpolation_is_exact(poly: SharedPolynomial, selection_seed: u64) -> bool {
    let mut points = poly.points();
    shuffle(&mut points, selection_seed);
    points.truncate(poly.threshold());

    let Ok(secret) = interpolate_at_zero(&points) else {
        return false;
    };
    secret.is_integer() && secret == Fraction::from_integer(poly.secret())
}

/// Test that interpolating more points than the degree needs still gives the secret
#[quickcheck]
fn prop_extra_points_do_not_change_secret(poly: SharedPolynomial) -> bool {
    interpolate_at_zero(&poly.points()) == Ok(Fraction::from_integer(poly.secret()))
}

/// Test that shuffling the document entries changes neither the selection nor the secret
#[quickcheck]
fn prop_reconstruction_independent_of_entry_order(
    poly: SharedPolynomial,
    bases: Vec<u8>,
    order_seed: u64,
) -> bool {
    let entries: Vec<_> = poly
        .xs
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let base = bases.get(i).map_or(16, |&b| u32::from(b) % 35 + 2);
            let digits = encode(&poly.eval(x), Radix::new(base).unwrap());
            (x, base, digits)
        })
        .collect();

    let mut shuffled = entries.clone();
    shuffle(&mut shuffled, order_seed);

    let declared = entries.len();
    let threshold = poly.threshold();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let original_doc = document(declared, threshold, &entries);
    let Ok(original) = reconstruct_json(&original_doc, &mut diagnostics) else {
        return false;
    };
    let reordered_doc = document(declared, threshold, &shuffled);
    let Ok(reordered) = reconstruct_json(&reordered_doc, &mut diagnostics) else {
        return false;
    };

    let mut sorted_xs = poly.xs.clone();
    sorted_xs.sort_unstable();
    let expected_xs: Vec<BigInt> = sorted_xs
        .into_iter()
        .take(threshold)
        .map(BigInt::from)
        .collect();
    let selected_xs: Vec<BigInt> = original.points().iter().map(|p| p.x().clone()).collect();

    diagnostics.is_empty()
        && original == reordered
        && selected_xs == expected_xs
        && *original.secret() == Fraction::from_integer(poly.secret())
}
