//! Exact rational numbers over unbounded integers

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// An exact fraction `numer / denom`
///
/// Invariants (enforced by every constructor and operation):
/// - `denom > 0`
/// - `gcd(|numer|, denom) == 1`
///
/// Values are immutable; arithmetic always produces a new, normalized fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Creates a normalized fraction
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if `denom` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamir_recover::domain::Fraction;
    ///
    /// let half = Fraction::new(BigInt::from(-4), BigInt::from(-8)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// assert!(Fraction::new(BigInt::from(1), BigInt::from(0)).is_err());
    /// ```
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::normalized(numer, denom))
    }

    /// Creates the fraction `n / 1`
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// The fraction `0 / 1`
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// Gets the numerator (carries the sign)
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Gets the denominator (always positive)
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Whether the denominator is 1
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Divides `self` by `other`
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if `other` is zero
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::normalized(
            &self.numer * &other.denom,
            &self.denom * &other.numer,
        ))
    }

    /// Renders the value as a decimal truncated toward zero after `precision`
    /// fractional digits
    ///
    /// The digits are produced by integer long division, so the output is exact up to
    /// the truncation point whatever the magnitude of the fraction.
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamir_recover::domain::Fraction;
    ///
    /// let third = Fraction::new(BigInt::from(-1), BigInt::from(3)).unwrap();
    /// assert_eq!(third.to_decimal(4), "-0.3333");
    /// ```
    #[must_use]
    pub fn to_decimal(&self, precision: usize) -> String {
        let scale = num_traits::pow(BigInt::from(10u8), precision);
        let scaled = self.numer.abs() * scale / &self.denom;
        let sign = if self.numer.is_negative() { "-" } else { "" };

        if precision == 0 {
            return format!("{sign}{scaled}");
        }

        let digits = format!("{:0>width$}", scaled.to_string(), width = precision + 1);
        let (whole, fractional) = digits.split_at(digits.len() - precision);
        format!("{sign}{whole}.{fractional}")
    }

    /// Builds a fraction from a non-zero denominator, fixing the sign and reducing
    fn normalized(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let divisor = gcd(numer.abs(), denom.clone());
        if !divisor.is_one() {
            numer /= &divisor;
            denom /= &divisor;
        }
        Self { numer, denom }
    }
}

/// Euclid on non-negative operands; `gcd(0, d) == d`, and `gcd(0, 0)` is taken as 1
fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }
    if a.is_zero() { BigInt::one() } else { a }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        Fraction::normalized(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        &self + &other
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, other: Self) -> Fraction {
        Fraction::normalized(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Self) -> Fraction {
        &self - &other
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        Fraction::normalized(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        &self * &other
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, term| &acc + &term)
    }
}
