//! Arbitrary-base digit codec for share values
//!
//! Share values are written as digit strings in any base from 2 to 36 using the
//! alphabet `0-9a-z` (case-insensitive). This module converts between those strings
//! and unbounded [`BigUint`] values, so values far wider than a machine word decode
//! without any loss.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use shamir_recover::codec::{decode, encode};
//! use shamir_recover::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hex = Radix::new(16)?;
//! let value = decode("1C", hex)?;
//! assert_eq!(value, BigUint::from(28u32));
//!
//! // Encoding always produces lowercase digits
//! assert_eq!(encode(&value, hex), "1c");
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::Radix;
use crate::error::{Error, Result};

/// Decodes a big-endian digit string in the given base
///
/// Surrounding whitespace is ignored. An empty string decodes to zero.
///
/// # Errors
/// Returns [`Error::InvalidDigit`] for the first character that is not one of the
/// first `radix` symbols of `0-9a-z`
pub fn decode(digits: &str, radix: Radix) -> Result<BigUint> {
    let base = *radix;
    let mut value = BigUint::zero();

    for ch in digits.trim().chars() {
        let digit = ch.to_digit(base).ok_or_else(|| Error::InvalidDigit {
            digit: ch,
            base,
            value: digits.to_string(),
        })?;
        value = value * base + digit;
    }

    Ok(value)
}

/// Validates `base` and decodes `digits` in one step
///
/// # Errors
/// Returns [`Error::InvalidBase`] if `base` is outside 2..=36, or
/// [`Error::InvalidDigit`] if a digit does not belong to the base
pub fn decode_with_base(digits: &str, base: u32) -> Result<BigUint> {
    decode(digits, Radix::new(base)?)
}

/// Encodes a value as lowercase digits in the given base
#[must_use]
pub fn encode(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(*radix)
}
