//! Lagrange interpolation evaluated exactly at x = 0
//!
//! For points `(x_i, y_i)` the constant term of the unique polynomial through them is
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (−x_j) / (x_i − x_j)
//! ```
//!
//! Every step uses [`Fraction`], so the result is exact for any magnitude of input.
//! Numerators and denominators grow with the product of the pairwise x-differences,
//! which is why nothing here may go through a fixed-width or floating-point type.

use crate::domain::{Fraction, SharePoint};
use crate::error::{Error, Result};

/// Evaluates the interpolating polynomial of `points` at zero
///
/// Runs in O(k²) fraction operations for k points.
///
/// # Errors
/// - [`Error::InsufficientPoints`] if `points` is empty
/// - [`Error::DivisionByZero`] if two points share an x-coordinate
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamir_recover::domain::SharePoint;
/// use shamir_recover::interpolate::interpolate_at_zero;
///
/// // f(x) = 4x + 6
/// let points = [
///     SharePoint::new(BigInt::from(1), BigInt::from(10)),
///     SharePoint::new(BigInt::from(2), BigInt::from(14)),
/// ];
/// let secret = interpolate_at_zero(&points).unwrap();
/// assert_eq!(secret.to_string(), "6");
/// ```
pub fn interpolate_at_zero(points: &[SharePoint]) -> Result<Fraction> {
    if points.is_empty() {
        return Err(Error::InsufficientPoints {
            needed: 1,
            available: 0,
        });
    }

    points
        .iter()
        .enumerate()
        .map(|(i, point)| lagrange_term(points, i, point))
        .sum()
}

/// `y_i · Π_{j≠i} (−x_j) / (x_i − x_j)`
fn lagrange_term(points: &[SharePoint], i: usize, point: &SharePoint) -> Result<Fraction> {
    let mut term = Fraction::from_integer(point.y().clone());

    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let numer = Fraction::from_integer(-other.x());
        let denom = Fraction::from_integer(point.x() - other.x());
        term = (&term * &numer).checked_div(&denom)?;
    }

    Ok(term)
}
