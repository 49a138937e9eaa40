//! `SharePoint` type for Shamir Secret Sharing

use std::fmt;

use num_bigint::BigInt;

/// One share: the point `(x, y)` on the sharing polynomial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharePoint {
    x: BigInt,
    y: BigInt,
}

impl SharePoint {
    /// Creates a share point
    #[must_use]
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Gets the x-coordinate
    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Gets the y-coordinate
    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for SharePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
