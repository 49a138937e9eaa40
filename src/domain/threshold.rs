//! Threshold newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Threshold `k`: the number of shares needed to reconstruct the secret
///
/// Invariant: threshold >= 1 (enforced at construction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // A threshold of zero cannot select any share
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(Error::MalformedInput(
                "keys.k must be at least 1 (got 0)".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
