//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Declared total number of shares `n`
///
/// Only used to cross-check the document: a disagreement with the number of shares
/// actually found is reported as a warning, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::MalformedInput(
                "keys.n must be at least 1 (got 0)".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
